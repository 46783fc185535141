//! Parameter descriptors and values of operation methods.

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::referencing::IdentifiedObject;
use crate::unit::Unit;

/// Type of the values accepted by a [`ParameterDescriptor`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ValueType {
    /// `true` or `false`.
    Boolean,
    /// Signed integer.
    Integer,
    /// Floating point number.
    Real,
    /// Character string.
    Text,
    /// Sequence of floating point numbers.
    RealArray,
    /// Sequence of signed integers.
    IntegerArray,
}

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Value {
    /// Boolean value.
    Boolean(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Real(f64),
    /// String value.
    Text(String),
    /// Array of floating point values.
    RealArray(Vec<f64>),
    /// Array of integer values.
    IntegerArray(Vec<i64>),
}

impl Value {
    /// Type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Integer(_) => ValueType::Integer,
            Value::Real(_) => ValueType::Real,
            Value::Text(_) => ValueType::Text,
            Value::RealArray(_) => ValueType::RealArray,
            Value::IntegerArray(_) => ValueType::IntegerArray,
        }
    }
}

/// Scalar values are ordered when they have the same type. Integers and reals compare numerically.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
            (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Real(b)) => (*a as f64).partial_cmp(b),
            (Value::Real(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::RealArray(v) => write!(f, "{v:?}"),
            Value::IntegerArray(v) => write!(f, "{v:?}"),
        }
    }
}

/// Specific kind of a [`GeneralParameterDescriptor`].
#[derive(Debug, Copy, Clone)]
pub enum DescriptorKind<'a> {
    /// Descriptor of a single parameter.
    Single(&'a dyn ParameterDescriptor),
    /// Descriptor of a group of parameters.
    Group(&'a dyn ParameterDescriptorGroup),
}

/// Abstract definition of a parameter or group of parameters.
pub trait GeneralParameterDescriptor: IdentifiedObject {
    /// Minimum number of times that values are required.
    fn minimum_occurs(&self) -> usize {
        1
    }

    /// Maximum number of times that values are permitted.
    fn maximum_occurs(&self) -> usize {
        1
    }

    /// Specific kind of this descriptor.
    fn kind(&self) -> DescriptorKind<'_>;
}

/// Definition of a single parameter.
pub trait ParameterDescriptor: GeneralParameterDescriptor {
    /// Type of the parameter values. Mandatory.
    fn value_type(&self) -> Option<ValueType>;

    /// Set of allowed values, or empty if unrestricted.
    fn valid_values(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Minimum value, if any.
    fn minimum_value(&self) -> Option<Value> {
        None
    }

    /// Maximum value, if any.
    fn maximum_value(&self) -> Option<Value> {
        None
    }

    /// Default value, if any.
    fn default_value(&self) -> Option<Value> {
        None
    }

    /// Unit of the parameter values.
    fn unit(&self) -> Option<&Unit> {
        None
    }
}

/// Definition of a group of related parameters.
pub trait ParameterDescriptorGroup: GeneralParameterDescriptor {
    /// Descriptors of the parameters in this group.
    fn descriptors(&self) -> Vec<&dyn GeneralParameterDescriptor>;

    /// Descriptor of the parameter with the given name code.
    fn descriptor(&self, name: &str) -> Option<&dyn GeneralParameterDescriptor>;
}

/// Specific kind of a [`GeneralParameterValue`].
#[derive(Debug, Copy, Clone)]
pub enum ParameterKind<'a> {
    /// Value of a single parameter.
    Value(&'a dyn ParameterValue),
    /// Group of parameter values.
    Group(&'a dyn ParameterValueGroup),
}

/// Parameter value or group of parameter values.
pub trait GeneralParameterValue: Debug {
    /// Abstract definition of this parameter or group.
    fn general_descriptor(&self) -> Option<&dyn GeneralParameterDescriptor>;

    /// Specific kind of this value.
    fn kind(&self) -> ParameterKind<'_>;
}

/// Value of a single parameter.
pub trait ParameterValue: GeneralParameterValue {
    /// Definition of this parameter. Mandatory.
    fn descriptor(&self) -> Option<&dyn ParameterDescriptor>;

    /// Parameter value, if set.
    fn value(&self) -> Option<Value>;
}

/// Group of related parameter values.
pub trait ParameterValueGroup: GeneralParameterValue {
    /// Definition of this group. Mandatory.
    fn group_descriptor(&self) -> Option<&dyn ParameterDescriptorGroup>;

    /// Values in this group.
    fn values(&self) -> Vec<&dyn GeneralParameterValue>;

    /// Value of the parameter with the given name code.
    fn parameter(&self, name: &str) -> Option<&dyn ParameterValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_numeric_ordering() {
        assert!(Value::Integer(2) < Value::Real(2.5));
        assert!(Value::Real(-1.0) < Value::Integer(0));
        assert_eq!(Value::Text("a".into()).partial_cmp(&Value::Integer(1)), None);
    }

    #[test]
    fn value_type_of_arrays() {
        assert_eq!(Value::RealArray(vec![1.0]).value_type(), ValueType::RealArray);
        assert_eq!(Value::IntegerArray(vec![]).value_type(), ValueType::IntegerArray);
    }
}
