use geoapi::parameter::{
    DescriptorKind, GeneralParameterDescriptor, GeneralParameterValue, ParameterDescriptor, ParameterDescriptorGroup,
    ParameterKind, ParameterValue, ParameterValueGroup, Value, ValueType,
};

use super::validate_identified_object;
use crate::assertions::{
    assert_between, assert_between_optional, assert_contains, assert_equals, assert_same, assert_valid_optional_range,
    assert_valid_range,
};
use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates parameter descriptors and parameter values.
#[derive(Debug)]
pub struct ParameterValidator {
    base: ValidatorBase,
}

impl Default for ParameterValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::parameter"),
        }
    }
}

fn assert_value_type(message: &str, expected: Option<ValueType>, value: Option<&Value>) -> ValidationResult {
    match (expected, value) {
        (Some(expected), Some(value)) => assert_equals(message, expected, value.value_type()),
        _ => Ok(()),
    }
}

impl ParameterValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a descriptor according to its kind.
    pub fn dispatch_descriptor(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeneralParameterDescriptor>,
    ) -> ValidationResult {
        match object.map(|object| object.kind()) {
            Some(DescriptorKind::Single(descriptor)) => self.validate_descriptor(container, Some(descriptor)),
            Some(DescriptorKind::Group(group)) => self.validate_descriptor_group(container, Some(group)),
            None => Ok(()),
        }
    }

    /// Validates a parameter value or a group of values according to its kind.
    pub fn dispatch_value(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeneralParameterValue>,
    ) -> ValidationResult {
        match object.map(|object| object.kind()) {
            Some(ParameterKind::Value(value)) => self.validate_value(container, Some(value)),
            Some(ParameterKind::Group(group)) => self.validate_value_group(container, Some(group)),
            None => Ok(()),
        }
    }

    /// Validates the definition of a single parameter.
    ///
    /// Valid values and the minimum, maximum and default values must have the declared value type. The default
    /// value must be inside the range. A single parameter occurs at most once.
    pub fn validate_descriptor(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ParameterDescriptor>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_identified_object(&self.base, container, object)?;
        let value_type = object.value_type();
        self.base.mandatory(
            "ParameterDescriptor: must have a value type.",
            &value_type,
        )?;
        for value in object.valid_values() {
            assert_value_type(
                "ParameterDescriptor: valid_values() has unexpected element.",
                value_type,
                Some(&value),
            )?;
        }

        let minimum = object.minimum_value();
        let maximum = object.maximum_value();
        assert_value_type(
            "ParameterDescriptor: minimum_value() returns unexpected value.",
            value_type,
            minimum.as_ref(),
        )?;
        assert_value_type(
            "ParameterDescriptor: maximum_value() returns unexpected value.",
            value_type,
            maximum.as_ref(),
        )?;
        assert_valid_optional_range(
            "ParameterDescriptor: inconsistent minimum and maximum values.",
            minimum.clone(),
            maximum.clone(),
        )?;

        if let Some(default) = object.default_value() {
            assert_value_type(
                "ParameterDescriptor: default_value() returns unexpected value.",
                value_type,
                Some(&default),
            )?;
            assert_between_optional(
                "ParameterDescriptor: default_value() out of range.",
                minimum,
                maximum,
                default,
            )?;
        }

        assert_between(
            "ParameterDescriptor: minimum_occurs() shall return 0 or 1.",
            0,
            1,
            object.minimum_occurs(),
        )?;
        assert_equals(
            "ParameterDescriptor: maximum_occurs() shall return exactly 1.",
            1,
            object.maximum_occurs(),
        )
    }

    /// Validates a group of descriptors. Lookup by name must return the listed descriptors.
    pub fn validate_descriptor_group(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ParameterDescriptorGroup>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_identified_object(&self.base, container, object)?;
        for descriptor in object.descriptors() {
            self.dispatch_descriptor(container, Some(descriptor))?;
            let Some(code) = descriptor.name().and_then(|name| name.code()) else {
                continue;
            };

            let by_name = object.descriptor(code);
            self.base.mandatory(
                "ParameterDescriptorGroup: descriptor(name) should return a value.",
                &by_name,
            )?;
            if let Some(by_name) = by_name {
                assert_same(
                    "ParameterDescriptorGroup: descriptor(name) inconsistent with descriptors().",
                    descriptor,
                    by_name,
                )?;
            }
        }

        assert_valid_range(
            "ParameterDescriptorGroup: maximum_occurs() gives inconsistent range.",
            object.minimum_occurs(),
            object.maximum_occurs(),
        )
    }

    /// Validates a parameter value against its descriptor.
    pub fn validate_value(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ParameterValue>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let descriptor = object.descriptor();
        self.base
            .mandatory("ParameterValue: must have a descriptor.", &descriptor)?;
        self.validate_descriptor(container, descriptor)?;

        let (Some(value), Some(descriptor)) = (object.value(), descriptor) else {
            return Ok(());
        };

        assert_value_type(
            "ParameterValue: value() returns unexpected value.",
            descriptor.value_type(),
            Some(&value),
        )?;
        let valid_values = descriptor.valid_values();
        if !valid_values.is_empty() {
            assert_contains(
                "ParameterValue: value() not a member of valid_values() set.",
                &valid_values,
                &value,
            )?;
        }
        assert_between_optional(
            "ParameterValue: value() is out of bounds.",
            descriptor.minimum_value(),
            descriptor.maximum_value(),
            value,
        )
    }

    /// Validates a group of values. Lookups by name must return the listed values and their descriptors.
    pub fn validate_value_group(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ParameterValueGroup>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let descriptors = object.group_descriptor();
        self.base
            .mandatory("ParameterValueGroup: must have a descriptor.", &descriptors)?;
        self.validate_descriptor_group(container, descriptors)?;

        for value in object.values() {
            self.dispatch_value(container, Some(value))?;
            let descriptor = value.general_descriptor();
            self.base
                .mandatory("GeneralParameterValue: expected a descriptor.", &descriptor)?;
            let Some(descriptor) = descriptor else {
                continue;
            };

            let name = descriptor.name().and_then(|name| name.code());
            self.base
                .mandatory("GeneralParameterDescriptor: expected a name.", &name)?;
            let Some(name) = name else {
                continue;
            };

            if let Some(descriptors) = descriptors {
                let by_name = descriptors.descriptor(name);
                self.base.mandatory(
                    "ParameterDescriptorGroup: descriptor(name) should return a value.",
                    &by_name,
                )?;
                if let Some(by_name) = by_name {
                    assert_same(
                        "ParameterValueGroup: descriptor(name) inconsistent with value descriptor.",
                        descriptor,
                        by_name,
                    )?;
                }
            }

            if let ParameterKind::Value(_) = value.kind() {
                let by_name = object.parameter(name);
                self.base.mandatory(
                    "ParameterValueGroup: parameter(name) should return a value.",
                    &by_name,
                )?;
                if let Some(by_name) = by_name {
                    assert_same(
                        "ParameterValueGroup: parameter(name) inconsistent with values().",
                        value,
                        by_name,
                    )?;
                }
            }
        }

        Ok(())
    }
}
