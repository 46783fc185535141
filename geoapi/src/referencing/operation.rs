//! Coordinate operations, methods and math transforms.

use std::fmt::Debug;

use crate::metadata::citation::Citation;
use crate::metadata::extent::Extent;
use crate::parameter::{ParameterDescriptorGroup, ParameterValueGroup};
use crate::referencing::crs::CoordinateReferenceSystem;
use crate::referencing::IdentifiedObject;
use crate::util::InternationalString;

/// Specific kind of a [`CoordinateOperation`].
#[derive(Debug, Copy, Clone)]
pub enum OperationKind<'a> {
    /// Operation without datum change.
    Conversion(&'a dyn Conversion),
    /// Operation with a datum change.
    Transformation(&'a dyn Transformation),
    /// Ordered sequence of single operations.
    Concatenated(&'a dyn ConcatenatedOperation),
    /// Operation applied on a subset of the coordinates.
    PassThrough(&'a dyn PassThroughOperation),
    /// Single operation which is neither a conversion nor a transformation.
    Single(&'a dyn SingleOperation),
    /// Operation of no more specific kind.
    Other,
}

/// Change of coordinates from one CRS to another.
pub trait CoordinateOperation: IdentifiedObject {
    /// Source CRS. Mandatory for transformations, forbidden for defining conversions.
    fn source_crs(&self) -> Option<&dyn CoordinateReferenceSystem>;

    /// Target CRS. Mandatory for transformations, forbidden for defining conversions.
    fn target_crs(&self) -> Option<&dyn CoordinateReferenceSystem>;

    /// Version of the coordinate transformation.
    fn operation_version(&self) -> Option<&str> {
        None
    }

    /// Area or region in which this operation is valid.
    fn domain_of_validity(&self) -> Option<&dyn Extent> {
        None
    }

    /// Description of domain of usage.
    fn scope(&self) -> Option<&dyn InternationalString> {
        None
    }

    /// Transform from positions in the source CRS to positions in the target CRS.
    fn math_transform(&self) -> Option<&dyn MathTransform>;

    /// Specific kind of this operation.
    fn kind(&self) -> OperationKind<'_>;
}

/// Operation consisting of one method.
pub trait SingleOperation: CoordinateOperation {
    /// Algorithm used by this operation. Mandatory.
    fn method(&self) -> Option<&dyn OperationMethod>;

    /// Parameter values. Mandatory.
    fn parameter_values(&self) -> Option<&dyn ParameterValueGroup>;
}

/// Operation in which the parameter values are defined rather than empirically derived.
pub trait Conversion: SingleOperation {}

/// Operation in which the parameter values are empirically derived.
pub trait Transformation: SingleOperation {}

/// Ordered sequence of two or more single operations.
pub trait ConcatenatedOperation: CoordinateOperation {
    /// Sequence of operations.
    fn operations(&self) -> Vec<&dyn SingleOperation>;
}

/// Operation specifying what subset of coordinates is given to another operation.
pub trait PassThroughOperation: CoordinateOperation {
    /// Operation to apply on the subset of coordinates. Mandatory.
    fn operation(&self) -> Option<&dyn SingleOperation>;

    /// Zero-based indices of the modified source coordinates. Mandatory.
    fn modified_coordinates(&self) -> Option<Vec<usize>>;
}

/// Method used to perform a coordinate operation.
pub trait OperationMethod: IdentifiedObject {
    /// Formula used by this method.
    fn formula(&self) -> Option<&dyn Formula>;

    /// Number of dimensions in the source CRS, if known.
    fn source_dimensions(&self) -> Option<usize> {
        None
    }

    /// Number of dimensions in the target CRS, if known.
    fn target_dimensions(&self) -> Option<usize> {
        None
    }

    /// Descriptors of the method parameters.
    fn parameters(&self) -> Option<&dyn ParameterDescriptorGroup>;
}

/// Formula or procedure used by an operation method.
pub trait Formula: Debug {
    /// Formula used by the method.
    fn formula(&self) -> Option<&dyn InternationalString>;

    /// Reference to a publication giving the formula.
    fn citation(&self) -> Option<&dyn Citation> {
        None
    }
}

/// Specific kind of a [`MathTransform`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Transform of arbitrary dimensions.
    General,
    /// One-dimensional transform.
    OneDimensional,
    /// Two-dimensional transform.
    TwoDimensional,
}

/// Transforms multi-dimensional coordinate points.
pub trait MathTransform: Debug {
    /// Number of dimensions of input points.
    fn source_dimensions(&self) -> usize;

    /// Number of dimensions of output points.
    fn target_dimensions(&self) -> usize;

    /// Whether this transform does not move any points.
    fn is_identity(&self) -> bool {
        false
    }

    /// Specific kind of this transform.
    fn kind(&self) -> TransformKind {
        TransformKind::General
    }
}

/// A two dimensional array of numbers.
pub trait Matrix: Debug {
    /// Number of rows.
    fn num_row(&self) -> usize;

    /// Number of columns.
    fn num_col(&self) -> usize;

    /// Element at the given row and column.
    fn element(&self, row: usize, column: usize) -> f64;
}
