//! Data quality reports.

use std::fmt::Debug;

use crate::metadata::citation::{Citation, Identifier};
use crate::metadata::extent::Extent;
use crate::util::InternationalString;

/// Extent of the data for which quality information is reported.
pub trait Scope: Debug {
    /// Hierarchical level of the data, e.g. `"dataset"`. Mandatory.
    fn level(&self) -> Option<&str>;

    /// Spatial and temporal extents of the data.
    fn extents(&self) -> Vec<&dyn Extent> {
        Vec::new()
    }
}

/// Quality information for the data specified by a scope.
pub trait DataQuality: Debug {
    /// Specific data to which the quality information applies. Mandatory.
    fn scope(&self) -> Option<&dyn Scope>;

    /// Quantitative quality information for the data. At least one report is mandatory.
    fn reports(&self) -> Vec<&dyn Element>;
}

/// Aspect of quantitative quality information.
pub trait Element: Debug {
    /// Identifier of the measure applied.
    fn measure_identification(&self) -> Option<&dyn Identifier> {
        None
    }

    /// Reference to the procedure information.
    fn evaluation_procedure(&self) -> Option<&dyn Citation> {
        None
    }

    /// Values obtained from applying the data quality measure.
    fn results(&self) -> Vec<&dyn QualityResult>;
}

/// Specific kind of a [`QualityResult`].
#[derive(Debug, Copy, Clone)]
pub enum ResultKind<'a> {
    /// Result expressed in words.
    Descriptive(&'a dyn DescriptiveResult),
    /// Result of evaluating against a conformance quality level.
    Conformance(&'a dyn ConformanceResult),
    /// Result expressed as values.
    Quantitative(&'a dyn QuantitativeResult),
    /// Result of an unknown specific kind.
    Other,
}

/// Generalization of more specific result types.
pub trait QualityResult: Debug {
    /// Scope of the result.
    fn result_scope(&self) -> Option<&dyn Scope> {
        None
    }

    /// Specific kind of this result.
    fn kind(&self) -> ResultKind<'_>;
}

/// Data quality descriptive result.
pub trait DescriptiveResult: QualityResult {
    /// Textual expression of the descriptive result. Mandatory.
    fn statement(&self) -> Option<&dyn InternationalString>;
}

/// Outcome of evaluating a value against a specified acceptable conformance quality level.
pub trait ConformanceResult: QualityResult {
    /// Citation of the product specification or user requirement. Mandatory.
    fn specification(&self) -> Option<&dyn Citation>;

    /// Explanation of the meaning of conformance for this result.
    fn explanation(&self) -> Option<&dyn InternationalString>;

    /// Indication of the conformance result. Mandatory.
    fn pass(&self) -> Option<bool>;
}

/// Values resulting from a data quality measure.
pub trait QuantitativeResult: QualityResult {
    /// Quantitative values. At least one value is mandatory.
    fn values(&self) -> Vec<f64>;
}
