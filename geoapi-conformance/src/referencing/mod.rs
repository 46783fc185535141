//! Validators for referencing by coordinates (ISO 19111) and for parameters.

mod crs;
mod cs;
mod datum;
mod operation;
mod parameter;

use geoapi::referencing::crs::{CoordinateReferenceSystem, CrsKind};
use geoapi::referencing::{IdentifiedObject, ReferenceSystem};

pub use crs::CrsValidator;
pub use cs::CsValidator;
pub use datum::DatumValidator;
pub use operation::OperationValidator;
pub use parameter::ParameterValidator;

use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Checks the properties common to all identified objects: name, identifiers, aliases and remarks.
pub(crate) fn validate_identified_object<T: IdentifiedObject + ?Sized>(
    base: &ValidatorBase,
    container: &ValidatorContainer,
    object: &T,
) -> ValidationResult {
    let name = object.name();
    base.mandatory("IdentifiedObject: must have a name.", &name)?;
    if let Some(name) = name {
        base.mandatory("IdentifiedObject: the name must have a code.", &name.code())?;
        container.validate_identifier(Some(name))?;
    }

    for identifier in object.identifiers() {
        container.validate_identifier(Some(identifier))?;
    }
    for alias in object.alias() {
        container.validate_generic_name(Some(alias))?;
    }

    container.validate_international_string(object.remarks())
}

/// Same as [`validate_identified_object`], plus the domain of validity and the scope.
pub(crate) fn validate_reference_system<T: ReferenceSystem + ?Sized>(
    base: &ValidatorBase,
    container: &ValidatorContainer,
    object: &T,
) -> ValidationResult {
    validate_identified_object(base, container, object)?;
    container.validate_extent(object.domain_of_validity())?;
    container.validate_international_string(object.scope())
}

/// Number of dimensions of the CRS, or `None` if unknown.
///
/// The dimension of a compound CRS without coordinate system is the sum of the dimensions of its components.
pub(crate) fn crs_dimension(crs: &dyn CoordinateReferenceSystem) -> Option<usize> {
    if let Some(cs) = crs.coordinate_system() {
        return Some(cs.dimension());
    }

    match crs.kind() {
        CrsKind::Compound(compound) => compound
            .components()
            .into_iter()
            .map(crs_dimension)
            .sum(),
        _ => None,
    }
}
