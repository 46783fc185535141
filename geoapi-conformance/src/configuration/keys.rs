//! Predefined configuration keys.
//!
//! Boolean keys declare whether an implementation supports an optional feature. A missing boolean entry means that the
//! feature is supported.

use std::sync::Arc;

use super::key::{registered, RegisteredKey};
use super::Key;
use crate::tolerance::ToleranceModifier;
use crate::units::Units;
use crate::validator::ValidatorContainer;

/// Whether international strings can be localized in more than one locale.
pub const IS_MULTI_LOCALE_SUPPORTED: Key<bool> = Key::predefined("isMultiLocaleSupported");
/// Whether generic names can mix the syntax of several name spaces.
pub const IS_MIXED_NAME_SYNTAX_SUPPORTED: Key<bool> = Key::predefined("isMixedNameSyntaxSupported");
/// Whether objects created from authority codes have the standard name.
pub const IS_STANDARD_NAME_SUPPORTED: Key<bool> = Key::predefined("isStandardNameSupported");
/// Whether objects created from authority codes have the standard aliases.
pub const IS_STANDARD_ALIAS_SUPPORTED: Key<bool> = Key::predefined("isStandardAliasSupported");
/// Whether dependencies of created objects are identified.
pub const IS_DEPENDENCY_IDENTIFICATION_SUPPORTED: Key<bool> =
    Key::predefined("isDependencyIdentificationSupported");
/// Whether deprecated objects can be created from authority codes.
pub const IS_DEPRECATED_OBJECT_CREATION_SUPPORTED: Key<bool> =
    Key::predefined("isDeprecatedObjectCreationSupported");
/// Whether math transforms can transform arrays of `f64` into arrays of `f64`.
pub const IS_DOUBLE_TO_DOUBLE_SUPPORTED: Key<bool> = Key::predefined("isDoubleToDoubleSupported");
/// Whether math transforms can transform arrays of `f32` into arrays of `f32`.
pub const IS_FLOAT_TO_FLOAT_SUPPORTED: Key<bool> = Key::predefined("isFloatToFloatSupported");
/// Whether math transforms can transform arrays of `f64` into arrays of `f32`.
pub const IS_DOUBLE_TO_FLOAT_SUPPORTED: Key<bool> = Key::predefined("isDoubleToFloatSupported");
/// Whether math transforms can transform arrays of `f32` into arrays of `f64`.
pub const IS_FLOAT_TO_DOUBLE_SUPPORTED: Key<bool> = Key::predefined("isFloatToDoubleSupported");
/// Whether source and target arrays of a transform may overlap.
pub const IS_OVERLAPPING_ARRAY_SUPPORTED: Key<bool> = Key::predefined("isOverlappingArraySupported");
/// Whether math transforms can be inverted.
pub const IS_INVERSE_TRANSFORM_SUPPORTED: Key<bool> = Key::predefined("isInverseTransformSupported");
/// Whether math transforms can compute derivatives.
pub const IS_DERIVATIVE_SUPPORTED: Key<bool> = Key::predefined("isDerivativeSupported");
/// Whether non-square matrices are supported.
pub const IS_NON_SQUARE_MATRIX_SUPPORTED: Key<bool> = Key::predefined("isNonSquareMatrixSupported");
/// Whether spaces of other dimension than two are supported.
pub const IS_NON_BIDIMENSIONAL_SPACE_SUPPORTED: Key<bool> =
    Key::predefined("isNonBidimensionalSpaceSupported");
/// Whether coordinate operations can swap axes.
pub const IS_AXIS_SWAPPING_SUPPORTED: Key<bool> = Key::predefined("isAxisSwappingSupported");
/// Whether created objects should be validated.
pub const IS_VALIDATION_ENABLED: Key<bool> = Key::predefined("isValidationEnabled");
/// Whether tolerances have been relaxed by the implementation.
pub const IS_TOLERANCE_RELAXED: Key<bool> = Key::predefined("isToleranceRelaxed");
/// Whether factories keep the values given by the user instead of replacing them by the authority values.
pub const IS_FACTORY_PRESERVING_USER_VALUES: Key<bool> =
    Key::predefined("isFactoryPreservingUserValues");

/// Provider of the units of measure used by tests.
pub const UNITS: Key<Units> = Key::predefined("units");
/// Validators to use instead of the default ones.
pub const VALIDATORS: Key<Arc<ValidatorContainer>> = Key::predefined("validators");
/// Modifier applied on the tolerance of coordinate comparisons.
pub const TOLERANCE_MODIFIER: Key<ToleranceModifier> = Key::predefined("toleranceModifier");

/// Optional math transform features, for implementations declaring them all unsupported with
/// [`Configuration::unsupported`](super::Configuration::unsupported).
pub const TRANSFORM_FEATURES: [Key<bool>; 8] = [
    IS_DOUBLE_TO_DOUBLE_SUPPORTED,
    IS_FLOAT_TO_FLOAT_SUPPORTED,
    IS_DOUBLE_TO_FLOAT_SUPPORTED,
    IS_FLOAT_TO_DOUBLE_SUPPORTED,
    IS_OVERLAPPING_ARRAY_SUPPORTED,
    IS_INVERSE_TRANSFORM_SUPPORTED,
    IS_DERIVATIVE_SUPPORTED,
    IS_AXIS_SWAPPING_SUPPORTED,
];

/// Every predefined boolean key.
pub const FLAGS: [Key<bool>; 19] = [
    IS_MULTI_LOCALE_SUPPORTED,
    IS_MIXED_NAME_SYNTAX_SUPPORTED,
    IS_STANDARD_NAME_SUPPORTED,
    IS_STANDARD_ALIAS_SUPPORTED,
    IS_DEPENDENCY_IDENTIFICATION_SUPPORTED,
    IS_DEPRECATED_OBJECT_CREATION_SUPPORTED,
    IS_DOUBLE_TO_DOUBLE_SUPPORTED,
    IS_FLOAT_TO_FLOAT_SUPPORTED,
    IS_DOUBLE_TO_FLOAT_SUPPORTED,
    IS_FLOAT_TO_DOUBLE_SUPPORTED,
    IS_OVERLAPPING_ARRAY_SUPPORTED,
    IS_INVERSE_TRANSFORM_SUPPORTED,
    IS_DERIVATIVE_SUPPORTED,
    IS_NON_SQUARE_MATRIX_SUPPORTED,
    IS_NON_BIDIMENSIONAL_SPACE_SUPPORTED,
    IS_AXIS_SWAPPING_SUPPORTED,
    IS_VALIDATION_ENABLED,
    IS_TOLERANCE_RELAXED,
    IS_FACTORY_PRESERVING_USER_VALUES,
];

pub(super) fn predefined() -> Vec<RegisteredKey> {
    let mut keys: Vec<_> = FLAGS.iter().map(registered).collect();
    keys.push(registered(&UNITS));
    keys.push(registered(&VALIDATORS));
    keys.push(registered(&TOLERANCE_MODIFIER));
    keys
}
