use geoapi::referencing::cs::{CoordinateSystem, CoordinateSystemAxis, CsKind};

use super::validate_identified_object;
use crate::assertions::{assert_between, assert_equals, assert_strictly_positive, assert_valid_range};
use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates coordinate systems and their axes.
#[derive(Debug)]
pub struct CsValidator {
    base: ValidatorBase,
}

impl Default for CsValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::referencing::cs"),
        }
    }
}

impl CsValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a coordinate system, applying the dimension rule of its kind.
    pub fn dispatch(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn CoordinateSystem>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_axes(container, object)?;
        let dimension = object.dimension();
        match object.kind() {
            CsKind::Ellipsoidal => {
                assert_between("EllipsoidalCS: wrong number of dimensions.", 2, 3, dimension)
            }
            CsKind::UserDefined => {
                assert_between("UserDefinedCS: wrong number of dimensions.", 2, 3, dimension)
            }
            CsKind::Spherical => {
                assert_equals("SphericalCS: wrong number of dimensions.", 3, dimension)
            }
            CsKind::Cylindrical => {
                assert_equals("CylindricalCS: wrong number of dimensions.", 3, dimension)
            }
            CsKind::Polar => assert_equals("PolarCS: wrong number of dimensions.", 2, dimension),
            CsKind::Linear => assert_equals("LinearCS: wrong number of dimensions.", 1, dimension),
            CsKind::Vertical => {
                assert_equals("VerticalCS: wrong number of dimensions.", 1, dimension)
            }
            CsKind::Time => assert_equals("TimeCS: wrong number of dimensions.", 1, dimension),
            CsKind::Cartesian | CsKind::Affine | CsKind::Other => Ok(()),
        }
    }

    /// Validates a coordinate system axis.
    pub fn validate_axis(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn CoordinateSystemAxis>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_identified_object(&self.base, container, object)?;
        assert_valid_range(
            "CoordinateSystemAxis: expected maximum >= minimum.",
            object.minimum_value(),
            object.maximum_value(),
        )
    }

    fn validate_axes(&self, container: &ValidatorContainer, object: &dyn CoordinateSystem) -> ValidationResult {
        validate_identified_object(&self.base, container, object)?;
        let dimension = object.dimension();
        assert_strictly_positive("CoordinateSystem: dimension must be greater than zero.", dimension)?;
        for i in 0..dimension {
            let axis = object.axis(i);
            self.base
                .mandatory("CoordinateSystem: axis cannot be null.", &axis)?;
            self.validate_axis(container, axis)?;
        }

        Ok(())
    }
}
