//! Validators for positions, envelopes and geometries.

use geoapi::geometry::{DirectPosition, Envelope, Geometry};

use crate::assertions::{assert_between, assert_equals, assert_float_equals, assert_same, assert_valid_range};
use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Relative tolerance used when comparing computed envelope properties.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Validates direct positions, envelopes and geometries.
#[derive(Debug)]
pub struct GeometryValidator {
    base: ValidatorBase,
    /// Tolerance relative to the span of an envelope or of an axis range.
    pub tolerance: f64,
}

impl Default for GeometryValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::geometry"),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl GeometryValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates an envelope, its corners and its computed properties.
    pub fn validate_envelope(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Envelope>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let dimension = object.dimension();
        let crs = object.crs();
        container.validate_crs(crs)?;

        let corners = [
            (object.lower_corner(), "lower"),
            (object.upper_corner(), "upper"),
        ];
        for (corner, label) in corners {
            self.validate_direct_position(container, corner)?;
            self.base
                .mandatory(&format!("Envelope: must have a {label} corner."), &corner)?;
            let Some(corner) = corner else {
                continue;
            };

            assert_equals(
                &format!("Envelope: {label} corner dimension must be equal to the envelope dimension."),
                dimension,
                corner.dimension(),
            )?;
            if let (Some(crs), Some(check)) = (crs, corner.crs()) {
                assert_same(
                    &format!("Envelope: {label} CRS must be the same than the envelope CRS."),
                    crs,
                    check,
                )?;
            }
        }

        let [(lower, _), (upper, _)] = corners;
        for i in 0..dimension {
            let minimum = object.minimum(i);
            let maximum = object.maximum(i);
            if let Some(lower) = lower {
                assert_float_equals(
                    "Envelope: minimum value must be equal to the lower corner coordinate.",
                    lower.coordinate(i),
                    minimum,
                    0.0,
                )?;
            }
            if let Some(upper) = upper {
                assert_float_equals(
                    "Envelope: maximum value must be equal to the upper corner coordinate.",
                    upper.coordinate(i),
                    maximum,
                    0.0,
                )?;
            }
            if !minimum.is_nan() && !maximum.is_nan() {
                assert_valid_range(
                    "Envelope: invalid minimum and maximum coordinate values.",
                    minimum,
                    maximum,
                )?;
            }

            let span = maximum - minimum;
            let eps = span * self.tolerance;
            assert_float_equals("Envelope: unexpected span value.", span, object.span(i), eps)?;
            assert_float_equals(
                "Envelope: unexpected median value.",
                (maximum + minimum) / 2.0,
                object.median(i),
                eps,
            )?;
        }

        Ok(())
    }

    /// Validates a position: consistency of its coordinates and position inside the axis bounds of its CRS.
    pub fn validate_direct_position(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn DirectPosition>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let dimension = object.dimension();
        let coordinates = object.coordinates();
        assert_equals(
            "DirectPosition: coordinate array length must be equal to the dimension.",
            dimension,
            coordinates.len(),
        )?;
        for (i, coordinate) in coordinates.iter().enumerate() {
            assert_float_equals(
                "DirectPosition: coordinate(i) must be the same than coordinates()[i].",
                *coordinate,
                object.coordinate(i),
                0.0,
            )?;
        }

        let crs = object.crs();
        container.validate_crs(crs)?;
        let Some(cs) = crs.and_then(|crs| crs.coordinate_system()) else {
            return Ok(());
        };

        assert_equals(
            "DirectPosition: CRS dimension must match the position dimension.",
            dimension,
            cs.dimension(),
        )?;
        for (i, coordinate) in coordinates.iter().enumerate() {
            let Some(axis) = cs.axis(i) else {
                continue;
            };

            let minimum = axis.minimum_value();
            let maximum = axis.maximum_value();
            let eps = (maximum - minimum) * self.tolerance;
            assert_between(
                "DirectPosition: coordinate out of axis bounds.",
                minimum - eps,
                maximum + eps,
                *coordinate,
            )?;
        }

        Ok(())
    }

    /// Validates a geometry and its envelope.
    pub fn validate_geometry(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Geometry>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let crs = object.crs();
        container.validate_crs(crs)?;
        let envelope = object.envelope();
        self.validate_envelope(container, envelope)?;
        if let (Some(crs), Some(check)) = (crs, envelope.and_then(|envelope| envelope.crs())) {
            assert_same(
                "Geometry: envelope CRS must be the same than the geometry CRS.",
                crs,
                check,
            )?;
        }

        Ok(())
    }
}
