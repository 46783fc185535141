use geoapi::referencing::datum::{
    Datum, DatumKind, Ellipsoid, EngineeringDatum, GeodeticDatum, ImageDatum, PrimeMeridian, TemporalDatum,
    VerticalDatum,
};
use geoapi::UnitKind;

use super::validate_identified_object;
use crate::assertions::{
    assert_between, assert_equals, assert_float_equals, assert_strictly_positive, assert_true, assert_valid_range,
};
use crate::error::{ValidationError, ValidationResult};
use crate::validator::{ValidatorBase, ValidatorContainer};
use crate::Units;

/// Relative tolerance on the inverse flattening computed from the ellipsoid axis lengths.
pub const INVERSE_FLATTENING_TOLERANCE: f64 = 1e-9;

/// Validates datums, ellipsoids and prime meridians.
#[derive(Debug)]
pub struct DatumValidator {
    base: ValidatorBase,
    /// Units used to express the prime meridian longitude in degrees.
    pub units: Units,
}

impl Default for DatumValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::referencing::datum"),
            units: Units::default(),
        }
    }
}

impl DatumValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a datum according to its kind.
    pub fn dispatch(&self, container: &ValidatorContainer, object: Option<&dyn Datum>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        match object.kind() {
            DatumKind::Geodetic(datum) => self.validate_geodetic(container, Some(datum)),
            DatumKind::Vertical(datum) => self.validate_vertical(container, Some(datum)),
            DatumKind::Temporal(datum) => self.validate_temporal(container, Some(datum)),
            DatumKind::Image(datum) => self.validate_image(container, Some(datum)),
            DatumKind::Engineering(datum) => self.validate_engineering(container, Some(datum)),
            DatumKind::Other => self.validate_datum(container, object),
        }
    }

    fn validate_datum<T: Datum + ?Sized>(&self, container: &ValidatorContainer, object: &T) -> ValidationResult {
        validate_identified_object(&self.base, container, object)?;
        container.validate_extent(object.domain_of_validity())?;
        container.validate_international_string(object.anchor_point())
    }

    /// Validates a prime meridian. The Greenwich longitude must be in the [-180 … 180]° range.
    pub fn validate_prime_meridian(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn PrimeMeridian>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_identified_object(&self.base, container, object)?;
        let unit = object.angular_unit();
        self.base
            .mandatory("PrimeMeridian: must have an angular unit.", &unit)?;
        let Some(unit) = unit else {
            return Ok(());
        };

        let longitude = unit
            .convert(object.greenwich_longitude(), self.units.degree())
            .map_err(|_| {
                ValidationError::assertion(format!(
                    "PrimeMeridian: unit \"{}\" is not angular.",
                    unit.symbol()
                ))
            })?;
        assert_between(
            "PrimeMeridian: expected longitude in [-180 … +180]° range.",
            -180.0,
            180.0,
            longitude,
        )
    }

    /// Validates an ellipsoid: positive and ordered axis lengths and an inverse flattening consistent with them.
    pub fn validate_ellipsoid(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Ellipsoid>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_identified_object(&self.base, container, object)?;
        let unit = object.axis_unit();
        self.base.mandatory("Ellipsoid: must have an axis unit.", &unit)?;
        if let Some(unit) = unit {
            assert_equals(
                "Ellipsoid: axis unit must be linear.",
                UnitKind::Linear,
                unit.kind(),
            )?;
        }

        let semi_major = object.semi_major_axis();
        let semi_minor = object.semi_minor_axis();
        assert_strictly_positive("Ellipsoid: semi-major axis must be greater than zero.", semi_major)?;
        assert_strictly_positive("Ellipsoid: semi-minor axis must be greater than zero.", semi_minor)?;
        assert_valid_range(
            "Ellipsoid: semi-minor axis cannot be greater than semi-major axis.",
            semi_minor,
            semi_major,
        )?;

        let inverse_flattening = object.inverse_flattening();
        if object.is_sphere() {
            return assert_true(
                "Ellipsoid: inverse flattening must be infinite for a sphere.",
                inverse_flattening.is_infinite(),
            );
        }

        assert_true(
            "Ellipsoid: inverse flattening must be finite unless the ellipsoid is a sphere.",
            inverse_flattening.is_finite(),
        )?;
        let expected = semi_major / (semi_major - semi_minor);
        assert_float_equals(
            "Ellipsoid: inconsistent inverse flattening.",
            expected,
            inverse_flattening,
            expected * INVERSE_FLATTENING_TOLERANCE,
        )
    }

    /// Validates a geodetic datum, its ellipsoid and its prime meridian.
    pub fn validate_geodetic(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeodeticDatum>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_datum(container, object)?;
        let ellipsoid = object.ellipsoid();
        self.base
            .mandatory("GeodeticDatum: must have an ellipsoid.", &ellipsoid)?;
        self.validate_ellipsoid(container, ellipsoid)?;

        let prime_meridian = object.prime_meridian();
        self.base
            .mandatory("GeodeticDatum: must have a prime meridian.", &prime_meridian)?;
        self.validate_prime_meridian(container, prime_meridian)
    }

    /// Validates a vertical datum.
    pub fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn VerticalDatum>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_datum(container, object)?;
        self.base.mandatory(
            "VerticalDatum: must have a datum type.",
            &object.vertical_datum_type(),
        )
    }

    /// Validates a temporal datum. Anchor point and realization epoch are forbidden.
    pub fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn TemporalDatum>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_datum(container, object)?;
        self.base
            .mandatory("TemporalDatum: must have an origin.", &object.origin())?;
        self.base.forbidden(
            "TemporalDatum: should not have anchor point.",
            &object.anchor_point(),
        )?;
        self.base.forbidden(
            "TemporalDatum: should not have realization epoch.",
            &object.realization_epoch(),
        )
    }

    /// Validates an image datum.
    pub fn validate_image(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ImageDatum>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_datum(container, object)?;
        self.base.mandatory(
            "ImageDatum: must specify the pixel in cell.",
            &object.pixel_in_cell(),
        )
    }

    /// Validates an engineering datum.
    pub fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn EngineeringDatum>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_datum(container, object)
    }
}
