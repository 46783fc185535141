use std::cell::Cell;

use ahash::AHashSet;
use geoapi::referencing::crs::{
    CompoundCrs, CoordinateReferenceSystem, CrsKind, EngineeringCrs, GeneralDerivedCrs, GeodeticCrs,
    ImageCrs, ProjectedCrs, TemporalCrs, VerticalCrs,
};
use geoapi::referencing::cs::{AxisDirection, CoordinateSystem, CsKind};
use geoapi::same;

use super::validate_reference_system;
use crate::assertions::{assert_equals, assert_same, assert_true};
use crate::error::{ValidationError, ValidationResult};
use crate::validator::{ValidatorBase, ValidatorContainer};

thread_local! {
    static VALIDATING_DERIVED: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as validating the conversion of a derived CRS.
///
/// The conversion target is the derived CRS itself, so validating the conversion would otherwise recurse forever.
struct DerivedGuard;

impl DerivedGuard {
    fn enter() -> Option<Self> {
        VALIDATING_DERIVED.with(|flag| (!flag.replace(true)).then_some(DerivedGuard))
    }
}

impl Drop for DerivedGuard {
    fn drop(&mut self) {
        VALIDATING_DERIVED.with(|flag| flag.set(false));
    }
}

/// Validates coordinate reference systems.
#[derive(Debug)]
pub struct CrsValidator {
    base: ValidatorBase,
}

impl Default for CrsValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::referencing::crs"),
        }
    }
}

impl CrsValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a CRS according to its kind.
    pub fn dispatch(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn CoordinateReferenceSystem>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        match object.kind() {
            CrsKind::Geocentric(crs) => self.validate_geocentric(container, Some(crs)),
            CrsKind::Geographic(crs) => self.validate_geographic(container, Some(crs)),
            CrsKind::Projected(crs) => self.validate_projected(container, Some(crs)),
            CrsKind::Derived(crs) => self.validate_derived(container, Some(crs)),
            CrsKind::Image(crs) => self.validate_image(container, Some(crs)),
            CrsKind::Engineering(crs) => self.validate_engineering(container, Some(crs)),
            CrsKind::Vertical(crs) => self.validate_vertical(container, Some(crs)),
            CrsKind::Temporal(crs) => self.validate_temporal(container, Some(crs)),
            CrsKind::Compound(crs) => self.validate_compound(container, Some(crs)),
            CrsKind::Other => {
                validate_reference_system(&self.base, container, object)?;
                container.validate_coordinate_system(object.coordinate_system())
            }
        }
    }

    /// Validates a geocentric CRS. A cartesian coordinate system must have the three geocentric axis directions.
    pub fn validate_geocentric(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeodeticCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("GeocentricCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            match cs.kind() {
                CsKind::Cartesian => self.validate_geocentric_axes(cs)?,
                CsKind::Spherical => {}
                kind => {
                    return Err(ValidationError::assertion(format!(
                        "GeocentricCRS: unknown CoordinateSystem of type {kind:?}."
                    )))
                }
            }
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.geodetic_datum();
        self.base
            .mandatory("GeocentricCRS: must have a Datum.", &datum)?;
        container.validate_geodetic_datum(datum)
    }

    fn validate_geocentric_axes(&self, cs: &dyn CoordinateSystem) -> ValidationResult {
        let mut found = AHashSet::new();
        for i in 0..cs.dimension() {
            let Some(axis) = cs.axis(i) else {
                continue;
            };

            let direction = axis.direction();
            self.base.mandatory("Axis must have a direction.", &direction)?;
            let Some(direction) = direction else {
                continue;
            };

            let expected = match i {
                0 => Some((AxisDirection::GeocentricX, "X")),
                1 => Some((AxisDirection::GeocentricY, "Y")),
                2 => Some((AxisDirection::GeocentricZ, "Z")),
                _ => None,
            };
            match expected {
                Some((expected, label)) => assert_equals(
                    &format!("CoordinateSystem: expected Geocentric {label} axis direction."),
                    expected,
                    direction,
                )?,
                None => {
                    return Err(ValidationError::assertion(
                        "CoordinateSystem: unknown axis direction.",
                    ))
                }
            }
            assert_true(
                &format!("CoordinateSystem: duplicated axis direction for {direction:?}."),
                found.insert(direction),
            )?;
        }

        Ok(())
    }

    /// Validates a geographic CRS. The coordinate system must be ellipsoidal.
    pub fn validate_geographic(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeodeticCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("GeographicCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            assert_equals(
                "GeographicCRS: coordinate system must be ellipsoidal.",
                CsKind::Ellipsoidal,
                cs.kind(),
            )?;
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.geodetic_datum();
        self.base
            .mandatory("GeographicCRS: must have a Datum.", &datum)?;
        container.validate_geodetic_datum(datum)
    }

    /// Validates a projected CRS, its base geographic CRS and its conversion.
    pub fn validate_projected(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ProjectedCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let base_crs = object.base_geographic_crs();
        self.base
            .mandatory("ProjectedCRS: must have a base CRS.", &base_crs)?;
        self.validate_geographic(container, base_crs)?;

        let cs = object.coordinate_system();
        self.base
            .mandatory("ProjectedCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            assert_equals(
                "ProjectedCRS: coordinate system must be cartesian.",
                CsKind::Cartesian,
                cs.kind(),
            )?;
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.datum();
        self.base
            .mandatory("ProjectedCRS: must have a Datum.", &datum)?;
        container.validate_datum(datum)?;
        self.validate_general_derived(container, object)
    }

    /// Validates a derived CRS, its base CRS and its conversion.
    pub fn validate_derived(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeneralDerivedCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let base_crs = object.base_crs();
        self.base
            .mandatory("DerivedCRS: must have a base CRS.", &base_crs)?;
        self.dispatch(container, base_crs)?;

        let cs = object.coordinate_system();
        self.base
            .mandatory("DerivedCRS: must have a CoordinateSystem.", &cs)?;
        container.validate_coordinate_system(cs)?;

        let datum = object.datum();
        self.base.mandatory("DerivedCRS: must have a Datum.", &datum)?;
        container.validate_datum(datum)?;
        self.validate_general_derived(container, object)
    }

    /// Checks that the conversion goes from the base CRS to the derived CRS.
    fn validate_general_derived<T: GeneralDerivedCrs + ?Sized>(
        &self,
        container: &ValidatorContainer,
        object: &T,
    ) -> ValidationResult {
        let Some(_guard) = DerivedGuard::enter() else {
            return Ok(());
        };

        let conversion = object.conversion_from_base();
        self.base
            .mandatory("GeneralDerivedCRS: must have a conversion from the base CRS.", &conversion)?;
        let Some(conversion) = conversion else {
            return Ok(());
        };

        container.validate_conversion(Some(conversion))?;
        if let (Some(base_crs), Some(source)) = (object.base_crs(), conversion.source_crs()) {
            assert_same(
                "GeneralDerivedCRS: The base CRS should be the source CRS of the conversion.",
                base_crs,
                source,
            )?;
        }
        if let Some(target) = conversion.target_crs() {
            assert_true(
                "GeneralDerivedCRS: The derived CRS should be the target CRS of the conversion.",
                same(object, target),
            )?;
        }

        Ok(())
    }

    /// Validates an image CRS. The coordinate system must be cartesian or affine.
    pub fn validate_image(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn ImageCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("ImageCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            assert_true(
                "ImageCRS: coordinate system must be cartesian or affine.",
                matches!(cs.kind(), CsKind::Cartesian | CsKind::Affine),
            )?;
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.image_datum();
        self.base.mandatory("ImageCRS: must have a Datum.", &datum)?;
        container.validate_image_datum(datum)
    }

    /// Validates an engineering CRS.
    pub fn validate_engineering(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn EngineeringCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("EngineeringCRS: must have a CoordinateSystem.", &cs)?;
        container.validate_coordinate_system(cs)?;

        let datum = object.engineering_datum();
        self.base
            .mandatory("EngineeringCRS: must have a Datum.", &datum)?;
        container.validate_engineering_datum(datum)
    }

    /// Validates a vertical CRS. The coordinate system must be vertical.
    pub fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn VerticalCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("VerticalCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            assert_equals(
                "VerticalCRS: coordinate system must be vertical.",
                CsKind::Vertical,
                cs.kind(),
            )?;
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.vertical_datum();
        self.base
            .mandatory("VerticalCRS: must have a Datum.", &datum)?;
        container.validate_vertical_datum(datum)
    }

    /// Validates a temporal CRS. The coordinate system must be a time coordinate system.
    pub fn validate_temporal(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn TemporalCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        let cs = object.coordinate_system();
        self.base
            .mandatory("TemporalCRS: must have a CoordinateSystem.", &cs)?;
        if let Some(cs) = cs {
            assert_equals(
                "TemporalCRS: coordinate system must be a time coordinate system.",
                CsKind::Time,
                cs.kind(),
            )?;
            container.validate_coordinate_system(Some(cs))?;
        }

        let datum = object.temporal_datum();
        self.base
            .mandatory("TemporalCRS: must have a Datum.", &datum)?;
        container.validate_temporal_datum(datum)
    }

    /// Validates a compound CRS and each of its components.
    pub fn validate_compound(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn CompoundCrs>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        validate_reference_system(&self.base, container, object)?;
        container.validate_coordinate_system(object.coordinate_system())?;

        let components = object.components();
        self.base
            .mandatory("CompoundCRS: must have components.", &components)?;
        assert_true(
            "CompoundCRS: must have at least 2 components.",
            components.is_empty() || components.len() >= 2,
        )?;
        for component in components {
            self.dispatch(container, Some(component))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::tests::{geocentric, mercator, wgs84, TestAxis, TestCompoundCrs, TestCs, TestGeodeticCrs};

    #[test]
    fn geographic_crs() {
        let container = ValidatorContainer::default();
        assert!(container.validate_crs(Some(wgs84())).is_ok());
    }

    #[test]
    fn geographic_crs_needs_ellipsoidal_cs() {
        let container = ValidatorContainer::default();
        let cs = TestCs::new(
            "Cartesian",
            CsKind::Cartesian,
            vec![TestAxis::easting(), TestAxis::northing()],
        );
        let crs = TestGeodeticCrs::geographic("Bad", cs);
        assert_snapshot!(
            container.validate_crs(Some(&crs)).unwrap_err(),
            @"GeographicCRS: coordinate system must be ellipsoidal. Expected <Ellipsoidal> but was <Cartesian>."
        );
    }

    #[test]
    fn geocentric_axis_directions() {
        let container = ValidatorContainer::default();
        assert!(container.validate_crs(Some(geocentric())).is_ok());

        let cs = TestCs::new(
            "Cartesian",
            CsKind::Cartesian,
            vec![TestAxis::geocentric(AxisDirection::GeocentricY), TestAxis::geocentric(AxisDirection::GeocentricX)],
        );
        let crs = TestGeodeticCrs::geocentric("Swapped", cs);
        assert_snapshot!(
            container.validate_crs(Some(&crs)).unwrap_err(),
            @"CoordinateSystem: expected Geocentric X axis direction. Expected <GeocentricX> but was <GeocentricY>."
        );

        let ellipsoidal = TestCs::new(
            "Ellipsoidal",
            CsKind::Ellipsoidal,
            vec![TestAxis::latitude(), TestAxis::longitude()],
        );
        let crs = TestGeodeticCrs::geocentric("Ellipsoidal", ellipsoidal);
        assert_snapshot!(
            container.validate_crs(Some(&crs)).unwrap_err(),
            @"GeocentricCRS: unknown CoordinateSystem of type Ellipsoidal."
        );
    }

    #[test]
    fn projected_crs_conversion_is_validated_once() {
        let container = ValidatorContainer::default();
        assert!(container.validate_crs(Some(mercator())).is_ok());
        assert!(!VALIDATING_DERIVED.with(Cell::get));
    }

    #[test]
    fn compound_crs_needs_two_components() {
        let container = ValidatorContainer::default();
        let single = TestCompoundCrs::new("Single").with_component(wgs84());
        assert_snapshot!(
            container.validate_crs(Some(&single)).unwrap_err(),
            @"CompoundCRS: must have at least 2 components."
        );
    }
}
