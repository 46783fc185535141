use geoapi::metadata::extent::{
    BoundingPolygon, Extent, GeographicBoundingBox, GeographicDescription, GeographicExtent,
    GeographicExtentKind, TemporalExtent, VerticalExtent,
};

use crate::assertions::{assert_between, assert_false, assert_valid_optional_range};
use crate::error::ValidationResult;
use crate::validator::{ValidatorBase, ValidatorContainer};

/// Validates spatial and temporal extents.
#[derive(Debug)]
pub struct ExtentValidator {
    base: ValidatorBase,
}

impl Default for ExtentValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::metadata::extent"),
        }
    }
}

impl ExtentValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates an extent and all its elements.
    pub fn validate_extent(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn Extent>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let description = object.description();
        container.validate_international_string(description)?;

        let geographic = object.geographic_elements();
        let vertical = object.vertical_elements();
        let temporal = object.temporal_elements();
        if description.is_none() && geographic.is_empty() && vertical.is_empty() && temporal.is_empty() {
            self.base.mandatory(
                "Extent: at least one of description, geographic, temporal or vertical elements must be specified.",
                &None::<()>,
            )?;
        }

        for element in geographic {
            self.dispatch_geographic(container, Some(element))?;
        }
        for element in vertical {
            self.validate_vertical(container, Some(element))?;
        }
        for element in temporal {
            self.validate_temporal(Some(element))?;
        }

        Ok(())
    }

    /// Validates a geographic extent according to its kind.
    pub fn dispatch_geographic(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeographicExtent>,
    ) -> ValidationResult {
        match object.map(|object| object.kind()) {
            Some(GeographicExtentKind::BoundingBox(bbox)) => self.validate_bounding_box(Some(bbox)),
            Some(GeographicExtentKind::Description(description)) => {
                self.validate_description(container, Some(description))
            }
            Some(GeographicExtentKind::Polygon(polygon)) => {
                self.validate_bounding_polygon(container, Some(polygon))
            }
            Some(GeographicExtentKind::Other) | None => Ok(()),
        }
    }

    /// Validates the longitude and latitude ranges of a bounding box.
    ///
    /// NaN bounds are accepted. West may be greater than east when the box crosses the anti-meridian.
    pub fn validate_bounding_box(&self, object: Option<&dyn GeographicBoundingBox>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let west = object.west_bound_longitude();
        let east = object.east_bound_longitude();
        let south = object.south_bound_latitude();
        let north = object.north_bound_latitude();
        assert_between("GeographicBoundingBox: illegal west bound.", -180.0, 180.0, west)?;
        assert_between("GeographicBoundingBox: illegal east bound.", -180.0, 180.0, east)?;
        assert_between("GeographicBoundingBox: illegal south bound.", -90.0, 90.0, south)?;
        assert_between("GeographicBoundingBox: illegal north bound.", -90.0, 90.0, north)?;
        assert_false(
            "GeographicBoundingBox: invalid range of latitudes.",
            south > north,
        )
    }

    /// Validates a geographic description.
    pub fn validate_description(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn GeographicDescription>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let identifier = object.geographic_identifier();
        self.base.mandatory(
            "GeographicDescription: must have a geographic identifier.",
            &identifier,
        )?;
        container.validate_identifier(identifier)
    }

    /// Validates a bounding polygon and the geometries it contains.
    pub fn validate_bounding_polygon(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn BoundingPolygon>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let polygons = object.polygons();
        self.base
            .mandatory("BoundingPolygon: must have at least one polygon.", &polygons)?;
        for polygon in polygons {
            container.validate_geometry(Some(polygon))?;
        }

        Ok(())
    }

    /// Validates the range and the reference system of a vertical extent.
    pub fn validate_vertical(
        &self,
        container: &ValidatorContainer,
        object: Option<&dyn VerticalExtent>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let minimum = object.minimum_value();
        let maximum = object.maximum_value();
        self.base
            .mandatory("VerticalExtent: must have a minimum value.", &minimum)?;
        self.base
            .mandatory("VerticalExtent: must have a maximum value.", &maximum)?;
        assert_valid_optional_range("VerticalExtent: invalid range.", minimum, maximum)?;
        container.validate_vertical_crs(object.vertical_crs())
    }

    /// Validates the time range of a temporal extent.
    pub fn validate_temporal(&self, object: Option<&dyn TemporalExtent>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let (begin, end) = (object.begin(), object.end());
        self.base
            .mandatory("TemporalExtent: must have a beginning.", &begin)?;
        self.base.mandatory("TemporalExtent: must have an end.", &end)?;
        if let (Some(begin), Some(end)) = (begin, end) {
            assert_false(
                "TemporalExtent: the beginning must not be after the end.",
                begin > end,
            )?;
        }

        Ok(())
    }
}
