//! Spatial and temporal extents.

use std::fmt::Debug;
use std::time::SystemTime;

use crate::geometry::Geometry;
use crate::metadata::citation::Identifier;
use crate::referencing::crs::VerticalCrs;
use crate::util::InternationalString;

/// Extent of a resource in space and time.
pub trait Extent: Debug {
    /// Spatial and temporal extent in words.
    fn description(&self) -> Option<&dyn InternationalString>;

    /// Geographic component of the extent.
    fn geographic_elements(&self) -> Vec<&dyn GeographicExtent> {
        Vec::new()
    }

    /// Vertical component of the extent.
    fn vertical_elements(&self) -> Vec<&dyn VerticalExtent> {
        Vec::new()
    }

    /// Temporal component of the extent.
    fn temporal_elements(&self) -> Vec<&dyn TemporalExtent> {
        Vec::new()
    }
}

/// Specific kind of a [`GeographicExtent`].
#[derive(Debug, Copy, Clone)]
pub enum GeographicExtentKind<'a> {
    /// Bounding box in decimal degrees.
    BoundingBox(&'a dyn GeographicBoundingBox),
    /// Area described by an identifier.
    Description(&'a dyn GeographicDescription),
    /// Area enclosed by polygons.
    Polygon(&'a dyn BoundingPolygon),
    /// Geographic extent of an unknown specific kind.
    Other,
}

/// Spatial area of a resource.
pub trait GeographicExtent: Debug {
    /// Whether the bounding area encompasses an area covered by the data (`true`) or an area where data is not
    /// present (`false`).
    fn inclusion(&self) -> Option<bool> {
        Some(true)
    }

    /// Specific kind of this extent.
    fn kind(&self) -> GeographicExtentKind<'_>;
}

/// Geographic position of the resource, in decimal degrees.
pub trait GeographicBoundingBox: GeographicExtent {
    /// Western-most coordinate of the limit of the extent.
    fn west_bound_longitude(&self) -> f64;
    /// Eastern-most coordinate of the limit of the extent.
    fn east_bound_longitude(&self) -> f64;
    /// Southern-most coordinate of the limit of the extent.
    fn south_bound_latitude(&self) -> f64;
    /// Northern-most coordinate of the limit of the extent.
    fn north_bound_latitude(&self) -> f64;
}

/// Description of the geographic area using identifiers.
pub trait GeographicDescription: GeographicExtent {
    /// Identifier used to represent a geographic area. Mandatory.
    fn geographic_identifier(&self) -> Option<&dyn Identifier>;
}

/// Enclosing geometric objects which locate the resource.
pub trait BoundingPolygon: GeographicExtent {
    /// Sets of points defining the bounding polygons. Mandatory.
    fn polygons(&self) -> Vec<&dyn Geometry>;
}

/// Vertical domain of a resource.
pub trait VerticalExtent: Debug {
    /// Lowest vertical extent contained in the resource.
    fn minimum_value(&self) -> Option<f64>;
    /// Highest vertical extent contained in the resource.
    fn maximum_value(&self) -> Option<f64>;
    /// Vertical reference system of the minimum and maximum values.
    fn vertical_crs(&self) -> Option<&dyn VerticalCrs> {
        None
    }
}

/// Time period covered by a resource.
pub trait TemporalExtent: Debug {
    /// Start of the period.
    fn begin(&self) -> Option<SystemTime>;
    /// End of the period.
    fn end(&self) -> Option<SystemTime>;
}
