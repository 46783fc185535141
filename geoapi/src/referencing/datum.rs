//! Datums, ellipsoids and prime meridians.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::metadata::extent::Extent;
use crate::referencing::IdentifiedObject;
use crate::unit::Unit;
use crate::util::InternationalString;

/// Meridian used to take longitude measurements from.
pub trait PrimeMeridian: IdentifiedObject {
    /// Longitude of the prime meridian measured from Greenwich, in [`angular_unit`](Self::angular_unit).
    fn greenwich_longitude(&self) -> f64;

    /// Unit of the Greenwich longitude. Mandatory.
    fn angular_unit(&self) -> Option<&Unit>;
}

/// Geometric figure used to describe the approximate shape of the earth.
pub trait Ellipsoid: IdentifiedObject {
    /// Linear unit of the semi-axis lengths. Mandatory.
    fn axis_unit(&self) -> Option<&Unit>;

    /// Length of the semi-major axis.
    fn semi_major_axis(&self) -> f64;

    /// Length of the semi-minor axis.
    fn semi_minor_axis(&self) -> f64;

    /// Inverse flattening, infinite for a sphere.
    fn inverse_flattening(&self) -> f64;

    /// Whether the inverse flattening is the defining parameter, as opposed to the semi-minor axis.
    fn is_ivf_definitive(&self) -> bool;

    /// Whether the ellipsoid is degenerated to a sphere.
    fn is_sphere(&self) -> bool {
        self.semi_major_axis() == self.semi_minor_axis()
    }
}

/// Relationship of the image grid to the data pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PixelInCell {
    /// Grid points are at the pixel centres.
    CellCenter,
    /// Grid points are at the pixel corners.
    CellCorner,
}

/// Method through which a vertical reference surface is realized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VerticalDatumType {
    /// Based on the gravity field.
    Geoidal,
    /// Based on the depth of a water surface.
    Depth,
    /// Based on atmospheric pressure.
    Barometric,
    /// Other realization method.
    Other,
}

/// Specific kind of a [`Datum`].
#[derive(Debug, Copy, Clone)]
pub enum DatumKind<'a> {
    /// Relationship of a coordinate system to the earth.
    Geodetic(&'a dyn GeodeticDatum),
    /// Reference for gravity-related heights or depths.
    Vertical(&'a dyn VerticalDatum),
    /// Origin of a temporal coordinate system.
    Temporal(&'a dyn TemporalDatum),
    /// Relationship of an image coordinate system to an image.
    Image(&'a dyn ImageDatum),
    /// Origin of an engineering coordinate system.
    Engineering(&'a dyn EngineeringDatum),
    /// Datum of no more specific kind.
    Other,
}

/// Relationship of a coordinate system to an object.
pub trait Datum: IdentifiedObject {
    /// Description of the point or points used to anchor the datum.
    fn anchor_point(&self) -> Option<&dyn InternationalString> {
        None
    }

    /// Time after which this datum definition is valid.
    fn realization_epoch(&self) -> Option<SystemTime> {
        None
    }

    /// Area or region in which this datum object is valid.
    fn domain_of_validity(&self) -> Option<&dyn Extent> {
        None
    }

    /// Specific kind of this datum.
    fn kind(&self) -> DatumKind<'_>;
}

/// Datum defining the location and orientation of an ellipsoid that approximates the earth.
pub trait GeodeticDatum: Datum {
    /// Ellipsoid. Mandatory.
    fn ellipsoid(&self) -> Option<&dyn Ellipsoid>;

    /// Prime meridian. Mandatory.
    fn prime_meridian(&self) -> Option<&dyn PrimeMeridian>;
}

/// Textual description of a particular method of linking gravity-related heights to the earth.
pub trait VerticalDatum: Datum {
    /// Type of this vertical datum. Mandatory.
    fn vertical_datum_type(&self) -> Option<VerticalDatumType>;
}

/// Temporal datum. Anchor point and realization epoch are forbidden.
pub trait TemporalDatum: Datum {
    /// Date and time to which temporal coordinates are referenced. Mandatory.
    fn origin(&self) -> Option<SystemTime>;
}

/// Engineering datum defining the origin of an image coordinate reference system.
pub trait ImageDatum: Datum {
    /// How the image grid is associated with the image data attributes. Mandatory.
    fn pixel_in_cell(&self) -> Option<PixelInCell>;
}

/// Datum describing the relationship of a coordinate system to a local point of reference.
pub trait EngineeringDatum: Datum {}
