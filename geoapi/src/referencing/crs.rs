//! Coordinate reference systems.

use crate::referencing::cs::CoordinateSystem;
use crate::referencing::datum::{
    Datum, EngineeringDatum, GeodeticDatum, ImageDatum, TemporalDatum, VerticalDatum,
};
use crate::referencing::operation::Conversion;
use crate::referencing::ReferenceSystem;

/// Specific kind of a [`CoordinateReferenceSystem`].
#[derive(Debug, Copy, Clone)]
pub enum CrsKind<'a> {
    /// Geographic CRS with an ellipsoidal coordinate system.
    Geographic(&'a dyn GeodeticCrs),
    /// Earth-centred CRS with a cartesian or spherical coordinate system.
    Geocentric(&'a dyn GeodeticCrs),
    /// Map projection of a geographic CRS.
    Projected(&'a dyn ProjectedCrs),
    /// CRS defined by a conversion from another CRS, other than a projection.
    Derived(&'a dyn GeneralDerivedCrs),
    /// Gravity-related heights or depths.
    Vertical(&'a dyn VerticalCrs),
    /// Time.
    Temporal(&'a dyn TemporalCrs),
    /// Image grid.
    Image(&'a dyn ImageCrs),
    /// Local context.
    Engineering(&'a dyn EngineeringCrs),
    /// Combination of two or more independent CRS.
    Compound(&'a dyn CompoundCrs),
    /// CRS of no more specific kind.
    Other,
}

/// Coordinate system related to an object by a datum.
pub trait CoordinateReferenceSystem: ReferenceSystem {
    /// Coordinate system. Mandatory except for compound CRS.
    fn coordinate_system(&self) -> Option<&dyn CoordinateSystem>;

    /// Specific kind of this CRS.
    fn kind(&self) -> CrsKind<'_>;
}

/// CRS consisting of one coordinate system and one datum.
pub trait SingleCrs: CoordinateReferenceSystem {
    /// Datum associated directly or indirectly with this CRS. Mandatory.
    fn datum(&self) -> Option<&dyn Datum>;
}

/// CRS associated with a geodetic datum, either geographic or geocentric.
pub trait GeodeticCrs: SingleCrs {
    /// Geodetic datum. Mandatory.
    fn geodetic_datum(&self) -> Option<&dyn GeodeticDatum>;
}

/// CRS defined by applying a conversion to another CRS.
pub trait GeneralDerivedCrs: SingleCrs {
    /// CRS from which this CRS is derived. Mandatory.
    fn base_crs(&self) -> Option<&dyn CoordinateReferenceSystem>;

    /// Conversion from the base CRS to this CRS. Mandatory.
    ///
    /// The conversion source is the [`base_crs`](Self::base_crs) and its target is `self`.
    fn conversion_from_base(&self) -> Option<&dyn Conversion>;
}

/// 2D CRS used to approximate the shape of the earth on a planar surface.
pub trait ProjectedCrs: GeneralDerivedCrs {
    /// Geographic CRS on which the projection is applied. Mandatory.
    fn base_geographic_crs(&self) -> Option<&dyn GeodeticCrs>;
}

/// 1D CRS used for recording heights or depths.
pub trait VerticalCrs: SingleCrs {
    /// Vertical datum. Mandatory.
    fn vertical_datum(&self) -> Option<&dyn VerticalDatum>;
}

/// 1D CRS used for the recording of time.
pub trait TemporalCrs: SingleCrs {
    /// Temporal datum. Mandatory.
    fn temporal_datum(&self) -> Option<&dyn TemporalDatum>;
}

/// Engineering CRS applied to locations in images.
pub trait ImageCrs: SingleCrs {
    /// Image datum. Mandatory.
    fn image_datum(&self) -> Option<&dyn ImageDatum>;
}

/// Contextually local CRS.
pub trait EngineeringCrs: SingleCrs {
    /// Engineering datum. Mandatory.
    fn engineering_datum(&self) -> Option<&dyn EngineeringDatum>;
}

/// Description of a position through two or more independent CRS.
pub trait CompoundCrs: CoordinateReferenceSystem {
    /// Ordered list of the components. At least two are mandatory.
    fn components(&self) -> Vec<&dyn CoordinateReferenceSystem>;
}
