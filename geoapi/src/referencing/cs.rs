//! Coordinate systems and their axes.

use serde::{Deserialize, Serialize};

use crate::referencing::IdentifiedObject;
use crate::unit::Unit;

/// Direction of positive increments of a coordinate value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AxisDirection {
    /// Increasing ordinates values go North.
    North,
    /// Increasing ordinates values go South.
    South,
    /// Increasing ordinates values go East.
    East,
    /// Increasing ordinates values go West.
    West,
    /// Increasing ordinates values go up.
    Up,
    /// Increasing ordinates values go down.
    Down,
    /// Axis pointing from the Earth's centre to the intersection of the equator and the prime meridian.
    GeocentricX,
    /// Axis pointing from the Earth's centre to the intersection of the equator and the 90°E meridian.
    GeocentricY,
    /// Axis pointing from the Earth's centre to the north pole.
    GeocentricZ,
    /// Time increasing forwards.
    Future,
    /// Time increasing backwards.
    Past,
    /// Grid column index increasing.
    ColumnPositive,
    /// Grid row index increasing.
    RowPositive,
    /// Axis positive to the right of a display.
    DisplayRight,
    /// Axis positive towards the top of a display.
    DisplayUp,
}

/// Meaning of the axis value range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RangeMeaning {
    /// Any value between and including the minimum and maximum.
    Exact,
    /// The axis is continuous with values wrapping around at the minimum and maximum.
    Wraparound,
}

/// Definition of a coordinate system axis.
pub trait CoordinateSystemAxis: IdentifiedObject {
    /// Abbreviation used for this axis. Mandatory.
    fn abbreviation(&self) -> Option<&str>;

    /// Direction of this axis. Mandatory.
    fn direction(&self) -> Option<AxisDirection>;

    /// Unit of measure used for this axis. Mandatory.
    fn unit(&self) -> Option<&Unit>;

    /// Minimum value normally allowed for this axis.
    fn minimum_value(&self) -> f64 {
        f64::NEG_INFINITY
    }

    /// Maximum value normally allowed for this axis.
    fn maximum_value(&self) -> f64 {
        f64::INFINITY
    }

    /// Meaning of the axis value range. Mandatory when the range is bounded.
    fn range_meaning(&self) -> Option<RangeMeaning> {
        None
    }
}

/// Specific kind of a [`CoordinateSystem`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CsKind {
    /// Straight orthogonal axes.
    Cartesian,
    /// Straight axes, not necessarily orthogonal.
    Affine,
    /// Geodetic latitude, longitude and optionally ellipsoidal height.
    Ellipsoidal,
    /// Spherical coordinates.
    Spherical,
    /// Polar coordinates extended by a straight axis.
    Cylindrical,
    /// Two-dimensional polar coordinates.
    Polar,
    /// Single straight axis.
    Linear,
    /// Single vertical axis.
    Vertical,
    /// Single time axis.
    Time,
    /// Two- or three-dimensional system of user defined nature.
    UserDefined,
    /// Coordinate system of no more specific kind.
    Other,
}

/// Set of mathematical rules for specifying how coordinates are to be assigned to points.
pub trait CoordinateSystem: IdentifiedObject {
    /// Number of axes.
    fn dimension(&self) -> usize;

    /// Axis at the given dimension.
    fn axis(&self, dimension: usize) -> Option<&dyn CoordinateSystemAxis>;

    /// Specific kind of this coordinate system.
    fn kind(&self) -> CsKind;
}
