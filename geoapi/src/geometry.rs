//! Positions, envelopes and the minimal geometry root used by bounding polygons.

use std::fmt::Debug;

use crate::referencing::crs::CoordinateReferenceSystem;

/// Holds the coordinates for a position within some coordinate reference system.
pub trait DirectPosition: Debug {
    /// Number of coordinate values.
    fn dimension(&self) -> usize;

    /// A copy of the coordinate values.
    fn coordinates(&self) -> Vec<f64>;

    /// Coordinate value at the given dimension.
    fn coordinate(&self, dimension: usize) -> f64;

    /// Coordinate reference system of the position. If `None`, the position is part of a larger object which
    /// specifies the reference system.
    fn crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }
}

/// A minimum bounding box or rectangle.
pub trait Envelope: Debug {
    /// Number of dimensions.
    fn dimension(&self) -> usize;

    /// Position with the minimal coordinate values for all dimensions.
    fn lower_corner(&self) -> Option<&dyn DirectPosition>;

    /// Position with the maximal coordinate values for all dimensions.
    fn upper_corner(&self) -> Option<&dyn DirectPosition>;

    /// Minimal coordinate value in the given dimension.
    fn minimum(&self, dimension: usize) -> f64;

    /// Maximal coordinate value in the given dimension.
    fn maximum(&self, dimension: usize) -> f64;

    /// Median coordinate value in the given dimension.
    fn median(&self, dimension: usize) -> f64 {
        (self.minimum(dimension) + self.maximum(dimension)) / 2.0
    }

    /// Extent of coordinate values in the given dimension.
    fn span(&self, dimension: usize) -> f64 {
        self.maximum(dimension) - self.minimum(dimension)
    }

    /// Coordinate reference system of the envelope.
    fn crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }
}

/// Root of geometric objects.
pub trait Geometry: Debug {
    /// Coordinate reference system used for the geometry coordinates.
    fn crs(&self) -> Option<&dyn CoordinateReferenceSystem> {
        None
    }

    /// Minimum bounding box of the geometry.
    fn envelope(&self) -> Option<&dyn Envelope>;
}
