//! Referencing by coordinates (ISO 19111).

pub mod crs;
pub mod cs;
pub mod datum;
pub mod operation;

use std::fmt::Debug;

use crate::metadata::citation::Identifier;
use crate::metadata::extent::Extent;
use crate::parameter::GeneralParameterDescriptor;
use crate::util::{GenericName, InternationalString};

use self::crs::CoordinateReferenceSystem;
use self::cs::{CoordinateSystem, CoordinateSystemAxis};
use self::datum::{Datum, Ellipsoid, PrimeMeridian};
use self::operation::{CoordinateOperation, OperationMethod};

/// Specific family of an [`IdentifiedObject`].
#[derive(Debug, Copy, Clone)]
pub enum IdentifiedKind<'a> {
    /// A coordinate reference system.
    ReferenceSystem(&'a dyn CoordinateReferenceSystem),
    /// A coordinate system.
    CoordinateSystem(&'a dyn CoordinateSystem),
    /// A coordinate system axis.
    Axis(&'a dyn CoordinateSystemAxis),
    /// A datum.
    Datum(&'a dyn Datum),
    /// A prime meridian.
    PrimeMeridian(&'a dyn PrimeMeridian),
    /// An ellipsoid.
    Ellipsoid(&'a dyn Ellipsoid),
    /// A coordinate operation.
    Operation(&'a dyn CoordinateOperation),
    /// An operation method.
    OperationMethod(&'a dyn OperationMethod),
    /// A parameter descriptor or a group of them.
    ParameterDescriptor(&'a dyn GeneralParameterDescriptor),
    /// An object of no more specific family.
    Other,
}

/// Identification and remarks for an object of the referencing model.
pub trait IdentifiedObject: Debug {
    /// Primary name by which this object is identified. Mandatory.
    fn name(&self) -> Option<&dyn Identifier>;

    /// Alternative names by which this object is identified.
    fn alias(&self) -> Vec<&dyn GenericName> {
        Vec::new()
    }

    /// Identifiers which reference elsewhere the object's defining information.
    fn identifiers(&self) -> Vec<&dyn Identifier> {
        Vec::new()
    }

    /// Comments on or information about this object.
    fn remarks(&self) -> Option<&dyn InternationalString> {
        None
    }

    /// Family of this object.
    fn identified_kind(&self) -> IdentifiedKind<'_>;
}

/// Description of a spatial and temporal reference system.
pub trait ReferenceSystem: IdentifiedObject {
    /// Area or region or timeframe in which this reference system is valid.
    fn domain_of_validity(&self) -> Option<&dyn Extent> {
        None
    }

    /// Description of the domain of usage.
    fn scope(&self) -> Option<&dyn InternationalString> {
        None
    }
}
