//! Trait based model of the OGC/ISO interfaces for names (ISO 19103), metadata (ISO 19115) and referencing by
//! coordinates (ISO 19111).
//!
//! The crate only declares the shape of the objects. Implementations live elsewhere and are checked for conformance
//! by the `geoapi-conformance` crate. Every object that can be handed to a validator implements [`Describable`] and
//! lists the [`Role`]s it plays in the ISO type graph, so that validators never need to guess the concrete type.
//!
//! Sub-type relationships of the standard are expressed with `kind()` methods returning small enums
//! (see [`referencing::crs::CrsKind`], [`referencing::datum::DatumKind`] etc). An object implementing several
//! interfaces reports several roles.

pub mod error;
pub mod geometry;
pub mod metadata;
pub mod parameter;
pub mod referencing;
mod role;
pub mod unit;
pub mod util;

pub use error::GeoapiError;
pub use role::{Describable, Role};
pub use unit::{Unit, UnitKind};

/// Returns `true` if both references point to the same object.
///
/// Only the data address is compared, so two trait objects over the same value are the same even if they were
/// created through different traits.
pub fn same<A: ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    std::ptr::addr_eq(a as *const A, b as *const B)
}
