//! In-memory implementations of the geoapi traits used by unit tests and doc-tests.
#![allow(missing_docs)]

mod metadata;
mod referencing;

pub use logging::{captured_logs, install_capture_logger};
pub use metadata::*;
pub use names::*;
pub use referencing::*;

/// Moves the value to the heap for the rest of the process.
pub fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}
