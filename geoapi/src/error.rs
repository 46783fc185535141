//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeoapiError {
    /// Values in the two units cannot be converted to each other.
    #[error("incompatible units: {from} cannot be converted to {to}")]
    IncompatibleUnits {
        /// Symbol of the source unit.
        from: String,
        /// Symbol of the target unit.
        to: String,
    },
}
