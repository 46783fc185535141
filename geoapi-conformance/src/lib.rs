//! Conformance harness for implementations of the [`geoapi`] traits.
//!
//! The crate provides three things:
//!
//! * [`validators`](validator) checking that an object graph honours the rules of the ISO standards (mandatory and
//!   forbidden attributes, value ranges, identity relationships between related objects). Validators are grouped in
//!   a [`ValidatorContainer`], which routes any [`Describable`](geoapi::Describable) object to the validators of
//!   every role it plays.
//! * [`tolerance modifiers`](tolerance) and a [`CoordinateComparison`](tolerance::CoordinateComparison) engine used
//!   to compare computed coordinates with expected ones, where tolerances given in metres must be converted to the
//!   units of the compared coordinates.
//! * a typed [`Configuration`] map and the [`ProviderRegistry`] through which implementations declare which features
//!   they support and which tolerance relaxations they need.
//!
//! # Validation policy
//!
//! Every validator can be configured to tolerate missing mandatory attributes or present forbidden attributes. Such
//! violations are then reported through the [`log`] facade instead of failing the validation. Each distinct violation
//! is logged at `warn` level the first time it is seen and at `debug` level afterwards.
//!
//! ```
//! use geoapi_conformance::ValidatorContainer;
//!
//! let container = ValidatorContainer::default();
//! container.set_require_mandatory_attributes(false);
//!
//! let result = container.validate_international_string(Some(&"Greenwich"));
//! assert!(result.is_ok());
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod assertions;
mod calculation_type;
pub mod configuration;
pub mod error;
pub mod geometry;
mod implementation_details;
pub mod metadata;
pub mod referencing;
pub mod tolerance;
pub mod units;
pub mod util;
pub mod validator;

#[cfg(any(test, feature = "_tests"))]
pub mod tests;

pub use calculation_type::CalculationType;
pub use configuration::{Configuration, Key};
pub use error::{ConfigurationError, ValidationError, ValidationResult};
pub use implementation_details::{ImplementationDetails, ProviderRegistry};
pub use tolerance::{CoordinateComparison, ToleranceModifier};
pub use units::Units;
pub use validator::{ValidatorContainer, Validators};
