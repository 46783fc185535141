//! Validators for the basic types of ISO 19103.

mod name;

pub use name::NameValidator;
