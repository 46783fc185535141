//! Basic types of ISO 19103: localizable strings, names and name spaces.

mod factory;
mod international_string;
mod name;

pub use factory::Factory;
pub use international_string::InternationalString;
pub use name::{GenericName, LocalName, NameKind, NameSpace, ScopedName};
