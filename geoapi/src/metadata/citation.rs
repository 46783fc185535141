//! Citations and identifiers.

use std::fmt::Debug;

use crate::util::InternationalString;

/// Standardized resource reference.
pub trait Citation: Debug {
    /// Name by which the cited resource is known. Mandatory.
    fn title(&self) -> Option<&dyn InternationalString>;

    /// Short names or other language names by which the cited information is known.
    fn alternate_titles(&self) -> Vec<&dyn InternationalString> {
        Vec::new()
    }

    /// Version of the cited resource.
    fn edition(&self) -> Option<&dyn InternationalString> {
        None
    }

    /// Values uniquely identifying the cited resource.
    fn identifiers(&self) -> Vec<&dyn Identifier> {
        Vec::new()
    }
}

/// Value uniquely identifying an object within a namespace.
pub trait Identifier: Debug {
    /// Alphanumeric value identifying an instance in the namespace. Mandatory.
    fn code(&self) -> Option<&str>;

    /// Identifier or namespace in which the code is valid.
    fn code_space(&self) -> Option<&str> {
        None
    }

    /// Version identifier for the namespace.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Person or party responsible for maintenance of the namespace.
    fn authority(&self) -> Option<&dyn Citation> {
        None
    }

    /// Natural language description of the meaning of the code value.
    fn description(&self) -> Option<&dyn InternationalString> {
        None
    }
}
