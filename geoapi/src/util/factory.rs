use std::fmt::Debug;

use crate::metadata::citation::Citation;

/// Base trait of the factories an implementation hands to the conformance tests.
pub trait Factory: Debug + Send + Sync {
    /// Vendor responsible for creating this factory implementation.
    fn vendor(&self) -> Option<&dyn Citation>;
}
