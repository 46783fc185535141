//! Typed map of the features supported by an implementation and of the objects used to test it.

mod key;
pub mod keys;

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

use ahash::AHashMap;

pub use key::{Key, RegisteredKey};

use crate::error::ConfigurationError;

struct Entry {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Set of configuration values, each one stored under a typed [`Key`].
///
/// Implementations fill a configuration to declare the optional features they do not support (see
/// [`unsupported`](Self::unsupported)) and to provide objects such as [`Units`](crate::Units) or a custom
/// [`ValidatorContainer`](crate::ValidatorContainer).
///
/// ```
/// use geoapi_conformance::configuration::keys;
/// use geoapi_conformance::Configuration;
///
/// let mut configuration = Configuration::new();
/// configuration.unsupported(&[keys::IS_DERIVATIVE_SUPPORTED]).unwrap();
///
/// assert_eq!(configuration.get(&keys::IS_DERIVATIVE_SUPPORTED).unwrap(), Some(&false));
/// assert_eq!(configuration.get(&keys::IS_VALIDATION_ENABLED).unwrap(), None);
/// ```
#[derive(Default)]
pub struct Configuration {
    entries: AHashMap<Cow<'static, str>, Entry>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value associated with the key, or `None` if there is none.
    pub fn get<T: 'static>(&self, key: &Key<T>) -> Result<Option<&T>, ConfigurationError> {
        self.get_named(key.name())
    }

    /// Value stored under the given key name, expected to have the type `T`.
    ///
    /// This is used by providers that only know the key name. Fails if the stored value has another type.
    pub fn get_named<T: 'static>(&self, name: &str) -> Result<Option<&T>, ConfigurationError> {
        let Some(entry) = self.entries.get(name) else {
            return Ok(None);
        };

        entry
            .value
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| mismatch::<T>(name, entry))
    }

    /// Associates the value with the key and returns the previous value.
    pub fn put<T: Send + Sync + 'static>(
        &mut self,
        key: &Key<T>,
        value: T,
    ) -> Result<Option<T>, ConfigurationError> {
        let previous = self.remove(key)?;
        self.entries.insert(
            Cow::Owned(key.name().to_string()),
            Entry {
                value: Box::new(value),
                type_name: type_name::<T>(),
            },
        );
        Ok(previous)
    }

    /// Removes the value associated with the key and returns it.
    pub fn remove<T: 'static>(&mut self, key: &Key<T>) -> Result<Option<T>, ConfigurationError> {
        if let Some(entry) = self.entries.get(key.name()) {
            if !entry.value.is::<T>() {
                return Err(mismatch::<T>(key.name(), entry));
            }
        }

        Ok(self
            .entries
            .remove(key.name())
            .and_then(|entry| entry.value.downcast::<T>().ok())
            .map(|value| *value))
    }

    /// Declares the given features as unsupported by storing `false` under each key.
    pub fn unsupported(&mut self, keys: &[Key<bool>]) -> Result<(), ConfigurationError> {
        for key in keys {
            self.put(key, false)?;
        }
        Ok(())
    }

    /// Names of the keys having a value, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|name| name.as_ref())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the configuration has no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn mismatch<T>(name: &str, entry: &Entry) -> ConfigurationError {
    ConfigurationError::TypeMismatch {
        key: name.to_string(),
        expected: type_name::<T>(),
        found: entry.type_name,
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.entries.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_map()
            .entries(names.into_iter().map(|(name, entry)| (name, entry.type_name)))
            .finish()
    }
}
