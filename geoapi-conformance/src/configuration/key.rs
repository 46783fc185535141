use std::any::{type_name, TypeId};
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use ahash::AHashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::error::ConfigurationError;

/// Typed name of a configuration entry.
///
/// Two keys are equal if they have the same name. The registry behind [`Key::value_of`] guarantees that a name is
/// never associated with two different value types.
pub struct Key<T> {
    name: Cow<'static, str>,
    value_type: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub(crate) const fn predefined(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value_type: PhantomData,
        }
    }

    /// Name of the key.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: 'static> Key<T> {
    /// Returns the key of the given name, registering it with the type `T` if the name is not known yet.
    ///
    /// Fails if the name is already registered with another value type.
    pub fn value_of(name: impl Into<Cow<'static, str>>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let mut registry = REGISTRY.lock();
        match registry.get(name.as_ref()) {
            Some(registered) if registered.type_id != TypeId::of::<T>() => {
                Err(ConfigurationError::TypeMismatch {
                    key: name.into_owned(),
                    expected: registered.type_name,
                    found: type_name::<T>(),
                })
            }
            Some(_) => Ok(Self {
                name,
                value_type: PhantomData,
            }),
            None => {
                registry.insert(name.clone(), RegisteredKey::of::<T>(name.clone()));
                Ok(Self {
                    name,
                    value_type: PhantomData,
                })
            }
        }
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value_type: PhantomData,
        }
    }
}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Key<T> {}

impl<T> Hash for Key<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> Debug for Key<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key<{}>({})", type_name::<T>(), self.name)
    }
}

/// Name and value type of a key known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredKey {
    name: Cow<'static, str>,
    type_id: TypeId,
    type_name: &'static str,
}

impl RegisteredKey {
    fn of<T: 'static>(name: Cow<'static, str>) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the value type, as returned by [`std::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if values of this key have the type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// All keys registered so far, predefined ones included, sorted by name.
    pub fn values() -> Vec<RegisteredKey> {
        let mut keys: Vec<_> = REGISTRY.lock().values().cloned().collect();
        keys.sort_by(|a, b| a.name.cmp(&b.name));
        keys
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<AHashMap<Cow<'static, str>, RegisteredKey>> = {
        let mut registry = AHashMap::new();
        for key in super::keys::predefined() {
            registry.insert(key.name.clone(), key);
        }
        Mutex::new(registry)
    };
}

pub(super) fn registered<T: 'static>(key: &Key<T>) -> RegisteredKey {
    RegisteredKey::of::<T>(key.name.clone())
}
