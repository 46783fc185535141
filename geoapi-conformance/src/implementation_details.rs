use std::sync::Arc;

use geoapi::referencing::operation::MathTransform;
use geoapi::util::Factory;
use lazy_static::lazy_static;
use log::debug;
use parking_lot::RwLock;

use crate::configuration::{Configuration, Key};
use crate::error::ConfigurationError;
use crate::tolerance::ToleranceModifier;

/// Extension point through which an implementation describes itself to the harness.
pub trait ImplementationDetails: Send + Sync {
    /// Configuration applying to the given factories, or `None` if the factories do not belong to this
    /// implementation.
    fn configuration(&self, factories: &[&dyn Factory]) -> Option<Configuration>;

    /// Relaxation needed when comparing the results of the given transform.
    fn needs_relaxed_tolerance(&self, _transform: &dyn MathTransform) -> Option<ToleranceModifier> {
        None
    }

    /// Returns `false` if the factory should not be tested.
    fn filter(&self, _factory: &dyn Factory) -> bool {
        true
    }
}

type Providers = Arc<Vec<Arc<dyn ImplementationDetails>>>;

/// Registered [`ImplementationDetails`] providers.
///
/// Queries iterate over a snapshot of the providers without holding a lock, so a provider can register other
/// providers while it is being queried. When that happens the query is run again on the new list. If the list
/// changes during the second run as well, the query fails with [`ConfigurationError::ConcurrentModification`].
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<Providers>,
}

lazy_static! {
    static ref GLOBAL: ProviderRegistry = ProviderRegistry::new();
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    pub fn global() -> &'static ProviderRegistry {
        &GLOBAL
    }

    /// Adds a provider.
    pub fn register(&self, provider: Arc<dyn ImplementationDetails>) {
        let mut providers = self.providers.write();
        let mut updated = Vec::clone(&providers);
        updated.push(provider);
        *providers = Arc::new(updated);
        debug!("Registered implementation details provider ({} in total)", providers.len());
    }

    /// Removes all providers.
    pub fn clear(&self) {
        *self.providers.write() = Arc::default();
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Returns `true` if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tells, for each key, whether the feature is enabled for the given factories.
    ///
    /// A feature is enabled unless a provider configuration stores `false` under its key.
    pub fn enabled_flags(
        &self,
        factories: &[&dyn Factory],
        keys: &[Key<bool>],
    ) -> Result<Vec<bool>, ConfigurationError> {
        self.with_stable_snapshot(|providers| {
            let mut enabled = vec![true; keys.len()];
            let mut remaining = keys.len();
            for provider in providers {
                if remaining == 0 {
                    break;
                }

                let Some(configuration) = provider.configuration(factories) else {
                    continue;
                };

                for (flag, key) in enabled.iter_mut().zip(keys) {
                    if *flag && configuration.get(key)? == Some(&false) {
                        *flag = false;
                        remaining -= 1;
                    }
                }
            }

            Ok(enabled)
        })
    }

    /// Relaxation requested by the providers for comparing results of the transform.
    ///
    /// When several providers request a relaxation, the largest tolerance of all of them is used.
    pub fn tolerance_modifier(
        &self,
        transform: &dyn MathTransform,
    ) -> Result<Option<ToleranceModifier>, ConfigurationError> {
        self.with_stable_snapshot(|providers| {
            Ok(ToleranceModifier::maximum(
                providers
                    .iter()
                    .filter_map(|provider| provider.needs_relaxed_tolerance(transform)),
            ))
        })
    }

    /// Returns `false` if any provider excludes the factory from the tests.
    pub fn filter(&self, factory: &dyn Factory) -> Result<bool, ConfigurationError> {
        self.with_stable_snapshot(|providers| {
            Ok(providers.iter().all(|provider| provider.filter(factory)))
        })
    }

    fn with_stable_snapshot<R>(
        &self,
        query: impl Fn(&[Arc<dyn ImplementationDetails>]) -> Result<R, ConfigurationError>,
    ) -> Result<R, ConfigurationError> {
        for _ in 0..2 {
            let snapshot = self.providers.read().clone();
            let result = query(&snapshot)?;
            if Arc::ptr_eq(&snapshot, &self.providers.read()) {
                return Ok(result);
            }
        }

        Err(ConfigurationError::ConcurrentModification(
            "implementation details providers were registered during the query".into(),
        ))
    }
}
