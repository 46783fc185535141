//! Common behaviour of the validators and the container dispatching objects to them.
//!
//! Validators never modify the validated objects. They return `Ok(())` when the object is valid and stop at the
//! first violated rule otherwise. Whether missing mandatory attributes and present forbidden attributes are violations
//! or only warnings is controlled by the flags of [`ValidatorBase`].

mod container;
mod contract;
pub mod warning;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use geoapi::Describable;
use lazy_static::lazy_static;
use log::{debug, warn};
use parking_lot::RwLock;

pub use container::ValidatorContainer;
pub use contract::{validate_equality_contract, validate_optional_elements};
pub use warning::{Obligation, WarningLevel};

use crate::configuration::keys;
use crate::error::{ConfigurationError, ValidationError, ValidationResult};
use crate::Configuration;

/// Value whose presence can be tested by the obligation checks.
///
/// `None` and empty collections are absent.
pub trait Presence {
    /// Returns `true` if the value is present.
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Obligation checks and policy flags shared by all validators.
///
/// Both flags are `true` by default. They are meant to be set before validation starts; changing them while another
/// thread validates is safe but the other thread may or may not see the new value.
#[derive(Debug)]
pub struct ValidatorBase {
    target: &'static str,
    require_mandatory_attributes: AtomicBool,
    enforce_forbidden_attributes: AtomicBool,
}

impl ValidatorBase {
    /// Creates the base of a validator logging under the given target.
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            require_mandatory_attributes: AtomicBool::new(true),
            enforce_forbidden_attributes: AtomicBool::new(true),
        }
    }

    /// Log target of the validator.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Whether a missing mandatory attribute fails the validation.
    pub fn require_mandatory_attributes(&self) -> bool {
        self.require_mandatory_attributes.load(Ordering::Relaxed)
    }

    /// Sets whether a missing mandatory attribute fails the validation. If `false`, a warning is logged instead.
    pub fn set_require_mandatory_attributes(&self, value: bool) {
        self.require_mandatory_attributes
            .store(value, Ordering::Relaxed);
    }

    /// Whether a present forbidden attribute fails the validation.
    pub fn enforce_forbidden_attributes(&self) -> bool {
        self.enforce_forbidden_attributes.load(Ordering::Relaxed)
    }

    /// Sets whether a present forbidden attribute fails the validation. If `false`, a warning is logged instead.
    pub fn set_enforce_forbidden_attributes(&self, value: bool) {
        self.enforce_forbidden_attributes
            .store(value, Ordering::Relaxed);
    }

    /// Checks that a mandatory value is present.
    pub fn mandatory<V: Presence + ?Sized>(&self, message: &str, value: &V) -> ValidationResult {
        if value.is_present() {
            return Ok(());
        }

        if self.require_mandatory_attributes() {
            return Err(ValidationError::assertion(message));
        }

        self.report(message, Obligation::Mandatory);
        Ok(())
    }

    /// Checks that a forbidden value is absent.
    pub fn forbidden<V: Presence + ?Sized>(&self, message: &str, value: &V) -> ValidationResult {
        if !value.is_present() {
            return Ok(());
        }

        if self.enforce_forbidden_attributes() {
            return Err(ValidationError::assertion(message));
        }

        self.report(message, Obligation::Forbidden);
        Ok(())
    }

    /// Checks a value that is mandatory if `condition` is `true` and forbidden otherwise.
    pub fn conditional<V: Presence + ?Sized>(
        &self,
        message: &str,
        value: &V,
        condition: bool,
    ) -> ValidationResult {
        if condition {
            self.mandatory(message, value)
        } else {
            self.forbidden(message, value)
        }
    }

    fn report(&self, message: &str, obligation: Obligation) {
        match warning::record(self.target, message, obligation) {
            WarningLevel::First => warn!(target: self.target, "{message}"),
            WarningLevel::Repeated => debug!(target: self.target, "{message}"),
        }
    }
}

lazy_static! {
    static ref DEFAULT: RwLock<Arc<ValidatorContainer>> =
        RwLock::new(Arc::new(ValidatorContainer::default()));
}

/// Access to the process-wide default [`ValidatorContainer`].
pub struct Validators;

impl Validators {
    /// Current default container.
    pub fn default_container() -> Arc<ValidatorContainer> {
        DEFAULT.read().clone()
    }

    /// Replaces the default container and returns the previous one.
    pub fn set_default(container: Arc<ValidatorContainer>) -> Arc<ValidatorContainer> {
        std::mem::replace(&mut *DEFAULT.write(), container)
    }

    /// Container stored in the configuration, or the default one.
    pub fn from_configuration(
        configuration: &Configuration,
    ) -> Result<Arc<ValidatorContainer>, ConfigurationError> {
        Ok(configuration
            .get(&keys::VALIDATORS)?
            .cloned()
            .unwrap_or_else(Self::default_container))
    }

    /// Validates the object with the default container.
    pub fn dispatch(object: &dyn Describable) -> ValidationResult {
        Self::default_container().dispatch(object)
    }
}
