//! Units of measure used by the validators.

use geoapi::Unit;

use crate::configuration::keys;
use crate::error::ConfigurationError;
use crate::Configuration;

/// Provider of the units needed by the validators.
///
/// Implementations can store their own instances under [`keys::UNITS`] if their unit objects differ from the
/// [`geoapi`] ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Units {
    metre: Unit,
    radian: Unit,
    degree: Unit,
    second: Unit,
    one: Unit,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            metre: Unit::metre(),
            radian: Unit::radian(),
            degree: Unit::degree(),
            second: Unit::second(),
            one: Unit::unity(),
        }
    }
}

impl Units {
    /// Creates a provider with the given units.
    pub fn new(metre: Unit, radian: Unit, degree: Unit, second: Unit, one: Unit) -> Self {
        Self {
            metre,
            radian,
            degree,
            second,
            one,
        }
    }

    /// Units stored in the configuration, or the default ones.
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ConfigurationError> {
        Ok(configuration
            .get(&keys::UNITS)?
            .cloned()
            .unwrap_or_default())
    }

    /// Base unit of length.
    pub fn metre(&self) -> &Unit {
        &self.metre
    }

    /// Base unit of angle.
    pub fn radian(&self) -> &Unit {
        &self.radian
    }

    /// Angular degree.
    pub fn degree(&self) -> &Unit {
        &self.degree
    }

    /// Base unit of time.
    pub fn second(&self) -> &Unit {
        &self.second
    }

    /// Dimensionless unit.
    pub fn one(&self) -> &Unit {
        &self.one
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_units_replace_defaults() {
        let mut configuration = Configuration::new();
        assert_eq!(
            Units::from_configuration(&configuration),
            Ok(Units::default())
        );

        let grad = Unit::new("grad", geoapi::UnitKind::Angular, std::f64::consts::PI / 200.0);
        let units = Units::new(
            Unit::metre(),
            Unit::radian(),
            grad.clone(),
            Unit::second(),
            Unit::unity(),
        );
        configuration
            .put(&keys::UNITS, units.clone())
            .expect("matching type");

        let configured = Units::from_configuration(&configuration).expect("matching type");
        assert_eq!(configured.degree(), &grad);
    }
}
