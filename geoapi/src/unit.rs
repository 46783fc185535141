//! Units of measure attached to axes, ellipsoids and parameters.

use serde::{Deserialize, Serialize};

use crate::error::GeoapiError;

/// Quantity measured by a [`Unit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum UnitKind {
    /// Length, system unit is the metre.
    Linear,
    /// Plane angle, system unit is the radian.
    Angular,
    /// Duration, system unit is the second.
    Time,
    /// Dimensionless ratio.
    Scale,
}

/// A unit of measure defined by its ratio to the system unit of the same kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Unit {
    symbol: String,
    kind: UnitKind,
    to_system: f64,
}

impl Unit {
    /// Creates a new unit. `to_system` is the number of system units in one unit of this kind.
    pub fn new(symbol: impl Into<String>, kind: UnitKind, to_system: f64) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            to_system,
        }
    }

    /// Metre.
    pub fn metre() -> Self {
        Self::new("m", UnitKind::Linear, 1.0)
    }

    /// Radian.
    pub fn radian() -> Self {
        Self::new("rad", UnitKind::Angular, 1.0)
    }

    /// Decimal degree.
    pub fn degree() -> Self {
        Self::new("°", UnitKind::Angular, std::f64::consts::PI / 180.0)
    }

    /// Second.
    pub fn second() -> Self {
        Self::new("s", UnitKind::Time, 1.0)
    }

    /// Dimensionless unit.
    pub fn unity() -> Self {
        Self::new("", UnitKind::Scale, 1.0)
    }

    /// Unit symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Measured quantity.
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Number of system units in one unit.
    pub fn to_system(&self) -> f64 {
        self.to_system
    }

    /// Converts `value` from this unit to `target`.
    pub fn convert(&self, value: f64, target: &Unit) -> Result<f64, GeoapiError> {
        if self.kind != target.kind {
            return Err(GeoapiError::IncompatibleUnits {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
            });
        }

        Ok(value * self.to_system / target.to_system)
    }
}
