//! Tolerance modifiers adjust the per-dimension thresholds used when comparing coordinates.
//!
//! Tolerances are usually given in metres. Before comparing geographic coordinates they must be converted to degrees,
//! and before comparing coordinates of large magnitude they may need to be relaxed. A [`ToleranceModifier`] does this
//! adjustment in place, given the expected coordinate and the [`CalculationType`] that produced the compared value.
//!
//! Primitive modifiers are combined with [`ToleranceModifier::concatenate`] and [`ToleranceModifier::maximum`].

mod comparison;

use std::collections::BTreeSet;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use comparison::CoordinateComparison;

use crate::error::ConfigurationError;
use crate::CalculationType;

/// Number of metres in one nautical mile, the length of one minute of arc along a meridian.
pub const NAUTICAL_MILE: f64 = 1852.0;

/// Implementation-specific tolerance policy contributed by a provider.
///
/// Custom modifiers are compared by identity.
pub trait CustomToleranceModifier: Debug + Display + Send + Sync {
    /// Adjusts the tolerances in place.
    fn adjust(&self, tolerances: &mut [f64], coordinate: &[f64], mode: CalculationType);
}

/// Longitude and latitude dimensions of a geographic coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxisPair {
    lambda: usize,
    phi: usize,
}

impl AxisPair {
    /// Dimension of longitude values.
    pub fn lambda(&self) -> usize {
        self.lambda
    }

    /// Dimension of latitude values.
    pub fn phi(&self) -> usize {
        self.phi
    }

    fn new(lambda: usize, phi: usize) -> Result<Self, ConfigurationError> {
        if lambda == phi {
            return Err(ConfigurationError::IllegalArgument(
                "λ and φ dimensions must be different".into(),
            ));
        }

        Ok(Self { lambda, phi })
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn adjust(&self, tolerances: &mut [f64], coordinate: &[f64]) {
        if let Some(tol) = tolerances.get_mut(self.phi) {
            *tol /= NAUTICAL_MILE * 60.0;
        }

        let latitude = coordinate
            .get(self.phi)
            .map_or(f64::NAN, |value| value.abs());
        // cos(90°) is not exactly zero in floating point.
        let cos = if latitude >= 90.0 {
            0.0
        } else {
            latitude.to_radians().cos()
        };
        if let Some(tol) = tolerances.get_mut(self.lambda) {
            if *tol != 0.0 {
                let mut adjusted = *tol / (NAUTICAL_MILE * 60.0 * cos);
                // Also catches NaN.
                if !(adjusted <= 360.0) {
                    adjusted = 360.0;
                }
                *tol = adjusted;
            }
        }
    }

    fn fmt_axes(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..=self.lambda.max(self.phi) {
            let symbol = if i == self.lambda {
                'λ'
            } else if i == self.phi {
                'φ'
            } else {
                '·'
            };
            write!(f, "{symbol},")?;
        }

        f.write_str("…")
    }
}

/// Constant scale factors applied for some calculation types only.
#[derive(Debug, Clone)]
pub struct ScaleFactors {
    types: BTreeSet<CalculationType>,
    factors: Vec<f64>,
}

impl ScaleFactors {
    /// Calculation types for which the factors apply.
    pub fn types(&self) -> &BTreeSet<CalculationType> {
        &self.types
    }

    /// Factors by dimension. Trailing factors equal to 1 are not stored.
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }
}

impl PartialEq for ScaleFactors {
    fn eq(&self, other: &Self) -> bool {
        self.types == other.types
            && self.factors.len() == other.factors.len()
            && self
                .factors
                .iter()
                .zip(&other.factors)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for ScaleFactors {}

impl Hash for ScaleFactors {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.types.hash(state);
        for factor in &self.factors {
            factor.to_bits().hash(state);
        }
    }
}

/// A function adjusting a vector of tolerance thresholds in place.
#[derive(Debug, Clone)]
pub enum ToleranceModifier {
    /// Multiplies each tolerance by the magnitude of the coordinate value when that magnitude is greater than 1.
    Relative,
    /// Converts tolerances from metres to degrees of longitude and latitude.
    Geographic(AxisPair),
    /// Same as [`Geographic`](Self::Geographic), for inverse map projections only.
    Projection(AxisPair),
    /// Multiplies tolerances by constant factors.
    Scale(ScaleFactors),
    /// Keeps, for each dimension, the greatest tolerance computed by any of the modifiers.
    Maximum(Vec<ToleranceModifier>),
    /// Applies the first modifier, then the second one.
    Concatenate(Box<ToleranceModifier>, Box<ToleranceModifier>),
    /// Policy provided by an implementation.
    Custom(Arc<dyn CustomToleranceModifier>),
}

impl ToleranceModifier {
    /// Conversion from metres to degrees for (λ, φ) coordinates.
    pub const GEOGRAPHIC: ToleranceModifier =
        ToleranceModifier::Geographic(AxisPair { lambda: 0, phi: 1 });

    /// Conversion from metres to degrees for (φ, λ) coordinates.
    pub const GEOGRAPHIC_PHI_LAMBDA: ToleranceModifier =
        ToleranceModifier::Geographic(AxisPair { lambda: 1, phi: 0 });

    /// Conversion from metres to degrees of inverse projection results in (λ, φ) order.
    pub const PROJECTION: ToleranceModifier =
        ToleranceModifier::Projection(AxisPair { lambda: 0, phi: 1 });

    /// Conversion from metres to degrees of inverse projection results in (φ, λ) order.
    pub const PROJECTION_FROM_PHI_LAMBDA: ToleranceModifier =
        ToleranceModifier::Projection(AxisPair { lambda: 1, phi: 0 });

    /// Relative scaling for coordinates of magnitude greater than 1.
    pub const RELATIVE: ToleranceModifier = ToleranceModifier::Relative;

    /// Creates a geographic conversion for the given longitude and latitude dimensions.
    pub fn geographic(lambda: usize, phi: usize) -> Result<Self, ConfigurationError> {
        Ok(Self::Geographic(AxisPair::new(lambda, phi)?))
    }

    /// Creates a geographic conversion applied only to inverse projections.
    pub fn projection(lambda: usize, phi: usize) -> Result<Self, ConfigurationError> {
        Ok(Self::Projection(AxisPair::new(lambda, phi)?))
    }

    /// Creates a modifier multiplying the tolerances by the given factors when the calculation type is one of
    /// `types`.
    ///
    /// Returns `None` if `types` is empty or all factors are 1. Factors must be positive or zero.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn scale(
        types: impl IntoIterator<Item = CalculationType>,
        factors: &[f64],
    ) -> Result<Option<Self>, ConfigurationError> {
        let types: BTreeSet<_> = types.into_iter().collect();

        let mut upper = 0;
        for (i, &factor) in factors.iter().enumerate() {
            // Also catches NaN.
            if !(factor >= 0.0) {
                return Err(ConfigurationError::IllegalArgument(format!(
                    "illegal scale: factors[{i}] = {factor}"
                )));
            }
            if factor != 1.0 {
                upper = i + 1;
            }
        }

        if types.is_empty() || upper == 0 {
            return Ok(None);
        }

        Ok(Some(Self::Scale(ScaleFactors {
            types,
            factors: factors[..upper].to_vec(),
        })))
    }

    /// Combines modifiers so that each dimension gets the largest tolerance computed by any of them.
    ///
    /// Returns `None` for an empty list and the modifier itself for a singleton. Nested maximums are flattened.
    pub fn maximum(modifiers: impl IntoIterator<Item = ToleranceModifier>) -> Option<Self> {
        let mut modifiers: Vec<_> = modifiers.into_iter().collect();
        match modifiers.len() {
            0 => None,
            1 => modifiers.pop(),
            _ => {
                let mut expanded = Vec::with_capacity(modifiers.len());
                for modifier in modifiers {
                    match modifier {
                        ToleranceModifier::Maximum(inner) => expanded.extend(inner),
                        other => expanded.push(other),
                    }
                }
                Some(Self::Maximum(expanded))
            }
        }
    }

    /// Applies `first`, then `second`. Missing operands are skipped.
    pub fn concatenate(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        match (first, second) {
            (None, second) => second,
            (first, None) => first,
            (Some(first), Some(second)) => {
                Some(Self::Concatenate(Box::new(first), Box::new(second)))
            }
        }
    }

    /// Adjusts `tolerances` in place for a comparison at `coordinate`.
    ///
    /// Dimensions missing from either slice are left untouched.
    pub fn adjust(&self, tolerances: &mut [f64], coordinate: &[f64], mode: CalculationType) {
        match self {
            ToleranceModifier::Relative => {
                for (tol, value) in tolerances.iter_mut().zip(coordinate) {
                    let scale = value.abs();
                    if scale > 1.0 {
                        *tol *= scale;
                    }
                }
            }
            ToleranceModifier::Geographic(axes) => axes.adjust(tolerances, coordinate),
            ToleranceModifier::Projection(axes) => {
                if mode == CalculationType::InverseTransform {
                    axes.adjust(tolerances, coordinate);
                }
            }
            ToleranceModifier::Scale(scale) => {
                if scale.types.contains(&mode) {
                    for (tol, factor) in tolerances.iter_mut().zip(&scale.factors) {
                        *tol *= factor;
                    }
                }
            }
            ToleranceModifier::Maximum(modifiers) => {
                let original = tolerances.to_vec();
                let mut copy = original.clone();
                for modifier in modifiers {
                    copy.copy_from_slice(&original);
                    modifier.adjust(&mut copy, coordinate, mode);
                    for (tol, candidate) in tolerances.iter_mut().zip(&copy) {
                        if *candidate > *tol {
                            *tol = *candidate;
                        }
                    }
                }
            }
            ToleranceModifier::Concatenate(first, second) => {
                first.adjust(tolerances, coordinate, mode);
                second.adjust(tolerances, coordinate, mode);
            }
            ToleranceModifier::Custom(custom) => custom.adjust(tolerances, coordinate, mode),
        }
    }

    /// Writes the modifier without the `ToleranceModifier.` prefix.
    fn fmt_body(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceModifier::Relative => f.write_str("Relative[…]"),
            ToleranceModifier::Geographic(axes) => {
                f.write_str("Geographic[")?;
                axes.fmt_axes(f)?;
                f.write_str("]")
            }
            ToleranceModifier::Projection(axes) => {
                f.write_str("Projection[")?;
                axes.fmt_axes(f)?;
                f.write_str("]")
            }
            ToleranceModifier::Scale(scale) => {
                f.write_str("Scale[")?;
                for (i, t) in scale.types.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{t}")?;
                }
                f.write_str(":")?;
                for &factor in &scale.factors {
                    if factor == 1.0 {
                        f.write_str("·")?;
                    } else if factor.fract() == 0.0 && factor <= i32::MAX as f64 {
                        write!(f, "×{}", factor as i64)?;
                    } else {
                        write!(f, "×{factor}")?;
                    }
                    f.write_str(",")?;
                }
                f.write_str("…]")
            }
            ToleranceModifier::Maximum(modifiers) => {
                f.write_str("Maximum[")?;
                for (i, modifier) in modifiers.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    modifier.fmt_body(f)?;
                }
                f.write_str("]")
            }
            ToleranceModifier::Concatenate(first, second) => {
                f.write_str("Concatenate[")?;
                first.fmt_body(f)?;
                f.write_str(" → ")?;
                second.fmt_body(f)?;
                f.write_str("]")
            }
            ToleranceModifier::Custom(custom) => write!(f, "{custom}"),
        }
    }
}

impl Display for ToleranceModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let ToleranceModifier::Custom(custom) = self {
            return write!(f, "{custom}");
        }

        f.write_str("ToleranceModifier.")?;
        self.fmt_body(f)
    }
}

impl PartialEq for ToleranceModifier {
    fn eq(&self, other: &Self) -> bool {
        use ToleranceModifier::*;
        match (self, other) {
            (Relative, Relative) => true,
            (Geographic(a), Geographic(b)) => a == b,
            (Projection(a), Projection(b)) => a == b,
            (Scale(a), Scale(b)) => a == b,
            (Maximum(a), Maximum(b)) => a == b,
            (Concatenate(a1, a2), Concatenate(b1, b2)) => a1 == b1 && a2 == b2,
            (Custom(a), Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for ToleranceModifier {}

impl Hash for ToleranceModifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ToleranceModifier::Relative => {}
            ToleranceModifier::Geographic(axes) | ToleranceModifier::Projection(axes) => {
                axes.hash(state)
            }
            ToleranceModifier::Scale(scale) => scale.hash(state),
            ToleranceModifier::Maximum(modifiers) => modifiers.hash(state),
            ToleranceModifier::Concatenate(first, second) => {
                first.hash(state);
                second.hash(state);
            }
            ToleranceModifier::Custom(custom) => {
                (Arc::as_ptr(custom) as *const () as usize).hash(state)
            }
        }
    }
}
