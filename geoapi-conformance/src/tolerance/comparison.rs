use crate::error::{ConfigurationError, ValidationError, ValidationResult};
use crate::tolerance::ToleranceModifier;
use crate::CalculationType;

/// Compares arrays of expected and actual coordinates with per-dimension tolerances.
///
/// Points are stored consecutively in flat arrays, `dimension` values per point. For every point the base tolerances
/// are copied and adjusted by the modifier before comparing the ordinates.
///
/// ```
/// use geoapi_conformance::tolerance::{CoordinateComparison, ToleranceModifier};
/// use geoapi_conformance::CalculationType;
///
/// let comparison = CoordinateComparison::new(2, 1.0)
///     .unwrap()
///     .with_modifier(Some(ToleranceModifier::GEOGRAPHIC))
///     .with_mode(CalculationType::InverseTransform);
///
/// assert!(comparison
///     .assert_equal("Unexpected transform result.", &[10.0, 60.0], &[10.0, 60.000001])
///     .is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateComparison {
    dimension: usize,
    tolerances: Vec<f64>,
    caller_modifier: Option<ToleranceModifier>,
    provider_modifiers: Vec<ToleranceModifier>,
    modifier: Option<ToleranceModifier>,
    mode: CalculationType,
    strict: bool,
}

impl CoordinateComparison {
    /// Creates a comparison of points with the given dimension, using the same tolerance for every dimension.
    pub fn new(dimension: usize, tolerance: f64) -> Result<Self, ConfigurationError> {
        Self::with_tolerances(vec![tolerance; dimension])
    }

    /// Creates a comparison with one tolerance per dimension.
    pub fn with_tolerances(tolerances: Vec<f64>) -> Result<Self, ConfigurationError> {
        if tolerances.is_empty() {
            return Err(ConfigurationError::IllegalArgument(
                "coordinate dimension must be greater than zero".into(),
            ));
        }

        Ok(Self {
            dimension: tolerances.len(),
            tolerances,
            caller_modifier: None,
            provider_modifiers: Vec::new(),
            modifier: None,
            mode: CalculationType::DirectTransform,
            strict: false,
        })
    }

    /// Sets the modifier chosen by the caller.
    pub fn with_modifier(mut self, modifier: Option<ToleranceModifier>) -> Self {
        self.caller_modifier = modifier;
        self.update_modifier();
        self
    }

    /// Adds modifiers contributed by implementation providers.
    ///
    /// All contributed modifiers, including those of previous calls, are combined with a single
    /// [`ToleranceModifier::maximum`] applied after the modifier of the caller.
    pub fn with_provider_modifiers(
        mut self,
        modifiers: impl IntoIterator<Item = ToleranceModifier>,
    ) -> Self {
        self.provider_modifiers.extend(modifiers);
        self.update_modifier();
        self
    }

    fn update_modifier(&mut self) {
        self.modifier = ToleranceModifier::concatenate(
            self.caller_modifier.clone(),
            ToleranceModifier::maximum(self.provider_modifiers.iter().cloned()),
        );
    }

    /// Sets how the actual values were computed.
    pub fn with_mode(mut self, mode: CalculationType) -> Self {
        self.mode = mode;
        self
    }

    /// If `true`, tolerances are ignored and values must be strictly equal.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Effective modifier.
    pub fn modifier(&self) -> Option<&ToleranceModifier> {
        self.modifier.as_ref()
    }

    /// Tolerances used for a point with the given expected coordinates.
    pub fn tolerances_at(&self, expected: &[f64]) -> Vec<f64> {
        let mut tolerances = self.tolerances.clone();
        if let Some(modifier) = &self.modifier {
            modifier.adjust(&mut tolerances, expected, self.mode.tolerance_mode());
        }

        tolerances
    }

    /// Checks that `actual` contains the `expected` points.
    pub fn assert_equal(&self, message: &str, expected: &[f64], actual: &[f64]) -> ValidationResult {
        self.assert_equal_from(message, expected, actual, 0)
    }

    /// Same as [`assert_equal`](Self::assert_equal), adding `reported_index` to the point index in the error
    /// message.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn assert_equal_from(
        &self,
        message: &str,
        expected: &[f64],
        actual: &[f64],
        reported_index: usize,
    ) -> ValidationResult {
        if expected.len() != actual.len() || expected.len() % self.dimension != 0 {
            return Err(ValidationError::mismatch(
                format!("{message} Unexpected number of coordinate values."),
                expected.len(),
                actual.len(),
            ));
        }

        let points = expected
            .chunks_exact(self.dimension)
            .zip(actual.chunks_exact(self.dimension));
        for (index, (expected_point, actual_point)) in points.enumerate() {
            let tolerances = self.tolerances_at(expected_point);
            for (ordinate, ((e, a), tol)) in expected_point
                .iter()
                .zip(actual_point)
                .zip(&tolerances)
                .enumerate()
            {
                let delta = (a - e).abs();
                // Bit equality accepts identical NaN and infinite values.
                if (self.strict || !(delta <= *tol)) && a.to_bits() != e.to_bits() {
                    return Err(ValidationError::assertion(format_failure(
                        message,
                        expected_point,
                        actual_point,
                        index + reported_index,
                        ordinate,
                        delta,
                    )));
                }
            }
        }

        Ok(())
    }
}

fn format_failure(
    message: &str,
    expected: &[f64],
    actual: &[f64],
    index: usize,
    ordinate: usize,
    delta: f64,
) -> String {
    format!(
        "{message}\nDirectPosition{}D[{index}]: Expected ({}) but got ({}).\nThe delta at ordinate {ordinate} is {delta}",
        expected.len(),
        join(expected),
        join(actual)
    )
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
