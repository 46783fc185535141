use std::fmt::{Display, Formatter};

/// How a compared value was produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalculationType {
    /// Value copied without transformation.
    Identity,
    /// Value computed by a forward transform.
    DirectTransform,
    /// Value computed by an inverse transform.
    InverseTransform,
    /// Value computed by a transform derivative.
    TransformDerivative,
}

impl CalculationType {
    /// All calculation types in declaration order.
    pub const ALL: [CalculationType; 4] = [
        CalculationType::Identity,
        CalculationType::DirectTransform,
        CalculationType::InverseTransform,
        CalculationType::TransformDerivative,
    ];

    /// Calculation type whose tolerance rules apply to values of this type.
    ///
    /// Derivatives are compared with the rules of the direct transform.
    pub fn tolerance_mode(self) -> CalculationType {
        match self {
            CalculationType::TransformDerivative => CalculationType::DirectTransform,
            other => other,
        }
    }
}

impl Display for CalculationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CalculationType::Identity => "IDENTITY",
            CalculationType::DirectTransform => "DIRECT_TRANSFORM",
            CalculationType::InverseTransform => "INVERSE_TRANSFORM",
            CalculationType::TransformDerivative => "TRANSFORM_DERIVATIVE",
        };
        f.write_str(name)
    }
}
