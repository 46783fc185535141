//! Error types used by the crate.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Result of a validation step. Validation passes silently or stops at the first failure.
pub type ValidationResult = Result<(), ValidationError>;

/// Conformance failure: the validated object or value violates a rule of the modeled standard.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A condition that should hold does not.
    #[error("{message}")]
    Assertion {
        /// Description of the violated rule.
        message: String,
    },
    /// A value differs from the expected one.
    #[error("{message} Expected <{expected}> but was <{actual}>.")]
    Mismatch {
        /// Description of the violated rule.
        message: String,
        /// Expected value.
        expected: String,
        /// Actual value.
        actual: String,
    },
    /// A collection of objects does not honour the equality contract.
    #[error("{violation}: {message}")]
    EqualityContract {
        /// Kind of violation.
        violation: ContractViolation,
        /// Details about the offending elements.
        message: String,
    },
}

impl ValidationError {
    /// Creates an [`Assertion`](Self::Assertion) error.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    /// Creates a [`Mismatch`](Self::Mismatch) error.
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Display,
        actual: impl Display,
    ) -> Self {
        Self::Mismatch {
            message: message.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Rule of the equality contract broken by a collection of objects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// An element is not equal to itself.
    NotReflexive,
    /// Two equal elements have different hash codes.
    InconsistentHashCodes,
    /// Two equal elements are not equal to the same set of elements.
    InconsistentEquivalence,
    /// The collection contains a missing element.
    NullElement,
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ContractViolation::NotReflexive => "not reflexive",
            ContractViolation::InconsistentHashCodes => "inconsistent hash codes",
            ContractViolation::InconsistentEquivalence => "inconsistent equivalence classes",
            ContractViolation::NullElement => "null element",
        };
        f.write_str(text)
    }
}

/// Programmer error in the way the harness is configured.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    /// A value is stored or requested with a type other than the type of its key.
    #[error("key '{key}' expects values of type {expected}, found {found}")]
    TypeMismatch {
        /// Key name.
        key: String,
        /// Type associated with the key.
        expected: &'static str,
        /// Type of the value or of the requested key.
        found: &'static str,
    },
    /// Invalid construction parameter.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
    /// A registry was modified while being iterated, twice in a row.
    #[error("concurrent modification: {0}")]
    ConcurrentModification(String),
}
