use std::fmt::Debug;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{ContractViolation, ValidationError, ValidationResult};

/// Checks that the elements of a collection honour the contract between [`PartialEq`] and [`Hash`].
///
/// The checks are, in order:
/// * every element is equal to itself;
/// * equal elements have equal hashes;
/// * equal elements are equal to exactly the same elements of the collection. This catches non-symmetric and
///   non-transitive equality.
#[allow(clippy::eq_op)]
pub fn validate_equality_contract<T: PartialEq + Hash + Debug>(items: &[T]) -> ValidationResult {
    for (index, item) in items.iter().enumerate() {
        if item != item {
            return Err(violation(
                ContractViolation::NotReflexive,
                format!("element {index} ({item:?}) is not equal to itself"),
            ));
        }
    }

    let state = RandomState::new();
    let hashes: Vec<u64> = items.iter().map(|item| state.hash_one(item)).collect();
    let equalities = EqualityMatrix::new(items);

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if !equalities.get(i, j) && !equalities.get(j, i) {
                continue;
            }

            if hashes[i] != hashes[j] {
                return Err(violation(
                    ContractViolation::InconsistentHashCodes,
                    format!(
                        "elements {i} ({:?}) and {j} ({:?}) are equal but have different hashes",
                        items[i], items[j]
                    ),
                ));
            }

            if equalities.row(i) != equalities.row(j) {
                return Err(violation(
                    ContractViolation::InconsistentEquivalence,
                    format!(
                        "elements {i} ({:?}) and {j} ({:?}) are equal but not to the same elements",
                        items[i], items[j]
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Same as [`validate_equality_contract`] for a collection that may contain missing elements.
///
/// A missing element is a violation of its own.
pub fn validate_optional_elements<T: PartialEq + Hash + Debug>(items: &[Option<T>]) -> ValidationResult {
    let mut present = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Some(item) => present.push(item),
            None => {
                return Err(violation(
                    ContractViolation::NullElement,
                    format!("element {index} is missing"),
                ))
            }
        }
    }

    validate_equality_contract(&present)
}

fn violation(violation: ContractViolation, message: String) -> ValidationError {
    ValidationError::EqualityContract { violation, message }
}

/// Bit matrix where bit `(i, j)` is set if `items[i] == items[j]`.
struct EqualityMatrix {
    words_per_row: usize,
    bits: Vec<u64>,
}

impl EqualityMatrix {
    fn new<T: PartialEq>(items: &[T]) -> Self {
        let words_per_row = items.len().div_ceil(64);
        let mut bits = vec![0; words_per_row * items.len()];
        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate() {
                if a == b {
                    bits[i * words_per_row + j / 64] |= 1 << (j % 64);
                }
            }
        }

        Self {
            words_per_row,
            bits,
        }
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.words_per_row + j / 64] & (1 << (j % 64)) != 0
    }

    fn row(&self, i: usize) -> &[u64] {
        &self.bits[i * self.words_per_row..(i + 1) * self.words_per_row]
    }
}
