//! Checks used by the validators and available to test suites.
//!
//! Every function returns `Ok(())` if the condition holds and a [`ValidationError`] describing the failure otherwise.
//! The `message` argument describes the checked rule and is put at the beginning of the error message.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use geoapi::metadata::citation::{Citation, Identifier};
use geoapi::referencing::cs::{AxisDirection, CoordinateSystem};
use geoapi::referencing::operation::Matrix;

use crate::error::{ValidationError, ValidationResult};

/// Expected value matching any actual value in [`assert_identifier_equals`] and
/// [`assert_unicode_identifier_equals`].
pub const UNRESTRICTED: &str = "##unrestricted";

fn concat(message: &str, extension: impl Display) -> String {
    let message = message.trim();
    if message.is_empty() {
        extension.to_string()
    } else {
        format!("{message} {extension}")
    }
}

fn fail(message: &str, extension: impl Display) -> ValidationResult {
    Err(ValidationError::assertion(concat(message, extension)))
}

/// Fails if both values are not absent or present together. Returns the values when both are present.
fn both<'a, A: ?Sized, B: ?Sized>(
    message: &str,
    expected: Option<&'a A>,
    actual: Option<&'a B>,
) -> Result<Option<(&'a A, &'a B)>, ValidationError> {
    match (expected, actual) {
        (Some(expected), Some(actual)) => Ok(Some((expected, actual))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ValidationError::assertion(concat(message, "Value is null."))),
        (None, Some(_)) => Err(ValidationError::assertion(concat(message, "Expected null."))),
    }
}

/// Fails if the condition is `false`.
pub fn assert_true(message: &str, condition: bool) -> ValidationResult {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::assertion(message))
    }
}

/// Fails if the condition is `true`.
pub fn assert_false(message: &str, condition: bool) -> ValidationResult {
    assert_true(message, !condition)
}

/// Fails if the values are not equal.
pub fn assert_equals<T: PartialEq + Debug>(message: &str, expected: T, actual: T) -> ValidationResult {
    if expected == actual {
        Ok(())
    } else {
        Err(ValidationError::mismatch(
            message,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Fails if the floating point values differ by more than `tolerance`. Two NaN values are equal, and so are two
/// infinities of the same sign.
pub fn assert_float_equals(message: &str, expected: f64, actual: f64, tolerance: f64) -> ValidationResult {
    if expected == actual || (expected - actual).abs() <= tolerance || (expected.is_nan() && actual.is_nan()) {
        Ok(())
    } else {
        Err(ValidationError::mismatch(message, expected, actual))
    }
}

/// Fails if the two references do not point to the same object.
pub fn assert_same<A: ?Sized, B: ?Sized>(message: &str, expected: &A, actual: &B) -> ValidationResult {
    if geoapi::same(expected, actual) {
        Ok(())
    } else {
        fail(message, "Expected the same instance.")
    }
}

/// Fails if the two references point to the same object.
pub fn assert_not_same<A: ?Sized, B: ?Sized>(message: &str, unexpected: &A, actual: &B) -> ValidationResult {
    if geoapi::same(unexpected, actual) {
        fail(message, "Expected a different instance.")
    } else {
        Ok(())
    }
}

/// Fails if the value is negative.
pub fn assert_positive<T: PartialOrd + Default + Display>(message: &str, value: T) -> ValidationResult {
    if value < T::default() {
        fail(message, format_args!("Value is {value}."))
    } else {
        Ok(())
    }
}

/// Fails if the value is zero or negative.
pub fn assert_strictly_positive<T: PartialOrd + Default + Display>(
    message: &str,
    value: T,
) -> ValidationResult {
    if value <= T::default() {
        fail(message, format_args!("Value is {value}."))
    } else {
        Ok(())
    }
}

/// Fails if `minimum > maximum`. For floating point values a NaN bound fails too.
pub fn assert_valid_range<T: PartialOrd + Display>(message: &str, minimum: T, maximum: T) -> ValidationResult {
    if minimum <= maximum {
        Ok(())
    } else {
        fail(message, format_args!("Range found is [{minimum} … {maximum}]."))
    }
}

/// Same as [`assert_valid_range`], ignoring missing bounds. Bounds that cannot be compared fail.
pub fn assert_valid_optional_range<T: PartialOrd + Display>(
    message: &str,
    minimum: Option<T>,
    maximum: Option<T>,
) -> ValidationResult {
    let (Some(minimum), Some(maximum)) = (minimum, maximum) else {
        return Ok(());
    };

    match minimum.partial_cmp(&maximum) {
        Some(Ordering::Less | Ordering::Equal) => Ok(()),
        Some(Ordering::Greater) => fail(message, format_args!("Range found is [{minimum} … {maximum}].")),
        None => fail(message, format_args!("Bounds {minimum} and {maximum} are not comparable.")),
    }
}

/// Fails if the value is outside the `[minimum … maximum]` range. NaN values pass.
pub fn assert_between<T: PartialOrd + Display>(
    message: &str,
    minimum: T,
    maximum: T,
    value: T,
) -> ValidationResult {
    if value < minimum {
        return fail(message, format_args!("Value {value} is less than {minimum}."));
    }
    if value > maximum {
        return fail(message, format_args!("Value {value} is greater than {maximum}."));
    }
    Ok(())
}

/// Same as [`assert_between`], ignoring missing bounds. A bound that cannot be compared to the value fails.
pub fn assert_between_optional<T: PartialOrd + Display>(
    message: &str,
    minimum: Option<T>,
    maximum: Option<T>,
    value: T,
) -> ValidationResult {
    if let Some(minimum) = minimum {
        match minimum.partial_cmp(&value) {
            Some(Ordering::Greater) => {
                return fail(message, format_args!("Value {value} is less than {minimum}."))
            }
            None => {
                return fail(
                    message,
                    format_args!("Value {value} is not comparable to {minimum}."),
                )
            }
            _ => {}
        }
    }

    if let Some(maximum) = maximum {
        match maximum.partial_cmp(&value) {
            Some(Ordering::Less) => {
                return fail(message, format_args!("Value {value} is greater than {maximum}."))
            }
            None => {
                return fail(
                    message,
                    format_args!("Value {value} is not comparable to {maximum}."),
                )
            }
            _ => {}
        }
    }

    Ok(())
}

/// Fails if the collection does not contain the value.
pub fn assert_contains<T: PartialEq + Debug>(message: &str, collection: &[T], value: &T) -> ValidationResult {
    if collection.contains(value) {
        Ok(())
    } else {
        fail(
            message,
            format_args!(
                "Looked for value \"{value:?}\" in a collection of {} elements.",
                collection.len()
            ),
        )
    }
}

/// Fails if neither the title nor any alternate title of the citation is equal to the expected string.
pub fn assert_any_title_equals(
    message: &str,
    expected: Option<&str>,
    actual: Option<&dyn Citation>,
) -> ValidationResult {
    let Some((expected, actual)) = both(message, expected, actual)? else {
        return Ok(());
    };

    let found = actual
        .title()
        .into_iter()
        .chain(actual.alternate_titles())
        .any(|title| title.to_string() == expected);

    if found {
        Ok(())
    } else {
        fail(
            message,
            format_args!("\"{expected}\" not found in title or alternate titles."),
        )
    }
}

/// Fails if the identifier properties differ from the expected ones. Any expected value equal to [`UNRESTRICTED`] is
/// not checked.
pub fn assert_identifier_equals(
    message: &str,
    authority: Option<&str>,
    code_space: Option<&str>,
    version: Option<&str>,
    code: Option<&str>,
    actual: Option<&dyn Identifier>,
) -> ValidationResult {
    let Some(actual) = actual else {
        return fail(message, "Identifier is null");
    };

    if authority != Some(UNRESTRICTED) {
        assert_any_title_equals(message, authority, actual.authority())?;
    }
    if code_space != Some(UNRESTRICTED) {
        assert_equals(&concat(message, "Wrong code space"), code_space, actual.code_space())?;
    }
    if version != Some(UNRESTRICTED) {
        assert_equals(&concat(message, "Wrong version"), version, actual.version())?;
    }
    if code != Some(UNRESTRICTED) {
        assert_equals(&concat(message, "Wrong code"), code, actual.code())?;
    }

    Ok(())
}

fn is_identifier_char(c: char, part: bool) -> bool {
    if part {
        c.is_alphanumeric() || c == '_'
    } else {
        c.is_alphabetic() || c == '_'
    }
}

/// Compares two identifiers, ignoring the characters that are not valid in an identifier.
///
/// Leading characters that cannot start an identifier are skipped, then characters that cannot be part of an
/// identifier. For example `"WGS 84"` and `"WGS84"` are equal.
pub fn assert_unicode_identifier_equals(
    message: &str,
    expected: Option<&str>,
    actual: Option<&str>,
    ignore_case: bool,
) -> ValidationResult {
    if expected == Some(UNRESTRICTED) {
        return Ok(());
    }
    let Some((expected, actual)) = both(message, expected, actual)? else {
        return Ok(());
    };

    let normalize = |c: char| {
        if ignore_case {
            c.to_lowercase().next().unwrap_or(c)
        } else {
            c
        }
    };

    let mut values = actual.char_indices();
    let mut expected_part = false;
    let mut actual_part = false;
    for (offset, expected_char) in expected.char_indices() {
        if !is_identifier_char(expected_char, expected_part) {
            continue;
        }
        expected_part = true;

        let actual_char = loop {
            match values.next() {
                Some((_, c)) if is_identifier_char(c, actual_part) => break c,
                Some(_) => {}
                None => {
                    return fail(
                        message,
                        format_args!(
                            "Expected \"{expected}\" but got \"{actual}\". Missing part: \"{}\".",
                            &expected[offset..]
                        ),
                    )
                }
            }
        };
        actual_part = true;

        if normalize(actual_char) != normalize(expected_char) {
            return fail(
                message,
                format_args!("Expected \"{expected}\" but got \"{actual}\"."),
            );
        }
    }

    for (offset, c) in values {
        if is_identifier_char(c, actual_part) {
            return fail(
                message,
                format_args!(
                    "Expected \"{expected}\", but found it with an unexpected trailing string: \"{}\".",
                    &actual[offset..]
                ),
            );
        }
    }

    Ok(())
}

/// Fails if the axis directions of the coordinate system differ from the expected ones.
pub fn assert_axis_directions_equal(
    message: &str,
    cs: &dyn CoordinateSystem,
    expected: &[AxisDirection],
) -> ValidationResult {
    assert_equals(
        &concat(message, "Wrong coordinate system dimension."),
        expected.len(),
        cs.dimension(),
    )?;

    for (index, direction) in expected.iter().enumerate() {
        assert_equals(
            &concat(message, format_args!("Wrong axis direction at index {index}.")),
            Some(*direction),
            cs.axis(index).and_then(|axis| axis.direction()),
        )?;
    }

    Ok(())
}

/// Fails if the matrices have different sizes or if an element differs by more than `tolerance`.
pub fn assert_matrix_equals(
    message: &str,
    expected: Option<&dyn Matrix>,
    actual: Option<&dyn Matrix>,
    tolerance: f64,
) -> ValidationResult {
    let Some((expected, actual)) = both(message, expected, actual)? else {
        return Ok(());
    };

    let rows = actual.num_row();
    let columns = actual.num_col();
    assert_equals(&concat(message, "numRow"), expected.num_row(), rows)?;
    assert_equals(&concat(message, "numCol"), expected.num_col(), columns)?;

    for row in 0..rows {
        for column in 0..columns {
            let e = expected.element(row, column);
            let a = actual.element(row, column);
            if !((e - a).abs() <= tolerance) && e.to_bits() != a.to_bits() {
                return fail(
                    message,
                    format_args!("Matrix.element({row}, {column}): expected {e} but got {a}"),
                );
            }
        }
    }

    Ok(())
}
