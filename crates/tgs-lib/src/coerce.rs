//! Narrow coercions from JSON values to entity field types.
//!
//! The TGS API is loose about types: identifiers arrive as numbers or as
//! numeric strings, sometimes padded with whitespace. Integer coercion accepts
//! exactly those shapes; string coercion accepts anything.

use std::num::IntErrorKind;

use serde_json::{Number, Value};

use crate::validation::CoercionError;

/// Coerce `value` to an `i64`.
///
/// Accepts JSON integers, floats without a fractional part, and strings that
/// parse as an integer once surrounding whitespace is trimmed. Strings are
/// parsed as integers only, so `"7.0"` is rejected even though the JSON float
/// `7.0` is accepted.
pub fn coerce_int(field: &'static str, value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Number(number) => number_to_int(field, number),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed.parse::<i64>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    CoercionError::OutOfRange {
                        field,
                        value: trimmed.to_string(),
                    }
                }
                _ => CoercionError::NotAnInteger {
                    field,
                    value: value.to_string(),
                },
            })
        }
        other => Err(CoercionError::NotAnInteger {
            field,
            value: other.to_string(),
        }),
    }
}

fn number_to_int(field: &'static str, number: &Number) -> Result<i64, CoercionError> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    if number.is_u64() {
        return Err(CoercionError::OutOfRange {
            field,
            value: number.to_string(),
        });
    }

    let float = number.as_f64().unwrap_or(f64::NAN);
    if float.fract() != 0.0 || !float.is_finite() {
        return Err(CoercionError::NotAnInteger {
            field,
            value: number.to_string(),
        });
    }
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return Err(CoercionError::OutOfRange {
            field,
            value: number.to_string(),
        });
    }
    Ok(float as i64)
}

/// Coerce `value` to an owned string.
///
/// Strings are taken verbatim (trimming is the caller's job). Any other value
/// is rendered as its JSON text, so `42` becomes `"42"` and `true` becomes
/// `"true"`. This never fails.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
