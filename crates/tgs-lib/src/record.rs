//! Access to untyped raw records.
//!
//! A raw record is the JSON object the TGS API returns for a single entity.
//! Lookups treat an explicit `null` the same as an absent key, because the
//! API emits both for "no value".

use serde_json::{Map, Value};

use crate::validation::ValidationError;

/// Untyped record as parsed from the API response body.
pub type RawRecord = Map<String, Value>;

/// Outcome of looking up a single required key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Present(&'a Value),
    Missing,
}

/// Look up `key`, mapping absent keys and `null` values to [`Field::Missing`].
pub fn lookup<'a>(record: &'a RawRecord, key: &str) -> Field<'a> {
    match record.get(key) {
        None | Some(Value::Null) => Field::Missing,
        Some(value) => Field::Present(value),
    }
}

/// Require every key in `keys`, in order.
///
/// Stops at the first missing key and reports only that one, so the error for
/// a given record is deterministic.
pub fn require_fields<'a, const N: usize>(
    record: &'a RawRecord,
    keys: [&'static str; N],
) -> Result<[&'a Value; N], ValidationError> {
    static NULL: Value = Value::Null;

    let mut values: [&'a Value; N] = [&NULL; N];
    for (slot, key) in values.iter_mut().zip(keys) {
        match lookup(record, key) {
            Field::Present(value) => *slot = value,
            Field::Missing => return Err(ValidationError::MissingField { field: key }),
        }
    }
    Ok(values)
}

/// View a JSON value from a `data` array as an optional raw record.
///
/// `null` entries become `None` so the converter reports them as absent
/// input; scalars and arrays are rejected outright.
pub fn record_from_value(value: &Value) -> Result<Option<&RawRecord>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        _ => Err(ValidationError::NotAnObject),
    }
}
