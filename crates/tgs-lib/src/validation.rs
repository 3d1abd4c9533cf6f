//! Errors raised by the conversion layer.
//!
//! [`ValidationError`] is the only error a converter returns. Its `Display`
//! output is one of a fixed set of messages that callers and tests match on,
//! so the wording here is part of the public contract.

use thiserror::Error;

/// Raised when a raw record cannot be turned into a domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The record itself was absent (JSON `null` or no record at all).
    #[error("Data cannot be None")]
    Absent,

    /// The record was present but was not a JSON object.
    #[error("Data must be a JSON object")]
    NotAnObject,

    /// A required key was missing or explicitly `null`.
    #[error("Data must contain '{field}' key")]
    MissingField { field: &'static str },

    /// A required string field was blank after trimming.
    #[error("Data must contain a non-empty '{field}'")]
    EmptyField { field: &'static str },

    /// Every key was present but a value failed type coercion.
    #[error("{entity} validation failed")]
    Invalid {
        entity: &'static str,
        #[source]
        source: CoercionError,
    },
}

impl ValidationError {
    /// Name of the offending source key, when the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field } | ValidationError::EmptyField { field } => {
                Some(*field)
            }
            ValidationError::Invalid { source, .. } => Some(source.field()),
            ValidationError::Absent | ValidationError::NotAnObject => None,
        }
    }
}

/// Lower-level failure chained under [`ValidationError::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("field '{field}' is not a valid integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("field '{field}' does not fit in a 64-bit integer: {value}")]
    OutOfRange { field: &'static str, value: String },

}

impl CoercionError {
    pub fn field(&self) -> &'static str {
        match self {
            CoercionError::NotAnInteger { field, .. }
            | CoercionError::OutOfRange { field, .. } => *field,
        }
    }
}
