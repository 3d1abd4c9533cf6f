//! Request types and validation for Lambda endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tgs_lib::coerce_int;

use crate::ProblemDetails;

/// Validation trait for Lambda request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for fetching a single country (and the current organizations).
///
/// `country_id` is kept as raw JSON because callers send both `7` and `"7"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryByIdRequest {
    #[serde(default)]
    pub country_id: Option<Value>,
}

impl CountryByIdRequest {
    pub fn new(country_id: i64) -> Self {
        Self {
            country_id: Some(Value::from(country_id)),
        }
    }

    /// Validate the request and return the country id it carries.
    ///
    /// The id must be present, integral, and positive.
    pub fn validated_id(&self, request_id: &str) -> Result<i64, Box<ProblemDetails>> {
        let raw = match &self.country_id {
            None | Some(Value::Null) => {
                return Err(Box::new(ProblemDetails::bad_request(
                    "The 'country_id' field is required",
                    request_id,
                )))
            }
            Some(raw) => raw,
        };

        let id = coerce_int("country_id", raw).map_err(|e| {
            Box::new(ProblemDetails::bad_request(
                format!("The 'country_id' field must be an integer: {}", e),
                request_id,
            ))
        })?;

        if id <= 0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'country_id' field must be a positive integer",
                request_id,
            )));
        }

        Ok(id)
    }
}

impl Validate for CountryByIdRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        self.validated_id(request_id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> CountryByIdRequest {
        serde_json::from_value(value).expect("request parses")
    }

    #[test]
    fn test_validated_id_accepts_numeric_and_string_ids() {
        assert_eq!(parse(json!({"country_id": 7})).validated_id("req").unwrap(), 7);
        assert_eq!(parse(json!({"country_id": " 7 "})).validated_id("req").unwrap(), 7);
    }

    #[test]
    fn test_validate_agrees_with_validated_id() {
        for payload in [json!({}), json!({"country_id": "x"}), json!({"country_id": -1})] {
            let request = parse(payload.clone());
            let via_trait = request.validate("req").unwrap_err();
            let via_id = request.validated_id("req").unwrap_err();
            assert_eq!(via_trait.detail, via_id.detail, "{payload}");
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(CountryByIdRequest::new(123).validate("test-req").is_ok());
    }

    #[test]
    fn test_validate_missing_country_id() {
        for payload in [json!({}), json!({"country_id": null})] {
            let err = parse(payload).validate("test-req").unwrap_err();
            assert_eq!(err.status, 400);
            assert!(err.detail.as_deref().unwrap().contains("required"));
        }
    }

    #[test]
    fn test_validate_non_numeric_country_id() {
        let err = parse(json!({"country_id": "abc"}))
            .validate("test-req")
            .unwrap_err();
        assert_eq!(err.status, 400);
        assert!(err.detail.as_deref().unwrap().contains("integer"));
    }

    #[test]
    fn test_validate_non_positive_country_id() {
        for id in [0, -3] {
            let err = CountryByIdRequest::new(id).validate("test-req").unwrap_err();
            assert!(err.detail.as_deref().unwrap().contains("positive"));
            assert_eq!(err.instance.as_deref(), Some("test-req"));
        }
    }
}
