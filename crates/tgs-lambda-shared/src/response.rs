//! Response wrapper for successful Lambda responses.

use serde::{Deserialize, Serialize};

/// Wrapper for successful Lambda responses with content type metadata.
///
/// Mirrors `ProblemDetails`, which also carries a `content_type` field, so
/// callers can branch on one key for both outcomes.
///
/// # Example
///
/// ```
/// use tgs_lambda_shared::LambdaResponse;
/// use tgs_lib::Country;
///
/// let country = Country { id: 7, name: "Canada".to_string() };
/// let response = LambdaResponse::new(country);
/// assert_eq!(response.content_type, "application/json");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LambdaResponse<T> {
    /// The payload; its fields are flattened into the response object.
    #[serde(flatten)]
    pub data: T,

    pub content_type: String,
}

impl<T> LambdaResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for LambdaResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}
