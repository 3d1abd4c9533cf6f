//! RFC 9457 Problem Details for Lambda error responses.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use http::StatusCode;
use serde::{Deserialize, Serialize};

use tgs_lib::Error as LibError;

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for upstream records that failed validation.
pub const PROBLEM_INVALID_UPSTREAM_DATA: &str = "/problems/invalid-upstream-data";

/// Problem type URI for transport or envelope failures talking to the TGS API.
pub const PROBLEM_UPSTREAM_UNAVAILABLE: &str = "/problems/upstream-unavailable";

/// Problem type URI for internal errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use tgs_lambda_shared::{ProblemDetails, PROBLEM_INVALID_REQUEST};
/// use http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_INVALID_REQUEST,
///     "Invalid Request",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("The 'country_id' field is required")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request ID of the invocation that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Always "application/problem+json".
    pub content_type: String,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 Bad Request for an invalid event payload.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 502 Bad Gateway for a record the converters rejected.
    pub fn invalid_upstream_data(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_UPSTREAM_DATA,
            "Invalid Upstream Data",
            StatusCode::BAD_GATEWAY,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 502 Bad Gateway for transport, status, or envelope failures.
    pub fn upstream_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_UPSTREAM_UNAVAILABLE,
            "Upstream Unavailable",
            StatusCode::BAD_GATEWAY,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 500 Internal Server Error.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::Validation(err) => {
            ProblemDetails::invalid_upstream_data(err.to_string(), request_id)
        }
        LibError::InvalidEndpoint { .. } => {
            ProblemDetails::internal_error(error.to_string(), request_id)
        }
        LibError::Http(err) if err.is_timeout() => ProblemDetails::upstream_unavailable(
            "Timed out waiting for the TGS API",
            request_id,
        ),
        _ => ProblemDetails::upstream_unavailable(error.to_string(), request_id),
    }
}
