//! Test utilities for Lambda handler testing.
//!
//! Handlers take a [`LambdaRuntime`] so tests can bind one to a stub server
//! instead of going through the global runtime.
//!
//! ```ignore
//! use tgs_lambda_shared::test_utils::{fixture_body, mock_request_id, stub_runtime};
//! use tgs_lib::test_helpers::StubResponse;
//!
//! #[tokio::test]
//! async fn test_handler() {
//!     let (runtime, _server) = stub_runtime(vec![StubResponse::json(fixture_body("countries.json"))]);
//!     let request_id = mock_request_id("countries");
//!     // ... call the handler with `&runtime`
//! }
//! ```

pub use tgs_lib::test_helpers::{fixture_json, unused_local_endpoint, StubResponse, StubServer};

use tgs_lib::ClientConfig;

use crate::LambdaRuntime;

/// Fixture file contents as a compact JSON string, ready to serve.
pub fn fixture_body(name: &str) -> String {
    fixture_json(name).to_string()
}

/// Start a stub server with `responses` and a runtime pointed at it.
///
/// Keep the returned server alive for the duration of the test.
pub fn stub_runtime(responses: Vec<StubResponse>) -> (LambdaRuntime, StubServer) {
    let server = StubServer::start(responses);
    let config = ClientConfig::default().with_endpoint(server.base_url());
    let runtime = LambdaRuntime::from_config(config).expect("stub runtime should build");
    (runtime, server)
}

/// Runtime whose endpoint refuses connections.
pub fn unreachable_runtime() -> LambdaRuntime {
    let config = ClientConfig::default().with_endpoint(unused_local_endpoint());
    LambdaRuntime::from_config(config).expect("runtime should build")
}

/// Create a mock request ID for testing.
///
/// Since `lambda_runtime::Context` is non-exhaustive and cannot be directly
/// constructed with a chosen id, tests pass the request ID directly.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_body_is_compact_json() {
        let body = fixture_body("country_by_id.json");
        assert!(body.starts_with("{\"data\":"));
    }

    #[test]
    fn stub_runtime_targets_server() {
        let (runtime, server) = stub_runtime(vec![]);
        assert_eq!(runtime.config().endpoint, server.base_url());
    }

    #[test]
    fn mock_request_id_formats_correctly() {
        assert_eq!(mock_request_id("123"), "test-request-123");
    }
}
