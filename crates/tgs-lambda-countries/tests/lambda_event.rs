//! Drives the full `handler` through a `LambdaEvent`, using the global runtime.
//!
//! Kept in its own test binary because the runtime can only be initialized
//! once per process.

use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;

use tgs_lambda_countries::{handler, Response};
use tgs_lambda_shared::init_runtime_with;
use tgs_lambda_shared::test_utils::{fixture_body, StubResponse, StubServer};
use tgs_lib::ClientConfig;

#[tokio::test]
async fn handler_uses_global_runtime() {
    let server = StubServer::start(vec![StubResponse::json(fixture_body("countries.json"))]);
    let endpoint = server.base_url().to_string();
    init_runtime_with(|| ClientConfig::default().with_endpoint(endpoint))
        .expect("runtime initializes");

    let event = LambdaEvent::new(json!({"source": "aws.events"}), Context::default());
    let response = handler(event).await.expect("handler should succeed");

    let json = serde_json::to_value(&response).expect("response serializes");
    assert!(matches!(response, Response::Success(_)));
    assert_eq!(json["count"], 4);
    assert_eq!(json["countries"][1]["id"], 7);
}
