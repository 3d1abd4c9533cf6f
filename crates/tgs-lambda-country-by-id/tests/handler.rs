use serde_json::json;

use tgs_lambda_country_by_id::{handle_payload, Response};
use tgs_lambda_shared::test_utils::{
    fixture_body, mock_request_id, stub_runtime, unreachable_runtime, StubResponse,
};
use tgs_lambda_shared::{PROBLEM_INVALID_REQUEST, PROBLEM_INVALID_UPSTREAM_DATA};

#[tokio::test]
async fn returns_country_with_organizations() {
    let (runtime, server) = stub_runtime(vec![
        StubResponse::json(fixture_body("country_by_id.json")),
        StubResponse::json(fixture_body("organizations.json")),
    ]);
    let request_id = mock_request_id("country-ok");

    let success = match handle_payload(&runtime, json!({"country_id": " 7 "}), &request_id).await {
        Response::Success(success) => success,
        Response::Error(err) => panic!("unexpected error: {err:?}"),
    };

    assert_eq!(success.data.country.id, 7);
    assert_eq!(success.data.country.name, "Canada");
    assert_eq!(success.data.organizations.len(), 3);
    assert_eq!(
        server.request_lines(),
        vec![
            "GET /api/Association/get-country-by-id/7 HTTP/1.1".to_string(),
            "GET /api/Association/get-current-orgs-list HTTP/1.1".to_string(),
        ]
    );
}

#[tokio::test]
async fn missing_country_id_is_bad_request() {
    // Validation fails before any request is made.
    let runtime = unreachable_runtime();

    for payload in [json!({}), json!({"country_id": null}), json!({"country_id": "x"})] {
        match handle_payload(&runtime, payload.clone(), "req-bad").await {
            Response::Error(problem) => {
                assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST, "{payload}");
                assert_eq!(problem.status, 400);
            }
            Response::Success(_) => panic!("{payload} should be rejected"),
        }
    }
}

#[tokio::test]
async fn each_invalid_country_id_gets_its_own_message() {
    let runtime = unreachable_runtime();
    let cases = [
        (json!({}), "The 'country_id' field is required"),
        (json!({"country_id": 0}), "The 'country_id' field must be a positive integer"),
        (json!({"country_id": "7.5"}), "The 'country_id' field must be an integer"),
    ];

    for (payload, expected) in cases {
        match handle_payload(&runtime, payload.clone(), "req-id").await {
            Response::Error(problem) => {
                let detail = problem.detail.unwrap_or_default();
                assert!(detail.starts_with(expected), "{payload}: {detail}");
            }
            Response::Success(_) => panic!("{payload} should be rejected"),
        }
    }
}

#[tokio::test]
async fn non_object_payload_is_bad_request() {
    let runtime = unreachable_runtime();

    match handle_payload(&runtime, json!("7"), "req-shape").await {
        Response::Error(problem) => {
            assert_eq!(problem.status, 400);
            assert!(problem.detail.unwrap().starts_with("Invalid request"));
        }
        Response::Success(_) => panic!("string payload should be rejected"),
    }
}

#[tokio::test]
async fn blank_country_name_is_upstream_problem() {
    let (runtime, _server) = stub_runtime(vec![StubResponse::json(
        r#"{"data":{"countryID":7,"countryName":"   "}}"#,
    )]);

    match handle_payload(&runtime, json!({"country_id": 7}), "req-blank").await {
        Response::Error(problem) => {
            assert_eq!(problem.type_uri, PROBLEM_INVALID_UPSTREAM_DATA);
            assert_eq!(
                problem.detail.as_deref(),
                Some("Data must contain a non-empty 'countryName'")
            );
        }
        Response::Success(_) => panic!("blank name should be rejected"),
    }
}
