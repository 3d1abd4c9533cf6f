use tgs_lambda_countries::{handle_countries_request, Response};
use tgs_lambda_shared::test_utils::{
    fixture_body, mock_request_id, stub_runtime, unreachable_runtime, StubResponse,
};
use tgs_lambda_shared::{PROBLEM_INVALID_UPSTREAM_DATA, PROBLEM_UPSTREAM_UNAVAILABLE};

#[tokio::test]
async fn returns_converted_countries() {
    let (runtime, server) = stub_runtime(vec![StubResponse::json(fixture_body("countries.json"))]);
    let request_id = mock_request_id("countries-ok");

    match handle_countries_request(&runtime, &request_id).await {
        Response::Success(success) => {
            assert_eq!(success.data.count, 4);
            let names: Vec<&str> = success
                .data
                .countries
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            assert_eq!(names, ["United States", "Canada", "Mexico", "England"]);
        }
        Response::Error(err) => panic!("unexpected error: {err:?}"),
    }

    assert_eq!(
        server.request_lines(),
        vec!["GET /api/Association/get-all-countries HTTP/1.1".to_string()]
    );
}

#[tokio::test]
async fn malformed_record_fails_whole_invocation() {
    let body = r#"{"data":[{"countryID":1,"countryName":"A"},{"countryID":"bad","countryName":"B"}]}"#;
    let (runtime, _server) = stub_runtime(vec![StubResponse::json(body)]);
    let request_id = mock_request_id("countries-bad");

    match handle_countries_request(&runtime, &request_id).await {
        Response::Error(problem) => {
            assert_eq!(problem.type_uri, PROBLEM_INVALID_UPSTREAM_DATA);
            assert_eq!(problem.status, 502);
            assert_eq!(problem.detail.as_deref(), Some("Country validation failed"));
            assert_eq!(problem.instance.as_deref(), Some(request_id.as_str()));
        }
        Response::Success(_) => panic!("bad record must not be skipped"),
    }
}

#[tokio::test]
async fn missing_data_envelope_is_upstream_problem() {
    let (runtime, _server) = stub_runtime(vec![StubResponse::json(r#"{"items":[]}"#)]);

    match handle_countries_request(&runtime, "req-envelope").await {
        Response::Error(problem) => {
            assert_eq!(problem.type_uri, PROBLEM_UPSTREAM_UNAVAILABLE);
            assert!(problem.detail.unwrap().contains("'data'"));
        }
        Response::Success(_) => panic!("expected an error"),
    }
}

#[tokio::test]
async fn unreachable_api_is_upstream_problem() {
    let runtime = unreachable_runtime();

    match handle_countries_request(&runtime, "req-down").await {
        Response::Error(problem) => assert_eq!(problem.type_uri, PROBLEM_UPSTREAM_UNAVAILABLE),
        Response::Success(_) => panic!("expected an error"),
    }
}
