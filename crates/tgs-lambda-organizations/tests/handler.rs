use tgs_lambda_organizations::{handle_organizations_request, Response};
use tgs_lambda_shared::test_utils::{fixture_body, mock_request_id, stub_runtime, StubResponse};
use tgs_lambda_shared::{PROBLEM_INVALID_UPSTREAM_DATA, PROBLEM_UPSTREAM_UNAVAILABLE};
use tgs_lib::Organization;

#[tokio::test]
async fn returns_converted_organizations() {
    let (runtime, server) = stub_runtime(vec![StubResponse::json(fixture_body(
        "organizations.json",
    ))]);
    let request_id = mock_request_id("orgs-ok");

    let success = match handle_organizations_request(&runtime, &request_id).await {
        Response::Success(success) => success,
        Response::Error(err) => panic!("unexpected error: {err:?}"),
    };

    assert_eq!(success.data.count, 3);
    assert_eq!(
        success.data.organizations[1],
        Organization {
            id: 12,
            name: "Elite Clubs National League".to_string(),
            season_id: 55,
            season_group_id: 8,
        }
    );
    assert_eq!(success.data.organizations[2].name, "Girls Academy");
    assert_eq!(
        server.request_lines(),
        vec!["GET /api/Association/get-current-orgs-list HTTP/1.1".to_string()]
    );
}

#[tokio::test]
async fn first_missing_key_is_reported() {
    let body = r#"{"data":[{"orgID":1,"orgName":"X","orgSeasonGroupID":3}]}"#;
    let (runtime, _server) = stub_runtime(vec![StubResponse::json(body)]);

    let problem = match handle_organizations_request(&runtime, "req-missing").await {
        Response::Error(problem) => problem,
        Response::Success(_) => panic!("expected a problem"),
    };

    assert_eq!(problem.type_uri, PROBLEM_INVALID_UPSTREAM_DATA);
    assert_eq!(
        problem.detail.as_deref(),
        Some("Data must contain 'orgSeasonID' key")
    );
}

#[tokio::test]
async fn server_error_is_upstream_problem() {
    let (runtime, _server) = stub_runtime(vec![StubResponse::with_status(500, "{}")]);

    let problem = match handle_organizations_request(&runtime, "req-500").await {
        Response::Error(problem) => problem,
        Response::Success(_) => panic!("expected a problem"),
    };

    assert_eq!(problem.type_uri, PROBLEM_UPSTREAM_UNAVAILABLE);
    assert!(problem.detail.unwrap().contains("500"));
}
