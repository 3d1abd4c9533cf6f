//! AWS Lambda function returning one country and the current organizations.
//!
//! The event carries `{"country_id": <id>}`; the id may be a number or a
//! numeric string. The country comes from
//! `/api/Association/get-country-by-id/{id}` and the organizations from the
//! current-orgs list, both converted before anything is returned.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use tgs_lambda_shared::{
    from_lib_error, get_runtime, init_error_to_problem, init_runtime, init_tracing,
    CountryByIdRequest, LambdaResponse, LambdaRuntime, ProblemDetails,
};
use tgs_lib::{Country, Organization};

/// A country together with the organizations currently listed by the API.
#[derive(Debug, Serialize)]
pub struct CountryResponse {
    pub country: Country,
    pub organizations: Vec<Organization>,
}

/// Lambda response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(LambdaResponse<CountryResponse>),
    Error(ProblemDetails),
}

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();
    init_runtime()?;

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let request_id = event.context.request_id.clone();

    let runtime = match get_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "runtime unavailable");
            return Ok(Response::Error(init_error_to_problem(&e, &request_id)));
        }
    };

    Ok(handle_payload(runtime, event.payload, &request_id).await)
}

/// Parse, validate, and serve a raw event payload.
pub async fn handle_payload(runtime: &LambdaRuntime, payload: Value, request_id: &str) -> Response {
    let request: CountryByIdRequest = match serde_json::from_value(payload) {
        Ok(req) => req,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse request");
            return Response::Error(ProblemDetails::bad_request(
                format!("Invalid request: {}", e),
                request_id,
            ));
        }
    };

    let country_id = match request.validated_id(request_id) {
        Ok(id) => id,
        Err(problem) => return Response::Error(*problem),
    };

    handle_country_request(runtime, country_id, request_id).await
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_country_request(
    runtime: &LambdaRuntime,
    country_id: i64,
    request_id: &str,
) -> Response {
    info!(request_id = %request_id, country_id, "handling country-by-id request");

    let client = runtime.client();

    let country = match client.get_country_by_id(country_id).await {
        Ok(country) => country,
        Err(e) => {
            error!(request_id = %request_id, country_id, error = %e, "failed to retrieve country");
            return Response::Error(from_lib_error(&e, request_id));
        }
    };

    let organizations = match client.get_organizations().await {
        Ok(organizations) => organizations,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to retrieve organizations");
            return Response::Error(from_lib_error(&e, request_id));
        }
    };

    info!(
        request_id = %request_id,
        country = %country.name,
        organization_count = organizations.len(),
        "country retrieved"
    );

    Response::Success(LambdaResponse::new(CountryResponse {
        country,
        organizations,
    }))
}
