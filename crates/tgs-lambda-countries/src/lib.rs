//! AWS Lambda function listing countries.
//!
//! Fetches `/api/Association/get-all-countries`, converts every record, and
//! returns the full list. A single malformed record fails the whole
//! invocation with a 502 problem; records are never skipped.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use tgs_lambda_shared::{
    from_lib_error, get_runtime, init_error_to_problem, init_runtime, init_tracing,
    LambdaResponse, LambdaRuntime, ProblemDetails,
};
use tgs_lib::Country;

/// Countries returned to the caller.
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub count: usize,
    pub countries: Vec<Country>,
}

/// Lambda response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(LambdaResponse<CountriesResponse>),
    Error(ProblemDetails),
}

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();
    init_runtime()?;

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request. The event payload is only logged.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let request_id = event.context.request_id.clone();
    info!(request_id = %request_id, event = %event.payload, "handling countries request");

    let runtime = match get_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "runtime unavailable");
            return Ok(Response::Error(init_error_to_problem(&e, &request_id)));
        }
    };

    Ok(handle_countries_request(runtime, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_countries_request(runtime: &LambdaRuntime, request_id: &str) -> Response {
    let countries = match runtime.client().get_countries().await {
        Ok(countries) => countries,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to retrieve countries");
            return Response::Error(from_lib_error(&e, request_id));
        }
    };

    info!(
        request_id = %request_id,
        count = countries.len(),
        "countries converted"
    );

    Response::Success(LambdaResponse::new(CountriesResponse {
        count: countries.len(),
        countries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_is_flat() {
        let response = Response::Success(LambdaResponse::new(CountriesResponse {
            count: 1,
            countries: vec![Country {
                id: 7,
                name: "Canada".to_string(),
            }],
        }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["content_type"], "application/json");
        assert_eq!(json["count"], 1);
        assert_eq!(json["countries"][0]["name"], "Canada");
    }

    #[test]
    fn test_error_serialization() {
        let response = Response::Error(ProblemDetails::upstream_unavailable("down", "req-1"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], 502);
        assert_eq!(json["content_type"], "application/problem+json");
    }
}
