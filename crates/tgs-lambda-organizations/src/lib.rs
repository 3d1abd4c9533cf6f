//! AWS Lambda function listing the organizations with a current season.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use tgs_lambda_shared::{
    from_lib_error, get_runtime, init_error_to_problem, init_runtime, init_tracing,
    LambdaResponse, LambdaRuntime, ProblemDetails,
};
use tgs_lib::Organization;

/// Organizations returned to the caller.
#[derive(Debug, Serialize)]
pub struct OrganizationsResponse {
    pub count: usize,
    pub organizations: Vec<Organization>,
}

/// Lambda response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(LambdaResponse<OrganizationsResponse>),
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
    info!(request_id = %request_id, event = %event.payload, "handling organizations request");

    let runtime = match get_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "runtime unavailable");
            return Ok(Response::Error(init_error_to_problem(&e, &request_id)));
        }
    };

    Ok(handle_organizations_request(runtime, &request_id).await)
}

pub async fn handle_organizations_request(runtime: &LambdaRuntime, request_id: &str) -> Response {
    match runtime.client().get_organizations().await {
        Ok(organizations) => {
            info!(
                request_id = %request_id,
                count = organizations.len(),
                "organizations converted"
            );
            Response::Success(LambdaResponse::new(OrganizationsResponse {
                count: organizations.len(),
                organizations,
            }))
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to retrieve organizations");
            Response::Error(from_lib_error(&e, request_id))
        }
    }
}
