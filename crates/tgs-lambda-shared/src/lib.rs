//! Shared infrastructure for TGS AWS Lambda functions.
//!
//! This crate provides common functionality used across all Lambda handlers:
//!
//! - [`LambdaRuntime`]: API client built once per cold start and reused
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`LambdaResponse`]: Wrapper for successful responses with content type
//! - Request types with validation for each Lambda endpoint
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture payloads and runtimes bound to a
//! stub server. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod problem;
mod requests;
mod response;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_INVALID_UPSTREAM_DATA, PROBLEM_UPSTREAM_UNAVAILABLE,
};
pub use requests::{CountryByIdRequest, Validate};
pub use response::LambdaResponse;
pub use runtime::{
    get_runtime, init_error_to_problem, init_runtime, init_runtime_with, InitError, LambdaRuntime,
};
pub use tracing_init::init_tracing;
