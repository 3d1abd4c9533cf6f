//! Lambda runtime initialization.
//!
//! Each Lambda builds its TGS API client once at cold start and keeps it in a
//! process-wide `OnceLock`, so warm invocations reuse the connection pool.
//! Configuration comes from the environment (`TGS_API_ENDPOINT`,
//! `TGS_HTTP_TIMEOUT_SECS`).
//!
//! # Cold-Start Performance
//!
//! Initialization logs `total_init_ms` so slow client construction (TLS root
//! loading, mostly) shows up in CloudWatch.

use std::sync::OnceLock;
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info};

use tgs_lib::{ClientConfig, Error as LibError, TgsClient};

use crate::problem::ProblemDetails;

/// Lazily-initialized Lambda runtime state.
static RUNTIME: OnceLock<Result<LambdaRuntime, InitError>> = OnceLock::new();

/// Error during runtime initialization.
#[derive(Debug, Clone, Error)]
#[error("Lambda initialization failed: {message}")]
pub struct InitError {
    pub message: String,
}

impl From<LibError> for InitError {
    fn from(err: LibError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Initialized Lambda runtime containing the configured API client.
#[derive(Debug)]
pub struct LambdaRuntime {
    config: ClientConfig,
    client: TgsClient,
}

impl LambdaRuntime {
    /// Build a runtime without registering it globally.
    ///
    /// Handlers under test use this to point at a stub server.
    pub fn from_config(config: ClientConfig) -> Result<Self, InitError> {
        let client = TgsClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn client(&self) -> &TgsClient {
        &self.client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Initialize the global runtime from the process environment.
///
/// Safe to call more than once; only the first call does any work and every
/// call returns the same outcome.
pub fn init_runtime() -> Result<&'static LambdaRuntime, InitError> {
    init_runtime_with(ClientConfig::from_env)
}

/// Initialize the global runtime with a configuration supplied by `config`.
///
/// `config` is only invoked on the first call.
pub fn init_runtime_with<F>(config: F) -> Result<&'static LambdaRuntime, InitError>
where
    F: FnOnce() -> ClientConfig,
{
    let result = RUNTIME.get_or_init(|| {
        let start = Instant::now();
        let config = config();

        info!(
            endpoint = %config.endpoint,
            timeout_secs = config.timeout.as_secs(),
            "initializing Lambda runtime"
        );

        let runtime = LambdaRuntime::from_config(config)?;

        info!(
            total_init_ms = start.elapsed().as_millis(),
            "Lambda runtime initialization complete"
        );
        Ok(runtime)
    });

    match result {
        Ok(runtime) => Ok(runtime),
        Err(e) => {
            error!(error = %e, "Lambda runtime initialization failed");
            Err(e.clone())
        }
    }
}

/// Get the initialized runtime.
///
/// Fails if `init_runtime` has not been called or if initialization failed.
pub fn get_runtime() -> Result<&'static LambdaRuntime, InitError> {
    match RUNTIME.get() {
        Some(Ok(runtime)) => Ok(runtime),
        Some(Err(e)) => Err(e.clone()),
        None => Err(InitError {
            message: "runtime not initialized; call init_runtime() first".to_string(),
        }),
    }
}

/// Create a `ProblemDetails` for initialization errors.
pub fn init_error_to_problem(error: &InitError, request_id: &str) -> ProblemDetails {
    ProblemDetails::internal_error(error.message.clone(), request_id)
}
