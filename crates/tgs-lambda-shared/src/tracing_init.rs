//! Tracing initialization for Lambda functions.
//!
//! Configures JSON-formatted tracing output suitable for CloudWatch Logs.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level set by Lambda's advanced logging controls.
const LAMBDA_LOG_LEVEL_ENV: &str = "AWS_LAMBDA_LOG_LEVEL";

/// Initialize tracing with JSON formatting for CloudWatch Logs.
///
/// Call once at the start of `main`, before `lambda_runtime::run()`.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `AWS_LAMBDA_LOG_LEVEL`, otherwise `info`.
///
/// # Example
///
/// ```no_run
/// use tgs_lambda_shared::init_tracing;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     init_tracing();
///     // ... rest of Lambda setup
///     Ok(())
/// }
/// ```
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(fallback_directive(std::env::var(LAMBDA_LOG_LEVEL_ENV).ok()))
    });

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_current_span(false)
        .flatten_event(true);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Map Lambda's log level names onto a tracing filter directive.
///
/// Lambda uses `TRACE`..`FATAL`; tracing has no `fatal`, so it becomes `error`.
fn fallback_directive(lambda_level: Option<String>) -> String {
    match lambda_level
        .map(|level| level.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some(level @ ("trace" | "debug" | "info" | "warn" | "error")) => level.to_string(),
        Some("fatal") => "error".to_string(),
        _ => "info".to_string(),
    }
}
