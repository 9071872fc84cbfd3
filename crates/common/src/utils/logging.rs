use std::io;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default() {
    init_logging(DEFAULT_FILTER, false);
}

/// Initialize tracing with an explicit fallback filter (used when `RUST_LOG`
/// is unset) and output format. A second call is a no-op.
pub fn init_logging(fallback_filter: &str, json: bool) {
    let builder = fmt()
        .with_env_filter(filter_or(fallback_filter))
        .with_target(false)
        .with_writer(io::stdout);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
