//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or unparsable: info for
/// everything, with per-request spans from the HTTP layer.
pub const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Build the filter from a raw `RUST_LOG` value, falling back to
/// [`DEFAULT_FILTER`].
pub fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(raw.as_deref()))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
