//! Tracing setup: structured JSON logs filtered by `VNKEYBERT_LOG`.

use tracing_subscriber::EnvFilter;

use crate::config::defaults;

/// Initialize the global tracing subscriber.
///
/// Respects the `VNKEYBERT_LOG` environment variable for filtering and
/// defaults to `info`. Panics if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string.
///
/// Returns `false` if a global subscriber was already installed, which
/// makes it safe to call from every test.
pub fn try_init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
