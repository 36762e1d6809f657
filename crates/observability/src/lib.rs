//! Tracing setup shared by binaries and integration tests.

use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber. Filtering comes from `RUST_LOG`,
/// defaulting to `info`. Safe to call more than once; only the first call
/// installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init();
}
