//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Installs a stderr `tracing` subscriber.
///
/// The filter comes from `HAZARD_RECORD_LOG`, then `RUST_LOG`, then `warn`.
/// Calling this more than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
