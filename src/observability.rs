//! Tracing/logging initialization

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process
///
/// `RUST_LOG` overrides the configured level. Safe to call multiple times;
/// later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
