//! Diagnostic logging to stderr.

use anyhow::anyhow;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(debug_assertions)]
const DEFAULT_LEVEL: &str = "debug";
#[cfg(not(debug_assertions))]
const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Fails if one is already installed.
///
/// Callers treat a failure as non-fatal; logging is diagnostic only.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::new(DEFAULT_LEVEL);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
