//! Logging setup.
//!
//! Log lines go to stderr so that command output on stdout stays clean.
//! Precedence: `RUST_LOG`, then the `DEBUG` environment variable (any value
//! forces debug level), then the level given on the command line.

use std::env;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter directive for this crate at `level`, honoring `debug_env`.
#[must_use]
pub fn directive(level: &str, debug_env: bool) -> String {
    let level = if debug_env { "debug" } else { level };
    format!("palette_guide={level}")
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a subscriber is
/// already installed.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive(level, env::var("DEBUG").is_ok()))
            .map_err(|e| anyhow!("Invalid log level '{level}': {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
