use anyhow::{Result, anyhow};
use std::env;
use tracing_subscriber::EnvFilter;

/// Log level for the crate, from the `-v` count and GitHub debug logging
#[must_use]
pub const fn level(verbosity: u8, runner_debug: bool) -> &'static str {
    match verbosity {
        0 if runner_debug => "debug",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr, `RUST_LOG` wins over the computed level
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbosity: u8) -> Result<()> {
    // RUNNER_DEBUG=1 is set when a workflow is re-run with debug logging
    let runner_debug = env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tembo_branch={}",
            level(verbosity, runner_debug)
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
