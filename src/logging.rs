//! Tracing subscriber setup
//!
//! Logs always go to stderr so stdout only ever carries command results.

use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_ENV_VAR, QUIET_LOG_DIRECTIVE};
use crate::error::{HelloError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Build the filter from `NBN_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`].
///
/// In quiet mode `NBN_LOG` is ignored and only errors are logged.
pub fn env_filter(quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new(QUIET_LOG_DIRECTIVE);
    }
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| HelloError::logging(e.to_string()))
}
