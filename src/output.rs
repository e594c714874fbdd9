//! Output control for quiet mode and JSON output
//!
//! Results go to stdout through [`render`]; everything else goes to stderr
//! and is suppressed in quiet mode.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppresses informational output and warnings on stderr)
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if not in quiet mode (non-macro version)
///
/// Uses stderr so results on stdout stay machine-readable.
pub fn print_info(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a warning to stderr only if not in quiet mode (non-macro version)
pub fn print_warn(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a message only if not in quiet mode
#[macro_export]
macro_rules! info_print {
    ($($arg:tt)*) => {
        $crate::output::print_info(format_args!($($arg)*));
    };
}

/// Print to stderr only if not in quiet mode (for warnings)
#[macro_export]
macro_rules! warn_print {
    ($($arg:tt)*) => {
        $crate::output::print_warn(format_args!($($arg)*));
    };
}

/// Result of a single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Greeting { message: String },
    Sum { a: i64, b: i64, sum: i64 },
}

/// Render an outcome as the line written to stdout (without the newline).
pub fn render(outcome: &Outcome, json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string(outcome);
    }

    Ok(match outcome {
        Outcome::Greeting { message } => message.clone(),
        Outcome::Sum { sum, .. } => sum.to_string(),
    })
}
