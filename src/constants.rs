//! Central constants for nbn-dummy-package
//!
//! Names shared between the binary, logging setup and tests live here.

/// Binary name as installed by cargo
pub const PROGRAM_NAME: &str = "nbn-dummy-package";

/// Environment variable holding a `tracing` filter directive (e.g. `debug`)
pub const LOG_ENV_VAR: &str = "NBN_LOG";

/// Filter used when `NBN_LOG` is unset or invalid.
///
/// Kept at `warn` so a plain run writes nothing to stderr.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Filter forced by `-q/--quiet`, overriding `NBN_LOG`
pub const QUIET_LOG_DIRECTIVE: &str = "error";
