//! Test helpers for nbn-dummy-package integration tests.
//!
//! Runs the compiled binary with a clean logging environment and captures
//! its streams.

use std::process::Command;

/// Captured result of one binary invocation.
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run the binary with the given arguments.
///
/// `NBN_LOG` is removed so ambient developer settings cannot leak log
/// lines into stderr.
pub fn run_bin(args: &[&str]) -> anyhow::Result<RunOutput> {
    run_bin_with_env(args, &[])
}

/// Run the binary with extra environment variables set.
pub fn run_bin_with_env(args: &[&str], env: &[(&str, &str)]) -> anyhow::Result<RunOutput> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nbn-dummy-package"));
    cmd.args(args).env_remove("NBN_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output()?;
    Ok(RunOutput {
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
        code: output.status.code(),
    })
}
