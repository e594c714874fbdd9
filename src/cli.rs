//! Command-line interface
//!
//! With no subcommand the program prints the default greeting.

use crate::constants::PROGRAM_NAME;
use crate::error::{HelloError, Result};
use crate::hello::{checked_add, greet};
use crate::output::{render, Outcome};
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME, version, about = "Add numbers and greet people")]
pub struct Cli {
    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress hints, warnings and log output below `error` on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print "Hello, NAME!"
    Greet {
        /// Name to greet (defaults to World)
        name: Option<String>,
    },
    /// Print the sum of two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

/// Evaluate a command without touching any output stream.
pub fn execute(command: Option<&Command>) -> Result<Outcome> {
    match command {
        None => Ok(Outcome::Greeting {
            message: greet(None),
        }),
        Some(Command::Greet { name }) => Ok(Outcome::Greeting {
            message: greet(name.as_deref()),
        }),
        Some(&Command::Add { a, b }) => {
            let sum = checked_add(a, b).ok_or_else(|| HelloError::overflow(a, b))?;
            Ok(Outcome::Sum { a, b, sum })
        }
    }
}

/// Run the parsed command line, writing exactly one result line to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    tracing::debug!(command = ?cli.command, json = cli.json, "dispatching command");

    let outcome = execute(cli.command.as_ref())?;
    let line = render(&outcome, cli.json)?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
