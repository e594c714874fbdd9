//! nbn-dummy-package: integer addition and a greeting, plus a small CLI.

pub mod cli;
pub mod constants;
pub mod error;
pub mod hello;
pub mod logging;
pub mod output;

pub use error::{HelloError, Result};
pub use hello::{add, checked_add, greet, DEFAULT_NAME};

#[cfg(test)]
mod tests {
    #[test]
    fn test_no_raw_stdout_calls() {
        // Only `cli::run` writes results, and it does so through an injected
        // writer. Any direct print to stdout would corrupt `--json` output.
        // Every module except this one (which holds the patterns) is scanned.
        let sources = [
            ("main.rs", include_str!("main.rs")),
            ("cli.rs", include_str!("cli.rs")),
            ("constants.rs", include_str!("constants.rs")),
            ("hello.rs", include_str!("hello.rs")),
            ("output.rs", include_str!("output.rs")),
            ("logging.rs", include_str!("logging.rs")),
            ("error.rs", include_str!("error.rs")),
        ];

        let mut violations = Vec::new();
        for (file, src) in sources {
            for (i, line) in src.lines().enumerate() {
                let trimmed = line.trim_start();
                if trimmed.starts_with("//") || trimmed.starts_with('"') {
                    continue;
                }
                let calls_println = line.contains("println!(") && !line.contains("eprintln!(");
                let calls_print = trimmed.starts_with("print!(") || line.contains(" print!(");
                if calls_println || calls_print {
                    violations.push(format!("  {}:{}: {}", file, i + 1, trimmed));
                }
            }
        }

        assert!(
            violations.is_empty(),
            "library modules write to stdout directly:\n{}",
            violations.join("\n")
        );
    }
}
