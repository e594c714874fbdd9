use anyhow::Result;
use clap::Parser;
use nbn_dummy_package::cli::{self, Cli};
use nbn_dummy_package::{info_print, logging, output, warn_print, HelloError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    if let Err(e) = logging::init(cli.quiet) {
        warn_print!("⚠️  Logging disabled: {}", e);
    }

    let stdout = std::io::stdout();
    if let Err(e) = cli::run(&cli, &mut stdout.lock()) {
        if matches!(e, HelloError::Overflow { .. }) {
            info_print!(
                "💡 Hint: both operands and the sum must lie in {}..={}",
                i64::MIN,
                i64::MAX
            );
        }
        return Err(e.into());
    }
    Ok(())
}
