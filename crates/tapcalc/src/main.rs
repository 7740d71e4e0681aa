//! tapcalc: four-function calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! tapcalc                          # Run with defaults
//! tapcalc --max-width 30           # Narrower keypad
//! tapcalc --log-file calc.log -v   # Log every key press
//! tapcalc --print-config           # Show effective configuration
//! ```

use std::process::ExitCode;

use clap::Parser;
use tapcalc::{cli::Cli, error::AppResult, logging, tui};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    logging::init_logging(&config)?;
    tui::run(&config)
}
