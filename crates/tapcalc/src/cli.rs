//! CLI definition using clap

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, Verbosity, MIN_MAX_WIDTH};
use crate::error::AppResult;

/// tapcalc: a four-function calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Maximum keypad width in columns
    #[arg(long, value_name = "COLS")]
    #[arg(value_parser = clap::value_parser!(u16).range(i64::from(MIN_MAX_WIDTH)..))]
    pub max_width: Option<u16>,

    /// YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Merges defaults, the config file and flags, in that order
    pub fn to_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(max_width) = self.max_width {
            config = config.with_max_width(max_width);
        }
        if self.verbose > 0 || self.quiet {
            config = config.with_verbosity(Verbosity::from_flags(self.verbose, self.quiet));
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }

        config.validate()?;
        Ok(config)
    }
}
