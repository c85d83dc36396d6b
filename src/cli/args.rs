//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::app::Settings;
use crate::config::Config;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "logcut")]
#[command(about = "Truncate or split database logs at their daily \"New log\" markers", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Directory to write output files to (default: current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Prefix for per-date files (default: vertica.log)
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) base_name: Option<String>,

    /// File name written by truncate (default: truncated_vertica.log)
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) truncated_name: Option<String>,

    /// Text that ends the first line of each day (default: "INFO New log")
    #[arg(long, global = true, value_name = "TEXT")]
    pub(crate) marker: Option<String>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub(crate) no_config: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir;
        }
        if self.base_name.is_none() {
            self.base_name = config.base_name;
        }
        if self.truncated_name.is_none() {
            self.truncated_name = config.truncated_name;
        }
        if self.marker.is_none() {
            self.marker = config.marker;
        }
        self
    }

    /// Settings for the run, falling back to defaults for anything unset
    pub(crate) fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            base_name: self.base_name.clone().unwrap_or(defaults.base_name),
            truncated_name: self.truncated_name.clone().unwrap_or(defaults.truncated_name),
            marker: self.marker.clone().unwrap_or(defaults.marker),
        }
    }
}
