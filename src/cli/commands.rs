//! CLI subcommand definitions

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::app::Action;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Keep the lines from START_DATE's "New log" marker to the end of the file
    Truncate {
        /// Log file to read
        log_file: PathBuf,
        /// First day to keep (YYYY-MM-DD)
        start_date: String,
    },
    /// Split the log into one file per date it contains
    #[command(name = "separate_logs")]
    SeparateLogs {
        /// Log file to read
        log_file: PathBuf,
        /// Accepted for compatibility, not used
        #[arg(hide = true)]
        extra: Option<String>,
    },
}

impl Commands {
    /// Action, log path and optional date to hand to the orchestrator
    pub(crate) fn invocation(&self) -> (Action, &Path, Option<&str>) {
        match self {
            Commands::Truncate {
                log_file,
                start_date,
            } => (Action::Truncate, log_file.as_path(), Some(start_date.as_str())),
            Commands::SeparateLogs { log_file, extra } => {
                (Action::SeparateLogs, log_file.as_path(), extra.as_deref())
            }
        }
    }
}
