mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod utils;

use clap::Parser;
use clap::error::ErrorKind;

use cli::Cli;
use config::Config;
use utils::{debug_enabled, set_debug};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Bad usage is not a failure: explain on stdout and stop
            print!("{err}");
            return;
        }
    };

    set_debug(cli.debug);
    let cli = if cli.no_config {
        cli
    } else {
        cli.with_config(Config::load())
    };
    set_debug(cli.debug);

    let settings = cli.settings();
    let (action, log, date) = cli.command.invocation();

    match app::run(action, log, date, &settings) {
        Ok(report) => {
            if debug_enabled() {
                for file in &report.files {
                    let until = file.stop.as_ref().map_or("end of file", |d| d.as_str());
                    eprintln!(
                        "[DEBUG] {} ({} until {until}): {} lines",
                        file.output.display(),
                        file.start,
                        file.lines_written
                    );
                }
                eprintln!(
                    "[DEBUG] Wrote {} lines to {} file(s)",
                    report.lines_written(),
                    report.files.len()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
