use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_BASE_NAME, DEFAULT_MARKER, DEFAULT_TRUNCATED_NAME};
use crate::core::{DateFilenameMap, DateKey, TruncateSummary, generate_filenames, truncate_log};
use crate::error::AppError;
use crate::utils::{debug_enabled, next_day};

/// What to do with the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Copy from a start date's marker to the end of the file
    Truncate,
    /// One output file per date found in the log
    SeparateLogs,
}

/// Resolved output naming and marker text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) output_dir: PathBuf,
    pub(crate) base_name: String,
    pub(crate) truncated_name: String,
    pub(crate) marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
            truncated_name: DEFAULT_TRUNCATED_NAME.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// Files written by one run, in processing order
#[derive(Debug, Default)]
pub(crate) struct RunReport {
    pub(crate) files: Vec<TruncateSummary>,
}

impl RunReport {
    pub(crate) fn lines_written(&self) -> usize {
        self.files.iter().map(|f| f.lines_written).sum()
    }
}

/// Run `action` against `log`. `date` is the start date for `Truncate` and is
/// ignored by `SeparateLogs`.
pub(crate) fn run(
    action: Action,
    log: &Path,
    date: Option<&str>,
    settings: &Settings,
) -> Result<RunReport, AppError> {
    match action {
        Action::Truncate => handle_truncate(log, date, settings),
        Action::SeparateLogs => handle_separate(log, settings),
    }
}

fn handle_truncate(
    log: &Path,
    date: Option<&str>,
    settings: &Settings,
) -> Result<RunReport, AppError> {
    let start = DateKey::parse(date.ok_or(AppError::MissingStartDate)?)?;
    let output = settings.output_dir.join(&settings.truncated_name);
    let summary = truncate_log(log, &output, &start, None, &settings.marker)?;
    Ok(RunReport {
        files: vec![summary],
    })
}

fn handle_separate(log: &Path, settings: &Settings) -> Result<RunReport, AppError> {
    let filenames = generate_filenames(log, &settings.base_name)?;
    let mut report = RunReport::default();

    for (date, filename) in &filenames {
        let stop = stop_date(date, &filenames);
        if debug_enabled() {
            let until = stop.as_ref().map_or("end of file", DateKey::as_str);
            eprintln!("[DEBUG] Processing {date} until {until} -> {filename}");
        }
        let output = settings.output_dir.join(filename);
        report.files.push(truncate_log(
            log,
            &output,
            date,
            stop.as_ref(),
            &settings.marker,
        )?);
    }

    Ok(report)
}

/// The day after `date`, but only when the log has lines for it. Otherwise the
/// range runs to end of file, even if later days exist.
fn stop_date(date: &DateKey, filenames: &DateFilenameMap) -> Option<DateKey> {
    match next_day(date) {
        Ok(next) => filenames.contains_key(&next).then_some(next),
        Err(e) => {
            if debug_enabled() {
                eprintln!("[DEBUG] {e}; no stop boundary for {date}");
            }
            None
        }
    }
}
