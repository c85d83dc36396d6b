//! Core data types shared by the extractor, truncator and orchestrator

use regex::bytes::Regex;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::consts::DATE_PREFIX_LEN;
use crate::error::AppError;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date shape regex")
});

/// A calendar day in `YYYY-MM-DD` form.
///
/// Always exactly ten ASCII characters. Lexicographic order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct DateKey(String);

impl DateKey {
    /// Validate a caller-supplied date string.
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        if DATE_SHAPE.is_match(input.as_bytes()) {
            Ok(DateKey(input.to_string()))
        } else {
            Err(AppError::InvalidDate {
                input: input.to_string(),
            })
        }
    }

    /// The date prefix of a raw log line, if its first ten bytes have the date shape.
    /// Shorter lines never match.
    pub(crate) fn prefix_of(line: &[u8]) -> Option<&str> {
        let prefix = line.get(..DATE_PREFIX_LEN)?;
        if !DATE_SHAPE.is_match(prefix) {
            return None;
        }
        std::str::from_utf8(prefix).ok()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Output file name for this day: `vertica.log` + `2023-05-01` -> `vertica.log_2023_05_01`
    pub(crate) fn file_name(&self, base_name: &str) -> String {
        format!("{base_name}_{}", self.0.replace('-', "_"))
    }
}

impl Borrow<str> for DateKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One output file name per distinct day found in a log, oldest first
pub(crate) type DateFilenameMap = BTreeMap<DateKey, String>;

/// Outcome of a single truncator pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TruncateSummary {
    pub(crate) output: PathBuf,
    pub(crate) start: DateKey,
    pub(crate) stop: Option<DateKey>,
    pub(crate) lines_scanned: usize,
    pub(crate) lines_written: usize,
}
