use regex::bytes::Regex;

use super::DateKey;
use crate::error::AppError;

/// Matches the line that opens a day: `<date>` at the start, `<marker>` at the end.
#[derive(Debug, Clone)]
pub(crate) struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    pub(crate) fn new(date: &DateKey, marker: &str) -> Result<Self, AppError> {
        // (?-u:.) so lines that are not valid UTF-8 can still match
        let pattern = format!(
            "^{}(?-u:.)*{}$",
            regex::escape(date.as_str()),
            regex::escape(marker)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// The line terminator (`\n` or `\r\n`) is not part of the match.
    pub(crate) fn matches(&self, line: &[u8]) -> bool {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        self.regex.is_match(line)
    }
}
