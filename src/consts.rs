/// Date format of day prefixes and marker lines: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of the `YYYY-MM-DD` prefix inspected on every line
pub(crate) const DATE_PREFIX_LEN: usize = 10;

/// Text the engine writes at the end of the first line of each day
pub(crate) const DEFAULT_MARKER: &str = "INFO New log";

/// Prefix of the per-date files written by `separate_logs`
pub(crate) const DEFAULT_BASE_NAME: &str = "vertica.log";

/// Output file written by `truncate`
pub(crate) const DEFAULT_TRUNCATED_NAME: &str = "truncated_vertica.log";
