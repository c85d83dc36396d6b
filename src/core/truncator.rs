//! Copies the lines between two day markers into another file

use std::path::Path;

use super::lines::{append_to, for_each_line};
use super::{DateKey, MarkerPattern, TruncateSummary};
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Append to `output` every line from the `start` marker (inclusive) up to the
/// next `stop` marker (exclusive), or to end of file when `stop` is `None`.
///
/// Each line is checked against the stop marker before the start marker, so a
/// line matching both keeps selection on. A repeated start marker re-arms
/// selection. `output` is always opened for append and created even when no
/// line is selected.
///
/// # Errors
/// Fails if `input` cannot be read or `output` cannot be opened or written.
pub(crate) fn truncate_log(
    input: &Path,
    output: &Path,
    start: &DateKey,
    stop: Option<&DateKey>,
    marker: &str,
) -> Result<TruncateSummary, AppError> {
    let start_marker = MarkerPattern::new(start, marker)?;
    let stop_marker = stop
        .map(|date| MarkerPattern::new(date, marker))
        .transpose()?;

    let mut selected: Vec<u8> = Vec::new();
    let mut lines_written = 0;
    let mut selecting = false;

    let lines_scanned = for_each_line(input, |line| {
        if let Some(stop_marker) = &stop_marker
            && stop_marker.matches(line)
        {
            selecting = false;
        }
        if start_marker.matches(line) {
            selecting = true;
        }
        if selecting {
            selected.extend_from_slice(line);
            lines_written += 1;
        }
    })?;

    append_to(output, &selected)?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] {} -> {}: {} of {} lines",
            input.display(),
            output.display(),
            lines_written,
            lines_scanned
        );
    }

    Ok(TruncateSummary {
        output: output.to_path_buf(),
        start: start.clone(),
        stop: stop.cloned(),
        lines_scanned,
        lines_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_MARKER;
    use std::fs;
    use std::path::PathBuf;

    /// Marker for 2024-01-01 on line 5, marker for 2024-01-02 on line 12.
    const TWO_DAYS: &str = "\
2023-12-31 23:59:50 INFO tail of previous file
2023-12-31 23:59:59 INFO still previous
continuation without date
2023-12-31 23:59:59 WARN last
2024-01-01 00:00:00.001 Main:0x1 [Init] <INFO> INFO New log
2024-01-01 00:00:01 INFO line 6
2024-01-01 00:00:02 INFO line 7
  stack frame line 8
2024-01-01 12:00:00 INFO line 9
2024-01-01 18:00:00 INFO line 10
2024-01-01 23:59:59 INFO line 11
2024-01-02 00:00:00.001 Main:0x1 [Init] <INFO> INFO New log
2024-01-02 00:00:01 INFO line 13
2024-01-02 00:00:02 INFO line 14
";

    fn lines(range: std::ops::RangeInclusive<usize>) -> String {
        TWO_DAYS
            .lines()
            .enumerate()
            .filter(|(i, _)| range.contains(&(i + 1)))
            .map(|(_, l)| format!("{l}\n"))
            .collect()
    }

    fn setup(content: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vertica.log");
        fs::write(&input, content).unwrap();
        let output = dir.path().join("out.log");
        (dir, input, output)
    }

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn range_includes_start_marker_excludes_stop_marker() {
        let (_dir, input, output) = setup(TWO_DAYS);
        let summary = truncate_log(
            &input,
            &output,
            &key("2024-01-01"),
            Some(&key("2024-01-02")),
            DEFAULT_MARKER,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), lines(5..=11));
        assert_eq!(summary.lines_scanned, 14);
        assert_eq!(summary.lines_written, 7);
    }

    #[test]
    fn open_ended_runs_to_end_of_file() {
        let (_dir, input, output) = setup(TWO_DAYS);
        truncate_log(&input, &output, &key("2024-01-02"), None, DEFAULT_MARKER).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), lines(12..=14));
    }

    #[test]
    fn no_marker_creates_empty_output() {
        let (_dir, input, output) = setup(TWO_DAYS);
        let summary =
            truncate_log(&input, &output, &key("2023-12-31"), None, DEFAULT_MARKER).unwrap();
        assert_eq!(summary.lines_written, 0);
        assert!(output.exists());
        assert_eq!(fs::read(&output).unwrap(), b"");
    }

    #[test]
    fn output_is_appended_not_replaced() {
        let (_dir, input, output) = setup(TWO_DAYS);
        fs::write(&output, "existing\n").unwrap();
        truncate_log(&input, &output, &key("2024-01-02"), None, DEFAULT_MARKER).unwrap();
        truncate_log(&input, &output, &key("2024-01-02"), None, DEFAULT_MARKER).unwrap();
        let expected = format!("existing\n{}{}", lines(12..=14), lines(12..=14));
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn stop_equal_to_start_keeps_marker_lines() {
        let (_dir, input, output) = setup(TWO_DAYS);
        truncate_log(
            &input,
            &output,
            &key("2024-01-01"),
            Some(&key("2024-01-01")),
            DEFAULT_MARKER,
        )
        .unwrap();
        // the start marker both stops and restarts selection, which then runs to EOF
        assert_eq!(fs::read_to_string(&output).unwrap(), lines(5..=14));
    }

    #[test]
    fn repeated_start_marker_rearms_selection() {
        let content = "\
2024-01-01 a INFO New log
2024-01-01 b
2024-01-02 c INFO New log
2024-01-02 d
2024-01-01 e INFO New log
2024-01-01 f
";
        let (_dir, input, output) = setup(content);
        truncate_log(
            &input,
            &output,
            &key("2024-01-01"),
            Some(&key("2024-01-02")),
            DEFAULT_MARKER,
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "2024-01-01 a INFO New log\n2024-01-01 b\n2024-01-01 e INFO New log\n2024-01-01 f\n"
        );
    }

    #[test]
    fn bytes_pass_through_unchanged() {
        let content: &[u8] = b"2024-01-01 INFO New log\r\n\xff\xfe raw\nno newline at end";
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vertica.log");
        fs::write(&input, content).unwrap();
        let output = dir.path().join("out.log");

        truncate_log(&input, &output, &key("2024-01-01"), None, DEFAULT_MARKER).unwrap();
        assert_eq!(fs::read(&output).unwrap(), content);
    }

    #[test]
    fn crlf_log_is_cut_at_markers() {
        let (_dir, input, output) = setup(
            "2024-01-01 x INFO New log\r\n\
             2024-01-01 a\r\n\
             2024-01-02 y INFO New log\r\n\
             2024-01-02 b\r\n",
        );
        let summary = truncate_log(
            &input,
            &output,
            &key("2024-01-01"),
            Some(&key("2024-01-02")),
            DEFAULT_MARKER,
        )
        .unwrap();

        assert_eq!(summary.lines_written, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "2024-01-01 x INFO New log\r\n2024-01-01 a\r\n"
        );
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = truncate_log(
            &dir.path().join("absent.log"),
            &dir.path().join("out.log"),
            &key("2024-01-01"),
            None,
            DEFAULT_MARKER,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let (dir, input, _) = setup(TWO_DAYS);
        let output = dir.path().join("no-such-dir").join("out.log");
        let err =
            truncate_log(&input, &output, &key("2024-01-01"), None, DEFAULT_MARKER).unwrap_err();
        assert!(matches!(err, AppError::Io { path, .. } if path == output));
    }
}
