//! Discovers which days a log covers

use std::collections::BTreeSet;
use std::path::Path;

use super::lines::for_each_line;
use super::{DateFilenameMap, DateKey};
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Scan `log` once and map every distinct line-prefix date to its output file name.
///
/// Lines without a `YYYY-MM-DD` prefix are skipped silently; an empty log gives an empty map.
pub(crate) fn generate_filenames(log: &Path, base_name: &str) -> Result<DateFilenameMap, AppError> {
    let mut dates: BTreeSet<DateKey> = BTreeSet::new();

    let lines = for_each_line(log, |line| {
        if let Some(prefix) = DateKey::prefix_of(line)
            && !dates.contains(prefix)
            && let Ok(key) = DateKey::parse(prefix)
        {
            dates.insert(key);
        }
    })?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] {}: {} lines, {} distinct dates",
            log.display(),
            lines,
            dates.len()
        );
    }

    Ok(dates
        .into_iter()
        .map(|date| {
            let name = date.file_name(base_name);
            (date, name)
        })
        .collect())
}
