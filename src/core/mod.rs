//! Core module - day detection and range extraction over raw log lines

mod extractor;
mod lines;
mod marker;
mod truncator;
mod types;

pub(crate) use extractor::generate_filenames;
pub(crate) use marker::MarkerPattern;
pub(crate) use truncator::truncate_log;
pub(crate) use types::{DateFilenameMap, DateKey, TruncateSummary};
