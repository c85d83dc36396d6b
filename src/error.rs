use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("A start date is required to truncate a log")]
    MissingStartDate,

    #[error("Invalid marker pattern: {0}")]
    Marker(#[from] regex::Error),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
