use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::AppError;

/// Stream `path` line by line, handing each raw line (terminator included) to `f`.
/// Returns the number of lines read.
pub(crate) fn for_each_line<F>(path: &Path, mut f: F) -> Result<usize, AppError>
where
    F: FnMut(&[u8]),
{
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| AppError::io(path, e))?;
        if read == 0 {
            break;
        }
        count += 1;
        f(&line);
    }

    Ok(count)
}

/// Append `bytes` to `path`, creating it if needed. Existing content is kept.
pub(crate) fn append_to(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;
    file.write_all(bytes).map_err(|e| AppError::io(path, e))?;
    file.flush().map_err(|e| AppError::io(path, e))
}
