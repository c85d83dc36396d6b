use chrono::{NaiveDate, TimeDelta};

use crate::consts::DATE_FORMAT;
use crate::core::DateKey;
use crate::error::AppError;

fn invalid(input: &str) -> AppError {
    AppError::InvalidDate {
        input: input.to_string(),
    }
}

/// Offset `date` by `days` calendar days, reading and writing it with `format`.
pub(crate) fn shift_date(date: &str, days: i64, format: &str) -> Result<String, AppError> {
    let parsed = NaiveDate::parse_from_str(date, format).map_err(|_| invalid(date))?;
    let shifted = TimeDelta::try_days(days)
        .and_then(|delta| parsed.checked_add_signed(delta))
        .ok_or_else(|| invalid(date))?;
    Ok(shifted.format(format).to_string())
}

/// The calendar day after `date`, regardless of which days the log contains.
pub(crate) fn next_day(date: &DateKey) -> Result<DateKey, AppError> {
    let next = shift_date(date.as_str(), 1, DATE_FORMAT)?;
    DateKey::parse(&next)
}
