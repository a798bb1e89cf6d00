//! How far back a day sheet may be looked at.

use crate::errors::{AppError, AppResult};
use crate::utils::date::format_date;
use chrono::{Days, NaiveDate};

pub const DEFAULT_MAX_HISTORY_DAYS: u32 = 183;

/// Inclusive `(earliest, latest)` window ending today.
pub fn window(today: NaiveDate, max_days: u32) -> (NaiveDate, NaiveDate) {
    let earliest = today
        .checked_sub_days(Days::new(u64::from(max_days)))
        .unwrap_or(NaiveDate::MIN);
    (earliest, today)
}

pub fn ensure_in_window(date: NaiveDate, today: NaiveDate, max_days: u32) -> AppResult<()> {
    let (earliest, latest) = window(today, max_days);
    if date < earliest || date > latest {
        return Err(AppError::DateOutOfRange {
            date: format_date(date),
            earliest: format_date(earliest),
            latest: format_date(latest),
        });
    }
    Ok(())
}
