//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static HM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("HH:MM pattern"));

/// Parses `H:MM` / `HH:MM` (hour 0–23, minute 0–59). Anything else is None.
pub fn parse_hm(t: &str) -> Option<NaiveTime> {
    let caps = HM.captures(t)?;
    let hour = caps[1].parse::<u32>().ok()?;
    let minute = caps[2].parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn minutes_since_midnight(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Minutes from `start` to `end`. Unparsable times or an end before the
/// start give 0.
pub fn duration_minutes(start: &str, end: &str) -> u32 {
    match (parse_hm(start), parse_hm(end)) {
        (Some(s), Some(e)) => minutes_since_midnight(e).saturating_sub(minutes_since_midnight(s)),
        _ => 0,
    }
}

pub fn format_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Current local wall-clock time truncated to the minute.
pub fn now_hm() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_hm(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_hm("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_hm("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_hm("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        for bad in ["24:00", "12:60", "9:5", "", " 09:00", "09:00 ", "ab:cd", "123:00"] {
            assert_eq!(parse_hm(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn duration_is_clamped_to_zero() {
        assert_eq!(duration_minutes("09:00", "09:20"), 20);
        assert_eq!(duration_minutes("09:30", "09:10"), 0);
        assert_eq!(duration_minutes("09:00", ""), 0);
        assert_eq!(duration_minutes("nope", "10:00"), 0);
    }
}
