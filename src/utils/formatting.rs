//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pads to `width` terminal columns (not bytes, not chars).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// `left/limit min` as shown in the remaining-minutes summary.
pub fn left_of_limit(left: u32, limit: u32) -> String {
    format!("{left}/{limit} min")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(145, true, true), "+02:25");
        assert_eq!(mins2readable(-70, true, false), "-01h 10m");
        assert_eq!(mins2readable(0, true, true), "00:00");
    }

    #[test]
    fn pads_wide_text() {
        assert_eq!(pad_right("Ёж", 4), "Ёж  ");
    }
}
