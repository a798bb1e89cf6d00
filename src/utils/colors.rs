/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Minutes still available:
/// 0 → red
/// below a quarter of the limit → yellow
/// otherwise → green
pub fn color_for_left(left: u32, limit: u32) -> &'static str {
    if limit == 0 {
        GREY
    } else if left == 0 {
        RED
    } else if left.saturating_mul(4) < limit {
        YELLOW
    } else {
        GREEN
    }
}

/// Returns GREY when the field is empty and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_colors() {
        assert_eq!(color_for_left(0, 30), RED);
        assert_eq!(color_for_left(5, 30), YELLOW);
        assert_eq!(color_for_left(20, 30), GREEN);
        assert_eq!(color_for_left(0, 0), GREY);
    }

    #[test]
    fn optional_field_color() {
        assert_eq!(color_for_optional_field(Some("09:00")), RESET);
        assert_eq!(color_for_optional_field(Some("  ")), GREY);
        assert_eq!(color_for_optional_field::<&str>(None), GREY);
    }
}
