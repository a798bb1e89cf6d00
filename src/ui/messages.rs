//! Status lines for the terminal. Data output (HTML, JSON, CSV, tables)
//! does not go through here.

use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turns ANSI styling of every status line on or off. Set once at startup
/// from the `color` config key.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    if color_enabled() {
        format!("{} {}", colour.bold().paint(icon), msg)
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

/// Warnings go to stderr so they never end up inside piped output.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Section header, e.g. `=== 2025-03-14 ===`
pub fn header<T: fmt::Display>(msg: T) {
    let text = format!("=== {msg} ===");
    if color_enabled() {
        println!("{}", Style::new().bold().fg(Colour::Blue).paint(text));
    } else {
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_without_color() {
        set_color(false);
        assert_eq!(line(Colour::Green, ICON_OK, "saved"), "✅ saved");
        set_color(true);
        assert!(line(Colour::Green, ICON_OK, "saved").contains("\x1b["));
    }
}
