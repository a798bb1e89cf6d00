//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns (unicode-width), so Cyrillic
//! names line up. Cell colouring is applied after padding and never counts
//! toward the width.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.text.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self, use_color: bool) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&super::formatting::pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row) {
                let padded = super::formatting::pad_right(&cell.text, col.width);
                match cell.color {
                    Some(color) if use_color => {
                        out.push_str(&format!("{color}{padded}{}", super::colors::RESET));
                    }
                    _ => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
