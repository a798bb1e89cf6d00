//! Output of balance rows and event listings.

mod csv;
mod json;
mod table;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::table::{balance_table, events_table};

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}
