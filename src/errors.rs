//! Unified application error type.
//! The pure core (markdown, aggregation) never fails; everything around it
//! (cli, config, sheet files, export) returns AppError so error handling
//! stays consistent.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid event kind: {0} (expected break or lunch)")]
    InvalidKind(String),

    #[error("Invalid event state: {0} (expected planned, started or finished)")]
    InvalidState(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Date {date} is outside the allowed window {earliest} .. {latest}")]
    DateOutOfRange {
        date: String,
        earliest: String,
        latest: String,
    },

    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("Invalid event index: {0} (sheet has {1} events)")]
    InvalidEventIndex(usize, usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
