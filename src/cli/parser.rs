use crate::export::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for techpedia
#[derive(Parser)]
#[command(
    name = "techpedia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Knowledge-base helpers: render guide Markdown to safe HTML and track remaining break/lunch minutes",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// Render a Markdown guide to an HTML fragment
    Render {
        /// Markdown file to render
        file: PathBuf,

        /// Write HTML here instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Remaining break/lunch minutes for a day sheet
    Breaks {
        /// Day sheet JSON ({ date?, employees, events })
        file: PathBuf,

        /// Day being looked at (YYYY-MM-DD); defaults to the sheet date, then today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Also list every event with its duration (table format only)
        #[arg(long)]
        events: bool,

        /// Re-read the sheet every poll_ms milliseconds
        #[arg(long)]
        watch: bool,
    },

    /// Create, edit, start or finish an event and rewrite the sheet
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },

    /// Normalize employee limits using the configured defaults
    Limits {
        /// Day sheet JSON
        file: PathBuf,

        /// Save the normalized limits back into the sheet
        #[arg(long)]
        write: bool,
    },
}

#[derive(Subcommand)]
pub enum EventCommand {
    /// Mark an event as started
    Start {
        /// Day sheet JSON
        file: PathBuf,

        /// Position of the event in the sheet's events array
        index: usize,

        /// Time to stamp into an empty start (HH:MM); defaults to now
        #[arg(long, value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Mark an event as finished
    Finish {
        /// Day sheet JSON
        file: PathBuf,

        /// Position of the event in the sheet's events array
        index: usize,

        /// Time to stamp into empty start/end (HH:MM); defaults to now
        #[arg(long, value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Append a new event (a planned break unless told otherwise)
    Add {
        /// Day sheet JSON
        file: PathBuf,

        /// Employee name
        #[arg(long)]
        name: String,

        /// break | lunch (Перерыв | Обед)
        #[arg(long, default_value = "break")]
        kind: String,

        /// planned | started | finished
        #[arg(long)]
        state: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },

    /// Change fields of an existing event; its id is kept
    Edit {
        /// Day sheet JSON
        file: PathBuf,

        /// Position of the event in the sheet's events array
        index: usize,

        #[arg(long)]
        name: Option<String>,

        /// break | lunch (Перерыв | Обед)
        #[arg(long)]
        kind: Option<String>,

        /// planned | started | finished
        #[arg(long)]
        state: Option<String>,

        /// Start time (HH:MM); an empty value clears it
        #[arg(long, value_name = "HH:MM")]
        start: Option<String>,

        /// End time (HH:MM); an empty value clears it
        #[arg(long, value_name = "HH:MM")]
        end: Option<String>,
    },
}
