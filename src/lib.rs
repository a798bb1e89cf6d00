//! techpedia library root.
//! Exposes the Markdown renderer, the break/lunch aggregator, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod markdown;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::compute_remaining;
pub use markdown::{escape_html, render};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command),
        Commands::Breaks { .. } => cli::commands::breaks::handle(&cli.command, cfg),
        Commands::Event { .. } => cli::commands::event::handle(&cli.command),
        Commands::Limits { .. } => cli::commands::limits::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logger::init_cli_logger(cli.verbose);

    let custom = cli.config.as_deref().map(utils::path::expand_tilde);
    let config_path = Config::resolve_path(custom.as_deref());

    // `init` must work even when the existing file is unreadable.
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    tracing::debug!(path = %config_path.display(), "configuration loaded");
    ui::messages::set_color(cfg.color);

    dispatch(&cli, &cfg, &config_path)
}
