use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;
use tracing::debug;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            info(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        debug!(path = %path.display(), "writing default configuration");
        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
