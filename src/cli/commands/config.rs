use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: check_keys,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config || !*check_keys {
            println!("📄 {}\n", path.display());
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check_keys {
            let missing = check::missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file sets every key");
            } else {
                for key in &missing {
                    warning(format!("Missing key '{key}' (default is used)"));
                }
            }
        }
    }
    Ok(())
}
