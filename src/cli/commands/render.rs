use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::markdown;
use crate::ui::messages::success;
use std::fs;
use tracing::debug;

/// Handle the `render` command: Markdown file → HTML fragment.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Render { file, out } = cmd {
        let html = markdown::render_file(file)?;
        debug!(file = %file.display(), bytes = html.len(), "rendered markdown");

        match out {
            Some(target) => {
                fs::write(target, format!("{html}\n"))?;
                success(format!("HTML written to {}", target.display()));
            }
            None => println!("{html}"),
        }
    }
    Ok(())
}
