use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize_limits;
use crate::errors::AppResult;
use crate::models::DaySheet;
use crate::ui::messages::{info, success};
use crate::utils::table::{Cell, Column, Table};
use tracing::debug;

/// Handle the `limits` command: normalize employee limits, optionally save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Limits { file, write } = cmd {
        let mut sheet = DaySheet::load(file)?;
        let normalized = normalize_limits(&sheet.employees, cfg.limit_defaults());
        let dropped = sheet.employees.len() - normalized.len();
        debug!(kept = normalized.len(), dropped, "normalized employee limits");

        let mut table = Table::new(vec![
            Column::new("Name"),
            Column::new("Break limit"),
            Column::new("Lunch limit"),
        ]);
        for e in &normalized {
            table.add_row(vec![
                Cell::plain(e.name.clone()),
                Cell::plain(e.break_limit_minutes.to_string()),
                Cell::plain(e.lunch_limit_minutes.to_string()),
            ]);
        }
        print!("{}", table.render(cfg.color));

        if dropped > 0 {
            info(format!("{dropped} entries without a name dropped"));
        }

        if *write {
            sheet.employees = normalized;
            sheet.save(file)?;
            success(format!("Limits saved to {}", file.display()));
        }
    }
    Ok(())
}
