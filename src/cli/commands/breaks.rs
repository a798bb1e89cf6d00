use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{self, history};
use crate::errors::{AppError, AppResult};
use crate::export::{self, OutputFormat};
use crate::models::{BalanceRow, DaySheet};
use crate::ui::messages::{header, info, warning};
use crate::utils::{date, formatting::bold, mins2readable};
use chrono::NaiveDate;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Handle the `breaks` command: remaining minutes for one day sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Breaks {
        file,
        date: date_arg,
        format,
        events,
        watch,
    } = cmd
    {
        if *watch {
            // Polling only: re-read and redraw until interrupted.
            loop {
                if let Err(e) = report(file, date_arg.as_deref(), *format, *events, cfg) {
                    warn!(error = %e, "refresh failed");
                    warning(format!("Refresh failed: {e}"));
                }
                thread::sleep(Duration::from_millis(cfg.poll_ms));
            }
        }

        report(file, date_arg.as_deref(), *format, *events, cfg)?;
    }
    Ok(())
}

fn report(
    file: &Path,
    date_arg: Option<&str>,
    format: OutputFormat,
    with_events: bool,
    cfg: &Config,
) -> AppResult<()> {
    let sheet = DaySheet::load(file)?;
    let day = resolve_date(date_arg, sheet.date.as_deref())?;
    history::ensure_in_window(day, date::today(), cfg.max_history_days)?;

    for name in core::unknown_employees(&sheet.employees, &sheet.events) {
        warn!(employee = %name, "events reference an employee without limits; ignored");
    }

    let rows = core::compute_remaining(&sheet.employees, &sheet.events);
    debug!(
        day = %day,
        employees = sheet.employees.len(),
        events = sheet.events.len(),
        format = format.as_str(),
        "computed remaining minutes"
    );

    match format {
        OutputFormat::Json => export::write_json(io::stdout().lock(), &rows),
        OutputFormat::Csv => export::write_csv(io::stdout().lock(), &rows),
        OutputFormat::Table => {
            print_report(day, &sheet, &rows, with_events, cfg.color);
            Ok(())
        }
    }
}

/// `--date` wins over the sheet's own date; with neither, today.
fn resolve_date(arg: Option<&str>, sheet_date: Option<&str>) -> AppResult<NaiveDate> {
    match arg.or(sheet_date) {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

fn print_report(day: NaiveDate, sheet: &DaySheet, rows: &[BalanceRow], with_events: bool, color: bool) {
    header(date::format_date(day));

    if rows.is_empty() {
        info("No employee limits in this sheet yet. Add employees first.");
    } else {
        print!("{}", export::balance_table(rows).render(color));

        let break_used: i64 = rows.iter().map(|r| i64::from(r.break_used_minutes)).sum();
        let lunch_used: i64 = rows.iter().map(|r| i64::from(r.lunch_used_minutes)).sum();
        let totals = format!(
            "Total used: break {}, lunch {}",
            mins2readable(break_used, false, false),
            mins2readable(lunch_used, false, false)
        );
        println!("\n{}", if color { bold(&totals) } else { totals });
    }

    if with_events {
        println!();
        if sheet.events.is_empty() {
            info("No events recorded for this day.");
        } else {
            print!("{}", export::events_table(&core::event_rows(&sheet.events)).render(color));
        }
    }
}
