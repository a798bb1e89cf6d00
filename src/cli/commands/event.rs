use crate::cli::parser::{Commands, EventCommand};
use crate::core::{self, EventAction, EventFields};
use crate::errors::{AppError, AppResult};
use crate::models::{BreakEvent, BreakKind, BreakState, Columns, DaySheet};
use crate::ui::messages::success;
use crate::utils::time::{self, parse_optional_time};
use std::path::Path;
use tracing::{info, warn};

/// Handle the `event` command: create, edit, start or finish one event and
/// save the sheet.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Event { command } = cmd {
        match command {
            EventCommand::Start { file, index, at } => {
                transition(file, *index, EventAction::Start, at.as_ref())?
            }
            EventCommand::Finish { file, index, at } => {
                transition(file, *index, EventAction::Finish, at.as_ref())?
            }
            EventCommand::Add {
                file,
                name,
                kind,
                state,
                start,
                end,
            } => {
                let fields = EventFields {
                    employee_name: Some(name.trim().to_string()),
                    kind: Some(parse_kind(kind)?),
                    state: state.as_deref().map(parse_state).transpose()?,
                    start_time: start.as_deref().map(parse_time_field).transpose()?,
                    end_time: end.as_deref().map(parse_time_field).transpose()?,
                };
                add(file, &fields)?
            }
            EventCommand::Edit {
                file,
                index,
                name,
                kind,
                state,
                start,
                end,
            } => {
                let fields = EventFields {
                    employee_name: name.as_deref().map(|n| n.trim().to_string()),
                    kind: kind.as_deref().map(parse_kind).transpose()?,
                    state: state.as_deref().map(parse_state).transpose()?,
                    start_time: start.as_deref().map(parse_time_field).transpose()?,
                    end_time: end.as_deref().map(parse_time_field).transpose()?,
                };
                edit(file, *index, &fields)?
            }
        }
    }
    Ok(())
}

fn transition(file: &Path, index: usize, action: EventAction, at: Option<&String>) -> AppResult<()> {
    let mut sheet = DaySheet::load(file)?;
    let now = parse_optional_time(at)?.unwrap_or_else(time::now_hm);

    let ev = event_mut(&mut sheet, index)?;
    *ev = core::apply_action(ev, action, now);
    let verb = match action {
        EventAction::Start => "Started",
        EventAction::Finish => "Finished",
    };
    let summary = describe(verb, ev);

    sheet.save(file)?;
    info!(file = %file.display(), index, "event updated");
    success(summary);
    Ok(())
}

fn add(file: &Path, fields: &EventFields) -> AppResult<()> {
    let mut sheet = DaySheet::load(file)?;
    if fields.employee_name.as_deref().is_none_or(str::is_empty) {
        return Err(AppError::EmptyName);
    }
    warn_unknown(&sheet, fields);

    let columns = sheet.events.first().map_or(Columns::Canonical, |e| e.columns);
    let ev = core::new_event(fields, core::next_id(&sheet.events), columns);
    let summary = describe("Added", &ev);
    sheet.events.push(ev);

    sheet.save(file)?;
    info!(file = %file.display(), index = sheet.events.len() - 1, "event added");
    success(summary);
    Ok(())
}

fn edit(file: &Path, index: usize, fields: &EventFields) -> AppResult<()> {
    let mut sheet = DaySheet::load(file)?;
    warn_unknown(&sheet, fields);

    let ev = event_mut(&mut sheet, index)?;
    *ev = core::apply_edit(ev, fields);
    let summary = describe("Updated", ev);

    sheet.save(file)?;
    info!(file = %file.display(), index, "event edited");
    success(summary);
    Ok(())
}

fn event_mut(sheet: &mut DaySheet, index: usize) -> AppResult<&mut BreakEvent> {
    let count = sheet.events.len();
    sheet
        .events
        .get_mut(index)
        .ok_or(AppError::InvalidEventIndex(index, count))
}

fn describe(verb: &str, ev: &BreakEvent) -> String {
    format!(
        "{verb} {} {}: {} ({} - {})",
        ev.kind.as_str(),
        ev.employee_name,
        ev.state.as_str(),
        ev.start_time,
        ev.end_time
    )
}

fn warn_unknown(sheet: &DaySheet, fields: &EventFields) {
    if let Some(name) = &fields.employee_name
        && !sheet.employees.iter().any(|e| &e.name == name)
    {
        warn!(employee = %name, "employee has no limits in this sheet");
    }
}

fn parse_kind(label: &str) -> AppResult<BreakKind> {
    match BreakKind::from_label(label) {
        BreakKind::Other(_) => Err(AppError::InvalidKind(label.to_string())),
        kind => Ok(kind),
    }
}

fn parse_state(label: &str) -> AppResult<BreakState> {
    match BreakState::from_label(label) {
        BreakState::Other(_) => Err(AppError::InvalidState(label.to_string())),
        state => Ok(state),
    }
}

/// `HH:MM`, normalized to two-digit hours; an empty value clears the field.
fn parse_time_field(value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    time::parse_hm(value)
        .map(time::format_hm)
        .ok_or_else(|| AppError::InvalidTime(value.to_string()))
}
