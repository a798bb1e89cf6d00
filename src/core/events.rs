//! Event listing and start/finish transitions.

use crate::models::{BreakEvent, BreakKind, BreakState, Columns};
use crate::utils::{collate, time};
use chrono::NaiveTime;

/// An event together with its computed duration, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Position of the event in the day sheet.
    pub index: usize,
    pub event: BreakEvent,
    pub duration_minutes: u32,
}

/// Every event with its duration, stable-sorted by collated employee name.
///
/// Unlike the aggregator nothing is filtered out: planned and unknown
/// entries are listed too.
pub fn event_rows(events: &[BreakEvent]) -> Vec<EventRow> {
    let mut rows: Vec<EventRow> = events
        .iter()
        .enumerate()
        .map(|(index, ev)| EventRow {
            index,
            event: ev.clone(),
            duration_minutes: time::duration_minutes(&ev.start_time, &ev.end_time),
        })
        .collect();

    rows.sort_by(|a, b| collate::compare(&a.event.employee_name, &b.event.employee_name));
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Start,
    Finish,
}

/// Applies a start/finish button press to an event.
///
/// - `Start`: state becomes started, an empty start time is set to `now`.
/// - `Finish`: state becomes finished, empty start and end times are set
///   to `now`.
///
/// Times that are already filled in are kept.
pub fn apply_action(event: &BreakEvent, action: EventAction, now: NaiveTime) -> BreakEvent {
    let mut updated = event.clone();
    let stamp = time::format_hm(now);

    if updated.start_time.trim().is_empty() {
        updated.start_time = stamp.clone();
    }

    match action {
        EventAction::Start => {
            updated.state = BreakState::Started;
        }
        EventAction::Finish => {
            updated.state = BreakState::Finished;
            if updated.end_time.trim().is_empty() {
                updated.end_time = stamp;
            }
        }
    }

    updated
}

/// Values for creating or editing an event. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub employee_name: Option<String>,
    pub kind: Option<BreakKind>,
    pub state: Option<BreakState>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Copy of `event` with every field set in `fields` replaced.
///
/// The id, the column names and any extra columns are kept.
pub fn apply_edit(event: &BreakEvent, fields: &EventFields) -> BreakEvent {
    let mut updated = event.clone();

    if let Some(name) = &fields.employee_name {
        updated.employee_name = name.clone();
    }
    if let Some(kind) = &fields.kind {
        updated.kind = kind.clone();
    }
    if let Some(state) = &fields.state {
        updated.state = state.clone();
    }
    if let Some(start) = &fields.start_time {
        updated.start_time = start.clone();
    }
    if let Some(end) = &fields.end_time {
        updated.end_time = end.clone();
    }

    updated
}

/// A new booking: a planned break unless `fields` say otherwise.
pub fn new_event(fields: &EventFields, id: String, columns: Columns) -> BreakEvent {
    let blank = BreakEvent {
        id: Some(id),
        kind: BreakKind::Break,
        state: BreakState::Planned,
        columns,
        ..BreakEvent::default()
    };
    apply_edit(&blank, fields)
}

/// One above the largest numeric id in `events` ("1" when there is none).
pub fn next_id(events: &[BreakEvent]) -> String {
    events
        .iter()
        .filter_map(|e| e.id.as_deref()?.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        .saturating_add(1)
        .to_string()
}
