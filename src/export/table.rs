use crate::core::EventRow;
use crate::models::BalanceRow;
use crate::utils::colors::{color_for_left, color_for_optional_field};
use crate::utils::formatting::left_of_limit;
use crate::utils::table::{Cell, Column, Table};

pub fn balance_table(rows: &[BalanceRow]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Name"),
        Column::new("Break used"),
        Column::new("Break left"),
        Column::new("Lunch used"),
        Column::new("Lunch left"),
    ]);

    for r in rows {
        table.add_row(vec![
            Cell::plain(r.name.clone()),
            Cell::plain(r.break_used_minutes.to_string()),
            Cell::colored(
                left_of_limit(r.break_left_minutes, r.break_limit_minutes),
                color_for_left(r.break_left_minutes, r.break_limit_minutes),
            ),
            Cell::plain(r.lunch_used_minutes.to_string()),
            Cell::colored(
                left_of_limit(r.lunch_left_minutes, r.lunch_limit_minutes),
                color_for_left(r.lunch_left_minutes, r.lunch_limit_minutes),
            ),
        ]);
    }

    table
}

pub fn events_table(rows: &[EventRow]) -> Table {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Name"),
        Column::new("Kind"),
        Column::new("State"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Minutes"),
    ]);

    for r in rows {
        let ev = &r.event;
        table.add_row(vec![
            Cell::plain(r.index.to_string()),
            Cell::plain(ev.employee_name.clone()),
            Cell::plain(ev.kind.as_str()),
            Cell::plain(ev.state.as_str()),
            time_cell(&ev.start_time),
            time_cell(&ev.end_time),
            Cell::plain(r.duration_minutes.to_string()),
        ]);
    }

    table
}

fn time_cell(value: &str) -> Cell {
    let shown = if value.trim().is_empty() { "--:--" } else { value };
    Cell::colored(shown, color_for_optional_field(Some(value)))
}
