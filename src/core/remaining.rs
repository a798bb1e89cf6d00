//! Remaining break/lunch minutes per employee.

use crate::models::{BalanceRow, BreakEvent, EmployeeLimit};
use crate::utils::{collate, time};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
struct Usage {
    break_limit: u32,
    lunch_limit: u32,
    break_used: u32,
    lunch_used: u32,
}

/// Folds the day's events into one balance row per known employee.
///
/// Only finished events count. Events for names not in `employees`, with an
/// unknown kind, or with unparsable / reversed times add nothing. Rows come
/// back sorted by collated name; `left` never goes below zero.
pub fn compute_remaining(employees: &[EmployeeLimit], events: &[BreakEvent]) -> Vec<BalanceRow> {
    let mut usage: HashMap<&str, Usage> = HashMap::with_capacity(employees.len());
    for e in employees {
        let entry = usage.entry(e.name.as_str()).or_default();
        entry.break_limit = e.break_limit_minutes;
        entry.lunch_limit = e.lunch_limit_minutes;
    }

    for ev in events {
        if ev.employee_name.is_empty() || !ev.state.is_finished() {
            continue;
        }
        let Some(acc) = usage.get_mut(ev.employee_name.as_str()) else {
            continue;
        };

        let minutes = time::duration_minutes(&ev.start_time, &ev.end_time);
        if ev.kind.is_break() {
            acc.break_used = acc.break_used.saturating_add(minutes);
        } else if ev.kind.is_lunch() {
            acc.lunch_used = acc.lunch_used.saturating_add(minutes);
        }
    }

    let mut rows: Vec<BalanceRow> = usage
        .into_iter()
        .map(|(name, u)| BalanceRow {
            name: name.to_string(),
            break_used_minutes: u.break_used,
            break_limit_minutes: u.break_limit,
            break_left_minutes: u.break_limit.saturating_sub(u.break_used),
            lunch_used_minutes: u.lunch_used,
            lunch_limit_minutes: u.lunch_limit,
            lunch_left_minutes: u.lunch_limit.saturating_sub(u.lunch_used),
        })
        .collect();

    rows.sort_by(|a, b| collate::compare(&a.name, &b.name));
    rows
}

/// Distinct, non-empty event names that match no employee, in collated order.
pub fn unknown_employees(employees: &[EmployeeLimit], events: &[BreakEvent]) -> Vec<String> {
    let known: BTreeSet<&str> = employees.iter().map(|e| e.name.as_str()).collect();

    let mut unknown: Vec<String> = events
        .iter()
        .map(|ev| ev.employee_name.as_str())
        .filter(|name| !name.is_empty() && !known.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    unknown.sort_by(|a, b| collate::compare(a, b));
    unknown
}
