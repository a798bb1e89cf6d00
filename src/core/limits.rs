//! Normalization of the employee limit list before it is saved.

use crate::models::EmployeeLimit;

/// Per-employee defaults used when a limit is left at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitDefaults {
    pub break_minutes: u32,
    pub lunch_minutes: u32,
}

/// Trims names, drops entries with an empty name and replaces zero limits
/// with the defaults. Order, column names and extra fields are preserved.
pub fn normalize_limits(employees: &[EmployeeLimit], defaults: LimitDefaults) -> Vec<EmployeeLimit> {
    employees
        .iter()
        .filter_map(|e| {
            let name = e.name.trim();
            if name.is_empty() {
                return None;
            }
            Some(EmployeeLimit {
                name: name.to_string(),
                break_limit_minutes: non_zero_or(e.break_limit_minutes, defaults.break_minutes),
                lunch_limit_minutes: non_zero_or(e.lunch_limit_minutes, defaults.lunch_minutes),
                ..e.clone()
            })
        })
        .collect()
}

fn non_zero_or(value: u32, fallback: u32) -> u32 {
    if value == 0 { fallback } else { value }
}
