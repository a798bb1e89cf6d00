use serde::Serialize;

/// Computed usage and remaining minutes of one employee for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRow {
    pub name: String,
    pub break_used_minutes: u32,
    pub break_limit_minutes: u32,
    pub break_left_minutes: u32,
    pub lunch_used_minutes: u32,
    pub lunch_limit_minutes: u32,
    pub lunch_left_minutes: u32,
}
