use super::break_event::BreakEvent;
use super::employee::EmployeeLimit;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Employees and events of a single day, as served by the break API.
///
/// Top-level keys other than `date`, `employees` and `events` are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub employees: Vec<EmployeeLimit>,
    #[serde(default)]
    pub events: Vec<BreakEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DaySheet {
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Writes the sheet as pretty JSON: first to `<path>.tmp`, then renamed
    /// over the original so readers never see a half-written file.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');

        let mut tmp = PathBuf::from(path).into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, data)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
