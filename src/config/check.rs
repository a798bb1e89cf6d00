//! Reports which configuration keys are absent from the file on disk.

use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 5] = [
    "break_minutes",
    "lunch_minutes",
    "max_history_days",
    "poll_ms",
    "color",
];

/// Keys from [`KNOWN_KEYS`] that the YAML file does not set.
///
/// A file that does not exist is missing every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&content)?
    };

    let missing = KNOWN_KEYS
        .iter()
        .copied()
        .filter(|key| {
            yaml.as_mapping()
                .is_none_or(|map| !map.contains_key(*key))
        })
        .collect();

    Ok(missing)
}
