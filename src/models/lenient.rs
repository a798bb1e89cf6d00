//! Forgiving readers for values that come out of spreadsheet cells.
//!
//! A cell may hold a number, a numeric string, an empty string or nothing at
//! all. None of these should make a whole day sheet unreadable.

use serde_json::{Map, Value};

/// A field looked up under several spellings.
pub(crate) struct Found {
    /// Position in the spelling list of the key that was used.
    pub(crate) spelling: usize,
    pub(crate) value: Value,
}

/// Removes every spelling in `keys` from `map` and returns the first one
/// present. Later duplicates are dropped.
pub(crate) fn take(map: &mut Map<String, Value>, keys: &[&str]) -> Option<Found> {
    let mut found = None;
    for (spelling, key) in keys.iter().enumerate() {
        if let Some(value) = map.remove(*key)
            && found.is_none()
        {
            found = Some(Found { spelling, value });
        }
    }
    found
}

pub(crate) fn spelling(found: &Option<Found>) -> Option<usize> {
    found.as_ref().map(|f| f.spelling)
}

/// Minutes as a non-negative integer. Non-numeric or negative input reads as 0.
pub(crate) fn minutes(found: Option<Found>) -> u32 {
    let n = match found.map(|f| f.value) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if n.is_finite() && n > 0.0 {
        n.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Text cell: null/missing becomes "", numbers and booleans are stringified.
pub(crate) fn text(found: Option<Found>) -> String {
    match found.map(|f| f.value) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// Optional identifier: numbers are stringified, empty strings read as None.
pub(crate) fn optional_id(found: Option<Found>) -> Option<String> {
    let value = text(found);
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn take_prefers_first_spelling_and_removes_all() {
        let mut map = object(json!({ "ФИО": "B", "employeeName": "A", "x": 1 }));
        let found = take(&mut map, &["employeeName", "ФИО"]);

        assert_eq!(spelling(&found), Some(0));
        assert_eq!(text(found), "A");
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("x"));
    }

    #[test]
    fn odd_cells_read_leniently() {
        let mut map = object(json!({ "a": -5, "b": "n/a", "c": "12", "d": 7, "e": null }));
        assert_eq!(minutes(take(&mut map, &["a"])), 0);
        assert_eq!(minutes(take(&mut map, &["b"])), 0);
        assert_eq!(minutes(take(&mut map, &["c"])), 12);
        assert_eq!(optional_id(take(&mut map, &["d"])).as_deref(), Some("7"));
        assert_eq!(optional_id(take(&mut map, &["e"])), None);
        assert_eq!(text(take(&mut map, &["missing"])), "");
    }
}
