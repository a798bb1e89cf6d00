use super::columns::Columns;
use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const NAME: [&str; 1] = ["name"];
const BREAK_LIMIT: [&str; 2] = ["breakLimitMinutes", "breakMinutes"];
const LUNCH_LIMIT: [&str; 2] = ["lunchLimitMinutes", "lunchMinutes"];

/// Daily break/lunch allowance of one employee, keyed by `name`.
///
/// Fields this crate does not know are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct EmployeeLimit {
    pub name: String,
    pub break_limit_minutes: u32,
    pub lunch_limit_minutes: u32,
    pub columns: Columns,
    pub extra: Map<String, Value>,
}

impl EmployeeLimit {
    pub fn new(name: impl Into<String>, break_limit_minutes: u32, lunch_limit_minutes: u32) -> Self {
        Self {
            name: name.into(),
            break_limit_minutes,
            lunch_limit_minutes,
            ..Self::default()
        }
    }
}

impl From<Map<String, Value>> for EmployeeLimit {
    fn from(mut map: Map<String, Value>) -> Self {
        let name = lenient::take(&mut map, &NAME);
        let break_limit = lenient::take(&mut map, &BREAK_LIMIT);
        let lunch_limit = lenient::take(&mut map, &LUNCH_LIMIT);
        let columns = Columns::detect(&[
            lenient::spelling(&break_limit),
            lenient::spelling(&lunch_limit),
        ]);

        Self {
            name: lenient::text(name),
            break_limit_minutes: lenient::minutes(break_limit),
            lunch_limit_minutes: lenient::minutes(lunch_limit),
            columns,
            extra: map,
        }
    }
}

impl From<EmployeeLimit> for Map<String, Value> {
    fn from(e: EmployeeLimit) -> Self {
        let c = e.columns;
        let mut map = e.extra;
        map.insert(NAME[0].into(), e.name.into());
        map.insert(
            c.pick(BREAK_LIMIT[0], BREAK_LIMIT[1]).into(),
            e.break_limit_minutes.into(),
        );
        map.insert(
            c.pick(LUNCH_LIMIT[0], LUNCH_LIMIT[1]).into(),
            e.lunch_limit_minutes.into(),
        );
        map
    }
}
