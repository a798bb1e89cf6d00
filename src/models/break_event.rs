use super::break_kind::BreakKind;
use super::break_state::BreakState;
use super::columns::Columns;
use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID: [&str; 1] = ["id"];
const NAME: [&str; 2] = ["employeeName", "ФИО"];
const KIND: [&str; 2] = ["kind", "Тип"];
const STATE: [&str; 2] = ["state", "Состояние"];
const START: [&str; 2] = ["startTime", "Начало"];
const END: [&str; 2] = ["endTime", "Конец"];

/// One break or lunch booking for one employee on one day.
///
/// Times are kept exactly as entered (`"HH:MM"` or empty); they are only
/// parsed when a duration is needed. Field names from the spreadsheet
/// (`ФИО`, `Тип`, `Состояние`, `Начало`, `Конец`) are accepted on input and
/// kept on output, as are any columns this crate does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct BreakEvent {
    pub id: Option<String>,
    pub employee_name: String,
    pub kind: BreakKind,
    pub state: BreakState,
    pub start_time: String,
    pub end_time: String,
    pub columns: Columns,
    pub extra: Map<String, Value>,
}

impl BreakEvent {
    pub fn new(
        employee_name: impl Into<String>,
        kind: BreakKind,
        state: BreakState,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            kind,
            state,
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Self::default()
        }
    }
}

impl From<Map<String, Value>> for BreakEvent {
    fn from(mut map: Map<String, Value>) -> Self {
        let id = lenient::take(&mut map, &ID);
        let name = lenient::take(&mut map, &NAME);
        let kind = lenient::take(&mut map, &KIND);
        let state = lenient::take(&mut map, &STATE);
        let start = lenient::take(&mut map, &START);
        let end = lenient::take(&mut map, &END);

        let columns = Columns::detect(&[
            lenient::spelling(&name),
            lenient::spelling(&kind),
            lenient::spelling(&state),
            lenient::spelling(&start),
            lenient::spelling(&end),
        ]);

        let kind = match kind {
            Some(found) => BreakKind::from_label(&lenient::text(Some(found))),
            None => BreakKind::default(),
        };
        let state = match state {
            Some(found) => BreakState::from_label(&lenient::text(Some(found))),
            None => BreakState::default(),
        };

        Self {
            id: lenient::optional_id(id),
            employee_name: lenient::text(name),
            kind,
            state,
            start_time: lenient::text(start),
            end_time: lenient::text(end),
            columns,
            extra: map,
        }
    }
}

impl From<BreakEvent> for Map<String, Value> {
    fn from(ev: BreakEvent) -> Self {
        let c = ev.columns;
        let (kind, state) = match c {
            Columns::Canonical => (ev.kind.as_str(), ev.state.as_str()),
            Columns::Sheet => (ev.kind.sheet_label(), ev.state.sheet_label()),
        };

        let mut map = ev.extra;
        if let Some(id) = ev.id {
            map.insert(ID[0].into(), id.into());
        }
        map.insert(c.pick(NAME[0], NAME[1]).into(), ev.employee_name.into());
        map.insert(c.pick(KIND[0], KIND[1]).into(), kind.into());
        map.insert(c.pick(STATE[0], STATE[1]).into(), state.into());
        map.insert(c.pick(START[0], START[1]).into(), ev.start_time.into());
        map.insert(c.pick(END[0], END[1]).into(), ev.end_time.into());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> BreakEvent {
        serde_json::from_str(json).expect("event json")
    }

    #[test]
    fn numeric_label_cells_do_not_fail() {
        let ev = parse(r#"{ "ФИО": "A", "Тип": 1, "Состояние": 2, "Начало": 900 }"#);
        assert_eq!(ev.kind, BreakKind::Other("1".into()));
        assert_eq!(ev.state, BreakState::Other("2".into()));
        assert_eq!(ev.start_time, "900");
    }

    #[test]
    fn both_name_spellings_are_accepted() {
        let ev = parse(r#"{ "ФИО": "Б", "employeeName": "A" }"#);
        assert_eq!(ev.employee_name, "A");
        assert_eq!(ev.columns, Columns::Sheet);
    }

    #[test]
    fn sheet_columns_and_extra_fields_survive_a_rewrite() {
        let ev = parse(
            r#"{ "id": 7, "ФИО": "A", "Тип": "Обед", "Состояние": "Начат", "Начало": "12:00", "Конец": "", "Комментарий": "x" }"#,
        );
        let json = serde_json::to_value(&ev).expect("serialize");

        assert_eq!(json["ФИО"], "A");
        assert_eq!(json["Тип"], "Обед");
        assert_eq!(json["Состояние"], "Начат");
        assert_eq!(json["Комментарий"], "x");
        assert_eq!(json["id"], "7");
        assert!(json.get("employeeName").is_none());
    }
}
