/// Lifecycle of a break booking: planned → started → finished.
///
/// Only `Finished` events are counted by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakState {
    Planned,
    Started,
    Finished,
    Other(String),
}

impl BreakState {
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Запланирован" => Self::Planned,
            "Начат" => Self::Started,
            "Завершен" | "Завершён" => Self::Finished,
            other => match other.to_lowercase().as_str() {
                "planned" => Self::Planned,
                "started" => Self::Started,
                "finished" => Self::Finished,
                _ => Self::Other(s.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BreakState::Planned => "planned",
            BreakState::Started => "started",
            BreakState::Finished => "finished",
            BreakState::Other(label) => label,
        }
    }

    pub fn sheet_label(&self) -> &str {
        match self {
            BreakState::Planned => "Запланирован",
            BreakState::Started => "Начат",
            BreakState::Finished => "Завершен",
            BreakState::Other(label) => label,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, BreakState::Finished)
    }
}

impl Default for BreakState {
    fn default() -> Self {
        BreakState::Other(String::new())
    }
}
