/// What an event is booking: a short break or the lunch break.
///
/// Spreadsheet rows carry Russian labels (`Перерыв`, `Обед`); both those and
/// the English names are accepted. Anything else is kept verbatim and never
/// counts toward usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakKind {
    Break,
    Lunch,
    Other(String),
}

impl BreakKind {
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Перерыв" => Self::Break,
            "Обед" => Self::Lunch,
            other => match other.to_lowercase().as_str() {
                "break" => Self::Break,
                "lunch" => Self::Lunch,
                _ => Self::Other(s.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BreakKind::Break => "break",
            BreakKind::Lunch => "lunch",
            BreakKind::Other(label) => label,
        }
    }

    /// Label used in spreadsheet columns.
    pub fn sheet_label(&self) -> &str {
        match self {
            BreakKind::Break => "Перерыв",
            BreakKind::Lunch => "Обед",
            BreakKind::Other(label) => label,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, BreakKind::Break)
    }

    pub fn is_lunch(&self) -> bool {
        matches!(self, BreakKind::Lunch)
    }
}

impl Default for BreakKind {
    fn default() -> Self {
        BreakKind::Other(String::new())
    }
}
