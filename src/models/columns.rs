/// Which field names a record was read with. Records are written back under
/// the same names, so a sheet exported from the spreadsheet keeps its
/// columns and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// `employeeName`, `kind`, `state`, `startTime`, `endTime`;
    /// `breakLimitMinutes`, `lunchLimitMinutes`; English labels.
    #[default]
    Canonical,
    /// `ФИО`, `Тип`, `Состояние`, `Начало`, `Конец`; `breakMinutes`,
    /// `lunchMinutes`; Russian labels.
    Sheet,
}

impl Columns {
    pub(crate) fn pick(self, canonical: &'static str, sheet: &'static str) -> &'static str {
        match self {
            Columns::Canonical => canonical,
            Columns::Sheet => sheet,
        }
    }

    /// `Sheet` when any field was found under its spreadsheet name.
    pub(crate) fn detect(found: &[Option<usize>]) -> Self {
        if found.iter().any(|i| *i == Some(1)) {
            Columns::Sheet
        } else {
            Columns::Canonical
        }
    }
}
