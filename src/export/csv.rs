use crate::errors::AppResult;
use crate::models::BalanceRow;
use csv::Writer;
use std::io::Write;

/// Writes balance rows as CSV with a header line.
pub fn write_csv<W: Write>(out: W, rows: &[BalanceRow]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record([
        "name",
        "break_used",
        "break_limit",
        "break_left",
        "lunch_used",
        "lunch_limit",
        "lunch_left",
    ])?;

    for r in rows {
        wtr.write_record(&[
            r.name.clone(),
            r.break_used_minutes.to_string(),
            r.break_limit_minutes.to_string(),
            r.break_left_minutes.to_string(),
            r.lunch_used_minutes.to_string(),
            r.lunch_limit_minutes.to_string(),
            r.lunch_left_minutes.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
