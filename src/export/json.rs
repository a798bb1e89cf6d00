use crate::errors::AppResult;
use crate::models::BalanceRow;
use std::io::Write;

/// Writes balance rows as a pretty JSON array (camelCase keys).
pub fn write_json<W: Write>(mut out: W, rows: &[BalanceRow]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    Ok(())
}
