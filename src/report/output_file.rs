//! Per-month output file writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::TaxPolicy;
use crate::error::{EngineError, EngineResult};
use crate::ledger::PayrollLedger;
use crate::models::MonthCode;

use super::table::{table_header, table_row};
use super::month_summary;

/// Writes the month's pay details to `<monthcode-lower>_output.txt` in the
/// given directory: a header row, then one row per employee who worked that
/// month, all numeric values fixed to two decimal places.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns `OutputWrite` if the file cannot be written.
pub fn write_month_output(
    ledger: &PayrollLedger,
    month: &MonthCode,
    policy: &TaxPolicy,
    dir: &Path,
) -> EngineResult<PathBuf> {
    let rows = month_summary(ledger, month, policy);
    let path = dir.join(month.output_file_name());

    let mut content = String::new();
    content.push_str(&table_header());
    content.push('\n');
    for row in &rows {
        content.push_str(&table_row(row));
        content.push('\n');
    }

    fs::write(&path, content).map_err(|e| EngineError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), rows = rows.len(), "wrote month output file");
    Ok(path)
}
