//! Shared table layout.
//!
//! The console renderer and the per-month output file use the same header
//! and row formatting: ID and Name left-aligned, numeric columns
//! right-aligned and fixed to two decimal places.

use super::PayRow;

/// Returns the aligned column header row.
pub fn table_header() -> String {
    format!(
        "{:<8}{:<18}{:>11}{:>8}{:>13}{:>12}{:>13}",
        "ID", "Name", "Rate", "Hours", "Gross", "Tax", "Net"
    )
}

/// Formats one pay row with the shared column layout.
pub fn table_row(row: &PayRow) -> String {
    format!(
        "{:<8}{:<18}{:>11.2}{:>8.2}{:>13.2}{:>12.2}{:>13.2}",
        row.id, row.name, row.hourly_rate, row.hours, row.gross, row.tax, row.net
    )
}
