//! Pay-file ingestion.
//!
//! One call ingests one monthly pay file into the ledger: the month code is
//! derived from the file's base name, each `id hours` line is applied to
//! the matching employee, and the month is registered as processed. Lines
//! that do not decompose into an identifier token and a fully-numeric hours
//! token are skipped silently: these hand-maintained files get permissive
//! parsing, not an error path. Unknown IDs are recorded and logged but
//! never abort the call.

mod error_log;

pub use error_log::ErrorLog;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::ledger::{PayrollLedger, normalize_employee_id};
use crate::models::{
    IngestionError, IngestionOutcome, IngestionReport, MonthCode, ReplaceDecision,
};

/// Ingests one pay file into the ledger.
///
/// When the derived month code has already been processed, `confirm_replace`
/// is consulted: the external collaborator answers [`ReplaceDecision::Keep`]
/// to abort with no side effects, or [`ReplaceDecision::Replace`] to clear
/// the month's existing data and re-ingest it from scratch (no merge). A
/// caller that has pre-authorized replacement passes a closure that always
/// answers `Replace`.
///
/// Every error recorded during the call is flushed to `log` exactly once
/// and also returned on the report for the caller to render.
///
/// # Errors
///
/// Only a failure to write the error log itself is an `Err`; a missing pay
/// file and a declined replace are reported as outcomes on the report.
pub fn ingest_pay_file<F>(
    ledger: &mut PayrollLedger,
    path: &Path,
    log: &ErrorLog,
    confirm_replace: F,
) -> EngineResult<IngestionReport>
where
    F: FnOnce(&MonthCode) -> ReplaceDecision,
{
    let month = MonthCode::from_file_name(path);

    let mut replaced = false;
    if ledger.is_month_processed(&month) {
        match confirm_replace(&month) {
            ReplaceDecision::Keep => {
                info!(month = %month, "replace declined; ledger unchanged");
                return Ok(IngestionReport {
                    month,
                    outcome: IngestionOutcome::Declined,
                    errors: Vec::new(),
                    lines_applied: 0,
                });
            }
            ReplaceDecision::Replace => {
                ledger.clear_month(&month);
                replaced = true;
            }
        }
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            warn!(path = %path.display(), "pay file could not be read");
            let error = IngestionError::file_not_found(path);
            log.append(std::slice::from_ref(&error))?;
            return Ok(IngestionReport {
                month,
                outcome: IngestionOutcome::FileNotFound,
                errors: vec![error],
                lines_applied: 0,
            });
        }
    };

    let mut errors = Vec::new();
    let mut lines_applied = 0;
    for line in content.lines() {
        let Some((id, hours)) = parse_pay_line(line) else {
            continue;
        };
        let id = normalize_employee_id(id);
        if ledger.record_hours(&id, month.clone(), hours) {
            lines_applied += 1;
        } else {
            errors.push(IngestionError::unknown_employee(path, id));
        }
    }

    // Registered even when no line was valid.
    ledger.register_month(month.clone());
    log.append(&errors)?;

    let outcome = if replaced {
        IngestionOutcome::Replaced
    } else {
        IngestionOutcome::Ingested
    };
    info!(
        month = %month,
        ?outcome,
        lines_applied,
        errors = errors.len(),
        "pay file ingested"
    );
    Ok(IngestionReport {
        month,
        outcome,
        errors,
        lines_applied,
    })
}

/// Splits a pay line into its identifier and hours tokens.
///
/// Returns `None` for any line that is not `id hours` with a fully-numeric
/// hours token; trailing tokens beyond the two are ignored, matching the
/// master-file format's permissiveness.
fn parse_pay_line(line: &str) -> Option<(&str, Decimal)> {
    let mut tokens = line.split_whitespace();
    let id = tokens.next()?;
    let hours = Decimal::from_str(tokens.next()?).ok()?;
    Some((id, hours))
}
