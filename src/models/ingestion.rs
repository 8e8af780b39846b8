//! Ingestion report models.
//!
//! One pay-file ingestion call produces an [`IngestionReport`]: the derived
//! month code, how the call ended, and the structured error records that
//! were flushed to the error log. Errors are returned per call rather than
//! accumulated on the ledger, so the caller consumes them exactly once.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MonthCode;

/// The decision an external collaborator supplies when a month has already
/// been ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceDecision {
    /// Clear the month's existing data and re-ingest it.
    Replace,
    /// Keep the existing data; the ingestion call becomes a no-op.
    Keep,
}

/// How one ingestion call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionOutcome {
    /// The month was ingested for the first time.
    Ingested,
    /// The month existed and was cleared, then ingested fresh.
    Replaced,
    /// The caller declined to replace an already-ingested month. No side
    /// effects took place.
    Declined,
    /// The pay file was missing or unreadable. The month was not registered.
    FileNotFound,
}

impl IngestionOutcome {
    /// Returns true if the month was registered by this call.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ingested | Self::Replaced)
    }
}

/// The kind of a recorded ingestion error.
///
/// Malformed lines are not represented here: they are skipped silently by
/// design and never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionErrorKind {
    /// An hours line referenced an ID with no matching employee.
    UnknownEmployee {
        /// The normalized ID that did not match.
        id: String,
    },
    /// The pay file itself was missing or unreadable.
    FileNotFound,
}

/// One error recorded during an ingestion call, tagged with the source
/// pay-file path it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionError {
    /// The pay-file path this error is tagged with.
    pub source: String,
    /// What went wrong.
    pub kind: IngestionErrorKind,
}

impl IngestionError {
    /// Records an hours line that referenced an unknown employee ID.
    pub fn unknown_employee(source: &Path, id: impl Into<String>) -> Self {
        Self {
            source: source.display().to_string(),
            kind: IngestionErrorKind::UnknownEmployee { id: id.into() },
        }
    }

    /// Records a pay file that could not be opened.
    pub fn file_not_found(source: &Path) -> Self {
        Self {
            source: source.display().to_string(),
            kind: IngestionErrorKind::FileNotFound,
        }
    }

    /// Returns the message line written to the error log for this error.
    pub fn message(&self) -> String {
        match &self.kind {
            IngestionErrorKind::UnknownEmployee { id } => {
                format!("{id} is not a valid employee ID number.")
            }
            IngestionErrorKind::FileNotFound => {
                format!("Pay file {} could not be found.", self.source)
            }
        }
    }
}

/// The result of one pay-file ingestion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    /// The month code derived from the pay file's base name.
    pub month: MonthCode,
    /// How the call ended.
    pub outcome: IngestionOutcome,
    /// The errors recorded during this call, already flushed to the log.
    pub errors: Vec<IngestionError>,
    /// How many hours lines were applied to the ledger.
    pub lines_applied: usize,
}
