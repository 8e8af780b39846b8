//! Append-only error log.
//!
//! Each recorded error is written as two lines: the source pay-file path,
//! then the message. The log is never truncated or rotated; it grows across
//! ingestion calls and across runs. The file handle is opened and closed
//! per flush, so no handle outlives one ingestion call.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::IngestionError;

/// Writer for the flat append-only error log file.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Creates a log writer for the given path. The file is created lazily
    /// on the first non-empty flush.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a batch of errors to the log. Flushing an empty batch is a
    /// no-op and does not create the file.
    pub fn append(&self, errors: &[IngestionError]) -> EngineResult<()> {
        if errors.is_empty() {
            return Ok(());
        }

        let to_engine_error = |e: std::io::Error| EngineError::ErrorLogWrite {
            path: self.path.display().to_string(),
            message: e.to_string(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_engine_error)?;
        for error in errors {
            writeln!(file, "{}", error.source).map_err(to_engine_error)?;
            writeln!(file, "{}", error.message()).map_err(to_engine_error)?;
        }
        Ok(())
    }
}
