//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur while loading data, applying
//! policy configuration, or writing report files.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Domain
/// outcomes of a single ingestion call (a declined replace, a missing pay
/// file) are not errors; they are reported on the ingestion report instead.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::MasterFileNotFound {
///     path: "/missing/employees.txt".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Employee master file not found: /missing/employees.txt"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee master file was not found or could not be read.
    #[error("Employee master file not found: {path}")]
    MasterFileNotFound {
        /// The path that was not readable.
        path: String,
    },

    /// The tax policy file was not found at the specified path.
    #[error("Tax policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The tax policy file could not be parsed.
    #[error("Failed to parse tax policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax policy field held a value outside its allowed range.
    #[error("Invalid tax policy field '{field}': {message}")]
    InvalidPolicy {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee with the given ID exists in the ledger.
    #[error("Unknown employee ID: {id}")]
    UnknownEmployee {
        /// The normalized ID that was looked up.
        id: String,
    },

    /// The append-only error log could not be written.
    #[error("Failed to append to error log '{path}': {message}")]
    ErrorLogWrite {
        /// The path of the error log file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A per-month output file could not be written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The path of the output file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
