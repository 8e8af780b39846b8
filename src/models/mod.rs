//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod ingestion;
mod month;

pub use employee::Employee;
pub use ingestion::{
    IngestionError, IngestionErrorKind, IngestionOutcome, IngestionReport, ReplaceDecision,
};
pub use month::MonthCode;
