//! Pure input validation for the interactive session.
//!
//! Each function turns one raw input line into a typed value or a described
//! rejection. None of them reads the console: the read-retry loop is the
//! session's concern, so every rule here is testable in isolation.

use thiserror::Error;

use crate::models::ReplaceDecision;
use crate::report::RankCriterion;

/// Why an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// The line was not a number at all.
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,

    /// The number fell outside the menu's range.
    #[error("Invalid input. Please enter a number between {min} and {max}.")]
    OutOfRange {
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The line was not a y/n answer.
    #[error("Invalid input. Please enter 'y' or 'n'.")]
    NotYesNo,
}

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the session.
    Quit,
    /// Ingest a pay file.
    ProcessPayFile,
    /// Show the pay details of one processed month.
    ViewMonthlySummaries,
    /// Show one employee's per-month breakdown.
    ViewEmployeeDetails,
    /// Show a month's employees ranked by a chosen criterion.
    RankEmployees,
    /// Show one employee's lifetime totals.
    ViewEmployeeTotals,
}

/// Parses a main-menu selection (0–5).
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputRejection> {
    match parse_number(input)? {
        0 => Ok(MenuChoice::Quit),
        1 => Ok(MenuChoice::ProcessPayFile),
        2 => Ok(MenuChoice::ViewMonthlySummaries),
        3 => Ok(MenuChoice::ViewEmployeeDetails),
        4 => Ok(MenuChoice::RankEmployees),
        5 => Ok(MenuChoice::ViewEmployeeTotals),
        _ => Err(InputRejection::OutOfRange { min: 0, max: 5 }),
    }
}

/// Parses a 1-based list selection where 0 means "return".
///
/// Returns `Ok(None)` for 0 and `Ok(Some(index))` (0-based) for a value in
/// range.
pub fn parse_index_selection(input: &str, max: usize) -> Result<Option<usize>, InputRejection> {
    let value = parse_number(input)?;
    if value == 0 {
        return Ok(None);
    }
    match usize::try_from(value) {
        Ok(n) if n <= max => Ok(Some(n - 1)),
        _ => Err(InputRejection::OutOfRange { min: 0, max }),
    }
}

/// Parses a y/n answer into a replace decision.
pub fn parse_yes_no(input: &str) -> Result<ReplaceDecision, InputRejection> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(ReplaceDecision::Replace),
        "n" => Ok(ReplaceDecision::Keep),
        _ => Err(InputRejection::NotYesNo),
    }
}

/// Parses a ranking-criterion selection (1–3).
pub fn parse_rank_criterion(input: &str) -> Result<RankCriterion, InputRejection> {
    match parse_number(input)? {
        1 => Ok(RankCriterion::HourlyRate),
        2 => Ok(RankCriterion::HoursWorked),
        3 => Ok(RankCriterion::NetPay),
        _ => Err(InputRejection::OutOfRange { min: 1, max: 3 }),
    }
}

fn parse_number(input: &str) -> Result<i64, InputRejection> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputRejection::NotANumber)
}
