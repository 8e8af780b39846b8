//! Employee model.
//!
//! This module defines the Employee struct holding identity, the hourly pay
//! rate, and the per-month hours worked.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthCode;

/// Represents an employee on the payroll.
///
/// The `id` is stored in its normalized form (trimmed and uppercased by
/// the ledger before construction) and never changes afterwards.
/// `hours_worked` holds at most one entry per month code; re-ingesting a
/// month overwrites the entry rather than accumulating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Normalized unique identifier for the employee.
    pub id: String,
    /// Display name, trimmed on input.
    pub name: String,
    /// Hourly pay rate, set once at master-file load.
    pub hourly_rate: Decimal,
    /// Hours worked per ingested month.
    #[serde(default)]
    pub hours_worked: BTreeMap<MonthCode, Decimal>,
}

impl Employee {
    /// Creates an employee with no hours recorded yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("E001", "Alice", Decimal::new(1550, 2));
    /// assert_eq!(employee.id, "E001");
    /// assert!(employee.hours_worked.is_empty());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hourly_rate,
            hours_worked: BTreeMap::new(),
        }
    }

    /// Returns the hours recorded for a month, if any.
    pub fn hours_for(&self, month: &MonthCode) -> Option<Decimal> {
        self.hours_worked.get(month).copied()
    }

    /// Returns true if the employee has an hours entry for the month.
    pub fn worked_in(&self, month: &MonthCode) -> bool {
        self.hours_worked.contains_key(month)
    }
}
