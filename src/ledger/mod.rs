//! The payroll ledger: employee store and month bookkeeping.
//!
//! The ledger is an explicit owned object constructed once from the master
//! file and passed into ingestion and reporting operations; there is no
//! ambient state. Employees are created only during master-file load and
//! never deleted. Months are appended to the processed sequence on first
//! successful ingestion and removed only by an explicit replace.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{gross_pay, monthly_tax, net_pay};
use crate::config::TaxPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, MonthCode};

/// Normalizes a raw employee identifier: trimmed and uppercased.
///
/// All lookups and mutations go through this normalization, so `" e001 "`
/// and `"E001"` address the same employee.
pub fn normalize_employee_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Lifetime totals for one employee, summed month by month.
///
/// Each month's tax is computed on its own projected-annual basis, so the
/// total tax is the sum of the monthly taxes, not the tax of the total
/// gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// Sum of gross pay across all ingested months.
    pub gross: Decimal,
    /// Sum of monthly tax across all ingested months.
    pub tax: Decimal,
    /// Sum of net pay across all ingested months.
    pub net: Decimal,
}

/// The in-memory store of employees plus bookkeeping of ingested months.
#[derive(Debug, Clone, Default)]
pub struct PayrollLedger {
    employees: BTreeMap<String, Employee>,
    processed_months: Vec<MonthCode>,
}

impl PayrollLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the employee master file.
    ///
    /// One employee per line, whitespace-separated tokens `id name rate`.
    /// Lines with fewer than three tokens or an unparseable rate are
    /// skipped; trailing tokens beyond the rate are ignored. A later
    /// duplicate ID overwrites the earlier record.
    ///
    /// # Errors
    ///
    /// Returns `MasterFileNotFound` if the file is missing or unreadable;
    /// the system cannot run without employee records.
    pub fn load_master_file(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| EngineError::MasterFileNotFound {
            path: path.display().to_string(),
        })?;

        let mut ledger = Self::new();
        for line in content.lines() {
            let mut tokens = line.split_whitespace();
            let (Some(id), Some(name), Some(rate)) = (tokens.next(), tokens.next(), tokens.next())
            else {
                continue;
            };
            let Ok(rate) = Decimal::from_str(rate) else {
                continue;
            };
            let id = normalize_employee_id(id);
            ledger
                .employees
                .insert(id.clone(), Employee::new(id, name, rate));
        }

        info!(
            path = %path.display(),
            employees = ledger.employees.len(),
            "loaded employee master file"
        );
        Ok(ledger)
    }

    /// Looks up an employee by ID. Exact match after normalization only;
    /// there is no partial or fuzzy matching.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.get(&normalize_employee_id(id))
    }

    /// Iterates all employees in ascending normalized-ID order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Number of employees loaded from the master file.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// The month codes ingested so far, in insertion order.
    pub fn processed_months(&self) -> &[MonthCode] {
        &self.processed_months
    }

    /// Returns true if the month has been ingested and not since replaced.
    pub fn is_month_processed(&self, month: &MonthCode) -> bool {
        self.processed_months.contains(month)
    }

    /// Lifetime gross/tax/net totals for one employee.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEmployee` if no employee has the given ID.
    pub fn employee_totals(&self, id: &str, policy: &TaxPolicy) -> EngineResult<EmployeeTotals> {
        let employee = self.employee(id).ok_or_else(|| EngineError::UnknownEmployee {
            id: normalize_employee_id(id),
        })?;

        let mut totals = EmployeeTotals {
            gross: Decimal::ZERO,
            tax: Decimal::ZERO,
            net: Decimal::ZERO,
        };
        for hours in employee.hours_worked.values() {
            totals.gross += gross_pay(employee.hourly_rate, *hours);
            totals.tax += monthly_tax(employee.hourly_rate, *hours, policy);
            totals.net += net_pay(employee.hourly_rate, *hours, policy);
        }
        Ok(totals)
    }

    /// Sets or overwrites an employee's hours for a month. Returns false if
    /// the ID (expected pre-normalized) matches no employee.
    pub(crate) fn record_hours(&mut self, id: &str, month: MonthCode, hours: Decimal) -> bool {
        match self.employees.get_mut(id) {
            Some(employee) => {
                employee.hours_worked.insert(month, hours);
                true
            }
            None => false,
        }
    }

    /// Appends a month to the processed sequence if it is not already there.
    pub(crate) fn register_month(&mut self, month: MonthCode) {
        if !self.processed_months.contains(&month) {
            self.processed_months.push(month);
        }
    }

    /// Removes every employee's entry for the month and deregisters it.
    pub(crate) fn clear_month(&mut self, month: &MonthCode) {
        for employee in self.employees.values_mut() {
            employee.hours_worked.remove(month);
        }
        self.processed_months.retain(|m| m != month);
    }
}
