//! Reporting over the ledger.
//!
//! Everything in this module is read-only: month summaries, ranked
//! employee lists, and per-employee month breakdowns are computed from
//! whatever state the ledger currently holds, as plain data for the CLI
//! (or the output-file writer) to render.

mod output_file;
mod table;

pub use output_file::write_month_output;
pub use table::{table_header, table_row};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{gross_pay, monthly_tax, net_pay};
use crate::config::TaxPolicy;
use crate::error::{EngineError, EngineResult};
use crate::ledger::PayrollLedger;
use crate::models::MonthCode;

/// One employee's computed pay for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRow {
    /// Normalized employee ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
    /// Hours worked in the month.
    pub hours: Decimal,
    /// Gross pay for the month.
    pub gross: Decimal,
    /// Monthly tax for the month.
    pub tax: Decimal,
    /// Net pay for the month.
    pub net: Decimal,
}

/// One month's computed pay within a single employee's breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthRow {
    /// The month this row covers.
    pub month: MonthCode,
    /// Hours worked in the month.
    pub hours: Decimal,
    /// Gross pay for the month.
    pub gross: Decimal,
    /// Monthly tax for the month.
    pub tax: Decimal,
    /// Net pay for the month.
    pub net: Decimal,
}

/// The criterion a ranked employee list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCriterion {
    /// Sort by hourly pay rate.
    HourlyRate,
    /// Sort by hours worked in the chosen month.
    HoursWorked,
    /// Sort by net pay in the chosen month.
    NetPay,
}

/// Maps a criterion to the key the sort compares.
fn sort_key(criterion: RankCriterion) -> fn(&PayRow) -> Decimal {
    match criterion {
        RankCriterion::HourlyRate => |row| row.hourly_rate,
        RankCriterion::HoursWorked => |row| row.hours,
        RankCriterion::NetPay => |row| row.net,
    }
}

/// Computes pay rows for every employee with an hours entry for the month,
/// in ascending employee-ID order.
pub fn month_summary(
    ledger: &PayrollLedger,
    month: &MonthCode,
    policy: &TaxPolicy,
) -> Vec<PayRow> {
    ledger
        .employees()
        .filter_map(|employee| {
            let hours = employee.hours_for(month)?;
            Some(PayRow {
                id: employee.id.clone(),
                name: employee.name.clone(),
                hourly_rate: employee.hourly_rate,
                hours,
                gross: gross_pay(employee.hourly_rate, hours),
                tax: monthly_tax(employee.hourly_rate, hours, policy),
                net: net_pay(employee.hourly_rate, hours, policy),
            })
        })
        .collect()
}

/// Ranks the month's employees descending by the chosen criterion.
///
/// Equal keys fall back to ascending employee ID, so rankings are stable
/// and reproducible.
pub fn rank_employees(
    ledger: &PayrollLedger,
    month: &MonthCode,
    criterion: RankCriterion,
    policy: &TaxPolicy,
) -> Vec<PayRow> {
    let mut rows = month_summary(ledger, month, policy);
    let key = sort_key(criterion);
    rows.sort_by(|a, b| key(b).cmp(&key(a)).then_with(|| a.id.cmp(&b.id)));
    rows
}

/// Computes one employee's per-month rows, in the order the months were
/// ingested.
///
/// # Errors
///
/// Returns `UnknownEmployee` if no employee has the given ID.
pub fn employee_breakdown(
    ledger: &PayrollLedger,
    id: &str,
    policy: &TaxPolicy,
) -> EngineResult<Vec<EmployeeMonthRow>> {
    let employee = ledger.employee(id).ok_or_else(|| EngineError::UnknownEmployee {
        id: crate::ledger::normalize_employee_id(id),
    })?;

    Ok(ledger
        .processed_months()
        .iter()
        .filter_map(|month| {
            let hours = employee.hours_for(month)?;
            Some(EmployeeMonthRow {
                month: month.clone(),
                hours,
                gross: gross_pay(employee.hourly_rate, hours),
                tax: monthly_tax(employee.hourly_rate, hours, policy),
                net: net_pay(employee.hourly_rate, hours, policy),
            })
        })
        .collect())
}
