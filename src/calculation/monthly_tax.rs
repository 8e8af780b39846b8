//! Monthly tax calculation.
//!
//! Tax is charged on a projected annual income: one month's gross pay is
//! assumed to repeat for every month of the year, the policy's tax-free
//! allowance is deducted from that projection, and the flat rate applies to
//! the remainder. The employee owes one month's share of the annual tax.

use rust_decimal::Decimal;

use crate::config::TaxPolicy;

use super::gross_pay::gross_pay;

/// Calculates the tax owed for one employee-month.
///
/// The steps, using the policy constants:
/// 1. Project the month's gross pay to an annual figure (`× months_in_year`).
/// 2. Subtract the tax-free annual allowance, floored at zero; there is no
///    negative taxable income.
/// 3. Apply the flat tax rate to get the annual tax.
/// 4. Divide by `months_in_year` to return the monthly portion.
///
/// # Arguments
///
/// * `rate` - The employee's hourly pay rate
/// * `hours` - Hours worked in the month
/// * `policy` - The tax policy constants (must be validated; a zero
///   `months_in_year` would divide by zero)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_tax;
/// use payroll_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = TaxPolicy::default();
/// let tax = monthly_tax(Decimal::new(15, 0), Decimal::new(160, 0), &policy);
/// assert_eq!(tax, Decimal::from_str("270.50").unwrap());
/// ```
pub fn monthly_tax(rate: Decimal, hours: Decimal, policy: &TaxPolicy) -> Decimal {
    let months = policy.months();
    let annual = gross_pay(rate, hours) * months;
    let taxable = (annual - policy.tax_free_allowance).max(Decimal::ZERO);
    taxable * policy.tax_rate / months
}
