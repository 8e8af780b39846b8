//! Net pay calculation.

use rust_decimal::Decimal;

use crate::config::TaxPolicy;

use super::gross_pay::gross_pay;
use super::monthly_tax::monthly_tax;

/// Calculates net pay for one employee-month: gross pay minus monthly tax.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::net_pay;
/// use payroll_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = TaxPolicy::default();
/// let net = net_pay(Decimal::new(15, 0), Decimal::new(160, 0), &policy);
/// assert_eq!(net, Decimal::from_str("2129.50").unwrap());
/// ```
pub fn net_pay(rate: Decimal, hours: Decimal, policy: &TaxPolicy) -> Decimal {
    gross_pay(rate, hours) - monthly_tax(rate, hours, policy)
}
