//! Gross pay calculation.

use rust_decimal::Decimal;

/// Calculates gross pay for one employee-month.
///
/// Gross pay is simply `rate × hours`. Inputs are not validated here;
/// negative values were rejected at parse time and would otherwise pass
/// through the arithmetic unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::gross_pay;
/// use rust_decimal::Decimal;
///
/// let gross = gross_pay(Decimal::new(15, 0), Decimal::new(160, 0));
/// assert_eq!(gross, Decimal::new(2400, 0));
/// ```
pub fn gross_pay(rate: Decimal, hours: Decimal) -> Decimal {
    rate * hours
}
