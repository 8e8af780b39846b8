//! Pay calculation rules for the payroll engine.
//!
//! This module contains the pure, stateless calculation functions: gross
//! pay, monthly tax on a projected-annual basis, and net pay. Each function
//! takes the employee's rate and a month's hours; none of them touches the
//! ledger.

mod gross_pay;
mod monthly_tax;
mod net_pay;

pub use gross_pay::gross_pay;
pub use monthly_tax::monthly_tax;
pub use net_pay::net_pay;
