//! Configuration for the payroll engine.
//!
//! The only configurable piece is the [`TaxPolicy`]: the fixed constants
//! the tax calculation runs on.

mod loader;
mod types;

pub use loader::{load_policy, load_policy_or_default};
pub use types::TaxPolicy;
