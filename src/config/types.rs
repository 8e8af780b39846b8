//! Tax policy configuration types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_tax_free_allowance() -> Decimal {
    Decimal::new(12570, 0)
}

fn default_tax_rate() -> Decimal {
    Decimal::new(20, 2)
}

fn default_months_in_year() -> u32 {
    12
}

/// The fixed policy constants used by the tax calculation.
///
/// Monthly tax is derived by projecting a month's gross pay to an annual
/// figure (`months_in_year` multiplier), taxing the part above
/// `tax_free_allowance` at the flat `tax_rate`, and taking the monthly
/// portion of the result. The defaults are the UK personal allowance and
/// basic rate.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = TaxPolicy::default();
/// assert_eq!(policy.tax_free_allowance, Decimal::new(12570, 0));
/// assert_eq!(policy.tax_rate, Decimal::new(20, 2));
/// assert_eq!(policy.months_in_year, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Annual income below this amount is not taxed.
    #[serde(default = "default_tax_free_allowance")]
    pub tax_free_allowance: Decimal,
    /// Flat tax rate applied to taxable annual income, as a fraction.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Divisor used to project monthly gross to an annual figure and back.
    #[serde(default = "default_months_in_year")]
    pub months_in_year: u32,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            tax_free_allowance: default_tax_free_allowance(),
            tax_rate: default_tax_rate(),
            months_in_year: default_months_in_year(),
        }
    }
}

impl TaxPolicy {
    /// Checks that every field holds a usable value.
    ///
    /// A validated policy guarantees the tax calculation never divides by
    /// zero and never produces a tax larger than the annualized gross.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tax_free_allowance.is_sign_negative() {
            return Err(EngineError::InvalidPolicy {
                field: "tax_free_allowance".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.tax_rate.is_sign_negative() || self.tax_rate > Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                field: "tax_rate".to_string(),
                message: "must be between 0 and 1".to_string(),
            });
        }
        if self.months_in_year == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "months_in_year".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The months-per-year divisor as a `Decimal`.
    pub fn months(&self) -> Decimal {
        Decimal::from(self.months_in_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_validates() {
        assert!(TaxPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_negative_allowance_rejected() {
        let policy = TaxPolicy {
            tax_free_allowance: dec("-1"),
            ..TaxPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "tax_free_allowance");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_tax_rate_above_one_rejected() {
        let policy = TaxPolicy {
            tax_rate: dec("1.5"),
            ..TaxPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "tax_rate");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_months_rejected() {
        let policy = TaxPolicy {
            months_in_year: 0,
            ..TaxPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "months_in_year");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_months_as_decimal() {
        assert_eq!(TaxPolicy::default().months(), dec("12"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let policy: TaxPolicy = serde_yaml::from_str("tax_rate: 0.25\n").unwrap();
        assert_eq!(policy.tax_rate, dec("0.25"));
        assert_eq!(policy.tax_free_allowance, dec("12570"));
        assert_eq!(policy.months_in_year, 12);
    }
}
