//! # Doubling Time
//!
//! Periods needed for a quantity growing at a fixed rate per period to
//! double, both exactly and by the Rule of 72 / Rule of 70 shortcuts.
//!
//! - Exact: t = ln 2 / ln(1 + r/100)
//! - Rule of 72: t ≈ 72 / r
//! - Rule of 70: t ≈ 70 / r

use serde::{Deserialize, Serialize};

use crate::equations::growth::{doubling_time_exact, doubling_time_rule};
use crate::errors::{ensure_finite, require_positive, CalcResult};

/// Growth rate input.
///
/// ## JSON Example
///
/// ```json
/// { "rate_percent": 8.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoublingTimeInput {
    /// Growth per period in percent (must be positive)
    pub rate_percent: f64,
}

impl DoublingTimeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("rate_percent", self.rate_percent)
    }
}

/// Doubling time estimates, in periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoublingTimeResult {
    pub exact_periods: f64,
    pub rule_of_72_periods: f64,
    pub rule_of_70_periods: f64,
    /// (rule of 72 − exact) / exact, percent
    pub rule_of_72_error_percent: f64,
}

/// Calculate doubling time for a growth rate.
pub fn calculate(input: &DoublingTimeInput) -> CalcResult<DoublingTimeResult> {
    input.validate()?;

    let exact = ensure_finite("DoublingTime", "exact periods", doubling_time_exact(input.rate_percent / 100.0))?;
    let rule_72 = ensure_finite("DoublingTime", "rule of 72", doubling_time_rule(72.0, input.rate_percent))?;

    Ok(DoublingTimeResult {
        exact_periods: exact,
        rule_of_72_periods: rule_72,
        rule_of_70_periods: ensure_finite("DoublingTime", "rule of 70", doubling_time_rule(70.0, input.rate_percent))?,
        rule_of_72_error_percent: ensure_finite("DoublingTime", "rule of 72 error", (rule_72 - exact) / exact * 100.0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eight_percent() {
        let result = calculate(&DoublingTimeInput { rate_percent: 8.0 }).unwrap();
        assert_relative_eq!(result.exact_periods, 9.006468342, epsilon = 1e-8);
        assert_relative_eq!(result.rule_of_72_periods, 9.0, epsilon = 1e-12);
        assert!(result.rule_of_72_error_percent.abs() < 0.1);
    }

    #[test]
    fn test_exact_doubles() {
        let result = calculate(&DoublingTimeInput { rate_percent: 3.5 }).unwrap();
        let grown = 1.035_f64.powf(result.exact_periods);
        assert_relative_eq!(grown, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rule_of_70() {
        let result = calculate(&DoublingTimeInput { rate_percent: 2.0 }).unwrap();
        assert_relative_eq!(result.rule_of_70_periods, 35.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert!(calculate(&DoublingTimeInput { rate_percent: 0.0 }).is_err());
        assert!(calculate(&DoublingTimeInput { rate_percent: -5.0 }).is_err());
    }

    #[test]
    fn test_vanishing_rate_fails_instead_of_infinity() {
        let err = calculate(&DoublingTimeInput { rate_percent: 1e-320 }).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
