//! # Opportunity Cost of Recurring Spending
//!
//! What a recurring expense would have grown to had it been invested
//! instead, using the future value of an ordinary annuity:
//!
//! ```text
//! FV = P · ((1 + r/m)^(m·t) − 1) / (r/m)
//! ```
//!
//! where `P` is the amount per payment, `m` payments per year, `r` the annual
//! return and `t` the horizon in years. With r = 0, FV = P · m · t.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::growth::opportunity_cost::{calculate, OpportunityCostInput, SpendingFrequency};
//!
//! let input = OpportunityCostInput::new(5.0, SpendingFrequency::Daily, 7.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.projections.len(), 3); // 10, 20 and 30 years
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::growth::future_value_annuity;
use crate::errors::{ensure_finite, require_non_negative, CalcError, CalcResult};

/// Horizons reported when none are given, years
pub const DEFAULT_HORIZONS_YEARS: [u32; 3] = [10, 20, 30];

const MAX_HORIZON_YEARS: u32 = 100;

/// How often the expense recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl SpendingFrequency {
    /// Payments per year
    pub fn per_year(&self) -> u32 {
        match self {
            SpendingFrequency::Daily => 365,
            SpendingFrequency::Weekly => 52,
            SpendingFrequency::Monthly => 12,
            SpendingFrequency::Yearly => 1,
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(SpendingFrequency::Daily),
            "weekly" | "week" | "w" => Ok(SpendingFrequency::Weekly),
            "monthly" | "month" | "m" => Ok(SpendingFrequency::Monthly),
            "yearly" | "annually" | "year" | "y" => Ok(SpendingFrequency::Yearly),
            _ => Err(CalcError::invalid_input("frequency", s, "Expected daily, weekly, monthly or yearly")),
        }
    }
}

fn default_horizons() -> Vec<u32> {
    DEFAULT_HORIZONS_YEARS.to_vec()
}

/// Recurring expense and the return it forgoes.
///
/// ## JSON Example
///
/// ```json
/// { "amount": 5.0, "frequency": "daily", "annual_return_percent": 7.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCostInput {
    /// Amount spent each time
    pub amount: f64,
    pub frequency: SpendingFrequency,
    /// Expected annual investment return, percent
    pub annual_return_percent: f64,
    /// Years at which to report the projection
    #[serde(default = "default_horizons")]
    pub horizons_years: Vec<u32>,
}

impl OpportunityCostInput {
    /// Expense evaluated at the default 10/20/30-year horizons
    pub fn new(amount: f64, frequency: SpendingFrequency, annual_return_percent: f64) -> Self {
        OpportunityCostInput {
            amount,
            frequency,
            annual_return_percent,
            horizons_years: default_horizons(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("amount", self.amount)?;
        require_non_negative("annual_return_percent", self.annual_return_percent)?;
        if self.horizons_years.is_empty() {
            return Err(CalcError::missing_field("horizons_years"));
        }
        if let Some(bad) = self
            .horizons_years
            .iter()
            .find(|&&y| y == 0 || y > MAX_HORIZON_YEARS)
        {
            return Err(CalcError::invalid_input(
                "horizons_years",
                bad.to_string(),
                format!("Each horizon must be between 1 and {} years", MAX_HORIZON_YEARS),
            ));
        }
        Ok(())
    }
}

/// Outcome at one horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonProjection {
    pub years: u32,
    /// Sum of all payments made
    pub total_spent: f64,
    /// What the payments would be worth invested
    pub future_value: f64,
    /// future_value − total_spent
    pub forgone_growth: f64,
}

/// Results of the opportunity-cost projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCostResult {
    pub annual_spending: f64,
    pub projections: Vec<HorizonProjection>,
}

/// Project the forgone value of a recurring expense.
pub fn calculate(input: &OpportunityCostInput) -> CalcResult<OpportunityCostResult> {
    input.validate()?;

    let per_year = f64::from(input.frequency.per_year());
    let periodic_rate = input.annual_return_percent / 100.0 / per_year;

    let projections = input
        .horizons_years
        .iter()
        .map(|&years| {
            let payments = per_year * f64::from(years);
            let total_spent = ensure_finite("OpportunityCost", "total spent", input.amount * payments)?;
            let future_value = ensure_finite(
                "OpportunityCost",
                "future value",
                future_value_annuity(input.amount, periodic_rate, payments),
            )?;
            Ok(HorizonProjection {
                years,
                total_spent,
                future_value,
                forgone_growth: ensure_finite("OpportunityCost", "forgone growth", future_value - total_spent)?,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(OpportunityCostResult {
        annual_spending: ensure_finite("OpportunityCost", "annual spending", input.amount * per_year)?,
        projections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_horizons() {
        let result = calculate(&OpportunityCostInput::new(100.0, SpendingFrequency::Monthly, 6.0)).unwrap();
        let years: Vec<u32> = result.projections.iter().map(|p| p.years).collect();
        assert_eq!(years, vec![10, 20, 30]);
        assert_relative_eq!(result.annual_spending, 1200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_annuity_value() {
        // 100/month at 6 %/yr for 10 years: FV = 100 · (1.005^120 − 1) / 0.005
        let result = calculate(&OpportunityCostInput::new(100.0, SpendingFrequency::Monthly, 6.0)).unwrap();
        let ten = result.projections[0];
        assert_relative_eq!(ten.total_spent, 12_000.0, epsilon = 1e-9);
        assert_relative_eq!(ten.future_value, 16_387.93468, epsilon = 1e-4);
        assert_relative_eq!(ten.forgone_growth, ten.future_value - 12_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_return_equals_total_spent() {
        let result = calculate(&OpportunityCostInput::new(3.0, SpendingFrequency::Daily, 0.0)).unwrap();
        for p in &result.projections {
            assert_relative_eq!(p.future_value, p.total_spent, epsilon = 1e-9);
            assert_relative_eq!(p.forgone_growth, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_horizons_grow_monotonically() {
        let result = calculate(&OpportunityCostInput::new(20.0, SpendingFrequency::Weekly, 5.0)).unwrap();
        let values: Vec<f64> = result.projections.iter().map(|p| p.future_value).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_horizons() {
        let mut input = OpportunityCostInput::new(1.0, SpendingFrequency::Yearly, 5.0);
        input.horizons_years = vec![];
        assert_eq!(calculate(&input).unwrap_err(), CalcError::missing_field("horizons_years"));
        input.horizons_years = vec![10, 0];
        assert_eq!(calculate(&input).unwrap_err().field(), Some("horizons_years"));
    }

    #[test]
    fn test_json_defaults() {
        let input: OpportunityCostInput =
            serde_json::from_str(r#"{"amount": 4.5, "frequency": "weekly", "annual_return_percent": 7}"#).unwrap();
        assert_eq!(input.horizons_years, vec![10, 20, 30]);
        assert_eq!(input.frequency, SpendingFrequency::Weekly);
    }
}
