//! # Compound Interest
//!
//! Future value of a lump sum plus optional equal deposits made at the end
//! of every compounding period.
//!
//! - FV = PV·(1 + r/m)^(m·t) + C·((1 + r/m)^(m·t) − 1)/(r/m)
//! - Effective annual rate = (1 + r/m)^m − 1

use serde::{Deserialize, Serialize};

use crate::equations::growth::{future_value_annuity, future_value_lump_sum};
use crate::errors::{ensure_finite, require_non_negative, CalcError, CalcResult};

/// Savings or loan balance inputs.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 10000.0, "annual_rate_percent": 5.0, "compounds_per_year": 12, "years": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    /// 1 = annually, 12 = monthly, 365 = daily
    pub compounds_per_year: u32,
    pub years: f64,
    /// Deposit at the end of each compounding period
    #[serde(default)]
    pub periodic_contribution: f64,
}

impl CompoundInterestInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_non_negative("years", self.years)?;
        require_non_negative("periodic_contribution", self.periodic_contribution)?;
        if self.compounds_per_year == 0 {
            return Err(CalcError::invalid_input(
                "compounds_per_year",
                "0",
                "Interest must compound at least once per year",
            ));
        }
        Ok(())
    }
}

/// Results of the compound-interest projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub future_value: f64,
    /// Principal plus every contribution
    pub total_contributed: f64,
    /// future_value − total_contributed
    pub total_interest: f64,
    pub effective_annual_rate_percent: f64,
}

/// Project a balance forward under compound interest.
pub fn calculate(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;

    let m = f64::from(input.compounds_per_year);
    let i = input.annual_rate_percent / 100.0 / m;
    let n = m * input.years;

    let future_value = ensure_finite(
        "CompoundInterest",
        "future value",
        future_value_lump_sum(input.principal, i, n) + future_value_annuity(input.periodic_contribution, i, n),
    )?;
    let total_contributed = ensure_finite(
        "CompoundInterest",
        "total contributed",
        input.principal + input.periodic_contribution * n,
    )?;

    Ok(CompoundInterestResult {
        future_value,
        total_contributed,
        total_interest: ensure_finite("CompoundInterest", "total interest", future_value - total_contributed)?,
        effective_annual_rate_percent: ensure_finite(
            "CompoundInterest",
            "effective annual rate",
            ((1.0 + i).powf(m) - 1.0) * 100.0,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(principal: f64, rate: f64, m: u32, years: f64, contribution: f64) -> CompoundInterestInput {
        CompoundInterestInput {
            principal,
            annual_rate_percent: rate,
            compounds_per_year: m,
            years,
            periodic_contribution: contribution,
        }
    }

    #[test]
    fn test_annual_compounding() {
        let result = calculate(&input(1000.0, 5.0, 1, 10.0, 0.0)).unwrap();
        assert_relative_eq!(result.future_value, 1628.894627, epsilon = 1e-6);
        assert_relative_eq!(result.total_interest, 628.894627, epsilon = 1e-6);
    }

    #[test]
    fn test_monthly_compounding_effective_rate() {
        let result = calculate(&input(1000.0, 12.0, 12, 1.0, 0.0)).unwrap();
        assert_relative_eq!(result.effective_annual_rate_percent, 12.682503, epsilon = 1e-6);
        assert_relative_eq!(result.future_value, 1126.825030, epsilon = 1e-6);
    }

    #[test]
    fn test_contributions() {
        // 0 principal, 100 per month at 6 % for 10 years
        let result = calculate(&input(0.0, 6.0, 12, 10.0, 100.0)).unwrap();
        assert_relative_eq!(result.future_value, 16_387.93468, epsilon = 1e-4);
        assert_relative_eq!(result.total_contributed, 12_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_compounding_rejected() {
        assert_eq!(
            calculate(&input(1.0, 1.0, 0, 1.0, 0.0)).unwrap_err().field(),
            Some("compounds_per_year")
        );
    }
}
