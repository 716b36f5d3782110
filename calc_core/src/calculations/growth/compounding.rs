//! # Compounding Increase
//!
//! Applies a fixed percentage increase repeatedly over N discrete periods
//! and records the value after every period for charting.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::growth::compounding::{calculate, CompoundingInput};
//!
//! let result = calculate(&CompoundingInput { initial_value: 100.0, rate_percent: 10.0, periods: 2 }).unwrap();
//! assert!((result.final_value - 121.0).abs() < 1e-9);
//! assert_eq!(result.series.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::growth::compound_step;
use crate::errors::{ensure_finite, require_finite, require_non_negative, CalcError, CalcResult};

/// Upper bound on periods so the series stays chartable
pub const MAX_PERIODS: u32 = 10_000;

/// Inputs for a compounding increase.
///
/// ## JSON Example
///
/// ```json
/// { "initial_value": 100.0, "rate_percent": 10.0, "periods": 5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingInput {
    pub initial_value: f64,
    /// Growth per period in percent (10.0 = 10 %)
    pub rate_percent: f64,
    pub periods: u32,
}

impl CompoundingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("initial_value", self.initial_value)?;
        require_non_negative("rate_percent", self.rate_percent)?;
        if self.periods > MAX_PERIODS {
            return Err(CalcError::invalid_input(
                "periods",
                self.periods.to_string(),
                format!("Periods cannot exceed {}", MAX_PERIODS),
            ));
        }
        Ok(())
    }
}

/// Value at the end of one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub period: u32,
    pub value: f64,
    /// Increase during this period (0 for period 0)
    pub increase: f64,
}

/// Results from a compounding increase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingResult {
    pub final_value: f64,
    /// final_value − initial_value
    pub total_growth: f64,
    /// Overall growth relative to the starting value, percent
    pub total_growth_percent: f64,
    /// Period 0 (initial value) through period N
    pub series: Vec<GrowthPoint>,
}

/// Apply the growth rate period by period.
pub fn calculate(input: &CompoundingInput) -> CalcResult<CompoundingResult> {
    input.validate()?;
    let rate = input.rate_percent / 100.0;

    let mut series = Vec::with_capacity(input.periods as usize + 1);
    series.push(GrowthPoint {
        period: 0,
        value: input.initial_value,
        increase: 0.0,
    });

    let mut value = input.initial_value;
    // Tracked separately so the percentage is defined for a zero start value
    let mut factor = 1.0;
    for period in 1..=input.periods {
        let next = compound_step(value, rate);
        factor = compound_step(factor, rate);
        series.push(GrowthPoint {
            period,
            value: next,
            increase: next - value,
        });
        value = next;
    }

    let final_value = ensure_finite("Compounding", "final value", value)?;
    Ok(CompoundingResult {
        final_value,
        total_growth: final_value - input.initial_value,
        total_growth_percent: ensure_finite("Compounding", "growth percent", (factor - 1.0) * 100.0)?,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn compound(initial_value: f64, rate_percent: f64, periods: u32) -> CompoundingResult {
        calculate(&CompoundingInput {
            initial_value,
            rate_percent,
            periods,
        })
        .unwrap()
    }

    #[test]
    fn test_single_period() {
        let result = compound(100.0, 10.0, 1);
        assert_relative_eq!(result.final_value, 110.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_growth, 10.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_growth_percent, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_series_shape() {
        let result = compound(1000.0, 5.0, 3);
        assert_eq!(result.series.len(), 4);
        assert_eq!(result.series[0].value, 1000.0);
        assert_relative_eq!(result.series[1].increase, 50.0, epsilon = 1e-9);
        assert_relative_eq!(result.series[3].value, 1157.625, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_periods() {
        let result = compound(42.0, 7.0, 0);
        assert_eq!(result.final_value, 42.0);
        assert_eq!(result.total_growth, 0.0);
        assert_eq!(result.series.len(), 1);
    }

    #[test]
    fn test_zero_start_value() {
        let result = compound(0.0, 10.0, 2);
        assert_eq!(result.final_value, 0.0);
        assert_relative_eq!(result.total_growth_percent, 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&CompoundingInput { initial_value: 1.0, rate_percent: -1.0, periods: 1 }).is_err());
        assert!(calculate(&CompoundingInput { initial_value: 1.0, rate_percent: 1.0, periods: MAX_PERIODS + 1 }).is_err());
    }

    #[test]
    fn test_overflow_reported() {
        let err = calculate(&CompoundingInput { initial_value: 1e300, rate_percent: 1000.0, periods: 100 }).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    proptest! {
        #[test]
        fn zero_rate_keeps_value(initial in -1e6..1e6f64, periods in 0u32..500) {
            let result = compound(initial, 0.0, periods);
            prop_assert_eq!(result.final_value, initial);
            prop_assert!(result.series.iter().all(|p| p.value == initial));
        }
    }
}
