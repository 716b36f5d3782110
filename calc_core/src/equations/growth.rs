//! # Growth and Time-Value Formulas
//!
//! ## Notation
//!
//! - `PV` = Present value, `FV` = Future value
//! - `P` = Periodic payment (end of period)
//! - `i` = Rate per period as a fraction (`0.05` = 5 %)
//! - `n` = Number of periods

/// One period of compound growth: V · (1 + i)
#[inline]
pub fn compound_step(value: f64, i: f64) -> f64 {
    value * (1.0 + i)
}

/// Future value of a lump sum: FV = PV · (1 + i)ⁿ
#[inline]
pub fn future_value_lump_sum(pv: f64, i: f64, n: f64) -> f64 {
    pv * (1.0 + i).powf(n)
}

/// Future value of an ordinary annuity
///
/// # Formulas
/// - FV = P · ((1 + i)ⁿ − 1) / i     for i ≠ 0
/// - FV = P · n                      for i = 0
#[inline]
pub fn future_value_annuity(payment: f64, i: f64, n: f64) -> f64 {
    if i == 0.0 {
        payment * n
    } else {
        // exp_m1/ln_1p keep precision for very small rates
        payment * (n * i.ln_1p()).exp_m1() / i
    }
}

/// Exact doubling time in periods: ln 2 / ln(1 + i)
#[inline]
pub fn doubling_time_exact(i: f64) -> f64 {
    std::f64::consts::LN_2 / i.ln_1p()
}

/// Rule-of-thumb doubling time: `numerator / rate_percent`
///
/// `numerator` is 72 for the Rule of 72, 70 for the Rule of 70.
#[inline]
pub fn doubling_time_rule(numerator: f64, rate_percent: f64) -> f64 {
    numerator / rate_percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compound_step() {
        assert_relative_eq!(compound_step(100.0, 0.10), 110.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lump_sum() {
        // 1000 at 5 % for 10 periods
        assert_relative_eq!(future_value_lump_sum(1000.0, 0.05, 10.0), 1628.894627, epsilon = 1e-6);
    }

    #[test]
    fn test_annuity_matches_closed_form() {
        // 100 per period at 1 % for 12 periods
        let expected = 100.0 * (1.01_f64.powi(12) - 1.0) / 0.01;
        assert_relative_eq!(future_value_annuity(100.0, 0.01, 12.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_zero_rate() {
        assert_relative_eq!(future_value_annuity(50.0, 0.0, 24.0), 1200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_doubling_time() {
        assert_relative_eq!(doubling_time_exact(0.10), 7.272540897, epsilon = 1e-8);
        assert_relative_eq!(doubling_time_rule(72.0, 10.0), 7.2, epsilon = 1e-12);
    }
}
