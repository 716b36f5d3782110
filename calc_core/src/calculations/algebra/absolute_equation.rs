//! # Absolute-Value Equation
//!
//! Solves |ax + b| = c.
//!
//! - c < 0: no solution (an absolute value is never negative)
//! - c ≥ 0: ax + b = c or ax + b = −c, giving x = (±c − b) / a
//! - c = 0: the two roots coincide at x = −b/a
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::algebra::absolute_equation::{calculate, AbsEquationInput, AbsEquationSolution};
//!
//! let result = calculate(&AbsEquationInput { a: 2.0, b: 3.0, c: 7.0 }).unwrap();
//! assert_eq!(result.solution, AbsEquationSolution::Roots { x1: -5.0, x2: 2.0 });
//! assert_eq!(result.description, "x = -5 or x = 2");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, require_finite, CalcError, CalcResult};
use crate::format::format_number;

/// Coefficients of |ax + b| = c
///
/// ## JSON Example
///
/// ```json
/// { "a": 2.0, "b": 3.0, "c": 7.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsEquationInput {
    /// Coefficient of x (must be non-zero)
    pub a: f64,
    /// Constant inside the absolute value
    pub b: f64,
    /// Right-hand side
    pub c: f64,
}

impl AbsEquationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("a", self.a)?;
        require_finite("b", self.b)?;
        require_finite("c", self.c)?;
        if self.a == 0.0 {
            return Err(CalcError::invalid_input("a", "0", "Coefficient of x must be non-zero"));
        }
        Ok(())
    }
}

/// Solution set of an absolute-value equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbsEquationSolution {
    /// c < 0
    NoSolution,
    /// Both roots, ascending. Equal when c = 0.
    Roots { x1: f64, x2: f64 },
}

/// Results from solving |ax + b| = c.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsEquationResult {
    pub solution: AbsEquationSolution,
    /// e.g. "x = -5 or x = 2", "x = 1.5", "no solution"
    pub description: String,
}

/// Solve |ax + b| = c.
pub fn calculate(input: &AbsEquationInput) -> CalcResult<AbsEquationResult> {
    input.validate()?;
    let AbsEquationInput { a, b, c } = *input;

    if c < 0.0 {
        return Ok(AbsEquationResult {
            solution: AbsEquationSolution::NoSolution,
            description: "no solution".to_string(),
        });
    }

    let r1 = ensure_finite("AbsoluteEquation", "root", (c - b) / a)?;
    let r2 = ensure_finite("AbsoluteEquation", "root", (-c - b) / a)?;
    let (x1, x2) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    let description = if c == 0.0 {
        format!("x = {}", format_number(x1))
    } else {
        format!("x = {} or x = {}", format_number(x1), format_number(x2))
    };

    Ok(AbsEquationResult {
        solution: AbsEquationSolution::Roots { x1, x2 },
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn solve(a: f64, b: f64, c: f64) -> AbsEquationResult {
        calculate(&AbsEquationInput { a, b, c }).unwrap()
    }

    #[test]
    fn test_two_roots() {
        let result = solve(2.0, 3.0, 7.0);
        assert_eq!(result.solution, AbsEquationSolution::Roots { x1: -5.0, x2: 2.0 });
    }

    #[test]
    fn test_negative_coefficient_roots_sorted() {
        // |-x + 1| = 2 → x = -1 or x = 3
        let result = solve(-1.0, 1.0, 2.0);
        assert_eq!(result.solution, AbsEquationSolution::Roots { x1: -1.0, x2: 3.0 });
    }

    #[test]
    fn test_c_zero_single_root() {
        let result = solve(4.0, -6.0, 0.0);
        assert_eq!(result.solution, AbsEquationSolution::Roots { x1: 1.5, x2: 1.5 });
        assert_eq!(result.description, "x = 1.5");
    }

    #[test]
    fn test_negative_c_no_solution() {
        let result = solve(1.0, 0.0, -1.0);
        assert_eq!(result.solution, AbsEquationSolution::NoSolution);
        assert_eq!(result.description, "no solution");
    }

    #[test]
    fn test_zero_coefficient_rejected() {
        let err = calculate(&AbsEquationInput { a: 0.0, b: 1.0, c: 1.0 }).unwrap_err();
        assert_eq!(err.field(), Some("a"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AbsEquationSolution::Roots { x1: 1.0, x2: 2.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"roots","x1":1.0,"x2":2.0}"#);
    }

    proptest! {
        #[test]
        fn roots_satisfy_equation(
            a in prop_oneof![-100.0..-0.01f64, 0.01..100.0f64],
            b in -100.0..100.0f64,
            c in 0.0..100.0f64,
        ) {
            let result = solve(a, b, c);
            match result.solution {
                AbsEquationSolution::Roots { x1, x2 } => {
                    for x in [x1, x2] {
                        let lhs = (a * x + b).abs();
                        prop_assert!((lhs - c).abs() < 1e-6 * (1.0 + c), "|{}x+{}| at {} = {} != {}", a, b, x, lhs, c);
                    }
                    prop_assert!(x1 <= x2);
                }
                AbsEquationSolution::NoSolution => prop_assert!(false, "c >= 0 must have roots"),
            }
        }

        #[test]
        fn negative_c_never_solves(a in 0.01..50.0f64, b in -50.0..50.0f64, c in -50.0..-0.001f64) {
            prop_assert_eq!(solve(a, b, c).solution, AbsEquationSolution::NoSolution);
        }
    }
}
