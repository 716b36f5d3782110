//! # Polynomial Arithmetic
//!
//! Adds, subtracts or multiplies two polynomials given as text and returns
//! the canonical form (descending degree, like terms merged).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::algebra::polynomial::{calculate, PolynomialInput, PolynomialOperation};
//!
//! let input = PolynomialInput {
//!     first: "3x^2+2x-5".to_string(),
//!     second: "x^2-7x+2".to_string(),
//!     operation: PolynomialOperation::Add,
//!     evaluate_at: None,
//! };
//! assert_eq!(calculate(&input).unwrap().result, "4x^2-5x-3");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::polynomial::Polynomial;
use crate::errors::{ensure_finite, require_finite, CalcError, CalcResult};

/// Operation applied to the two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolynomialOperation {
    Add,
    Subtract,
    Multiply,
}

impl PolynomialOperation {
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" | "plus" | "sum" => Ok(PolynomialOperation::Add),
            "subtract" | "sub" | "-" | "minus" => Ok(PolynomialOperation::Subtract),
            "multiply" | "mul" | "*" | "times" => Ok(PolynomialOperation::Multiply),
            _ => Err(CalcError::invalid_input("operation", s, "Expected add, subtract or multiply")),
        }
    }
}

/// Inputs for polynomial arithmetic.
///
/// ## JSON Example
///
/// ```json
/// { "first": "3x^2+2x-5", "second": "x^2-7x+2", "operation": "subtract" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialInput {
    pub first: String,
    pub second: String,
    pub operation: PolynomialOperation,
    /// Optionally evaluate the result at this x (single-variable results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate_at: Option<f64>,
}

impl PolynomialInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.first.trim().is_empty() {
            return Err(CalcError::missing_field("first"));
        }
        if self.second.trim().is_empty() {
            return Err(CalcError::missing_field("second"));
        }
        if let Some(x) = self.evaluate_at {
            require_finite("evaluate_at", x)?;
        }
        Ok(())
    }
}

/// One term of the result in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolynomialTerm {
    pub coefficient: f64,
    pub variable: Option<char>,
    pub exponent: u32,
}

/// Results from polynomial arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialResult {
    /// Canonical text, e.g. "4x^2-5x-3"
    pub result: String,
    /// Canonical forms of the operands as parsed
    pub first_normalized: String,
    pub second_normalized: String,
    pub degree: u32,
    pub terms: Vec<PolynomialTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Parse both operands, combine them and format the result.
pub fn calculate(input: &PolynomialInput) -> CalcResult<PolynomialResult> {
    input.validate()?;

    let first = Polynomial::parse(&input.first)?;
    let second = Polynomial::parse(&input.second)?;

    let combined = match input.operation {
        PolynomialOperation::Add => first.add(&second),
        PolynomialOperation::Subtract => first.subtract(&second),
        PolynomialOperation::Multiply => first.multiply(&second)?,
    };

    let value = match input.evaluate_at {
        Some(x) => Some(combined.evaluate(x)?),
        None => None,
    };

    let terms = combined
        .terms()
        .map(|(monomial, coefficient)| {
            Ok(PolynomialTerm {
                coefficient: ensure_finite("Polynomial", "coefficient", coefficient)?,
                variable: monomial.variable,
                exponent: monomial.exponent,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(PolynomialResult {
        result: combined.to_string(),
        first_normalized: first.to_string(),
        second_normalized: second.to_string(),
        degree: combined.degree(),
        terms,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first: &str, second: &str, operation: PolynomialOperation) -> PolynomialInput {
        PolynomialInput {
            first: first.to_string(),
            second: second.to_string(),
            operation,
            evaluate_at: None,
        }
    }

    #[test]
    fn test_add() {
        let result = calculate(&input("3x^2+2x-5", "x^2-7x+2", PolynomialOperation::Add)).unwrap();
        assert_eq!(result.result, "4x^2-5x-3");
        assert_eq!(result.degree, 2);
        assert_eq!(result.terms.len(), 3);
        assert_eq!(result.terms[0].coefficient, 4.0);
        assert_eq!(result.terms[2].variable, None);
    }

    #[test]
    fn test_subtract() {
        let result = calculate(&input("5x^3 - x", "2x^3 + 4x - 1", PolynomialOperation::Subtract)).unwrap();
        assert_eq!(result.result, "3x^3-5x+1");
    }

    #[test]
    fn test_multiply_and_evaluate() {
        let mut req = input("x+2", "x-3", PolynomialOperation::Multiply);
        req.evaluate_at = Some(4.0);
        let result = calculate(&req).unwrap();
        assert_eq!(result.result, "x^2-x-6");
        assert_eq!(result.value, Some(6.0));
    }

    #[test]
    fn test_normalized_operands() {
        let result = calculate(&input("2 + x^2", "0", PolynomialOperation::Add)).unwrap();
        assert_eq!(result.first_normalized, "x^2+2");
        assert_eq!(result.second_normalized, "0");
    }

    #[test]
    fn test_malformed_operand() {
        let err = calculate(&input("3x^", "x", PolynomialOperation::Add)).unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_huge_exponent_is_a_parse_error() {
        let err = calculate(&input("x^4294967295", "x", PolynomialOperation::Multiply)).unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_overflowing_results_fail() {
        let mut req = input("x^300", "1", PolynomialOperation::Multiply);
        req.evaluate_at = Some(1e10);
        assert_eq!(calculate(&req).unwrap_err().error_code(), "CALCULATION_FAILED");

        let big = format!("1{}", "0".repeat(308));
        let err = calculate(&input(&big, &big, PolynomialOperation::Add)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_missing_operand() {
        let err = calculate(&input("x", " ", PolynomialOperation::Add)).unwrap_err();
        assert_eq!(err, CalcError::missing_field("second"));
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!(PolynomialOperation::from_str_flexible("SUB").unwrap(), PolynomialOperation::Subtract);
        assert!(PolynomialOperation::from_str_flexible("divide").is_err());
    }
}
