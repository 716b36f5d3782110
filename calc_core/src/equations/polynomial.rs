//! # Polynomial Algebra
//!
//! Parsing, like-term arithmetic and canonical formatting of polynomials
//! written the way people type them: `3x^2+2x-5`, `-x^3 + 0.5y`, `7`.
//!
//! ## Grammar
//!
//! ```text
//! polynomial := [sign] term (sign term)*
//! term       := number ['*'] variable ['^' digits] | number | variable ['^' digits]
//! number     := digits ['.' digits] | '.' digits
//! variable   := single ASCII letter
//! ```
//!
//! Whitespace is allowed between tokens. A term's identity is its
//! (variable, exponent) pair; `x^0` is the constant term.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::equations::Polynomial;
//!
//! let p = Polynomial::parse("3x^2+2x-5").unwrap();
//! let q = Polynomial::parse("x^2-7x+2").unwrap();
//! assert_eq!(p.add(&q).to_string(), "4x^2-5x-3");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::format::format_number;

/// Coefficients smaller than this are treated as cancelled
const ZERO_EPSILON: f64 = 1e-12;

/// Largest exponent accepted by the parser
pub const MAX_EXPONENT: u32 = 10_000;

/// Variable/exponent pair identifying a like term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monomial {
    /// `None` for the constant term
    pub variable: Option<char>,
    pub exponent: u32,
}

impl Monomial {
    /// The constant term (degree 0)
    pub const CONSTANT: Monomial = Monomial {
        variable: None,
        exponent: 0,
    };

    /// `variable^exponent`, collapsing exponent 0 to the constant term
    pub fn new(variable: char, exponent: u32) -> Self {
        if exponent == 0 {
            Monomial::CONSTANT
        } else {
            Monomial {
                variable: Some(variable),
                exponent,
            }
        }
    }
}

// Descending degree, then alphabetical by variable
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .exponent
            .cmp(&self.exponent)
            .then_with(|| self.variable.cmp(&other.variable))
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A polynomial as a map of like terms to coefficients.
///
/// Zero coefficients are never stored, so the zero polynomial has no terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    /// Parse polynomial text. See the module docs for the accepted grammar.
    pub fn parse(text: &str) -> CalcResult<Self> {
        Parser::new(text).parse()
    }

    /// Build from (coefficient, monomial) pairs, merging like terms
    pub fn from_terms(terms: impl IntoIterator<Item = (f64, Monomial)>) -> Self {
        let mut poly = Polynomial::default();
        for (coefficient, monomial) in terms {
            poly.accumulate(monomial, coefficient);
        }
        poly
    }

    fn accumulate(&mut self, monomial: Monomial, coefficient: f64) {
        let entry = self.terms.entry(monomial).or_insert(0.0);
        *entry += coefficient;
        if entry.abs() < ZERO_EPSILON {
            self.terms.remove(&monomial);
        }
    }

    /// Terms in canonical order (descending degree)
    pub fn terms(&self) -> impl Iterator<Item = (Monomial, f64)> + '_ {
        self.terms.iter().map(|(m, c)| (*m, *c))
    }

    /// Coefficient of a given term (0 if absent)
    pub fn coefficient(&self, monomial: Monomial) -> f64 {
        self.terms.get(&monomial).copied().unwrap_or(0.0)
    }

    /// Highest exponent present (0 for constants and the zero polynomial)
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(|m| m.exponent).max().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Distinct variables appearing in the polynomial, sorted
    pub fn variables(&self) -> Vec<char> {
        let mut vars: Vec<char> = self.terms.keys().filter_map(|m| m.variable).collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Sum of like terms
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (monomial, coefficient) in other.terms() {
            result.accumulate(monomial, coefficient);
        }
        result
    }

    /// Difference: every sign of `other` is negated, then like terms merged
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.negate())
    }

    pub fn negate(&self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|(m, c)| (*m, -c)).collect(),
        }
    }

    /// Product of two single-variable polynomials.
    ///
    /// Fails if the operands use more than one variable between them.
    pub fn multiply(&self, other: &Polynomial) -> CalcResult<Polynomial> {
        let variable = single_variable(self, other)?;
        let mut result = Polynomial::default();
        for (m1, c1) in self.terms() {
            for (m2, c2) in other.terms() {
                let exponent = m1.exponent.checked_add(m2.exponent).ok_or_else(|| {
                    CalcError::calculation_failed(
                        "Polynomial",
                        format!("exponent {} + {} overflows", m1.exponent, m2.exponent),
                    )
                })?;
                let monomial = match variable {
                    Some(v) => Monomial::new(v, exponent),
                    None => Monomial::CONSTANT,
                };
                result.accumulate(monomial, ensure_finite("Polynomial", "coefficient", c1 * c2)?);
            }
        }
        if let Some(c) = result.terms.values().find(|c| !c.is_finite()) {
            return Err(CalcError::calculation_failed(
                "Polynomial",
                format!("coefficient is not representable ({})", c),
            ));
        }
        Ok(result)
    }

    /// Evaluate a single-variable polynomial at `x`
    pub fn evaluate(&self, x: f64) -> CalcResult<f64> {
        single_variable(self, &Polynomial::default())?;
        let mut sum = 0.0;
        for (monomial, coefficient) in self.terms() {
            let exponent = i32::try_from(monomial.exponent).map_err(|_| {
                CalcError::calculation_failed("Polynomial", format!("exponent {} is too large", monomial.exponent))
            })?;
            sum += coefficient * x.powi(exponent);
        }
        ensure_finite("Polynomial", "value", sum)
    }
}

/// The one variable shared by both operands, if any
fn single_variable(p: &Polynomial, q: &Polynomial) -> CalcResult<Option<char>> {
    let mut vars = p.variables();
    vars.extend(q.variables());
    vars.sort_unstable();
    vars.dedup();
    match vars.as_slice() {
        [] => Ok(None),
        [v] => Ok(Some(*v)),
        _ => Err(CalcError::invalid_input(
            "polynomial",
            vars.iter().collect::<String>(),
            "Only single-variable polynomials are supported for this operation",
        )),
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for (monomial, coefficient) in self.terms() {
            let magnitude = format_number(coefficient.abs());
            // Too small to show at display precision
            if magnitude == "0" {
                continue;
            }
            if coefficient < 0.0 {
                write!(f, "-")?;
            } else if written {
                write!(f, "+")?;
            }
            written = true;
            match monomial.variable {
                None => write!(f, "{}", magnitude)?,
                Some(variable) => {
                    if magnitude != "1" {
                        write!(f, "{}", magnitude)?;
                    }
                    write!(f, "{}", variable)?;
                    if monomial.exponent != 1 {
                        write!(f, "^{}", monomial.exponent)?;
                    }
                }
            }
        }
        if !written {
            write!(f, "0")?;
        }
        Ok(())
    }
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> CalcError {
        CalcError::parse_error(self.input, self.pos, reason)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume a '+' or '-' and return the sign it denotes
    fn sign(&mut self) -> Option<f64> {
        match self.peek() {
            Some('+') => {
                self.pos += 1;
                Some(1.0)
            }
            Some('-') => {
                self.pos += 1;
                Some(-1.0)
            }
            _ => None,
        }
    }

    fn parse(mut self) -> CalcResult<Polynomial> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(self.error("Polynomial is empty"));
        }

        let mut terms = Vec::new();
        let mut sign = self.sign().unwrap_or(1.0);
        loop {
            self.skip_whitespace();
            let (coefficient, monomial) = self.term()?;
            terms.push((sign * coefficient, monomial));

            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(_) => match self.sign() {
                    Some(s) => sign = s,
                    None => {
                        let c = self.peek().unwrap_or_default();
                        return Err(self.error(format!("Unexpected character '{}'", c)));
                    }
                },
            }
        }
        Ok(Polynomial::from_terms(terms))
    }

    fn term(&mut self) -> CalcResult<(f64, Monomial)> {
        let coefficient = self.number()?;

        self.skip_whitespace();
        if coefficient.is_some() && self.peek() == Some('*') {
            self.pos += 1;
            self.skip_whitespace();
            if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                return Err(self.error("Expected a variable after '*'"));
            }
        }

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.pos += 1;
                let exponent = self.exponent()?;
                Ok((coefficient.unwrap_or(1.0), Monomial::new(c, exponent)))
            }
            _ => match coefficient {
                Some(value) => Ok((value, Monomial::CONSTANT)),
                None => Err(self.error("Expected a term")),
            },
        }
    }

    fn number(&mut self) -> CalcResult<Option<f64>> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            Ok(_) => Err(CalcError::parse_error(self.input, start, "Coefficient is too large")),
            Err(_) => Err(CalcError::parse_error(self.input, start, format!("Invalid number '{}'", text))),
        }
    }

    fn exponent(&mut self) -> CalcResult<u32> {
        self.skip_whitespace();
        if self.peek() != Some('^') {
            return Ok(1);
        }
        self.pos += 1;
        self.skip_whitespace();

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("Expected a non-negative integer exponent after '^'"));
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        match text.parse::<u32>() {
            Ok(exponent) if exponent <= MAX_EXPONENT => Ok(exponent),
            _ => Err(CalcError::parse_error(
                self.input,
                start,
                format!("Exponent '{}' exceeds {}", text, MAX_EXPONENT),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(text: &str) -> Polynomial {
        Polynomial::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_format_canonical() {
        assert_eq!(poly("3x^2+2x-5").to_string(), "3x^2+2x-5");
        assert_eq!(poly(" -5 + 2x + 3x^2 ").to_string(), "3x^2+2x-5");
        assert_eq!(poly("x").to_string(), "x");
        assert_eq!(poly("-x^3").to_string(), "-x^3");
        assert_eq!(poly("2*x^2").to_string(), "2x^2");
        assert_eq!(poly("0.5y - 1.25").to_string(), "0.5y-1.25");
    }

    #[test]
    fn test_parse_merges_like_terms() {
        assert_eq!(poly("x + x + x^0").to_string(), "2x+1");
        assert_eq!(poly("x - x").to_string(), "0");
    }

    #[test]
    fn test_add() {
        let sum = poly("3x^2+2x-5").add(&poly("x^2-7x+2"));
        assert_eq!(sum.to_string(), "4x^2-5x-3");
    }

    #[test]
    fn test_subtract_negates_second_operand() {
        let diff = poly("3x^2+2x-5").subtract(&poly("x^2-7x+2"));
        assert_eq!(diff.to_string(), "2x^2+9x-7");
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let p = poly("4x^3-2x+9");
        assert!(p.subtract(&p).is_zero());
    }

    #[test]
    fn test_mixed_variables_kept_separate() {
        let sum = poly("2x+3y").add(&poly("x-3y+1"));
        assert_eq!(sum.to_string(), "3x+1");
    }

    #[test]
    fn test_multiply() {
        let product = poly("x+1").multiply(&poly("x-1")).unwrap();
        assert_eq!(product.to_string(), "x^2-1");
        assert!(poly("x").multiply(&poly("y")).is_err());
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(poly("3x^2+2x-5").evaluate(2.0).unwrap(), 11.0);
        assert_eq!(poly("7").evaluate(100.0).unwrap(), 7.0);
    }

    #[test]
    fn test_large_exponents_rejected_at_parse() {
        assert_eq!(poly("x^10000").degree(), MAX_EXPONENT);
        for bad in ["x^10001", "x^4294967295", "x^99999999999"] {
            assert_eq!(Polynomial::parse(bad).unwrap_err().error_code(), "PARSE_ERROR", "{}", bad);
        }
    }

    #[test]
    fn test_multiply_exponent_overflow_is_an_error() {
        let huge = Polynomial::from_terms([(1.0, Monomial::new('x', u32::MAX))]);
        let err = huge.multiply(&poly("x")).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_evaluate_rejects_unrepresentable_values() {
        let huge = Polynomial::from_terms([(1.0, Monomial::new('x', u32::MAX))]);
        assert_eq!(huge.evaluate(2.0).unwrap_err().error_code(), "CALCULATION_FAILED");
        assert_eq!(poly("x^400").evaluate(10.0).unwrap_err().error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_oversized_coefficient_rejected() {
        let digits = "9".repeat(400);
        assert_eq!(Polynomial::parse(&digits).unwrap_err().error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_tiny_coefficients_not_displayed() {
        let p = Polynomial::from_terms([(2e-11, Monomial::new('x', 1)), (3.0, Monomial::CONSTANT)]);
        assert_eq!(p.to_string(), "3");
        let p = Polynomial::from_terms([(-2e-11, Monomial::new('x', 2)), (1.0, Monomial::new('x', 1))]);
        assert_eq!(p.to_string(), "x");
        let p = Polynomial::from_terms([(4e-11, Monomial::new('x', 1))]);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn test_degree() {
        assert_eq!(poly("x^5 - x").degree(), 5);
        assert_eq!(poly("4").degree(), 0);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "   ", "3x^", "3x^-2", "2x++3", "x y", "3$", "+", "1.2.3x", "2*"] {
            let err = Polynomial::parse(bad).unwrap_err();
            assert_eq!(err.error_code(), "PARSE_ERROR", "input {:?}", bad);
        }
    }

    #[test]
    fn test_parse_error_position() {
        match Polynomial::parse("3x^2 + ?") {
            Err(CalcError::ParseError { position, .. }) => assert_eq!(position, 7),
            other => panic!("unexpected {:?}", other),
        }
    }
}
