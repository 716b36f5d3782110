//! # Bessel Function Evaluation
//!
//! Integer-order Bessel functions of the first (`J`) and second (`Y`) kind.
//!
//! - Negative orders: J₋ₙ(x) = (−1)ⁿ·Jₙ(x), Y₋ₙ(x) = (−1)ⁿ·Yₙ(x)
//! - J is defined for every real x; Y only for x ≥ 0
//! - Y is singular at x = 0: the result carries ∓∞ with `singular = true`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::special::bessel::{calculate, BesselInput, BesselKind};
//!
//! let result = calculate(&BesselInput { kind: BesselKind::J, order: 0, x: 0.0 }).unwrap();
//! assert_eq!(result.value, 1.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::{bessel_jn, bessel_yn};
use crate::errors::{require_finite, CalcError, CalcResult};

/// Highest |order| accepted
pub const MAX_ORDER: i32 = 1000;

/// Kind of Bessel function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BesselKind {
    /// First kind, Jn
    J,
    /// Second kind (Neumann), Yn
    Y,
}

impl BesselKind {
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "j" | "first" | "first_kind" => Ok(BesselKind::J),
            "y" | "second" | "second_kind" | "neumann" => Ok(BesselKind::Y),
            _ => Err(CalcError::invalid_input("kind", s, "Expected J or Y")),
        }
    }
}

impl fmt::Display for BesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BesselKind::J => write!(f, "J"),
            BesselKind::Y => write!(f, "Y"),
        }
    }
}

/// Bessel function evaluation request.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "J", "order": 2, "x": 1.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BesselInput {
    pub kind: BesselKind,
    pub order: i32,
    pub x: f64,
}

impl BesselInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("x", self.x)?;
        if self.order.abs() > MAX_ORDER {
            return Err(CalcError::invalid_input(
                "order",
                self.order.to_string(),
                format!("Order magnitude cannot exceed {}", MAX_ORDER),
            ));
        }
        if self.kind == BesselKind::Y && self.x < 0.0 {
            return Err(CalcError::invalid_input(
                "x",
                self.x.to_string(),
                "Bessel functions of the second kind are undefined for negative x",
            ));
        }
        Ok(())
    }
}

/// Evaluated function value.
///
/// JSON has no infinity, so a singular value is written as the string
/// `"-inf"` (or `"inf"`) and read back from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BesselResult {
    /// Function value; ±∞ when `singular`
    #[serde(with = "extended_float")]
    pub value: f64,
    /// True when evaluated at the singularity of Y (x = 0)
    pub singular: bool,
}

/// f64 that may be ±∞, stored as a number or an "inf"/"-inf" string
mod extended_float {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_sign_negative() {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_str("inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.trim().to_lowercase().as_str() {
                "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
                "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!(
                    "expected a number or \"inf\"/\"-inf\", got \"{}\"",
                    other
                ))),
            },
        }
    }
}

/// Evaluate Jₙ(x) or Yₙ(x).
pub fn calculate(input: &BesselInput) -> CalcResult<BesselResult> {
    input.validate()?;

    let n = input.order.unsigned_abs();
    let magnitude = match input.kind {
        BesselKind::J => bessel_jn(n, input.x),
        BesselKind::Y => bessel_yn(n, input.x),
    };
    let value = if input.order < 0 && n % 2 == 1 {
        -magnitude
    } else {
        magnitude
    };

    let singular = input.kind == BesselKind::Y && input.x == 0.0;
    if !singular && !value.is_finite() {
        return Err(CalcError::calculation_failed(
            "Bessel",
            format!("{}{}({}) is not representable", input.kind, input.order, input.x),
        ));
    }
    Ok(BesselResult { value, singular })
}
