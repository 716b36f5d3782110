//! # Percentage Calculator
//!
//! The four everyday percentage questions:
//!
//! | Mode | Question | Formula |
//! |------|----------|---------|
//! | `percent_of` | What is P % of B? | P/100 × B |
//! | `what_percent` | Part is what % of whole? | part / whole × 100 |
//! | `change` | % change from A to B? | (B − A) / \|A\| × 100 |
//! | `difference` | % difference between A and B? | \|A − B\| / ((A + B)/2) × 100 |

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, require_finite, CalcError, CalcResult};
use crate::format::format_number;

/// Percentage question to answer.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "change", "from": 80.0, "to": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PercentageInput {
    PercentOf { percent: f64, base: f64 },
    WhatPercent { part: f64, whole: f64 },
    Change { from: f64, to: f64 },
    Difference { a: f64, b: f64 },
}

impl PercentageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            PercentageInput::PercentOf { percent, base } => {
                require_finite("percent", percent)?;
                require_finite("base", base)
            }
            PercentageInput::WhatPercent { part, whole } => {
                require_finite("part", part)?;
                require_finite("whole", whole)?;
                if whole == 0.0 {
                    return Err(CalcError::invalid_input("whole", "0", "Whole cannot be zero"));
                }
                Ok(())
            }
            PercentageInput::Change { from, to } => {
                require_finite("from", from)?;
                require_finite("to", to)?;
                if from == 0.0 {
                    return Err(CalcError::invalid_input("from", "0", "Change from zero is undefined"));
                }
                Ok(())
            }
            PercentageInput::Difference { a, b } => {
                require_finite("a", a)?;
                require_finite("b", b)?;
                if a + b == 0.0 {
                    return Err(CalcError::invalid_input(
                        "b",
                        b.to_string(),
                        "Mean of the two values cannot be zero",
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            PercentageInput::PercentOf { .. } => "percent_of",
            PercentageInput::WhatPercent { .. } => "what_percent",
            PercentageInput::Change { .. } => "change",
            PercentageInput::Difference { .. } => "difference",
        }
    }
}

/// Answer plus a one-line sentence describing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    pub value: f64,
    pub description: String,
}

/// Answer a percentage question.
pub fn calculate(input: &PercentageInput) -> CalcResult<PercentageResult> {
    input.validate()?;

    let (value, description) = match *input {
        PercentageInput::PercentOf { percent, base } => {
            let value = percent / 100.0 * base;
            let text = format!(
                "{}% of {} is {}",
                format_number(percent),
                format_number(base),
                format_number(value)
            );
            (value, text)
        }
        PercentageInput::WhatPercent { part, whole } => {
            let value = part / whole * 100.0;
            let text = format!(
                "{} is {}% of {}",
                format_number(part),
                format_number(value),
                format_number(whole)
            );
            (value, text)
        }
        PercentageInput::Change { from, to } => {
            let value = (to - from) / from.abs() * 100.0;
            let direction = if value < 0.0 { "decrease" } else { "increase" };
            let text = format!(
                "{} to {} is a {}% {}",
                format_number(from),
                format_number(to),
                format_number(value.abs()),
                direction
            );
            (value, text)
        }
        PercentageInput::Difference { a, b } => {
            let value = (a - b).abs() / ((a + b) / 2.0).abs() * 100.0;
            let text = format!(
                "{} and {} differ by {}%",
                format_number(a),
                format_number(b),
                format_number(value)
            );
            (value, text)
        }
    };

    let value = ensure_finite("Percentage", input.mode(), value)?;
    Ok(PercentageResult { value, description })
}
