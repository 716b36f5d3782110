//! # Absolute-Value Inequality
//!
//! Solves |ax + b| op c for op ∈ {<, ≤, >, ≥}.
//!
//! With r1 ≤ r2 the roots of |ax + b| = c (c > 0):
//!
//! | op | solution |
//! |---|---|
//! | `<`, `≤` | r1 < x < r2 (bounded interval) |
//! | `>`, `≥` | x < r1 or x > r2 (union of two rays) |
//!
//! Degenerate right-hand sides:
//!
//! | op | c < 0 | c = 0 |
//! |---|---|---|
//! | `<` | no solution | no solution |
//! | `≤` | no solution | x = −b/a |
//! | `>` | all reals | all reals except −b/a |
//! | `≥` | all reals | all reals |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, require_finite, CalcError, CalcResult};
use crate::format::format_number;

/// Comparison operator of the inequality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InequalityOperator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl InequalityOperator {
    pub const ALL: [InequalityOperator; 4] = [
        InequalityOperator::Less,
        InequalityOperator::LessOrEqual,
        InequalityOperator::Greater,
        InequalityOperator::GreaterOrEqual,
    ];

    /// Parse from symbol or mnemonic ("<=", "≤", "le", ...)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "<" | "lt" => Ok(InequalityOperator::Less),
            "<=" | "≤" | "le" | "lte" => Ok(InequalityOperator::LessOrEqual),
            ">" | "gt" => Ok(InequalityOperator::Greater),
            ">=" | "≥" | "ge" | "gte" => Ok(InequalityOperator::GreaterOrEqual),
            _ => Err(CalcError::invalid_input("operator", s, "Expected one of <, <=, >, >=")),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InequalityOperator::Less => "<",
            InequalityOperator::LessOrEqual => "≤",
            InequalityOperator::Greater => ">",
            InequalityOperator::GreaterOrEqual => "≥",
        }
    }

    /// Whether equality is included
    pub fn is_inclusive(&self) -> bool {
        matches!(self, InequalityOperator::LessOrEqual | InequalityOperator::GreaterOrEqual)
    }

    /// `lhs op rhs`
    pub fn holds(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            InequalityOperator::Less => lhs < rhs,
            InequalityOperator::LessOrEqual => lhs <= rhs,
            InequalityOperator::Greater => lhs > rhs,
            InequalityOperator::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl fmt::Display for InequalityOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Inputs for |ax + b| op c
///
/// ## JSON Example
///
/// ```json
/// { "a": 1.0, "b": 1.0, "operator": "<", "c": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsInequalityInput {
    /// Coefficient of x (must be non-zero)
    pub a: f64,
    pub b: f64,
    pub operator: InequalityOperator,
    pub c: f64,
}

impl AbsInequalityInput {
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

/// Solution set of an absolute-value inequality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InequalitySolution {
    NoSolution,
    AllReals,
    /// Exactly one value
    Point { x: f64 },
    /// Every real except one value
    AllRealsExcept { x: f64 },
    /// lower < x < upper (or ≤ when inclusive)
    Interval { lower: f64, upper: f64, inclusive: bool },
    /// x < left_upper or x > right_lower (or ≤/≥ when inclusive)
    Union { left_upper: f64, right_lower: f64, inclusive: bool },
}

impl InequalitySolution {
    /// Whether `x` belongs to the solution set
    pub fn contains(&self, x: f64) -> bool {
        match *self {
            InequalitySolution::NoSolution => false,
            InequalitySolution::AllReals => true,
            InequalitySolution::Point { x: p } => x == p,
            InequalitySolution::AllRealsExcept { x: p } => x != p,
            InequalitySolution::Interval { lower, upper, inclusive } => {
                if inclusive {
                    lower <= x && x <= upper
                } else {
                    lower < x && x < upper
                }
            }
            InequalitySolution::Union { left_upper, right_lower, inclusive } => {
                if inclusive {
                    x <= left_upper || x >= right_lower
                } else {
                    x < left_upper || x > right_lower
                }
            }
        }
    }

    /// Interval notation, e.g. "(-3, 1)" or "(-∞, -2] ∪ [4, ∞)"
    pub fn interval_notation(&self) -> String {
        match *self {
            InequalitySolution::NoSolution => "∅".to_string(),
            InequalitySolution::AllReals => "(-∞, ∞)".to_string(),
            InequalitySolution::Point { x } => format!("{{{}}}", format_number(x)),
            InequalitySolution::AllRealsExcept { x } => {
                let p = format_number(x);
                format!("(-∞, {}) ∪ ({}, ∞)", p, p)
            }
            InequalitySolution::Interval { lower, upper, inclusive } => {
                let (open, close) = if inclusive { ('[', ']') } else { ('(', ')') };
                format!("{}{}, {}{}", open, format_number(lower), format_number(upper), close)
            }
            InequalitySolution::Union { left_upper, right_lower, inclusive } => {
                let (close, open) = if inclusive { (']', '[') } else { (')', '(') };
                format!(
                    "(-∞, {}{} ∪ {}{}, ∞)",
                    format_number(left_upper),
                    close,
                    open,
                    format_number(right_lower)
                )
            }
        }
    }
}

impl fmt::Display for InequalitySolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InequalitySolution::NoSolution => write!(f, "no solution"),
            InequalitySolution::AllReals => write!(f, "all real numbers"),
            InequalitySolution::Point { x } => write!(f, "x = {}", format_number(x)),
            InequalitySolution::AllRealsExcept { x } => {
                write!(f, "all real numbers except x = {}", format_number(x))
            }
            InequalitySolution::Interval { lower, upper, inclusive } => {
                let op = if inclusive { "≤" } else { "<" };
                write!(f, "{} {} x {} {}", format_number(lower), op, op, format_number(upper))
            }
            InequalitySolution::Union { left_upper, right_lower, inclusive } => {
                let (lt, gt) = if inclusive { ("≤", "≥") } else { ("<", ">") };
                write!(
                    f,
                    "x {} {} or x {} {}",
                    lt,
                    format_number(left_upper),
                    gt,
                    format_number(right_lower)
                )
            }
        }
    }
}

/// Results from solving |ax + b| op c.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsInequalityResult {
    pub solution: InequalitySolution,
    /// e.g. "-3 < x < 1"
    pub description: String,
    /// e.g. "(-3, 1)"
    pub interval_notation: String,
}

/// Solve |ax + b| op c.
pub fn calculate(input: &AbsInequalityInput) -> CalcResult<AbsInequalityResult> {
    input.validate()?;
    let AbsInequalityInput { a, b, operator, c } = *input;
    let vertex = ensure_finite("AbsoluteInequality", "root", -b / a)?;

    let solution = match operator {
        InequalityOperator::Less if c <= 0.0 => InequalitySolution::NoSolution,
        InequalityOperator::LessOrEqual if c < 0.0 => InequalitySolution::NoSolution,
        InequalityOperator::LessOrEqual if c == 0.0 => InequalitySolution::Point { x: vertex },
        InequalityOperator::Greater if c < 0.0 => InequalitySolution::AllReals,
        InequalityOperator::Greater if c == 0.0 => InequalitySolution::AllRealsExcept { x: vertex },
        InequalityOperator::GreaterOrEqual if c <= 0.0 => InequalitySolution::AllReals,
        _ => {
            let r1 = ensure_finite("AbsoluteInequality", "root", (c - b) / a)?;
            let r2 = ensure_finite("AbsoluteInequality", "root", (-c - b) / a)?;
            let (lower, upper) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
            let inclusive = operator.is_inclusive();
            match operator {
                InequalityOperator::Less | InequalityOperator::LessOrEqual => {
                    InequalitySolution::Interval { lower, upper, inclusive }
                }
                InequalityOperator::Greater | InequalityOperator::GreaterOrEqual => InequalitySolution::Union {
                    left_upper: lower,
                    right_lower: upper,
                    inclusive,
                },
            }
        }
    };

    Ok(AbsInequalityResult {
        description: solution.to_string(),
        interval_notation: solution.interval_notation(),
        solution,
    })
}
