//! Algebra calculators: absolute-value equations and inequalities, polynomial arithmetic.

pub mod absolute_equation;
pub mod absolute_inequality;
pub mod polynomial;

pub use absolute_equation::{AbsEquationInput, AbsEquationResult, AbsEquationSolution};
pub use absolute_inequality::{AbsInequalityInput, AbsInequalityResult, InequalityOperator, InequalitySolution};
pub use polynomial::{PolynomialInput, PolynomialOperation, PolynomialResult, PolynomialTerm};
