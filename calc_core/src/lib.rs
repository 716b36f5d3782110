//! # calc_core - Everyday Calculator Engine
//!
//! `calc_core` is the computational heart of Reckon: a collection of small,
//! pure calculators (algebra, geography, growth and finance, percentages,
//! special functions, dates) and table-driven unit converters. All inputs and
//! outputs are JSON-serializable, so calculations can be stored in worksheets
//! and evaluated in batch.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Validate First**: Inputs are checked before any arithmetic runs
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::percentages::sale_discount::{calculate, SaleDiscountInput};
//!
//! let result = calculate(&SaleDiscountInput { original_price: 120.0, sale_price: 90.0 }).unwrap();
//! assert_eq!(result.discount_percent, 25.0);
//!
//! let miles = calc_core::units::Quantity::Length.convert(10.0, "km", "mi").unwrap();
//! assert!((miles.value - 6.2137119).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator types and the [`CalculationItem`] wrapper
//! - [`equations`] - Raw formulas without validation
//! - [`units`] - Unit tables and string-addressed conversion
//! - [`worksheet`] - Batch evaluation of JSON worksheets
//! - [`errors`] - Structured error types
//! - [`format`] - Number rendering for descriptions

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod format;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use units::Quantity;
pub use worksheet::{evaluate_worksheet, load_worksheet, save_report, Worksheet, WorksheetReport};
