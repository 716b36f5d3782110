//! Percentage calculators: sale discount and the general percentage questions.

pub mod percentage;
pub mod sale_discount;

pub use percentage::{PercentageInput, PercentageResult};
pub use sale_discount::{SaleDiscountInput, SaleDiscountResult};
