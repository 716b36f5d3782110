//! # Sale Discount
//!
//! Amount saved and effective discount between an original and a sale price.
//!
//! - saved = original − sale
//! - discount % = saved / original × 100
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::percentages::sale_discount::{calculate, SaleDiscountInput};
//!
//! let result = calculate(&SaleDiscountInput { original_price: 120.0, sale_price: 90.0 }).unwrap();
//! assert_eq!(result.amount_saved, 30.0);
//! assert_eq!(result.discount_percent, 25.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// Original and sale price.
///
/// ## JSON Example
///
/// ```json
/// { "original_price": 120.0, "sale_price": 90.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleDiscountInput {
    pub original_price: f64,
    pub sale_price: f64,
}

impl SaleDiscountInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("original_price", self.original_price)?;
        require_non_negative("sale_price", self.sale_price)?;
        if self.sale_price > self.original_price {
            return Err(CalcError::invalid_input(
                "sale_price",
                self.sale_price.to_string(),
                format!("Sale price cannot exceed the original price ({})", self.original_price),
            ));
        }
        Ok(())
    }
}

/// Savings from the sale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleDiscountResult {
    pub amount_saved: f64,
    pub discount_percent: f64,
}

/// Calculate the savings for a sale price.
pub fn calculate(input: &SaleDiscountInput) -> CalcResult<SaleDiscountResult> {
    input.validate()?;

    let amount_saved = input.original_price - input.sale_price;
    Ok(SaleDiscountResult {
        amount_saved,
        discount_percent: amount_saved / input.original_price * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn discount(original_price: f64, sale_price: f64) -> CalcResult<SaleDiscountResult> {
        calculate(&SaleDiscountInput {
            original_price,
            sale_price,
        })
    }

    #[test]
    fn test_quarter_off() {
        let result = discount(120.0, 90.0).unwrap();
        assert_relative_eq!(result.amount_saved, 30.0, epsilon = 1e-12);
        assert_relative_eq!(result.discount_percent, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_free_and_full_price() {
        assert_relative_eq!(discount(50.0, 0.0).unwrap().discount_percent, 100.0, epsilon = 1e-12);
        assert_eq!(discount(50.0, 50.0).unwrap().amount_saved, 0.0);
    }

    #[test]
    fn test_invalid_prices() {
        assert_eq!(discount(0.0, 0.0).unwrap_err().field(), Some("original_price"));
        assert_eq!(discount(10.0, -1.0).unwrap_err().field(), Some("sale_price"));
        assert_eq!(discount(10.0, 12.0).unwrap_err().field(), Some("sale_price"));
    }
}
