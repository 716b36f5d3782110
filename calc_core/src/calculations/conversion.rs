//! # Unit Conversion
//!
//! String-addressed front end to the typed unit tables in [`crate::units`]:
//! a single conversion, or one value expressed in every unit of a quantity.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::conversion::{calculate, ConversionInput};
//! use calc_core::units::Quantity;
//!
//! let input = ConversionInput {
//!     quantity: Quantity::Length,
//!     value: 1.0,
//!     from: "mi".to_string(),
//!     to: "km".to_string(),
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.value - 1.609344).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::{Conversion, Quantity, UnitInfo};

/// Convert one value between two units.
///
/// ## JSON Example
///
/// ```json
/// { "quantity": "speed", "value": 60.0, "from": "mph", "to": "km/h" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub quantity: Quantity,
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ConversionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("value", self.value)?;
        if self.from.trim().is_empty() {
            return Err(CalcError::missing_field("from"));
        }
        if self.to.trim().is_empty() {
            return Err(CalcError::missing_field("to"));
        }
        Ok(())
    }
}

/// Convert a value between two units of one quantity.
pub fn calculate(input: &ConversionInput) -> CalcResult<Conversion> {
    input.validate()?;
    input.quantity.convert(input.value, &input.from, &input.to)
}

/// Express one value in every unit of a quantity.
///
/// ## JSON Example
///
/// ```json
/// { "quantity": "data_rate", "value": 100.0, "from": "Mbps" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTableInput {
    pub quantity: Quantity,
    pub value: f64,
    pub from: String,
}

impl ConversionTableInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("value", self.value)?;
        if self.from.trim().is_empty() {
            return Err(CalcError::missing_field("from"));
        }
        Ok(())
    }
}

/// One row of a conversion table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub unit: UnitInfo,
    pub value: f64,
}

/// Input value expressed in every unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    pub quantity: Quantity,
    pub value: f64,
    pub from: UnitInfo,
    pub rows: Vec<ConversionRow>,
}

/// Build a conversion table for a value.
pub fn conversion_table(input: &ConversionTableInput) -> CalcResult<ConversionTable> {
    input.validate()?;

    let mut from = None;
    let rows = input
        .quantity
        .units()
        .into_iter()
        .map(|unit| {
            let conversion = input.quantity.convert(input.value, &input.from, &unit.symbol)?;
            from.get_or_insert(conversion.from);
            Ok(ConversionRow { unit, value: conversion.value })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    let from = from.ok_or_else(|| CalcError::unknown_unit(input.quantity.name(), input.from.as_str()))?;
    Ok(ConversionTable {
        quantity: input.quantity,
        value: input.value,
        from,
        rows,
    })
}
