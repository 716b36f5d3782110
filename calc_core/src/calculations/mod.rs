//! # Calculations
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! `calculate` validates first and never returns a non-finite number in place
//! of an error.
//!
//! ## Available Calculations
//!
//! - [`algebra`] - Absolute-value equations/inequalities, polynomial arithmetic
//! - [`geo`] - Great-circle distance, hiking time
//! - [`growth`] - Compounding, doubling time, compound interest, opportunity cost
//! - [`percentages`] - Sale discount, percentage questions
//! - [`special`] - Bessel functions
//! - [`conversion`] - Unit conversion and conversion tables
//! - [`dates`] - Travel days, layovers, notice periods, shift rotations

pub mod algebra;
pub mod conversion;
pub mod dates;
pub mod geo;
pub mod growth;
pub mod percentages;
pub mod special;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::units::Conversion;

pub use algebra::{AbsEquationInput, AbsEquationResult, AbsInequalityInput, AbsInequalityResult, PolynomialInput, PolynomialResult};
pub use conversion::{ConversionInput, ConversionTable, ConversionTableInput};
pub use dates::{
    LayoverInput, LayoverResult, NoticePeriodInput, NoticePeriodResult, ShiftRotationInput, ShiftRotationResult,
    TravelDaysInput, TravelDaysResult,
};
pub use geo::{GreatCircleInput, GreatCircleResult, HikingInput, HikingResult};
pub use growth::{
    CompoundInterestInput, CompoundInterestResult, CompoundingInput, CompoundingResult, DoublingTimeInput,
    DoublingTimeResult, OpportunityCostInput, OpportunityCostResult,
};
pub use percentages::{PercentageInput, PercentageResult, SaleDiscountInput, SaleDiscountResult};
pub use special::{BesselInput, BesselResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
///
/// ```json
/// { "type": "SaleDiscount", "original_price": 120.0, "sale_price": 90.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Conversion(ConversionInput),
    ConversionTable(ConversionTableInput),
    GreatCircle(GreatCircleInput),
    Hiking(HikingInput),
    AbsEquation(AbsEquationInput),
    AbsInequality(AbsInequalityInput),
    Polynomial(PolynomialInput),
    Compounding(CompoundingInput),
    DoublingTime(DoublingTimeInput),
    CompoundInterest(CompoundInterestInput),
    OpportunityCost(OpportunityCostInput),
    SaleDiscount(SaleDiscountInput),
    Percentage(PercentageInput),
    Bessel(BesselInput),
    TravelDays(TravelDaysInput),
    Layover(LayoverInput),
    NoticePeriod(NoticePeriodInput),
    ShiftRotation(ShiftRotationInput),
}

/// Result of evaluating a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Conversion(Conversion),
    ConversionTable(ConversionTable),
    GreatCircle(GreatCircleResult),
    Hiking(HikingResult),
    AbsEquation(AbsEquationResult),
    AbsInequality(AbsInequalityResult),
    Polynomial(PolynomialResult),
    Compounding(CompoundingResult),
    DoublingTime(DoublingTimeResult),
    CompoundInterest(CompoundInterestResult),
    OpportunityCost(OpportunityCostResult),
    SaleDiscount(SaleDiscountResult),
    Percentage(PercentageResult),
    Bessel(BesselResult),
    TravelDays(TravelDaysResult),
    Layover(LayoverResult),
    NoticePeriod(NoticePeriodResult),
    ShiftRotation(ShiftRotationResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Conversion(_) => "Conversion",
            CalculationItem::ConversionTable(_) => "ConversionTable",
            CalculationItem::GreatCircle(_) => "GreatCircle",
            CalculationItem::Hiking(_) => "Hiking",
            CalculationItem::AbsEquation(_) => "AbsEquation",
            CalculationItem::AbsInequality(_) => "AbsInequality",
            CalculationItem::Polynomial(_) => "Polynomial",
            CalculationItem::Compounding(_) => "Compounding",
            CalculationItem::DoublingTime(_) => "DoublingTime",
            CalculationItem::CompoundInterest(_) => "CompoundInterest",
            CalculationItem::OpportunityCost(_) => "OpportunityCost",
            CalculationItem::SaleDiscount(_) => "SaleDiscount",
            CalculationItem::Percentage(_) => "Percentage",
            CalculationItem::Bessel(_) => "Bessel",
            CalculationItem::TravelDays(_) => "TravelDays",
            CalculationItem::Layover(_) => "Layover",
            CalculationItem::NoticePeriod(_) => "NoticePeriod",
            CalculationItem::ShiftRotation(_) => "ShiftRotation",
        }
    }

    /// Run the wrapped calculation.
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        debug!(calc_type = self.calc_type(), "evaluating calculation");
        let output = match self {
            CalculationItem::Conversion(i) => CalculationOutput::Conversion(conversion::calculate(i)?),
            CalculationItem::ConversionTable(i) => CalculationOutput::ConversionTable(conversion::conversion_table(i)?),
            CalculationItem::GreatCircle(i) => CalculationOutput::GreatCircle(geo::great_circle::calculate(i)?),
            CalculationItem::Hiking(i) => CalculationOutput::Hiking(geo::hiking::calculate(i)?),
            CalculationItem::AbsEquation(i) => CalculationOutput::AbsEquation(algebra::absolute_equation::calculate(i)?),
            CalculationItem::AbsInequality(i) => {
                CalculationOutput::AbsInequality(algebra::absolute_inequality::calculate(i)?)
            }
            CalculationItem::Polynomial(i) => CalculationOutput::Polynomial(algebra::polynomial::calculate(i)?),
            CalculationItem::Compounding(i) => CalculationOutput::Compounding(growth::compounding::calculate(i)?),
            CalculationItem::DoublingTime(i) => CalculationOutput::DoublingTime(growth::doubling_time::calculate(i)?),
            CalculationItem::CompoundInterest(i) => {
                CalculationOutput::CompoundInterest(growth::compound_interest::calculate(i)?)
            }
            CalculationItem::OpportunityCost(i) => {
                CalculationOutput::OpportunityCost(growth::opportunity_cost::calculate(i)?)
            }
            CalculationItem::SaleDiscount(i) => CalculationOutput::SaleDiscount(percentages::sale_discount::calculate(i)?),
            CalculationItem::Percentage(i) => CalculationOutput::Percentage(percentages::percentage::calculate(i)?),
            CalculationItem::Bessel(i) => CalculationOutput::Bessel(special::bessel::calculate(i)?),
            CalculationItem::TravelDays(i) => CalculationOutput::TravelDays(dates::travel_days::calculate(i)?),
            CalculationItem::Layover(i) => CalculationOutput::Layover(dates::layover::calculate(i)?),
            CalculationItem::NoticePeriod(i) => CalculationOutput::NoticePeriod(dates::notice_period::calculate(i)?),
            CalculationItem::ShiftRotation(i) => CalculationOutput::ShiftRotation(dates::shift_rotation::calculate(i)?),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Quantity;
    use chrono::NaiveDate;

    #[test]
    fn test_item_json_round_trip() {
        let items = vec![
            CalculationItem::SaleDiscount(SaleDiscountInput {
                original_price: 120.0,
                sale_price: 90.0,
            }),
            CalculationItem::Percentage(PercentageInput::Change { from: 80.0, to: 100.0 }),
            CalculationItem::Conversion(ConversionInput {
                quantity: Quantity::Speed,
                value: 60.0,
                from: "mph".to_string(),
                to: "km/h".to_string(),
            }),
            CalculationItem::TravelDays(TravelDaysInput {
                start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
            }),
        ];
        for item in items {
            let json = serde_json::to_string(&item).unwrap();
            assert!(json.contains(&format!("\"type\":\"{}\"", item.calc_type())), "{}", json);
            let back: CalculationItem = serde_json::from_str(&json).unwrap();
            assert_eq!(back, item);
        }
    }

    #[test]
    fn test_nested_tag_parses() {
        let json = r#"{"type":"Percentage","mode":"percent_of","percent":20,"base":50}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        match item.evaluate().unwrap() {
            CalculationOutput::Percentage(r) => assert_eq!(r.value, 10.0),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_dispatches() {
        let item = CalculationItem::SaleDiscount(SaleDiscountInput {
            original_price: 120.0,
            sale_price: 90.0,
        });
        assert_eq!(
            item.evaluate().unwrap(),
            CalculationOutput::SaleDiscount(SaleDiscountResult {
                amount_saved: 30.0,
                discount_percent: 25.0,
            })
        );
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let item = CalculationItem::DoublingTime(DoublingTimeInput { rate_percent: 0.0 });
        assert_eq!(item.evaluate().unwrap_err().field(), Some("rate_percent"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_str::<CalculationItem>(r#"{"type":"Mortgage"}"#).is_err());
    }
}
