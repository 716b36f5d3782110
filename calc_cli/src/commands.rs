//! CLI command implementations
//!
//! Calculator subcommands are translated into a [`CalculationItem`] and
//! evaluated through the same path worksheets use.

use std::path::Path;

use calc_core::calculations::algebra::{InequalityOperator, PolynomialOperation};
use calc_core::calculations::dates::{parse_date, parse_datetime, NoticeUnit};
use calc_core::calculations::growth::SpendingFrequency;
use calc_core::calculations::special::BesselKind;
use calc_core::calculations::{
    AbsEquationInput, AbsInequalityInput, BesselInput, CalculationItem, CompoundInterestInput, CompoundingInput,
    ConversionInput, ConversionTableInput, DoublingTimeInput, GreatCircleInput, HikingInput, LayoverInput,
    NoticePeriodInput, OpportunityCostInput, PercentageInput, PolynomialInput, SaleDiscountInput, ShiftRotationInput,
    TravelDaysInput,
};
use calc_core::errors::CalcError;
use calc_core::units::Quantity;
use calc_core::worksheet::{evaluate_worksheet, load_worksheet, save_report};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::render;
use crate::{CliError, Commands, PercentMode, Result};

/// Quantity whose table knows both unit identifiers
fn infer_quantity(from: &str, to: &str) -> std::result::Result<Quantity, CalcError> {
    Quantity::ALL
        .iter()
        .copied()
        .find(|q| q.convert(1.0, from, to).is_ok())
        .ok_or_else(|| CalcError::unknown_unit("any quantity", format!("{} -> {}", from, to)))
}

/// Translate a calculator subcommand into a calculation item.
pub fn build_item(command: Commands, config: &CliConfig) -> Result<CalculationItem> {
    let item = match command {
        Commands::Convert {
            value,
            from,
            to,
            quantity,
        } => {
            let quantity = match quantity {
                Some(q) => Quantity::from_str_flexible(&q)?,
                None => infer_quantity(&from, &to)?,
            };
            CalculationItem::Conversion(ConversionInput {
                quantity,
                value,
                from,
                to,
            })
        }
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            radius_km,
        } => CalculationItem::GreatCircle(GreatCircleInput {
            radius_km: radius_km.unwrap_or(config.earth_radius_km),
            ..GreatCircleInput::new(lat1, lon1, lat2, lon2)
        }),
        Commands::Hike {
            distance_km,
            ascent_m,
            pace_kmh,
            ascent_rate,
        } => CalculationItem::Hiking(HikingInput {
            distance_km,
            ascent_m,
            pace_kmh,
            ascent_m_per_hour: ascent_rate,
        }),
        Commands::AbsEq { a, b, c } => CalculationItem::AbsEquation(AbsEquationInput { a, b, c }),
        Commands::AbsIneq { a, b, op, c } => CalculationItem::AbsInequality(AbsInequalityInput {
            a,
            b,
            operator: InequalityOperator::from_str_flexible(&op)?,
            c,
        }),
        Commands::Poly { first, second, op, at } => CalculationItem::Polynomial(PolynomialInput {
            first,
            second,
            operation: PolynomialOperation::from_str_flexible(&op)?,
            evaluate_at: at,
        }),
        Commands::Compound {
            initial,
            rate_percent,
            periods,
        } => CalculationItem::Compounding(CompoundingInput {
            initial_value: initial,
            rate_percent,
            periods,
        }),
        Commands::Doubling { rate_percent } => CalculationItem::DoublingTime(DoublingTimeInput { rate_percent }),
        Commands::Discount { original, sale } => CalculationItem::SaleDiscount(SaleDiscountInput {
            original_price: original,
            sale_price: sale,
        }),
        Commands::Percent { mode } => CalculationItem::Percentage(match mode {
            PercentMode::Of { percent, base } => PercentageInput::PercentOf { percent, base },
            PercentMode::What { part, whole } => PercentageInput::WhatPercent { part, whole },
            PercentMode::Change { from, to } => PercentageInput::Change { from, to },
            PercentMode::Diff { a, b } => PercentageInput::Difference { a, b },
        }),
        Commands::Bessel { kind, order, x } => CalculationItem::Bessel(BesselInput {
            kind: BesselKind::from_str_flexible(&kind)?,
            order,
            x,
        }),
        Commands::Travel { start, end } => CalculationItem::TravelDays(TravelDaysInput {
            start: parse_date("start", &start)?,
            end: parse_date("end", &end)?,
        }),
        Commands::Layover {
            arrival,
            departure,
            min,
        } => CalculationItem::Layover(LayoverInput {
            arrival: parse_datetime("arrival", &arrival)?,
            departure: parse_datetime("departure", &departure)?,
            min_connection_minutes: min,
        }),
        Commands::Notice { start, length, unit } => CalculationItem::NoticePeriod(NoticePeriodInput {
            start: parse_date("start", &start)?,
            length,
            unit: NoticeUnit::from_str_flexible(&unit)?,
        }),
        Commands::Shift {
            rotation_start,
            days_on,
            days_off,
            range_start,
            range_end,
        } => CalculationItem::ShiftRotation(ShiftRotationInput {
            rotation_start: parse_date("rotation_start", &rotation_start)?,
            days_on,
            days_off,
            range_start: parse_date("range_start", &range_start)?,
            range_end: parse_date("range_end", &range_end)?,
        }),
        Commands::Opportunity {
            amount,
            frequency,
            return_percent,
            horizons,
        } => CalculationItem::OpportunityCost(OpportunityCostInput {
            amount,
            frequency: SpendingFrequency::from_str_flexible(&frequency)?,
            annual_return_percent: return_percent,
            horizons_years: if horizons.is_empty() {
                config.opportunity_horizons.clone()
            } else {
                horizons
            },
        }),
        Commands::Interest {
            principal,
            annual_rate_percent,
            years,
            compounds,
            contribution,
        } => CalculationItem::CompoundInterest(CompoundInterestInput {
            principal,
            annual_rate_percent,
            compounds_per_year: compounds,
            years,
            periodic_contribution: contribution,
        }),
        Commands::Units { .. } | Commands::Run { .. } => {
            return Err(CalcError::calculation_failed("Cli", "not a calculator subcommand").into())
        }
    };
    Ok(item)
}

/// Evaluate one item and print the result
pub fn evaluate(config: &CliConfig, item: &CalculationItem) -> Result<()> {
    let output = item.evaluate()?;
    render::emit(&output, config.format, || render::output_text(&output, config.precision))
}

/// List units, or express one value in every unit of a quantity
pub fn units(config: &CliConfig, quantity: Option<&str>, value: Option<f64>, from: Option<String>) -> Result<()> {
    let quantities = match quantity {
        Some(q) => vec![Quantity::from_str_flexible(q)?],
        None => Quantity::ALL.to_vec(),
    };

    if let (Some(value), Some(from)) = (value, from) {
        let &[quantity] = &quantities[..] else {
            return Err(CalcError::missing_field("quantity").into());
        };
        let item = CalculationItem::ConversionTable(ConversionTableInput { quantity, value, from });
        return evaluate(config, &item);
    }

    let listing: Vec<_> = quantities.iter().map(|q| (q.name(), q.units())).collect();
    render::emit(&listing, config.format, || {
        listing
            .iter()
            .map(|(name, units)| render::units_text(name, units, config.precision))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Evaluate a worksheet, print the report and optionally save it
pub fn run_worksheet(config: &CliConfig, path: &Path, output: Option<&Path>) -> Result<()> {
    info!(path = %path.display(), "running worksheet");
    let worksheet = load_worksheet(path)?;
    let report = evaluate_worksheet(&worksheet);

    if let Some(output) = output {
        save_report(&report, output)?;
        info!(path = %output.display(), "report saved");
    }

    render::emit(&report, config.format, || render::report_text(&report, config.precision))?;

    if report.all_succeeded() {
        Ok(())
    } else {
        warn!(failed = report.failed, "worksheet finished with failures");
        Err(CliError::WorksheetFailed {
            failed: report.failed,
            total: report.entries.len(),
        })
    }
}
