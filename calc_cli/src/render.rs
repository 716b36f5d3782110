//! Text and JSON rendering of calculation results.

use std::fmt::Write as _;

use calc_core::calculations::CalculationOutput;
use calc_core::format::{format_number, round_to};
use calc_core::units::UnitInfo;
use calc_core::worksheet::{ItemOutcome, WorksheetReport};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// Key/value lines printed with aligned keys
struct Block {
    rows: Vec<(String, String)>,
    precision: usize,
}

impl Block {
    fn new(precision: usize) -> Self {
        Block {
            rows: Vec::new(),
            precision,
        }
    }

    fn text(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.rows.push((key.to_string(), value.into()));
        self
    }

    fn num(&mut self, key: &str, value: f64) -> &mut Self {
        let rendered = number(value, self.precision);
        self.text(key, rendered)
    }

    fn num_unit(&mut self, key: &str, value: f64, unit: &str) -> &mut Self {
        let rendered = format!("{} {}", number(value, self.precision), unit);
        self.text(key, rendered)
    }

    fn finish(&self) -> String {
        let width = self.rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for (key, value) in &self.rows {
            let _ = writeln!(out, "{:<width$}  {}", key, value, width = width);
        }
        out
    }
}

/// Round to the configured precision and drop trailing zeros
pub fn number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    format_number(round_to(value, precision as u32))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Print a serialisable value as pretty JSON, or text produced by `text`
pub fn emit<T: Serialize>(value: &T, format: OutputFormat, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

/// Human-readable rendering of one calculation result
pub fn output_text(output: &CalculationOutput, precision: usize) -> String {
    let mut b = Block::new(precision);
    match output {
        CalculationOutput::Conversion(c) => {
            b.text(
                "Result",
                format!(
                    "{} {} = {} {}",
                    number(c.input, precision),
                    c.from.symbol,
                    number(c.value, precision),
                    c.to.symbol
                ),
            );
            if c.from.factor.is_some() {
                b.num_unit("In base unit", c.base_value, &c.base_symbol);
            }
        }
        CalculationOutput::ConversionTable(t) => {
            b.text("Quantity", t.quantity.name());
            b.num_unit("Value", t.value, &t.from.symbol);
            for row in &t.rows {
                b.num_unit(&row.unit.name, row.value, &row.unit.symbol);
            }
        }
        CalculationOutput::GreatCircle(r) => {
            b.num_unit("Distance", r.distance_km, "km")
                .num_unit("", r.distance_miles, "mi")
                .num_unit("", r.distance_nautical_miles, "nmi")
                .num_unit("Central angle", r.central_angle_deg, "deg")
                .num_unit("Initial bearing", r.initial_bearing_deg, "deg")
                .text(
                    "Midpoint",
                    format!("{}, {}", number(r.midpoint_lat, precision), number(r.midpoint_lon, precision)),
                );
        }
        CalculationOutput::Hiking(r) => {
            b.text("Estimated time", r.formatted.clone())
                .num_unit("Walking", r.flat_hours, "h")
                .num_unit("Climbing", r.ascent_hours, "h");
        }
        CalculationOutput::AbsEquation(r) => {
            b.text("Solution", r.description.clone());
        }
        CalculationOutput::AbsInequality(r) => {
            b.text("Solution", r.description.clone())
                .text("Interval", r.interval_notation.clone());
        }
        CalculationOutput::Polynomial(r) => {
            b.text("First", r.first_normalized.clone())
                .text("Second", r.second_normalized.clone())
                .text("Result", r.result.clone())
                .text("Degree", r.degree.to_string());
            if let Some(value) = r.value {
                b.num("Value", value);
            }
        }
        CalculationOutput::Compounding(r) => {
            b.num("Final value", r.final_value)
                .num("Total growth", r.total_growth)
                .num_unit("Growth", r.total_growth_percent, "%");
            for point in &r.series {
                b.num(&format!("Period {}", point.period), point.value);
            }
        }
        CalculationOutput::DoublingTime(r) => {
            b.num_unit("Exact", r.exact_periods, "periods")
                .num_unit("Rule of 72", r.rule_of_72_periods, "periods")
                .num_unit("Rule of 70", r.rule_of_70_periods, "periods")
                .num_unit("Rule of 72 error", r.rule_of_72_error_percent, "%");
        }
        CalculationOutput::CompoundInterest(r) => {
            b.num("Future value", r.future_value)
                .num("Contributed", r.total_contributed)
                .num("Interest earned", r.total_interest)
                .num_unit("Effective annual rate", r.effective_annual_rate_percent, "%");
        }
        CalculationOutput::OpportunityCost(r) => {
            b.num("Spent per year", r.annual_spending);
            for p in &r.projections {
                b.text(
                    &format!("{} years", p.years),
                    format!(
                        "spent {}, invested {}, forgone {}",
                        number(p.total_spent, precision),
                        number(p.future_value, precision),
                        number(p.forgone_growth, precision)
                    ),
                );
            }
        }
        CalculationOutput::SaleDiscount(r) => {
            b.num("Amount saved", r.amount_saved)
                .num_unit("Discount", r.discount_percent, "%");
        }
        CalculationOutput::Percentage(r) => {
            b.num("Value", r.value).text("", r.description.clone());
        }
        CalculationOutput::Bessel(r) => {
            b.num("Value", r.value);
            if r.singular {
                b.text("Note", "singular at x = 0");
            }
        }
        CalculationOutput::TravelDays(r) => {
            b.text("Days", r.total_days.to_string())
                .text("Nights", r.nights.to_string())
                .text("Weeks", format!("{} weeks {} days", r.weeks, r.extra_days))
                .text("Weekend days", r.weekend_days.to_string())
                .text("Weekdays", r.weekdays.to_string());
        }
        CalculationOutput::Layover(r) => {
            b.text("Layover", r.formatted.clone())
                .text("Minutes", r.total_minutes.to_string())
                .text("Overnight", yes_no(r.overnight));
            if let (Some(meets), Some(spare)) = (r.meets_minimum, r.spare_minutes) {
                b.text("Meets minimum", format!("{} ({:+} min)", yes_no(meets), spare));
            }
        }
        CalculationOutput::NoticePeriod(r) => {
            b.text("Ends", format!("{} ({})", r.end_date, r.end_weekday))
                .text("Calendar days", r.calendar_days.to_string())
                .text("On a weekend", yes_no(r.falls_on_weekend));
        }
        CalculationOutput::ShiftRotation(r) => {
            b.text("Cycle", format!("{} days", r.cycle_length))
                .text("On", r.on_days.to_string())
                .text("Off", r.off_days.to_string());
            for day in &r.schedule {
                let state = if day.on_shift { "on" } else { "off" };
                b.text(
                    &day.date.format("%Y-%m-%d %a").to_string(),
                    format!("{} (day {})", state, day.cycle_day),
                );
            }
        }
    }
    b.finish()
}

/// Unit listing for one quantity
pub fn units_text(quantity: &str, units: &[UnitInfo], precision: usize) -> String {
    let mut b = Block::new(precision);
    for unit in units {
        let detail = match unit.factor {
            Some(_) if unit.is_base => format!("{} (base unit)", unit.name),
            Some(factor) => format!("{} = {} base", unit.name, number(factor, precision)),
            None if unit.is_base => format!("{} (base scale)", unit.name),
            None => unit.name.clone(),
        };
        b.text(&unit.symbol, detail);
    }
    format!("{}\n{}", quantity, b.finish())
}

/// Worksheet report, one section per item
pub fn report_text(report: &WorksheetReport, precision: usize) -> String {
    let mut out = String::new();
    if !report.title.is_empty() {
        let _ = writeln!(out, "{}\n", report.title);
    }
    for entry in &report.entries {
        let _ = writeln!(out, "[{}] {}", entry.calc_type, entry.label);
        match &entry.outcome {
            ItemOutcome::Ok { output } => {
                for line in output_text(output, precision).lines() {
                    let _ = writeln!(out, "  {}", line);
                }
            }
            ItemOutcome::Error { error } => {
                let _ = writeln!(out, "  error: {} ({})", error, error.error_code());
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{} succeeded, {} failed", report.succeeded, report.failed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::percentages::sale_discount::{calculate, SaleDiscountInput};
    use calc_core::units::Quantity;
    use calc_core::worksheet::{evaluate_worksheet, Worksheet};
    use calc_core::CalculationItem;

    #[test]
    fn test_number_precision() {
        assert_eq!(number(3.14159265, 2), "3.14");
        assert_eq!(number(2.5, 4), "2.5");
        assert_eq!(number(10.0, 0), "10");
        assert_eq!(number(f64::NEG_INFINITY, 3), "-inf");
    }

    #[test]
    fn test_block_alignment() {
        let result = calculate(&SaleDiscountInput {
            original_price: 120.0,
            sale_price: 90.0,
        })
        .unwrap();
        let text = output_text(&CalculationOutput::SaleDiscount(result), 2);
        assert_eq!(text, "Amount saved  30\nDiscount      25 %\n");
    }

    #[test]
    fn test_conversion_text() {
        let conversion = Quantity::Length.convert(1.0, "mi", "km").unwrap();
        let text = output_text(&CalculationOutput::Conversion(conversion), 3);
        assert!(text.lines().next().unwrap().ends_with("1 mi = 1.609 km"), "{}", text);
        assert!(text.contains("1609.344 m"));
    }

    #[test]
    fn test_singular_bessel_in_json_and_text() {
        use calc_core::calculations::special::bessel;
        use calc_core::calculations::special::BesselKind;

        let result = bessel::calculate(&bessel::BesselInput {
            kind: BesselKind::Y,
            order: 1,
            x: 0.0,
        })
        .unwrap();
        let output = CalculationOutput::Bessel(result);
        let json = serde_json::to_string_pretty(&output).unwrap();
        assert!(json.contains(r#""value": "-inf""#), "{}", json);
        let back: CalculationOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);

        let text = output_text(&output, 4);
        assert!(text.contains("-inf") && text.contains("singular"), "{}", text);
    }

    #[test]
    fn test_units_listing_marks_base() {
        let text = units_text("angle", &Quantity::Angle.units(), 4);
        assert!(text.lines().any(|l| l.contains("Radian (base unit)")), "{}", text);
    }

    #[test]
    fn test_report_text_includes_errors() {
        let mut worksheet = Worksheet::new("Checks");
        worksheet.push(
            "Too expensive",
            CalculationItem::SaleDiscount(SaleDiscountInput {
                original_price: 10.0,
                sale_price: 20.0,
            }),
        );
        let text = report_text(&evaluate_worksheet(&worksheet), 2);
        assert!(text.contains("[SaleDiscount] Too expensive"));
        assert!(text.contains("INVALID_INPUT"));
        assert!(text.ends_with("0 succeeded, 1 failed\n"));
    }
}
