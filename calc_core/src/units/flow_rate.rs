//! Volumetric flow rate units. Base: litre per second.

const US_GALLON_L: f64 = 3.785411784;
const CUBIC_FOOT_L: f64 = 28.316846592;

unit_table! {
    /// Flow rate units (base: litre per second)
    FlowRate, quantity = "flow rate", base = LiterPerSecond;
    MilliliterPerMinute => ("mL/min", "Milliliter per minute", 1e-3 / 60.0, ["ml/min"]),
    LiterPerSecond => ("L/s", "Liter per second", 1.0, ["l/s", "lps"]),
    LiterPerMinute => ("L/min", "Liter per minute", 1.0 / 60.0, ["l/min", "lpm"]),
    LiterPerHour => ("L/h", "Liter per hour", 1.0 / 3600.0, ["l/h", "lph"]),
    CubicMeterPerSecond => ("m3/s", "Cubic meter per second", 1e3, ["m³/s", "cumecs"]),
    CubicMeterPerHour => ("m3/h", "Cubic meter per hour", 1e3 / 3600.0, ["m³/h"]),
    GallonPerMinute => ("gpm", "US gallon per minute", US_GALLON_L / 60.0, ["gal/min"]),
    GallonPerHour => ("gph", "US gallon per hour", US_GALLON_L / 3600.0, ["gal/h"]),
    CubicFootPerSecond => ("cfs", "Cubic foot per second", CUBIC_FOOT_L, ["ft3/s", "ft³/s"]),
    CubicFootPerMinute => ("cfm", "Cubic foot per minute", CUBIC_FOOT_L / 60.0, ["ft3/min", "ft³/min"]),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_metre_per_hour() {
        assert_relative_eq!(convert(3.6, FlowRate::CubicMeterPerHour, FlowRate::LiterPerSecond), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gpm_to_lpm() {
        assert_relative_eq!(convert(1.0, FlowRate::GallonPerMinute, FlowRate::LiterPerMinute), 3.785411784, epsilon = 1e-12);
    }

    #[test]
    fn test_cfs_to_cfm() {
        assert_relative_eq!(convert(1.0, FlowRate::CubicFootPerSecond, FlowRate::CubicFootPerMinute), 60.0, epsilon = 1e-9);
    }
}
