//! Temperature scales.
//!
//! Temperature is affine, not a pure scale, so it sits outside the factor
//! tables: every conversion goes through kelvin.
//!
//! - K = °C + 273.15
//! - K = (°F + 459.67) × 5/9
//! - K = °R × 5/9

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, require_finite, CalcError, CalcResult};
use crate::units::{Conversion, Unit, UnitInfo};

const CELSIUS_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 459.67;
const RANKINE_PER_KELVIN: f64 = 9.0 / 5.0;

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "R")]
    Rankine,
}

impl Temperature {
    pub const ALL: &'static [Temperature] = &[
        Temperature::Celsius,
        Temperature::Fahrenheit,
        Temperature::Kelvin,
        Temperature::Rankine,
    ];

    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Temperature::Celsius => value + CELSIUS_OFFSET,
            Temperature::Fahrenheit => (value + FAHRENHEIT_OFFSET) / RANKINE_PER_KELVIN,
            Temperature::Kelvin => value,
            Temperature::Rankine => value / RANKINE_PER_KELVIN,
        }
    }

    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Temperature::Celsius => kelvin - CELSIUS_OFFSET,
            Temperature::Fahrenheit => kelvin * RANKINE_PER_KELVIN - FAHRENHEIT_OFFSET,
            Temperature::Kelvin => kelvin,
            Temperature::Rankine => kelvin * RANKINE_PER_KELVIN,
        }
    }
}

impl Unit for Temperature {
    const QUANTITY: &'static str = "temperature";

    fn symbol(self) -> &'static str {
        match self {
            Temperature::Celsius => "C",
            Temperature::Fahrenheit => "F",
            Temperature::Kelvin => "K",
            Temperature::Rankine => "R",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Temperature::Celsius => "Celsius",
            Temperature::Fahrenheit => "Fahrenheit",
            Temperature::Kelvin => "Kelvin",
            Temperature::Rankine => "Rankine",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Temperature::Celsius => &["°C", "degC", "centigrade"],
            Temperature::Fahrenheit => &["°F", "degF"],
            Temperature::Kelvin => &["kelvins"],
            Temperature::Rankine => &["°R", "degR"],
        }
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

impl_unit_from_str!(Temperature);

/// Convert between scales, rejecting temperatures below absolute zero
pub fn convert_temperature(value: f64, from: Temperature, to: Temperature) -> CalcResult<f64> {
    require_finite("value", value)?;
    let kelvin = ensure_finite("Conversion", "temperature in kelvin", from.to_kelvin(value))?;
    // Tolerate rounding right at absolute zero
    if kelvin < -1e-9 {
        return Err(CalcError::invalid_input(
            "value",
            format!("{} {}", value, from.symbol()),
            "Temperature is below absolute zero",
        ));
    }
    if from == to {
        return Ok(value);
    }
    ensure_finite("Conversion", "converted temperature", to.from_kelvin(kelvin.max(0.0)))
}

fn info(unit: Temperature) -> UnitInfo {
    UnitInfo {
        symbol: unit.symbol().to_string(),
        name: unit.display_name().to_string(),
        factor: None,
        is_base: unit == Temperature::Kelvin,
    }
}

pub(crate) fn units() -> Vec<UnitInfo> {
    Temperature::ALL.iter().copied().map(info).collect()
}

pub(crate) fn conversion(value: f64, from: &str, to: &str) -> CalcResult<Conversion> {
    let from: Temperature = from.parse()?;
    let to: Temperature = to.parse()?;
    Ok(Conversion {
        input: value,
        value: convert_temperature(value, from, to)?,
        from: info(from),
        to: info(to),
        base_value: ensure_finite("Conversion", "temperature in kelvin", from.to_kelvin(value))?,
        base_symbol: Temperature::Kelvin.symbol().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_points() {
        assert_relative_eq!(convert_temperature(0.0, Temperature::Celsius, Temperature::Fahrenheit).unwrap(), 32.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(100.0, Temperature::Celsius, Temperature::Kelvin).unwrap(), 373.15, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(-40.0, Temperature::Fahrenheit, Temperature::Celsius).unwrap(), -40.0, epsilon = 1e-9);
        assert_relative_eq!(convert_temperature(0.0, Temperature::Kelvin, Temperature::Rankine).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_below_absolute_zero() {
        assert!(convert_temperature(-300.0, Temperature::Celsius, Temperature::Kelvin).is_err());
        assert!(convert_temperature(-1.0, Temperature::Kelvin, Temperature::Kelvin).is_err());
    }

    #[test]
    fn test_round_trip_every_pair() {
        for &a in Temperature::ALL {
            for &b in Temperature::ALL {
                let there = convert_temperature(25.0, a, b).unwrap();
                let back = convert_temperature(there, b, a).unwrap();
                assert_relative_eq!(back, 25.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("°C".parse::<Temperature>().unwrap(), Temperature::Celsius);
        assert_eq!("fahrenheit".parse::<Temperature>().unwrap(), Temperature::Fahrenheit);
        assert!("X".parse::<Temperature>().is_err());
    }
}
