//! # Unit Converters
//!
//! Every converter is a static table mapping unit identifiers to a
//! multiplicative factor relative to one base unit. A conversion is
//! value → base-unit value → target-unit value.
//!
//! | Converter | Base unit |
//! |---|---|
//! | [`Length`] | metre |
//! | [`Volume`] | litre |
//! | [`Speed`] | metre per second |
//! | [`Force`] | newton |
//! | [`Time`] | second |
//! | [`Angle`] | radian |
//! | [`FlowRate`] | litre per second |
//! | [`DataRate`] | bit per second |
//! | [`Mass`] | kilogram |
//! | [`Area`] | square metre |
//!
//! [`Temperature`] is affine (offset + scale) and converts through kelvin.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{convert, Length, LinearUnit};
//!
//! let metres = convert(1.0, Length::Mile, Length::Meter);
//! assert!((metres - 1609.344).abs() < 1e-9);
//!
//! let unit: Length = "ft".parse().unwrap();
//! assert_eq!(unit, Length::Foot);
//! ```
//!
//! ## Parsing
//!
//! Identifiers match a unit's symbol, display name or any alias. An exact
//! (case-sensitive) match wins; otherwise the lookup falls back to a
//! case-insensitive match, so `"KM"` finds kilometres while `"kB/s"` and
//! `"kb/s"` still resolve to kilobytes and kilobits respectively.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};

/// A unit identifier belonging to one converter's table
pub trait Unit: Copy + Eq + fmt::Debug + 'static {
    /// Converter name used in errors and listings (e.g. "length")
    const QUANTITY: &'static str;

    /// Short symbol, also the serialized form (e.g. "km")
    fn symbol(self) -> &'static str;

    /// Human-readable name (e.g. "Kilometer")
    fn display_name(self) -> &'static str;

    /// Extra identifiers accepted when parsing
    fn aliases(self) -> &'static [&'static str];

    /// Every unit in the table, in display order
    fn all() -> &'static [Self];
}

/// A unit related to its converter's base unit by a pure scale factor
pub trait LinearUnit: Unit {
    /// The unit whose factor is exactly 1
    const BASE: Self;

    /// Size of one of this unit expressed in base units
    fn factor(self) -> f64;

    fn to_base(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.factor()
    }
}

/// Convert `value` between two units of the same table
pub fn convert<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    to.from_base(from.to_base(value))
}

/// Exact and case-folded identifier maps for one table
pub(crate) struct UnitLookup<U> {
    exact: HashMap<&'static str, U>,
    folded: HashMap<String, U>,
}

impl<U: Unit> UnitLookup<U> {
    pub(crate) fn build() -> Self {
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();
        for &unit in U::all() {
            let keys = [unit.symbol(), unit.display_name()]
                .into_iter()
                .chain(unit.aliases().iter().copied());
            for key in keys {
                exact.entry(key).or_insert(unit);
                folded.entry(key.to_lowercase()).or_insert(unit);
            }
        }
        UnitLookup { exact, folded }
    }

    pub(crate) fn find(&self, text: &str) -> CalcResult<U> {
        let key = text.trim();
        self.exact
            .get(key)
            .or_else(|| self.folded.get(&key.to_lowercase()))
            .copied()
            .ok_or_else(|| CalcError::unknown_unit(U::QUANTITY, text))
    }
}

/// `FromStr` backed by a lazily built [`UnitLookup`]
macro_rules! impl_unit_from_str {
    ($name:ident) => {
        impl std::str::FromStr for $name {
            type Err = $crate::errors::CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                static LOOKUP: once_cell::sync::Lazy<$crate::units::UnitLookup<$name>> =
                    once_cell::sync::Lazy::new($crate::units::UnitLookup::<$name>::build);
                LOOKUP.find(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::units::Unit::symbol(*self))
            }
        }
    };
}

/// Declare a factor table: enum, `Unit` + `LinearUnit` impls, parsing.
///
/// ```text
/// unit_table! {
///     /// docs
///     Length, quantity = "length", base = Meter;
///     Meter => ("m", "Meter", 1.0, ["meters", "metre"]),
/// }
/// ```
macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident, quantity = $quantity:literal, base = $base:ident;
        $(
            $variant:ident => ($symbol:literal, $display:literal, $factor:expr, [$($alias:literal),* $(,)?])
        ),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[doc = $display]
                #[serde(rename = $symbol)]
                $variant,
            )+
        }

        impl $name {
            /// All units in this table
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::units::Unit for $name {
            const QUANTITY: &'static str = $quantity;

            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }

            fn display_name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*],)+
                }
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        impl $crate::units::LinearUnit for $name {
            const BASE: Self = $name::$base;

            fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor,)+
                }
            }
        }

        impl_unit_from_str!($name);
    };
}

pub mod angle;
pub mod area;
pub mod data_rate;
pub mod flow_rate;
pub mod force;
pub mod length;
pub mod mass;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

pub use angle::Angle;
pub use area::Area;
pub use data_rate::DataRate;
pub use flow_rate::FlowRate;
pub use force::Force;
pub use length::Length;
pub use mass::Mass;
pub use speed::Speed;
pub use temperature::Temperature;
pub use time::Time;
pub use volume::Volume;

// ============================================================================
// Quantity dispatch (string identifiers → typed tables)
// ============================================================================

/// Which converter a string-based conversion request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Length,
    Volume,
    Speed,
    Force,
    Time,
    Angle,
    FlowRate,
    DataRate,
    Mass,
    Area,
    Temperature,
}

/// One row of a unit listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub symbol: String,
    pub name: String,
    /// Scale relative to the base unit; `None` for affine units
    pub factor: Option<f64>,
    pub is_base: bool,
}

/// A resolved conversion between two units of one quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Value as given, in `from` units
    pub input: f64,
    /// Converted value, in `to` units
    pub value: f64,
    pub from: UnitInfo,
    pub to: UnitInfo,
    /// Input value expressed in the converter's base unit
    pub base_value: f64,
    pub base_symbol: String,
}

fn unit_info<U: LinearUnit>(unit: U) -> UnitInfo {
    UnitInfo {
        symbol: unit.symbol().to_string(),
        name: unit.display_name().to_string(),
        factor: Some(unit.factor()),
        is_base: unit == U::BASE,
    }
}

fn linear_conversion<U>(value: f64, from: &str, to: &str) -> CalcResult<Conversion>
where
    U: LinearUnit + std::str::FromStr<Err = CalcError>,
{
    let from: U = from.parse()?;
    let to: U = to.parse()?;
    Ok(Conversion {
        input: value,
        value: ensure_finite("Conversion", "converted value", convert(value, from, to))?,
        from: unit_info(from),
        to: unit_info(to),
        base_value: ensure_finite("Conversion", "base value", from.to_base(value))?,
        base_symbol: U::BASE.symbol().to_string(),
    })
}

fn linear_units<U: LinearUnit>() -> Vec<UnitInfo> {
    U::all().iter().copied().map(unit_info).collect()
}

/// Expand `$body` once with `$U` bound to the table type for `$quantity`
macro_rules! with_linear_table {
    ($quantity:expr, $U:ident => $body:expr, temperature => $temp:expr) => {
        match $quantity {
            Quantity::Length => { type $U = Length; $body }
            Quantity::Volume => { type $U = Volume; $body }
            Quantity::Speed => { type $U = Speed; $body }
            Quantity::Force => { type $U = Force; $body }
            Quantity::Time => { type $U = Time; $body }
            Quantity::Angle => { type $U = Angle; $body }
            Quantity::FlowRate => { type $U = FlowRate; $body }
            Quantity::DataRate => { type $U = DataRate; $body }
            Quantity::Mass => { type $U = Mass; $body }
            Quantity::Area => { type $U = Area; $body }
            Quantity::Temperature => $temp,
        }
    };
}

impl Quantity {
    pub const ALL: [Quantity; 11] = [
        Quantity::Length,
        Quantity::Volume,
        Quantity::Speed,
        Quantity::Force,
        Quantity::Time,
        Quantity::Angle,
        Quantity::FlowRate,
        Quantity::DataRate,
        Quantity::Mass,
        Quantity::Area,
        Quantity::Temperature,
    ];

    /// Name used in errors and listings
    pub fn name(&self) -> &'static str {
        with_linear_table!(self, U => U::QUANTITY, temperature => Temperature::QUANTITY)
    }

    /// Parse from common spellings ("flow-rate", "Data Rate", "temp")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "length" | "distance" => Ok(Quantity::Length),
            "volume" => Ok(Quantity::Volume),
            "speed" | "velocity" => Ok(Quantity::Speed),
            "force" => Ok(Quantity::Force),
            "time" | "duration" => Ok(Quantity::Time),
            "angle" => Ok(Quantity::Angle),
            "flow_rate" | "flow" => Ok(Quantity::FlowRate),
            "data_rate" | "data_transfer_rate" | "bandwidth" => Ok(Quantity::DataRate),
            "mass" | "weight" => Ok(Quantity::Mass),
            "area" => Ok(Quantity::Area),
            "temperature" | "temp" => Ok(Quantity::Temperature),
            _ => Err(CalcError::invalid_input(
                "quantity",
                s,
                "Unknown quantity - expected one of length, volume, speed, force, time, angle, flow_rate, data_rate, mass, area, temperature",
            )),
        }
    }

    /// Every unit this converter knows
    pub fn units(&self) -> Vec<UnitInfo> {
        with_linear_table!(self, U => linear_units::<U>(), temperature => temperature::units())
    }

    /// Convert `value` between two unit identifiers of this quantity
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<Conversion> {
        with_linear_table!(
            self,
            U => linear_conversion::<U>(value, from, to),
            temperature => temperature::conversion(value, from, to)
        )
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
