//! # Layover Time
//!
//! Time on the ground between an arriving and a departing flight, and
//! whether it satisfies a minimum connection time.
//!
//! Both times are local wall-clock times at the connecting airport.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::require_ordered;
use crate::errors::CalcResult;

/// Connection times.
///
/// ## JSON Example
///
/// ```json
/// { "arrival": "2024-05-01T22:10:00", "departure": "2024-05-02T06:35:00", "min_connection_minutes": 45 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoverInput {
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_connection_minutes: Option<u32>,
}

impl LayoverInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_ordered("departure", &self.arrival, &self.departure)
    }
}

/// Layover duration breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoverResult {
    pub total_minutes: i64,
    pub hours: i64,
    pub minutes: i64,
    /// e.g. "8h 25m"
    pub formatted: String,
    /// Departure falls on a later calendar day than arrival
    pub overnight: bool,
    /// Present when a minimum connection time was given
    pub meets_minimum: Option<bool>,
    /// Layover minus the minimum connection time (negative when too short)
    pub spare_minutes: Option<i64>,
}

/// Calculate the layover between two flights.
pub fn calculate(input: &LayoverInput) -> CalcResult<LayoverResult> {
    input.validate()?;

    let total_minutes = (input.departure - input.arrival).num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let spare_minutes = input
        .min_connection_minutes
        .map(|min| total_minutes - i64::from(min));

    Ok(LayoverResult {
        total_minutes,
        hours,
        minutes,
        formatted: format!("{}h {:02}m", hours, minutes),
        overnight: input.departure.date() > input.arrival.date(),
        meets_minimum: spare_minutes.map(|spare| spare >= 0),
        spare_minutes,
    })
}
