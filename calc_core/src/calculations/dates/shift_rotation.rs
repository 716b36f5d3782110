//! # Shift Rotation
//!
//! Expands an "N days on, M days off" rotation into a day-by-day schedule.
//!
//! The rotation's first on-day is `rotation_start`. Each date's position in
//! the cycle is `(date − rotation_start) mod (days_on + days_off)` with the
//! modulus taken Euclidean-style, so dates before the rotation start resolve
//! backwards through the cycle instead of being rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::require_ordered;
use crate::errors::{CalcError, CalcResult};

/// Longest schedule produced, roughly ten years
pub const MAX_RANGE_DAYS: i64 = 3660;

/// Longest run of on-days or off-days in one cycle
pub const MAX_RUN_DAYS: u32 = 366;

/// Rotation pattern and the date range to expand.
///
/// ## JSON Example
///
/// ```json
/// { "rotation_start": "2024-01-01", "days_on": 4, "days_off": 4,
///   "range_start": "2024-02-01", "range_end": "2024-02-29" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRotationInput {
    /// First on-day of some cycle
    pub rotation_start: NaiveDate,
    pub days_on: u32,
    pub days_off: u32,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
}

impl ShiftRotationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.days_on == 0 {
            return Err(CalcError::invalid_input("days_on", "0", "Rotation needs at least one on-day"));
        }
        for (field, days) in [("days_on", self.days_on), ("days_off", self.days_off)] {
            if days > MAX_RUN_DAYS {
                return Err(CalcError::invalid_input(
                    field,
                    days.to_string(),
                    format!("Cannot exceed {} days", MAX_RUN_DAYS),
                ));
            }
        }
        require_ordered("range_end", &self.range_start, &self.range_end)?;
        let span = (self.range_end - self.range_start).num_days() + 1;
        if span > MAX_RANGE_DAYS {
            return Err(CalcError::invalid_input(
                "range_end",
                self.range_end.to_string(),
                format!("Range spans {} days; the limit is {}", span, MAX_RANGE_DAYS),
            ));
        }
        Ok(())
    }

    pub fn cycle_length(&self) -> u32 {
        self.days_on.saturating_add(self.days_off)
    }

    /// 1-based position of `date` within its cycle
    pub fn cycle_day(&self, date: NaiveDate) -> u32 {
        let offset = (date - self.rotation_start).num_days();
        let cycle = i64::from(self.cycle_length().max(1));
        offset.rem_euclid(cycle) as u32 + 1
    }

    pub fn is_on_shift(&self, date: NaiveDate) -> bool {
        self.cycle_day(date) <= self.days_on
    }
}

/// One day of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDay {
    pub date: NaiveDate,
    pub on_shift: bool,
    pub cycle_day: u32,
}

/// Expanded schedule and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRotationResult {
    pub cycle_length: u32,
    pub on_days: u32,
    pub off_days: u32,
    pub schedule: Vec<ShiftDay>,
}

/// Expand a shift rotation over a date range.
pub fn calculate(input: &ShiftRotationInput) -> CalcResult<ShiftRotationResult> {
    input.validate()?;

    let schedule: Vec<ShiftDay> = input
        .range_start
        .iter_days()
        .take_while(|&d| d <= input.range_end)
        .map(|date| ShiftDay {
            date,
            on_shift: input.is_on_shift(date),
            cycle_day: input.cycle_day(date),
        })
        .collect();

    let on_days = schedule.iter().filter(|d| d.on_shift).count() as u32;
    Ok(ShiftRotationResult {
        cycle_length: input.cycle_length(),
        on_days,
        off_days: schedule.len() as u32 - on_days,
        schedule,
    })
}
