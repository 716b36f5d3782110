//! # Travel Days
//!
//! Length of a trip counted inclusively: leaving on the 1st and returning on
//! the 3rd is three days and two nights.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::dates::travel_days::{calculate, TravelDaysInput};
//! use chrono::NaiveDate;
//!
//! let input = TravelDaysInput {
//!     start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
//!     end: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!((result.total_days, result.nights), (3, 2));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_weekend, require_ordered};
use crate::errors::CalcResult;

/// Trip start and end, both inclusive.
///
/// ## JSON Example
///
/// ```json
/// { "start": "2024-07-01", "end": "2024-07-14" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDaysInput {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TravelDaysInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_ordered("end", &self.start, &self.end)
    }
}

/// Trip length breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDaysResult {
    pub total_days: i64,
    pub nights: i64,
    pub weeks: i64,
    /// Days beyond the full weeks
    pub extra_days: i64,
    pub weekend_days: i64,
    pub weekdays: i64,
}

/// Saturdays and Sundays among `total_days` consecutive days from `start`
fn weekend_days(start: NaiveDate, total_days: i64) -> i64 {
    let full_weeks = total_days / 7;
    let remainder = start
        .iter_days()
        .take((total_days % 7) as usize)
        .filter(|&d| is_weekend(d))
        .count() as i64;
    full_weeks * 2 + remainder
}

/// Count the days and nights of a trip.
pub fn calculate(input: &TravelDaysInput) -> CalcResult<TravelDaysResult> {
    input.validate()?;

    let total_days = (input.end - input.start).num_days() + 1;
    let weekend_days = weekend_days(input.start, total_days);

    Ok(TravelDaysResult {
        total_days,
        nights: total_days - 1,
        weeks: total_days / 7,
        extra_days: total_days % 7,
        weekend_days,
        weekdays: total_days - weekend_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(start: NaiveDate, end: NaiveDate) -> CalcResult<TravelDaysResult> {
        calculate(&TravelDaysInput { start, end })
    }

    #[test]
    fn test_same_day_trip() {
        let result = trip(date(2024, 3, 5), date(2024, 3, 5)).unwrap();
        assert_eq!(result.total_days, 1);
        assert_eq!(result.nights, 0);
    }

    #[test]
    fn test_two_week_trip() {
        // Mon 1 Jul to Sun 14 Jul 2024
        let result = trip(date(2024, 7, 1), date(2024, 7, 14)).unwrap();
        assert_eq!(result.total_days, 14);
        assert_eq!(result.nights, 13);
        assert_eq!((result.weeks, result.extra_days), (2, 0));
        assert_eq!(result.weekend_days, 4);
        assert_eq!(result.weekdays, 10);
    }

    #[test]
    fn test_crosses_leap_day() {
        let result = trip(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        assert_eq!(result.total_days, 3);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = trip(date(2024, 3, 5), date(2024, 3, 4)).unwrap_err();
        assert_eq!(err.field(), Some("end"));
    }

    #[test]
    fn test_whole_calendar_range() {
        let result = trip(NaiveDate::MIN, NaiveDate::MAX).unwrap();
        assert_eq!(result.weekend_days + result.weekdays, result.total_days);
        assert!((result.weekend_days - result.total_days * 2 / 7).abs() <= 2);
    }

    proptest! {
        #[test]
        fn nights_are_one_less_than_days(offset in 0i64..20_000, len in 0i64..2_000) {
            let start = date(1990, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(len);
            let result = trip(start, end).unwrap();
            prop_assert_eq!(result.total_days, len + 1);
            prop_assert_eq!(result.nights, result.total_days - 1);
            prop_assert_eq!(result.weeks * 7 + result.extra_days, result.total_days);
            prop_assert_eq!(result.weekend_days + result.weekdays, result.total_days);

            let counted = start.iter_days().take((len + 1) as usize).filter(|&d| is_weekend(d)).count() as i64;
            prop_assert_eq!(result.weekend_days, counted);
        }
    }
}
