//! Date and time calculators: trip length, layovers, notice periods and
//! shift rotations.
//!
//! All dates are timezone-free calendar values (`chrono::NaiveDate`,
//! `chrono::NaiveDateTime`) and serialise as ISO-8601 strings.

pub mod layover;
pub mod notice_period;
pub mod shift_rotation;
pub mod travel_days;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::errors::{CalcError, CalcResult};

pub use layover::{LayoverInput, LayoverResult};
pub use notice_period::{NoticePeriodInput, NoticePeriodResult, NoticeUnit};
pub use shift_rotation::{ShiftDay, ShiftRotationInput, ShiftRotationResult};
pub use travel_days::{TravelDaysInput, TravelDaysResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, text: &str) -> CalcResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| CalcError::invalid_input(field, text, format!("Expected a YYYY-MM-DD date ({})", e)))
}

/// Parse `YYYY-MM-DDTHH:MM[:SS]`; a space may replace the `T`.
pub fn parse_datetime(field: &str, text: &str) -> CalcResult<NaiveDateTime> {
    let trimmed = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CalcError::invalid_input(field, text, "Expected a YYYY-MM-DDTHH:MM[:SS] date and time"))
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Reject a range whose end precedes its start.
pub(crate) fn require_ordered<T: PartialOrd + ToString>(field: &str, start: &T, end: &T) -> CalcResult<()> {
    if end < start {
        return Err(CalcError::invalid_input(
            field,
            end.to_string(),
            format!("Must not be before {}", start.to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("start", " 2024-02-29 ").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(parse_date("start", "2023-02-29").unwrap_err().field(), Some("start"));
        assert!(parse_date("start", "29/02/2024").is_err());
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(23, 45, 0).unwrap();
        assert_eq!(parse_datetime("arrival", "2024-05-01T23:45").unwrap(), expected);
        assert_eq!(parse_datetime("arrival", "2024-05-01 23:45:00").unwrap(), expected);
        assert!(parse_datetime("arrival", "2024-05-01").is_err());
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
    }

    #[test]
    fn test_require_ordered() {
        assert!(require_ordered("end", &1, &1).is_ok());
        assert_eq!(require_ordered("end", &2, &1).unwrap_err().field(), Some("end"));
    }
}
