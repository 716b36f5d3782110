//! # Notice Period
//!
//! End date of a notice period that starts on a given day.
//!
//! - Days and weeks: plain calendar addition
//! - Months: same day-of-month N months later, clamped to the last day of
//!   shorter months (31 Jan + 1 month = 29 Feb in a leap year)
//! - Working days: counts Monday to Friday only, starting the day after
//!   `start`; public holidays are not considered
//!
//! A length of zero ends on the start date itself.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::is_weekend;
use crate::errors::{CalcError, CalcResult};

/// Unit the notice length is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeUnit {
    Days,
    Weeks,
    Months,
    WorkingDays,
}

impl NoticeUnit {
    pub const ALL: [NoticeUnit; 4] = [NoticeUnit::Days, NoticeUnit::Weeks, NoticeUnit::Months, NoticeUnit::WorkingDays];

    /// Longest accepted length, roughly 100 years in each unit
    pub fn max_length(&self) -> u32 {
        match self {
            NoticeUnit::Days => 36_525,
            NoticeUnit::Weeks => 5_218,
            NoticeUnit::Months => 1_200,
            NoticeUnit::WorkingDays => 26_089,
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "days" | "day" | "d" => Ok(NoticeUnit::Days),
            "weeks" | "week" | "w" => Ok(NoticeUnit::Weeks),
            "months" | "month" | "m" => Ok(NoticeUnit::Months),
            "working_days" | "working_day" | "business_days" | "wd" => Ok(NoticeUnit::WorkingDays),
            _ => Err(CalcError::invalid_input("unit", s, "Expected days, weeks, months or working_days")),
        }
    }
}

impl fmt::Display for NoticeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoticeUnit::Days => "days",
            NoticeUnit::Weeks => "weeks",
            NoticeUnit::Months => "months",
            NoticeUnit::WorkingDays => "working days",
        };
        write!(f, "{}", name)
    }
}

/// Notice start and length.
///
/// ## JSON Example
///
/// ```json
/// { "start": "2024-01-31", "length": 1, "unit": "months" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePeriodInput {
    pub start: NaiveDate,
    pub length: u32,
    pub unit: NoticeUnit,
}

impl NoticePeriodInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let max = self.unit.max_length();
        if self.length > max {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                format!("Notice cannot exceed {} {}", max, self.unit),
            ));
        }
        Ok(())
    }
}

/// When the notice period ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticePeriodResult {
    pub end_date: NaiveDate,
    /// end_date − start in calendar days
    pub calendar_days: i64,
    /// Full English weekday name of the end date
    pub end_weekday: String,
    pub falls_on_weekend: bool,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn add_working_days(start: NaiveDate, count: u32) -> Option<NaiveDate> {
    let mut date = start;
    let mut remaining = count;
    while remaining > 0 {
        date = date.succ_opt()?;
        if !is_weekend(date) {
            remaining -= 1;
        }
    }
    Some(date)
}

/// Calculate the end of a notice period.
pub fn calculate(input: &NoticePeriodInput) -> CalcResult<NoticePeriodResult> {
    input.validate()?;

    let length = input.length;
    let end_date = match input.unit {
        NoticeUnit::Days => input.start.checked_add_signed(Duration::days(i64::from(length))),
        NoticeUnit::Weeks => input.start.checked_add_signed(Duration::weeks(i64::from(length))),
        NoticeUnit::Months => input.start.checked_add_months(Months::new(length)),
        NoticeUnit::WorkingDays => add_working_days(input.start, length),
    }
    .ok_or_else(|| CalcError::calculation_failed("NoticePeriod", "End date is outside the supported calendar range"))?;

    Ok(NoticePeriodResult {
        end_date,
        calendar_days: (end_date - input.start).num_days(),
        end_weekday: weekday_name(end_date.weekday()).to_string(),
        falls_on_weekend: is_weekend(end_date),
    })
}
