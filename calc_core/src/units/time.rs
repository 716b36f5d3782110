//! Time units. Base: second.
//!
//! Month and year use Gregorian calendar averages (365.2425 days per year).

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const GREGORIAN_YEAR: f64 = 365.2425 * DAY;

unit_table! {
    /// Time units (base: second)
    Time, quantity = "time", base = Second;
    Nanosecond => ("ns", "Nanosecond", 1e-9, ["nanoseconds"]),
    Microsecond => ("us", "Microsecond", 1e-6, ["µs", "microseconds"]),
    Millisecond => ("ms", "Millisecond", 1e-3, ["milliseconds"]),
    Second => ("s", "Second", 1.0, ["sec", "seconds"]),
    Minute => ("min", "Minute", MINUTE, ["minutes"]),
    Hour => ("h", "Hour", HOUR, ["hr", "hours"]),
    Day => ("d", "Day", DAY, ["days"]),
    Week => ("wk", "Week", 7.0 * DAY, ["weeks"]),
    Month => ("mo", "Month (average)", GREGORIAN_YEAR / 12.0, ["month", "months"]),
    Year => ("yr", "Year (average)", GREGORIAN_YEAR, ["year", "years"]),
    Decade => ("dec", "Decade", 10.0 * GREGORIAN_YEAR, ["decade", "decades"]),
    Century => ("c", "Century", 100.0 * GREGORIAN_YEAR, ["century", "centuries"]),
}
