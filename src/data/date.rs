use crate::error::{PlannerError, PlannerResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A calendar day with no time component. Every date the engine stores or
/// compares is one of these.
pub type CalendarDate = NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string, naming `field` in the error.
pub fn parse_date(field: &str, value: &str) -> PlannerResult<CalendarDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        PlannerError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
            source,
        }
    })
}

/// Drops the time of day from a zoned timestamp, keeping the local calendar day.
pub fn calendar_day<Tz: TimeZone>(at: &DateTime<Tz>) -> CalendarDate {
    at.date_naive()
}

/// Same as [`calendar_day`] for timestamps that are already local.
pub fn naive_calendar_day(at: &NaiveDateTime) -> CalendarDate {
    at.date()
}

pub fn format_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
