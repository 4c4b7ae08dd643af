//! Calendar-date helpers: today's date, display format, same-day checks.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format(DATE_FORMAT).to_string()
}

/// Calendar date of `instant` as seen in `tz`.
pub fn date_in<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn is_same_day<Tz: TimeZone>(instant: &DateTime<Utc>, day: NaiveDate, tz: &Tz) -> bool {
    date_in(instant, tz) == day
}
