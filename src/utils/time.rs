//! Time utilities: greeting, HH:MM formatting, reminder interval parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, TimeZone, Timelike};
use std::fmt;

pub const TIME_FORMAT: &str = "%H:%M";

/// First hour (inclusive) of the morning greeting.
pub const MORNING_START: u32 = 5;
/// First hour (inclusive) of the afternoon greeting.
pub const AFTERNOON_START: u32 = 12;
/// First hour (inclusive) of the evening greeting, which wraps to MORNING_START.
pub const EVENING_START: u32 = 18;

/// [05,12) morning, [12,18) afternoon, everything else evening.
pub fn greeting<Tz: TimeZone>(now: &DateTime<Tz>) -> &'static str {
    let h = now.hour();
    if (MORNING_START..AFTERNOON_START).contains(&h) {
        "Good morning"
    } else if (AFTERNOON_START..EVENING_START).contains(&h) {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format(TIME_FORMAT).to_string()
}

/// `HH:MM`, or the `--:--` placeholder when there is nothing to show.
pub fn format_optional_time<Tz: TimeZone>(dt: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.map(format_time).unwrap_or_else(|| "--:--".to_string())
}

/// Convert a (possibly fractional) number of hours to a duration,
/// rounded to the millisecond. `None` when it does not fit a duration.
pub fn hours_to_duration(hours: f64) -> Option<Duration> {
    let millis = (hours * 3_600_000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

/// Shortest accepted reminder interval: one minute.
pub const MIN_REMINDER_HOURS: f64 = 1.0 / 60.0;

pub fn is_valid_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= MIN_REMINDER_HOURS && hours_to_duration(hours).is_some()
}

/// Parse a reminder interval such as `4` or `2.5`. Must be at least one minute.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let h: f64 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidReminderHours(s.to_string()))?;

    if !is_valid_hours(h) {
        return Err(AppError::InvalidReminderHours(s.to_string()));
    }
    Ok(h)
}
