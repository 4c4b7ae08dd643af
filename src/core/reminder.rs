//! Next-coffee reminder computation. Pure functions over instants.

use crate::models::derived_state::DerivedState;
use crate::utils::time::hours_to_duration;
use chrono::{DateTime, Duration, Utc};

/// `last + interval_hours`, or `None` when nothing has been logged.
///
/// Also `None` if the sum falls outside the representable date range.
pub fn compute_next_reminder(
    last_coffee_time: Option<DateTime<Utc>>,
    interval_hours: f64,
) -> Option<DateTime<Utc>> {
    let last = last_coffee_time?;
    let interval = hours_to_duration(interval_hours)?;
    last.checked_add_signed(interval)
}

/// True once `now` has reached the reminder. Exact equality counts as due.
pub fn is_due(next_reminder_time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match next_reminder_time {
        Some(next) => now >= next,
        None => false,
    }
}

/// Time left before the reminder; `None` when there is no reminder or it is due.
pub fn time_until(next_reminder_time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<Duration> {
    let next = next_reminder_time?;
    if now >= next { None } else { Some(next - now) }
}

pub fn derive(
    last_coffee_time: Option<DateTime<Utc>>,
    interval_hours: f64,
    now: DateTime<Utc>,
) -> DerivedState {
    let next_reminder_time = compute_next_reminder(last_coffee_time, interval_hours);
    DerivedState {
        last_coffee_time,
        next_reminder_time,
        is_reminder_due: is_due(next_reminder_time, now),
    }
}
