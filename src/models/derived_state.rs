use chrono::{DateTime, Utc};
use serde::Serialize;

/// Values computed from the log and the reminder interval. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedState {
    pub last_coffee_time: Option<DateTime<Utc>>,
    pub next_reminder_time: Option<DateTime<Utc>>,
    pub is_reminder_due: bool,
}
