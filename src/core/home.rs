//! Home screen controller.
//!
//! Holds a cached copy of the persisted state. `refresh()` must be
//! called whenever the screen is (re)entered; values changed elsewhere
//! (e.g. by the settings command) are only picked up there.

use crate::core::coffee_log::CoffeeLogStore;
use crate::core::reminder;
use crate::core::settings::{SettingsLogic, StoredHours};
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::coffee_type::CoffeeType;
use crate::models::derived_state::DerivedState;
use crate::models::log_entry::CoffeeLogEntry;
use crate::ui::messages::warning;
use crate::utils::date::is_same_day;
use crate::utils::formatting::format_hours;
use crate::utils::time::is_valid_hours;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub struct HomeScreen<S: KeyValueStore> {
    log_store: CoffeeLogStore<S>,
    default_reminder_hours: f64,

    selected: Option<CoffeeType>,
    coffee_log: Vec<CoffeeLogEntry>,
    reminder_hours: f64,
    user_name: Option<String>,
    last_coffee_time: Option<DateTime<Utc>>,
    next_reminder_time: Option<DateTime<Utc>>,
}

/// Result of a successful "I just had a coffee".
#[derive(Debug, Clone)]
pub struct DrinkOutcome {
    pub entry: CoffeeLogEntry,
    pub reminder_hours: f64,
    pub next_reminder_time: Option<DateTime<Utc>>,
}

impl DrinkOutcome {
    pub fn message(&self) -> String {
        format!(
            "Coffee logged! ☕ Enjoyed your {}! Next reminder in {}",
            self.entry.coffee_type.title,
            format_hours(self.reminder_hours)
        )
    }
}

impl<S: KeyValueStore> HomeScreen<S> {
    /// A screen with empty state. Nothing is read until `refresh()`.
    pub fn new(storage: S, default_reminder_hours: f64) -> Self {
        let hours = if is_valid_hours(default_reminder_hours) {
            default_reminder_hours
        } else {
            crate::config::DEFAULT_REMINDER_HOURS
        };

        Self {
            log_store: CoffeeLogStore::new(storage),
            default_reminder_hours: hours,
            selected: None,
            coffee_log: Vec::new(),
            reminder_hours: hours,
            user_name: None,
            last_coffee_time: None,
            next_reminder_time: None,
        }
    }

    /// Reload interval, profile name and log from storage and recompute.
    pub fn refresh(&mut self) -> AppResult<()> {
        let storage = self.log_store.storage();

        let stored = SettingsLogic::read_reminder_hours(storage)?;
        if let StoredHours::Invalid(raw) = &stored {
            warning(format!(
                "Ignoring invalid reminder interval '{}', using {}.",
                raw,
                format_hours(self.default_reminder_hours)
            ));
        }
        let hours = stored.or_default(self.default_reminder_hours);
        let name = SettingsLogic::read_profile_name(storage)?;
        let log = self.log_store.load()?;

        self.reminder_hours = hours;
        self.user_name = name;
        self.last_coffee_time = log.first().map(|e| e.timestamp);
        self.coffee_log = log;
        self.recompute();

        Ok(())
    }

    fn recompute(&mut self) {
        self.next_reminder_time =
            reminder::compute_next_reminder(self.last_coffee_time, self.reminder_hours);
    }

    pub fn select(&mut self, coffee_type: CoffeeType) {
        self.selected = Some(coffee_type);
    }

    pub fn selected(&self) -> Option<&CoffeeType> {
        self.selected.as_ref()
    }

    /// Use another interval for the cached state without persisting it.
    pub fn apply_reminder_hours(&mut self, hours: f64) -> AppResult<()> {
        if !is_valid_hours(hours) {
            return Err(AppError::InvalidReminderHours(hours.to_string()));
        }
        self.reminder_hours = hours;
        self.recompute();
        Ok(())
    }

    /// Log the selected coffee at `now`.
    ///
    /// Fails without any state change when no type is selected or when
    /// the store cannot be written. The cache is updated only after the
    /// write succeeded.
    pub fn drink_coffee(&mut self, now: DateTime<Utc>) -> AppResult<DrinkOutcome> {
        let coffee_type = self.selected.clone().ok_or(AppError::NoCoffeeSelected)?;

        let entry = CoffeeLogEntry::new(coffee_type, now);
        let updated = self.log_store.append(entry.clone())?;

        self.coffee_log = updated;
        self.last_coffee_time = Some(entry.timestamp);
        self.recompute();

        Ok(DrinkOutcome {
            entry,
            reminder_hours: self.reminder_hours,
            next_reminder_time: self.next_reminder_time,
        })
    }

    pub fn coffee_log(&self) -> &[CoffeeLogEntry] {
        &self.coffee_log
    }

    pub fn last_entry(&self) -> Option<&CoffeeLogEntry> {
        self.coffee_log.first()
    }

    pub fn reminder_hours(&self) -> f64 {
        self.reminder_hours
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn last_coffee_time(&self) -> Option<DateTime<Utc>> {
        self.last_coffee_time
    }

    pub fn next_reminder_time(&self) -> Option<DateTime<Utc>> {
        self.next_reminder_time
    }

    pub fn is_reminder_due(&self, now: DateTime<Utc>) -> bool {
        reminder::is_due(self.next_reminder_time, now)
    }

    pub fn derived_state(&self, now: DateTime<Utc>) -> DerivedState {
        DerivedState {
            last_coffee_time: self.last_coffee_time,
            next_reminder_time: self.next_reminder_time,
            is_reminder_due: self.is_reminder_due(now),
        }
    }

    /// Entries whose calendar date in `tz` is `day`.
    pub fn count_on_day<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> usize {
        self.coffee_log
            .iter()
            .filter(|e| is_same_day(&e.timestamp, day, tz))
            .count()
    }

    /// Entries logged today, local time.
    pub fn today_count(&self) -> usize {
        self.count_on_day(crate::utils::date::today(), &chrono::Local)
    }

    pub fn storage(&self) -> &S {
        self.log_store.storage()
    }

    pub fn into_storage(self) -> S {
        self.log_store.into_inner()
    }
}
