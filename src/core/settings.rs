use crate::db::store::{KeyValueStore, keys};
use crate::errors::AppResult;
use crate::utils::time::{is_valid_hours, parse_hours};

/// What the store holds under `reminder_hours`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredHours {
    Unset,
    Valid(f64),
    /// Present but not a number > 0. Carries the raw text.
    Invalid(String),
}

impl StoredHours {
    pub fn or_default(&self, default: f64) -> f64 {
        match self {
            StoredHours::Valid(h) => *h,
            StoredHours::Unset | StoredHours::Invalid(_) => default,
        }
    }
}

/// Reads and writes the values edited on the settings screen.
pub struct SettingsLogic;

impl SettingsLogic {
    pub fn read_reminder_hours<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<StoredHours> {
        Ok(match store.get(keys::REMINDER_HOURS)? {
            None => StoredHours::Unset,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(h) if is_valid_hours(h) => StoredHours::Valid(h),
                _ => StoredHours::Invalid(raw),
            },
        })
    }

    /// Validate and persist a new interval. Returns the stored value.
    pub fn set_reminder_hours<S: KeyValueStore + ?Sized>(store: &mut S, raw: &str) -> AppResult<f64> {
        let hours = parse_hours(raw)?;
        store.set(keys::REMINDER_HOURS, &hours.to_string())?;
        Ok(hours)
    }

    /// Display name; blank values count as unset.
    pub fn read_profile_name<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<String>> {
        Ok(store
            .get(keys::PROFILE_NAME)?
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()))
    }

    pub fn set_profile_name<S: KeyValueStore + ?Sized>(store: &mut S, name: &str) -> AppResult<()> {
        store.set(keys::PROFILE_NAME, name.trim())
    }
}
