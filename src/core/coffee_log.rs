//! Append-only coffee log persisted as a JSON array under `coffee_log`.
//!
//! The array is kept most recent first. Entries are only ever prepended;
//! nothing here edits or removes one.

use crate::db::store::{KeyValueStore, keys};
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::CoffeeLogEntry;

pub struct CoffeeLogStore<S> {
    storage: S,
}

/// Decode the stored JSON text. Malformed data is reported as
/// `CorruptLog` and never replaced silently.
pub fn parse_log(raw: &str) -> AppResult<Vec<CoffeeLogEntry>> {
    serde_json::from_str(raw).map_err(|e| AppError::CorruptLog(e.to_string()))
}

pub fn serialize_log(entries: &[CoffeeLogEntry]) -> AppResult<String> {
    Ok(serde_json::to_string(entries)?)
}

impl<S: KeyValueStore> CoffeeLogStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Read the whole log. An absent value is an empty log.
    pub fn load(&self) -> AppResult<Vec<CoffeeLogEntry>> {
        match self.storage.get(keys::COFFEE_LOG)? {
            Some(raw) => parse_log(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Put `entry` in front of the stored log and write the full log back.
    ///
    /// Read-modify-write without locking: one writer at a time. The new
    /// sequence is returned only once the write has succeeded.
    pub fn append(&mut self, entry: CoffeeLogEntry) -> AppResult<Vec<CoffeeLogEntry>> {
        let previous = self.load()?;

        let mut updated = Vec::with_capacity(previous.len() + 1);
        updated.push(entry);
        updated.extend(previous);

        let raw = serialize_log(&updated)?;
        self.storage.set(keys::COFFEE_LOG, &raw)?;

        Ok(updated)
    }
}
