//! Key-value storage abstraction.
//!
//! Every persisted value of the application is a plain string under a
//! fixed key. The SQLite pool implements this trait for real use; the
//! in-memory store backs the tests.

use crate::errors::AppResult;
use std::collections::HashMap;

/// Keys used in the key-value store.
pub mod keys {
    pub const PROFILE_NAME: &str = "profile_name";
    pub const REMINDER_HOURS: &str = "reminder_hours";
    pub const COFFEE_LOG: &str = "coffee_log";
}

pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

/// Volatile store kept in a HashMap.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
