//! Configuration file check and upgrade.
//!
//! Older config files may lack fields added in later releases. `check`
//! reports them, `migrate` writes them back with their default values
//! while leaving every existing value untouched.

use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Names of the top-level keys missing from `content`.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current: Value = serde_yaml::from_str(content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let empty = Mapping::new();
    let current_map = current.as_mapping().unwrap_or(&empty);

    let mut missing = Vec::new();
    if let Some(map) = defaults.as_mapping() {
        for key in map.keys() {
            if !current_map.contains_key(key)
                && let Some(name) = key.as_str()
            {
                missing.push(name.to_string());
            }
        }
    }
    Ok(missing)
}

/// Fill missing keys with defaults. Returns the upgraded YAML text, or
/// `None` when nothing had to change.
pub fn upgrade_content(content: &str) -> AppResult<Option<String>> {
    let mut current: Value = serde_yaml::from_str(content)?;
    if current.is_null() {
        current = Value::Mapping(Mapping::new());
    }
    let defaults = serde_yaml::to_value(Config::default())?;

    let mut changed = false;
    if let (Some(map), Some(default_map)) = (current.as_mapping_mut(), defaults.as_mapping()) {
        for (key, value) in default_map {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                changed = true;
            }
        }
    }

    if changed {
        Ok(Some(serde_yaml::to_string(&current)?))
    } else {
        Ok(None)
    }
}

/// Print the missing fields of the config file at `path`.
pub fn check(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        info(format!(
            "No configuration file at {} (defaults in use).",
            path.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_fields(&content)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        info(format!("Missing fields: {}", missing.join(", ")));
    }
    Ok(missing)
}

/// Rewrite the config file at `path` with missing fields filled in.
pub fn migrate(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    match upgrade_content(&content)? {
        Some(upgraded) => {
            fs::write(path, upgraded)?;
            success(format!("Configuration migrated: {}", path.display()));
            Ok(true)
        }
        None => {
            info("Configuration already up to date.");
            Ok(false)
        }
    }
}
