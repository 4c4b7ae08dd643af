//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored coffee log is corrupt: {0}")]
    CorruptLog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Please select a coffee type before logging!")]
    NoCoffeeSelected,

    #[error("Unknown coffee type: {0} (run `rcoffeelog types` to see the catalog)")]
    InvalidCoffeeType(String),

    #[error("Invalid reminder interval: {0} (expected a number of hours, at least 1 minute)")]
    InvalidReminderHours(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
