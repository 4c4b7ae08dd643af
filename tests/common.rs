#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rcoffeelog::db::store::KeyValueStore;
use rcoffeelog::errors::{AppError, AppResult};
use rcoffeelog::models::coffee_type::CoffeeType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rcoffeelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcoffeelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh test DB through the CLI.
pub fn init_db(db_path: &str) {
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn latte() -> CoffeeType {
    CoffeeType::from_code("latte").unwrap()
}

pub fn espresso() -> CoffeeType {
    CoffeeType::from_code("espresso").unwrap()
}

/// Store whose reads work but whose writes always fail.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: rcoffeelog::db::MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other("storage is read-only")))
    }
}
