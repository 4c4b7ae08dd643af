pub mod config;
pub mod drink;
pub mod history;
pub mod init;
pub mod log;
pub mod settings;
pub mod status;
pub mod types;
