pub mod coffee_log;
pub mod home;
pub mod log;
pub mod reminder;
pub mod settings;

pub use coffee_log::CoffeeLogStore;
pub use home::{DrinkOutcome, HomeScreen};
pub use settings::{SettingsLogic, StoredHours};
