pub mod coffee_type;
pub mod derived_state;
pub mod log_entry;

pub use coffee_type::CoffeeType;
pub use derived_state::DerivedState;
pub use log_entry::CoffeeLogEntry;
