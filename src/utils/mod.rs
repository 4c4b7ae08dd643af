pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::{duration_readable, format_hours};
pub use time::greeting;
