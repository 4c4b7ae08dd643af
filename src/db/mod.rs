pub mod log;
pub mod migrate;
pub mod pool;
pub mod store;

pub use pool::DbPool;
pub use store::{KeyValueStore, MemoryStore, keys};
