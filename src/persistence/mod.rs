//! Save data: the key-value store abstraction and the state codec.

pub mod codec;
pub mod store;

pub use codec::{load_state, save_state};
pub use store::{FileStore, KeyValueStore, MemoryStore};
