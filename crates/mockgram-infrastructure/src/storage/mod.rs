//! Storage layer: atomic file writes and the key-value store implementations.

mod atomic_file;
mod file_store;
mod memory_store;

pub use atomic_file::{AtomicFileError, AtomicTomlFile, write_atomic};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
