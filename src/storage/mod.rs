//! Theme preference persistence module
//!
//! This module contains the key store capability and its file-backed and
//! in-memory implementations.

pub mod file_store;
pub mod key_store;
pub mod memory_store;

// Re-export main types
pub use file_store::FileKeyStore;
pub use key_store::{PersistentKeyStore, SELECTED_THEME_KEY};
pub use memory_store::InMemoryKeyStore;
