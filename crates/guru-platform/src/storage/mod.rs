//! Durable key-value slots for small text documents.
//!
//! A slot holds one serialized value under a fixed key. The chat history is
//! the main user: it is read on start-up, rewritten after every append and
//! erased on reset.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use guru_common::PlatformError;

/// Read/write access to named text slots.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError>;

    /// Replaces the slot contents.
    fn set(&self, key: &str, value: &str) -> Result<(), PlatformError>;

    /// Erases the slot. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> Result<(), PlatformError>;
}

/// Rejects keys that could escape the store directory.
pub(crate) fn validate_key(key: &str) -> Result<(), PlatformError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PlatformError::StorageError(format!("invalid key: {key:?}")))
    }
}
