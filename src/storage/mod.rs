//! Durable key-value state, used to restore the last validated member across sessions.

use crate::storage::error::StorageError;

pub mod database;
pub mod error;
pub mod memory;

pub type Result<T, E = StorageError> = std::result::Result<T, E>;

/// A place where scalar values can be stored under fixed names.
/// Implementations must survive concurrent use: the member session writes to it from async tasks.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Insert every `(key, value)` pair. Either all of them are written, or none.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<()>;
}
