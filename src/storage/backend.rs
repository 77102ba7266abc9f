//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a small key-value
//! capability modeled on browser-style local storage: each key holds a list of
//! strings. Business rules (which key, what an absent or corrupt value means) live
//! in [`crate::storage::favorites`], not in the backends.

use crate::domain::error::Result;

/// Abstraction over persistent key-value backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON document on disk with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local, used as a fallback
///
/// # Examples
///
/// ```no_run
/// use launchdeck::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/launchdeck.json"))?;
/// storage.set_list("spacex-favorites", &["5eb87cd9ffd86e000604b32a".to_string()])?;
/// assert!(storage.get_list("spacex-favorites")?.is_some());
/// # Ok::<(), launchdeck::LaunchdeckError>(())
/// ```
pub trait Storage: Send {
    /// Reads the list stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if a value exists but is not a list of strings, or the
    /// backend cannot be read.
    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>>;

    /// Replaces the list stored under `key`.
    ///
    /// The write is complete when this returns `Ok`; there is no deferred flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the value.
    fn set_list(&mut self, key: &str, values: &[String]) -> Result<()>;
}
