//! In-memory storage backend.
//!
//! Used when the plugin cannot create its data directory, and by tests that need
//! to observe what was persisted after handing the backend to a [`Store`].
//!
//! [`Store`]: crate::app::Store

use crate::domain::error::{LaunchdeckError, Result};
use crate::storage::backend::Storage;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-local key-value storage.
///
/// Cloning yields a handle onto the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, Vec<String>>>>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose writes always fail, for exercising error paths.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            entries: Arc::default(),
            fail_writes: true,
        }
    }

    /// Seeds `key` without going through [`Storage::set_list`].
    #[must_use]
    pub fn with_entry(self, key: &str, values: &[&str]) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), values.iter().map(|v| (*v).to_string()).collect());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set_list(&mut self, key: &str, values: &[String]) -> Result<()> {
        if self.fail_writes {
            return Err(LaunchdeckError::Storage(format!("write to {key} rejected")));
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
