//! JSON file-based storage backend.
//!
//! Keeps the whole key-value document in memory and rewrites it on every
//! `set_list`, using a write-to-temp + rename so a crash never leaves a
//! half-written file behind.

use crate::domain::error::{LaunchdeckError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// JSON storage container format.
///
/// Values are kept as raw JSON so that one malformed entry does not prevent the
/// rest of the document from loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "spacex-favorites": ["5eb87cd9ffd86e000604b32a", "5eb87cdaffd86e000604b32b"]
///   }
/// }
/// ```
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonStorage {
    /// Opens (or prepares) the JSON document at `file_path`.
    ///
    /// Parent directories are created. A file that exists but cannot be parsed is
    /// logged and treated as an empty document; it is only overwritten by the next
    /// successful `set_list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an existing
    /// file cannot be read.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no storage file yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage initialized");

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let bytes = std::fs::read(path)?;

        match serde_json::from_slice::<StorageData>(&bytes) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded storage data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is corrupt, treating as empty");
                Ok(StorageData::default())
            }
        }
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| LaunchdeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        let _span = tracing::debug_span!("json_get_list", key = %key).entered();

        self.data
            .entries
            .get(key)
            .map(|value| {
                serde_json::from_value::<Vec<String>>(value.clone()).map_err(|e| {
                    LaunchdeckError::Storage(format!("value under {key} is not a string list: {e}"))
                })
            })
            .transpose()
    }

    fn set_list(&mut self, key: &str, values: &[String]) -> Result<()> {
        let _span = tracing::debug_span!("json_set_list", key = %key, count = values.len()).entered();

        let previous = self
            .data
            .entries
            .insert(key.to_string(), serde_json::Value::from(values.to_vec()));

        if let Err(e) = self.save_to_file() {
            match previous {
                Some(value) => self.data.entries.insert(key.to_string(), value),
                None => self.data.entries.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}

impl std::fmt::Debug for JsonStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStorage")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn missing_file_reads_as_absent_key() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested/launchdeck.json")).unwrap();
        assert_eq!(storage.get_list("spacex-favorites").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launchdeck.json");

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.set_list("spacex-favorites", &ids(&["a", "b"])).unwrap();
        drop(storage);

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get_list("spacex-favorites").unwrap(), Some(ids(&["a", "b"])));
    }

    #[test]
    fn keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("launchdeck.json")).unwrap();
        storage.set_list("spacex-favorites", &ids(&["a"])).unwrap();
        storage.set_list("other", &ids(&["z"])).unwrap();

        assert_eq!(storage.get_list("spacex-favorites").unwrap(), Some(ids(&["a"])));
        assert_eq!(storage.get_list("other").unwrap(), Some(ids(&["z"])));
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launchdeck.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.get_list("spacex-favorites").unwrap(), None);

        storage.set_list("spacex-favorites", &ids(&["a"])).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"spacex-favorites\""));
    }

    #[test]
    fn non_utf8_file_opens_empty_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launchdeck.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.get_list("spacex-favorites").unwrap(), None);

        storage.set_list("spacex-favorites", &ids(&["a"])).unwrap();
        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get_list("spacex-favorites").unwrap(), Some(ids(&["a"])));
    }

    #[test]
    fn wrong_value_shape_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launchdeck.json");
        std::fs::write(&path, r#"{"version":1,"entries":{"spacex-favorites":{"a":1}}}"#).unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert!(matches!(
            storage.get_list("spacex-favorites"),
            Err(LaunchdeckError::Storage(_))
        ));
    }
}
