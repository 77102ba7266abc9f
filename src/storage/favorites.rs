//! Favorites persistence on top of a [`Storage`] backend.

use crate::domain::error::Result;
use crate::domain::FavoriteSet;
use crate::storage::backend::Storage;

/// Key under which favorites are stored, distinct from any other plugin data.
pub const FAVORITES_KEY: &str = "spacex-favorites";

/// Loads the persisted favorites.
///
/// An absent key, an unreadable backend, or a malformed value all yield an empty
/// set. The failure is logged, never surfaced.
#[must_use]
pub fn load_favorites(storage: &dyn Storage) -> FavoriteSet {
    match storage.get_list(FAVORITES_KEY) {
        Ok(Some(ids)) => {
            let favorites = FavoriteSet::from_ids(ids);
            tracing::debug!(count = favorites.len(), "favorites loaded");
            favorites
        }
        Ok(None) => FavoriteSet::default(),
        Err(e) => {
            tracing::warn!(error = %e, "stored favorites unreadable, starting empty");
            FavoriteSet::default()
        }
    }
}

/// Persists the complete favorite set.
///
/// # Errors
///
/// Propagates the backend write error.
pub fn save_favorites(storage: &mut dyn Storage, favorites: &FavoriteSet) -> Result<()> {
    storage.set_list(FAVORITES_KEY, favorites.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn absent_key_is_empty() {
        assert!(load_favorites(&MemoryStorage::new()).is_empty());
    }

    #[test]
    fn malformed_value_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launchdeck.json");
        std::fs::write(&path, r#"{"version":1,"entries":{"spacex-favorites":"oops"}}"#).unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert!(load_favorites(&storage).is_empty());
    }

    #[test]
    fn save_then_load() {
        let mut storage = MemoryStorage::new();
        let favorites = FavoriteSet::default().toggled("a").toggled("b");
        save_favorites(&mut storage, &favorites).unwrap();
        assert_eq!(load_favorites(&storage), favorites);
    }
}
