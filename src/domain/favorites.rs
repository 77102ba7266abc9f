//! Favorite launch identifiers.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of favorite launch identifiers.
///
/// Mutation is toggle-only. Order is kept so the persisted array reads in the
/// order the user starred launches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    /// Builds a set from persisted identifiers, dropping duplicates.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Returns a copy with `id` added if absent or removed if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use launchdeck::domain::FavoriteSet;
    ///
    /// let empty = FavoriteSet::default();
    /// let starred = empty.toggled("b");
    /// assert!(starred.contains("b"));
    /// assert_eq!(starred.toggled("b"), empty);
    /// ```
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let ids = if self.contains(id) {
            self.ids.iter().filter(|existing| *existing != id).cloned().collect()
        } else {
            let mut ids = self.ids.clone();
            ids.push(id.to_string());
            ids
        };
        Self { ids }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}
