//! Canonical launch-browser state and its transitions.
//!
//! Every mutation goes through [`Store::dispatch`] with one [`Transition`].
//! The reducer itself never fails. After any transition that changes launches,
//! filters or favorites, the derivation effect recomputes the filtered list
//! and publishes a fresh page count with the current page reset to 1.

use crate::app::filters::{filter_launches, FilterState, FilterUpdate};
use crate::app::pagination::{paginate, total_pages, Page, PaginationState, PaginationUpdate};
use crate::domain::{FavoriteSet, Launch};
use crate::storage::{load_favorites, save_favorites, Storage};

/// Closed set of state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    BeginLoad,
    /// Stores a human-readable message; previous launches are kept.
    LoadFailed(String),
    /// Replaces the launch list wholesale.
    LoadSucceeded(Vec<Launch>),
    /// Merges the filter fields and resets to page 1.
    UpdateFilters(FilterUpdate),
    ToggleFavorite(String),
    /// Sets the requested page without validation.
    SetPage(i64),
    SetPagination(PaginationUpdate),
}

/// Owned state container.
pub struct Store {
    launches: Vec<Launch>,
    filtered_launches: Vec<Launch>,
    favorites: FavoriteSet,
    loading: bool,
    error: Option<String>,
    filters: FilterState,
    pagination: PaginationState,
    storage: Box<dyn Storage>,
}

impl Store {
    /// Creates an idle store whose favorites are read from `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let favorites = load_favorites(storage.as_ref());
        tracing::debug!(favorites = favorites.len(), "store created");

        Self {
            launches: Vec::new(),
            filtered_launches: Vec::new(),
            favorites,
            loading: false,
            error: None,
            filters: FilterState::default(),
            pagination: PaginationState::default(),
            storage,
        }
    }

    /// Applies `transition`, then re-derives the view if it changed a dependency.
    pub fn dispatch(&mut self, transition: Transition) {
        let _span = tracing::debug_span!("dispatch", transition = transition_name(&transition)).entered();

        if self.reduce(transition) {
            self.derive();
        }
    }

    /// Returns whether launches, filters or favorites changed.
    fn reduce(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::BeginLoad => {
                self.loading = true;
                false
            }
            Transition::LoadFailed(message) => {
                tracing::warn!(error = %message, "launch load failed");
                self.error = Some(message);
                self.loading = false;
                false
            }
            Transition::LoadSucceeded(launches) => {
                tracing::info!(count = launches.len(), "launches loaded");
                self.launches = launches;
                self.loading = false;
                self.error = None;
                true
            }
            Transition::UpdateFilters(update) => {
                self.filters.merge(update);
                self.pagination.current_page = 1;
                true
            }
            Transition::ToggleFavorite(id) => {
                let toggled = self.favorites.toggled(&id);
                match save_favorites(self.storage.as_mut(), &toggled) {
                    Ok(()) => {
                        tracing::debug!(id = %id, favorite = toggled.contains(&id), "favorite toggled");
                        self.favorites = toggled;
                        true
                    }
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "failed to persist favorites, toggle dropped");
                        false
                    }
                }
            }
            Transition::SetPage(page) => {
                self.pagination.current_page = page;
                false
            }
            Transition::SetPagination(update) => {
                self.pagination.merge(update);
                false
            }
        }
    }

    fn derive(&mut self) {
        self.filtered_launches = filter_launches(&self.launches, &self.filters, &self.favorites);
        let total = total_pages(self.filtered_launches.len(), self.pagination.items_per_page);
        self.reduce(Transition::SetPagination(PaginationUpdate {
            total_pages: Some(total),
            current_page: Some(1),
            items_per_page: None,
        }));
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.dispatch(Transition::UpdateFilters(update));
    }

    pub fn toggle_favorite(&mut self, id: &str) {
        self.dispatch(Transition::ToggleFavorite(id.to_string()));
    }

    pub fn set_page(&mut self, page: i64) {
        self.dispatch(Transition::SetPage(page));
    }

    #[must_use]
    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    #[must_use]
    pub fn filtered_launches(&self) -> &[Launch] {
        &self.filtered_launches
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// The visible page, with the stored page number clamped into range.
    #[must_use]
    pub fn current_page(&self) -> Page<'_> {
        paginate(
            &self.filtered_launches,
            self.pagination.items_per_page,
            self.pagination.current_page,
        )
    }

    #[must_use]
    pub fn find_launch(&self, id: &str) -> Option<&Launch> {
        self.launches.iter().find(|launch| launch.id == id)
    }
}

const fn transition_name(transition: &Transition) -> &'static str {
    match transition {
        Transition::BeginLoad => "BeginLoad",
        Transition::LoadFailed(_) => "LoadFailed",
        Transition::LoadSucceeded(_) => "LoadSucceeded",
        Transition::UpdateFilters(_) => "UpdateFilters",
        Transition::ToggleFavorite(_) => "ToggleFavorite",
        Transition::SetPage(_) => "SetPage",
        Transition::SetPagination(_) => "SetPagination",
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("launches", &self.launches.len())
            .field("filtered_launches", &self.filtered_launches.len())
            .field("favorites", &self.favorites.len())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("filters", &self.filters)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::YearFilter;
    use crate::domain::LaunchOutcome;
    use crate::storage::{MemoryStorage, FAVORITES_KEY};

    fn sample() -> Vec<Launch> {
        vec![
            Launch::new("a", "Starlink 1", "2023-01-01T00:00:00.000Z", LaunchOutcome::Success),
            Launch::new("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure),
        ]
    }

    fn many(count: usize) -> Vec<Launch> {
        (0..count)
            .map(|i| Launch::new(format!("l{i}"), format!("Mission {i}"), "2021-05-01T00:00:00Z", LaunchOutcome::Success))
            .collect()
    }

    fn loaded(storage: MemoryStorage, launches: Vec<Launch>) -> Store {
        let mut store = Store::new(Box::new(storage));
        store.dispatch(Transition::LoadSucceeded(launches));
        store
    }

    fn ids(launches: &[Launch]) -> Vec<&str> {
        launches.iter().map(|l| l.id.as_str()).collect()
    }

    fn persisted(storage: &MemoryStorage) -> Option<Vec<String>> {
        storage.get_list(FAVORITES_KEY).unwrap()
    }

    #[test]
    fn new_store_reads_persisted_favorites() {
        let storage = MemoryStorage::new().with_entry(FAVORITES_KEY, &["b"]);
        let store = Store::new(Box::new(storage));
        assert!(store.favorites().contains("b"));
        assert!(!store.is_loading());
        assert!(store.launches().is_empty());
    }

    #[test]
    fn load_succeeded_replaces_launches_and_clears_error() {
        let mut store = Store::new(Box::new(MemoryStorage::new()));
        store.dispatch(Transition::LoadFailed("boom".into()));
        assert_eq!(store.error(), Some("boom"));
        assert!(!store.is_loading());

        store.dispatch(Transition::BeginLoad);
        store.dispatch(Transition::LoadSucceeded(sample()));
        assert_eq!(store.error(), None);
        assert!(!store.is_loading());
        assert_eq!(ids(store.filtered_launches()), vec!["a", "b"]);

        store.dispatch(Transition::LoadSucceeded(many(3)));
        assert_eq!(store.launches().len(), 3);
    }

    #[test]
    fn load_failed_keeps_previous_launches() {
        let mut store = loaded(MemoryStorage::new(), sample());
        store.dispatch(Transition::LoadFailed("Failed to fetch launches. Please try again later.".into()));
        assert_eq!(store.launches().len(), 2);
        assert_eq!(ids(store.filtered_launches()), vec!["a", "b"]);
    }

    #[test]
    fn search_filter_scenario() {
        let mut store = loaded(MemoryStorage::new(), sample());
        store.update_filters(FilterUpdate::search_term("star"));
        assert_eq!(ids(store.filtered_launches()), vec!["a"]);
        assert_eq!(store.pagination().total_pages, 1);
    }

    #[test]
    fn successful_only_scenario() {
        let mut store = loaded(MemoryStorage::new(), sample());
        store.update_filters(FilterUpdate::successful_only(true));
        assert_eq!(ids(store.filtered_launches()), vec!["a"]);
    }

    #[test]
    fn favorite_then_show_favorites_scenario() {
        let storage = MemoryStorage::new();
        let mut store = loaded(storage.clone(), sample());

        store.toggle_favorite("b");
        store.update_filters(FilterUpdate::show_favorites(true));

        assert_eq!(ids(store.filtered_launches()), vec!["b"]);
        assert_eq!(persisted(&storage), Some(vec!["b".to_string()]));
    }

    #[test]
    fn toggling_twice_restores_membership_and_persisted_value() {
        let storage = MemoryStorage::new().with_entry(FAVORITES_KEY, &["a"]);
        let mut store = loaded(storage.clone(), sample());
        let before = store.favorites().clone();

        store.toggle_favorite("b");
        store.toggle_favorite("b");

        assert_eq!(store.favorites(), &before);
        assert_eq!(persisted(&storage), Some(vec!["a".to_string()]));
    }

    #[test]
    fn failed_write_leaves_favorites_unchanged() {
        let mut store = loaded(MemoryStorage::failing(), sample());
        store.toggle_favorite("a");
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn failed_write_keeps_current_page() {
        let mut store = loaded(MemoryStorage::failing(), many(30));
        store.set_page(2);
        store.toggle_favorite("l13");

        assert!(store.favorites().is_empty());
        assert_eq!(store.pagination().current_page, 2);
    }

    #[test]
    fn twenty_five_launches_third_page() {
        let mut store = loaded(MemoryStorage::new(), many(25));
        assert_eq!(store.pagination().total_pages, 3);

        store.set_page(3);
        let page = store.current_page();
        assert_eq!(page.page, 3);
        assert_eq!(ids(page.items), vec!["l24"]);
    }

    #[test]
    fn set_page_is_permissive_and_reads_are_clamped() {
        let mut store = loaded(MemoryStorage::new(), many(25));
        store.set_page(40);
        assert_eq!(store.pagination().current_page, 40);
        assert_eq!(store.current_page().page, 3);

        store.set_page(-2);
        assert_eq!(store.current_page().page, 1);
    }

    #[test]
    fn empty_launch_list_has_one_page() {
        let store = loaded(MemoryStorage::new(), Vec::new());
        assert_eq!(store.pagination().total_pages, 1);
        assert!(store.current_page().items.is_empty());
    }

    #[test]
    fn derivation_dependencies_reset_page() {
        let mut store = loaded(MemoryStorage::new(), many(30));

        store.set_page(2);
        store.update_filters(FilterUpdate::year(YearFilter::Year(2021)));
        assert_eq!(store.pagination().current_page, 1);

        store.set_page(2);
        store.toggle_favorite("l3");
        assert_eq!(store.pagination().current_page, 1);

        store.set_page(3);
        store.dispatch(Transition::LoadSucceeded(many(30)));
        assert_eq!(store.pagination().current_page, 1);
    }

    #[test]
    fn non_dependencies_keep_page() {
        let mut store = loaded(MemoryStorage::new(), many(30));
        store.set_page(2);
        store.dispatch(Transition::BeginLoad);
        store.dispatch(Transition::LoadFailed("x".into()));
        assert_eq!(store.pagination().current_page, 2);
    }

    #[test]
    fn filters_narrowing_recomputes_total_pages() {
        let mut store = loaded(MemoryStorage::new(), many(30));
        assert_eq!(store.pagination().total_pages, 3);

        store.update_filters(FilterUpdate::search_term("mission 1"));
        assert_eq!(ids(store.filtered_launches()).len(), 11);
        assert_eq!(store.pagination().total_pages, 1);
    }

    #[test]
    fn find_launch_by_id() {
        let store = loaded(MemoryStorage::new(), sample());
        assert_eq!(store.find_launch("b").map(|l| l.name.as_str()), Some("CRS-1"));
        assert!(store.find_launch("zz").is_none());
    }
}
