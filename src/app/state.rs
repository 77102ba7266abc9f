//! Application state management and view model computation.
//!
//! [`AppState`] wraps the [`Store`] with state that only matters to this
//! terminal front end: the card selection, the input mode, the open detail view
//! and the theme. The store stays the single source of truth for launches,
//! filters, favorites and pagination.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` picks exactly one body screen, in priority order:
//! error, loading, detail, empty, cards. Cards are windowed around the
//! selection when the pane is too short for a full page.

use super::filters::{year_options, YearFilter};
use super::modes::InputMode;
use super::store::Store;
use crate::domain::{Launch, RocketInfo, RocketRef};
use crate::ui::helpers::{format_card_date, format_long_date, match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    name_column_width, Body, DetailPanel, DisplayItem, EmptyState, ErrorScreen, FilterBarInfo,
    FooterInfo, HeaderInfo, RocketPanel, UIViewModel, ROCKET_COLUMN_WIDTH,
};

/// Rows taken by everything except the card rows.
const LIST_CHROME_ROWS: usize = 11;

/// Rocket data slot of an open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketSlot {
    Loading,
    Loaded(RocketInfo),
    Unavailable,
}

/// Detail view of one launch.
///
/// Owns the result of its rocket lookup, so closing the view discards any
/// lookup still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub launch_id: String,
    pub rocket: RocketSlot,
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub store: Store,

    /// Zero-based index of the selected card within the current page.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Open detail view, if any.
    pub detail: Option<DetailView>,

    /// Set until Zellij answers the web access permission request.
    pub awaiting_permission: bool,

    /// Set when the last permission answer was a denial.
    pub permission_denied: bool,

    pub theme: Theme,

    /// Base URL of the launch API, without a trailing path.
    pub api_base_url: String,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, theme: Theme, api_base_url: impl Into<String>) -> Self {
        Self {
            store,
            selected_index: 0,
            input_mode: InputMode::Normal,
            detail: None,
            awaiting_permission: true,
            permission_denied: false,
            theme,
            api_base_url: api_base_url.into(),
        }
    }

    /// Launches on the visible page.
    #[must_use]
    pub fn page_items(&self) -> &[Launch] {
        self.store.current_page().items
    }

    #[must_use]
    pub fn selected_launch(&self) -> Option<&Launch> {
        self.page_items().get(self.selected_index)
    }

    /// Launch shown by the open detail view.
    #[must_use]
    pub fn detail_launch(&self) -> Option<&Launch> {
        self.detail
            .as_ref()
            .and_then(|detail| self.store.find_launch(&detail.launch_id))
    }

    /// Moves selection down by one card, wrapping to the top of the page.
    pub fn move_selection_down(&mut self) {
        let len = self.page_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one card, wrapping to the bottom of the page.
    pub fn move_selection_up(&mut self) {
        let len = self.page_items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection inside the current page after the page changed.
    pub fn clamp_selection(&mut self) {
        let len = self.page_items().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Year choices in cycling order: all years, then newest to oldest.
    #[must_use]
    pub fn year_choices(&self) -> Vec<YearFilter> {
        std::iter::once(YearFilter::All)
            .chain(year_options(self.store.launches()).into_iter().map(YearFilter::Year))
            .collect()
    }

    /// Year filter one step forward or backward from the current one.
    ///
    /// A selected year that no longer appears in the data restarts the cycle.
    #[must_use]
    pub fn cycle_year(&self, forward: bool) -> YearFilter {
        let choices = self.year_choices();
        let current = self.store.filters().year;
        let Some(pos) = choices.iter().position(|choice| *choice == current) else {
            return YearFilter::All;
        };

        let len = choices.len();
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        choices[next]
    }

    /// Computes a renderable UI view model from current state and pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = self.compute_body(rows, cols);
        let footer = self.compute_footer(&body);

        UIViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            body,
            footer,
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> Body {
        if let Some(message) = self.store.error() {
            return Body::Error(ErrorScreen {
                title: "Something went wrong".to_string(),
                message: message.to_string(),
                hint: "r: try again  q: quit".to_string(),
            });
        }

        if self.awaiting_permission {
            return Body::Loading {
                message: "Waiting for web access permission...".to_string(),
            };
        }

        if self.store.is_loading() {
            return Body::Loading {
                message: "Loading launches...".to_string(),
            };
        }

        if let (Some(detail), Some(launch)) = (&self.detail, self.detail_launch()) {
            return Body::Detail(Box::new(self.compute_detail(detail, launch)));
        }

        let items = self.page_items();
        if items.is_empty() {
            return Body::Empty(self.compute_empty_state());
        }

        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);

        let selected = self.selected_index.min(items.len() - 1);
        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(items.len());
        if visible_end - visible_start < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let name_width = name_column_width(cols);
        let display_items = items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, launch)| {
                self.compute_display_item(launch, visible_start + relative_idx, name_width)
            })
            .collect();

        Body::Cards {
            items: display_items,
            selected_index: selected - visible_start,
        }
    }

    fn compute_display_item(&self, launch: &Launch, absolute_idx: usize, name_width: usize) -> DisplayItem {
        let name = truncate(&launch.name, name_width);
        let name_len = name.chars().count();

        let highlight_ranges = match_ranges(&launch.name, &self.store.filters().search_term)
            .into_iter()
            .filter(|&(start, _)| start < name_len)
            .map(|(start, end)| (start, end.min(name_len)))
            .collect();

        let rocket = launch
            .rocket
            .as_ref()
            .and_then(RocketRef::name)
            .unwrap_or("Unknown Rocket");

        DisplayItem {
            name,
            date: format_card_date(launch),
            rocket: truncate(rocket, ROCKET_COLUMN_WIDTH - 2),
            status: launch.status(),
            is_favorite: self.store.favorites().contains(&launch.id),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_detail(&self, detail: &DetailView, launch: &Launch) -> DetailPanel {
        let rocket = match &detail.rocket {
            RocketSlot::Loading => RocketPanel::Loading,
            RocketSlot::Loaded(info) => RocketPanel::Loaded {
                name: info.name.clone(),
                kind: info.kind.clone(),
                company: info.company.clone(),
            },
            RocketSlot::Unavailable => RocketPanel::Unavailable,
        };

        let links = [
            ("Mission patch", &launch.links.patch),
            ("Wikipedia", &launch.links.wikipedia),
            ("Webcast", &launch.links.webcast),
            ("Article", &launch.links.article),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_ref().map(|url| (label.to_string(), url.clone())))
        .collect();

        DetailPanel {
            name: launch.name.clone(),
            status: launch.status(),
            is_favorite: self.store.favorites().contains(&launch.id),
            date: format_long_date(launch),
            year: launch.year(),
            launchpad: launch.launchpad.clone().unwrap_or_else(|| "Unknown".to_string()),
            flight_number: launch
                .flight_number
                .map_or_else(|| "N/A".to_string(), |n| n.to_string()),
            rocket,
            details: launch.details.clone(),
            links,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.filters().show_favorites {
            EmptyState {
                message: "No favorite missions".to_string(),
                subtitle: "Start by favoriting some missions to see them here.".to_string(),
            }
        } else {
            EmptyState {
                message: "No missions found".to_string(),
                subtitle: "Try adjusting your search or filter criteria.".to_string(),
            }
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = if self.store.launches().is_empty() {
            "Filter, explore, and favorite SpaceX launches".to_string()
        } else {
            format!(
                "{} of {} launches  {} favorites",
                self.store.filtered_launches().len(),
                self.store.launches().len(),
                self.store.favorites().len()
            )
        };

        HeaderInfo {
            title: " Launchdeck: SpaceX Mission Explorer ".to_string(),
            subtitle,
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let filters = self.store.filters();
        FilterBarInfo {
            search_term: filters.search_term.clone(),
            searching: self.input_mode == InputMode::Search,
            year: match filters.year {
                YearFilter::All => "All years".to_string(),
                YearFilter::Year(year) => year.to_string(),
            },
            successful_only: filters.successful_only,
            show_favorites: filters.show_favorites,
        }
    }

    fn compute_footer(&self, body: &Body) -> FooterInfo {
        let pagination = match body {
            Body::Cards { .. } | Body::Empty(_) => {
                let page = self.store.current_page();
                Some(format!("Page {} of {}", page.page, page.total_pages))
            }
            _ => None,
        };

        let keybindings = match (self.input_mode, body) {
            (_, Body::Error(_)) => "r: try again  q: quit",
            (_, Body::Loading { .. }) => "q: quit",
            (_, Body::Detail(_)) => "Space: favorite  Esc/Enter: back  q: quit",
            (InputMode::Search, _) => "Type to search  Enter: keep  Esc: clear  Ctrl+n/p: navigate",
            (InputMode::Normal, _) => {
                "j/k: move  h/l: page  /: search  y/Y: year  s: successful  f: favorites  Space: star  Enter: details  q: quit"
            }
        };

        FooterInfo {
            pagination,
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::FilterUpdate;
    use crate::app::store::Transition;
    use crate::domain::{LaunchOutcome, LaunchStatus, RocketSummary};
    use crate::storage::MemoryStorage;

    fn launch(id: &str, name: &str, date: &str, outcome: LaunchOutcome) -> Launch {
        Launch::new(id, name, date, outcome)
    }

    fn ready_state(launches: Vec<Launch>) -> AppState {
        let mut store = Store::new(Box::new(MemoryStorage::new()));
        store.dispatch(Transition::LoadSucceeded(launches));
        let mut state = AppState::new(store, Theme::default(), "https://api.spacexdata.com/v4");
        state.awaiting_permission = false;
        state
    }

    fn many(count: usize) -> Vec<Launch> {
        (0..count)
            .map(|i| launch(&format!("l{i}"), &format!("Mission {i}"), "2021-05-01T00:00:00Z", LaunchOutcome::Success))
            .collect()
    }

    #[test]
    fn selection_wraps_within_the_page() {
        let mut state = ready_state(many(14));
        state.move_selection_up();
        assert_eq!(state.selected_index, 11);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.store.set_page(2);
        state.selected_index = 5;
        state.clamp_selection();
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_launch().map(|l| l.id.as_str()), Some("l13"));
    }

    #[test]
    fn year_cycle_goes_through_all_then_newest_first() {
        let mut state = ready_state(vec![
            launch("a", "A", "2006-03-24T22:30:00Z", LaunchOutcome::Failure),
            launch("b", "B", "2020-03-07T04:50:31Z", LaunchOutcome::Success),
        ]);
        assert_eq!(state.cycle_year(true), YearFilter::Year(2020));
        assert_eq!(state.cycle_year(false), YearFilter::Year(2006));

        state.store.update_filters(FilterUpdate::year(YearFilter::Year(2006)));
        assert_eq!(state.cycle_year(true), YearFilter::All);

        state.store.update_filters(FilterUpdate::year(YearFilter::Year(1999)));
        assert_eq!(state.cycle_year(true), YearFilter::All);
    }

    #[test]
    fn body_priority() {
        let mut state = ready_state(many(3));
        state.awaiting_permission = true;
        assert!(matches!(state.compute_viewmodel(30, 120).body, Body::Loading { .. }));

        state.awaiting_permission = false;
        state.store.dispatch(Transition::BeginLoad);
        assert!(matches!(state.compute_viewmodel(30, 120).body, Body::Loading { .. }));

        state.store.dispatch(Transition::LoadFailed("Failed to fetch launches. Please try again later.".into()));
        let vm = state.compute_viewmodel(30, 120);
        let Body::Error(screen) = vm.body else {
            panic!("expected error screen");
        };
        assert_eq!(screen.title, "Something went wrong");
        assert_eq!(screen.message, "Failed to fetch launches. Please try again later.");
        assert_eq!(vm.footer.pagination, None);
    }

    #[test]
    fn empty_states_depend_on_favorites_filter() {
        let mut state = ready_state(many(3));
        state.store.update_filters(FilterUpdate::show_favorites(true));
        let Body::Empty(empty) = state.compute_viewmodel(30, 120).body else {
            panic!("expected empty state");
        };
        assert_eq!(empty.message, "No favorite missions");

        state.store.update_filters(FilterUpdate {
            show_favorites: Some(false),
            search_term: Some("nothing matches".into()),
            ..FilterUpdate::default()
        });
        let vm = state.compute_viewmodel(30, 120);
        let Body::Empty(empty) = vm.body else {
            panic!("expected empty state");
        };
        assert_eq!(empty.message, "No missions found");
        assert_eq!(empty.subtitle, "Try adjusting your search or filter criteria.");
        assert_eq!(vm.footer.pagination.as_deref(), Some("Page 1 of 1"));
    }

    #[test]
    fn cards_show_status_rocket_and_highlights() {
        let mut starlink = launch("a", "Starlink 1", "2023-01-01T12:00:00.000Z", LaunchOutcome::Success);
        starlink.rocket = Some(RocketRef::Inline(RocketSummary {
            id: None,
            name: "Falcon 9".into(),
        }));
        let mut state = ready_state(vec![
            starlink,
            launch("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure),
        ]);
        state.store.toggle_favorite("a");
        state.store.update_filters(FilterUpdate::search_term("LINK"));

        let vm = state.compute_viewmodel(30, 120);
        let Body::Cards { items, selected_index } = vm.body else {
            panic!("expected cards");
        };
        assert_eq!(selected_index, 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rocket, "Falcon 9");
        assert_eq!(items[0].date, "01/01/2023, 12:00:00");
        assert_eq!(items[0].status, LaunchStatus::Successful);
        assert_eq!(items[0].highlight_ranges, vec![(4, 8)]);
        assert!(items[0].is_favorite);
        assert!(items[0].is_selected);
        assert_eq!(vm.header.subtitle, "1 of 2 launches  1 favorites");
    }

    #[test]
    fn unknown_rocket_label() {
        let state = ready_state(vec![launch("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure)]);
        let Body::Cards { items, .. } = state.compute_viewmodel(30, 120).body else {
            panic!("expected cards");
        };
        assert_eq!(items[0].rocket, "Unknown Rocket");
    }

    #[test]
    fn short_panes_window_around_the_selection() {
        let mut state = ready_state(many(12));
        state.selected_index = 10;

        let Body::Cards { items, selected_index } = state.compute_viewmodel(15, 120).body else {
            panic!("expected cards");
        };
        assert_eq!(items.len(), 4);
        assert!(items[selected_index].is_selected);
        assert_eq!(items[selected_index].name, "Mission 10");
    }

    #[test]
    fn detail_panel_defaults() {
        let mut state = ready_state(vec![launch("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure)]);
        state.detail = Some(DetailView {
            launch_id: "b".into(),
            rocket: RocketSlot::Unavailable,
        });

        let vm = state.compute_viewmodel(30, 120);
        let Body::Detail(panel) = vm.body else {
            panic!("expected detail");
        };
        assert_eq!(panel.launchpad, "Unknown");
        assert_eq!(panel.flight_number, "N/A");
        assert_eq!(panel.rocket, RocketPanel::Unavailable);
        assert_eq!(panel.status, LaunchStatus::Failed);
        assert!(panel.links.is_empty());
        assert_eq!(vm.footer.pagination, None);
    }
}
