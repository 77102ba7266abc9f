//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single control-flow coordinator: it turns user input
//! and fetch results into store transitions and view-state changes, and
//! returns the side effects the plugin shim must perform.
//!
//! # Event Types
//!
//! - **Data**: `LoadLaunches`, `LaunchesFetched`, `RocketFetched`, `PermissionsResult`
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`, `ExitSearch`
//! - **Filters**: `NextYear`, `PrevYear`, `ToggleSuccessfulOnly`, `ToggleShowFavorites`
//! - **Launch**: `ToggleFavorite`, `OpenDetails`, `CloseDetails`
//! - **Plugin**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use launchdeck::app::{handle_event, Action, AppState, Event};
//! use launchdeck::app::store::Store;
//! use launchdeck::storage::MemoryStorage;
//! use launchdeck::ui::Theme;
//!
//! let store = Store::new(Box::new(MemoryStorage::new()));
//! let mut state = AppState::new(store, Theme::default(), "https://api.spacexdata.com/v4");
//!
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::FetchLaunches]);
//! # Ok::<(), launchdeck::LaunchdeckError>(())
//! ```

use super::filters::FilterUpdate;
use super::modes::InputMode;
use super::state::{DetailView, RocketSlot};
use super::store::Transition;
use crate::api::{self, RequestKind, LAUNCHES_FAILED_MESSAGE, ROCKET_FAILED_MESSAGE};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Launch, RocketInfo, RocketRef};
use std::collections::BTreeMap;

/// Events triggered by user input or by fetch results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Answer to the web access permission request.
    PermissionsResult { granted: bool },
    /// Requests the launch list; also the manual retry after a failure.
    LoadLaunches,
    /// Outcome of the launch list fetch, already turned into a user message on failure.
    LaunchesFetched(std::result::Result<Vec<Launch>, String>),
    /// Outcome of a rocket lookup for the detail view of `launch_id`.
    RocketFetched {
        launch_id: String,
        result: std::result::Result<RocketInfo, String>,
    },

    /// Moves selection down by one card (wraps to top).
    KeyDown,
    /// Moves selection up by one card (wraps to bottom).
    KeyUp,
    NextPage,
    PrevPage,

    /// Enters search mode, editing the current term.
    SearchMode,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Leaves search mode keeping the term.
    SubmitSearch,
    /// Leaves search mode and clears the term.
    ExitSearch,

    NextYear,
    PrevYear,
    ToggleSuccessfulOnly,
    ToggleShowFavorites,

    /// Stars or unstars the selected launch, or the one in the detail view.
    ToggleFavorite,
    OpenDetails,
    CloseDetails,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// No event currently fails; errors from fetches arrive as event payloads.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::PermissionsResult { granted } => {
            state.awaiting_permission = false;
            state.permission_denied = !granted;
            if *granted {
                tracing::debug!("web access granted");
                Ok(begin_load(state))
            } else {
                tracing::warn!("web access denied");
                state
                    .store
                    .dispatch(Transition::LoadFailed("Web access permission was denied.".to_string()));
                Ok((true, vec![]))
            }
        }
        Event::LoadLaunches if state.permission_denied => {
            if state.awaiting_permission {
                return Ok((false, vec![]));
            }
            tracing::debug!("retry without web access, asking again");
            state.awaiting_permission = true;
            Ok((false, vec![Action::RequestWebAccess]))
        }
        Event::LoadLaunches => Ok(begin_load(state)),
        Event::LaunchesFetched(result) => {
            match result {
                Ok(launches) => {
                    state.store.dispatch(Transition::LoadSucceeded(launches.clone()));
                }
                Err(message) => {
                    state.store.dispatch(Transition::LoadFailed(message.clone()));
                }
            }
            state.selected_index = 0;
            if state.detail_launch().is_none() {
                state.detail = None;
            }
            Ok((true, vec![]))
        }
        Event::RocketFetched { launch_id, result } => {
            let Some(detail) = state.detail.as_mut().filter(|d| &d.launch_id == launch_id) else {
                tracing::debug!(launch_id = %launch_id, "rocket result for closed detail view discarded");
                return Ok((false, vec![]));
            };

            detail.rocket = match result {
                Ok(info) => RocketSlot::Loaded(info.clone()),
                Err(message) => {
                    tracing::debug!(launch_id = %launch_id, error = %message, "rocket information unavailable");
                    RocketSlot::Unavailable
                }
            };
            Ok((true, vec![]))
        }

        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let page = state.store.current_page();
            if !page.has_next() {
                return Ok((false, vec![]));
            }
            let next = page_number(page.page) + 1;
            state.store.set_page(next);
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            let page = state.store.current_page();
            if !page.has_previous() {
                return Ok((false, vec![]));
            }
            let previous = page_number(page.page) - 1;
            state.store.set_page(previous);
            state.selected_index = 0;
            Ok((true, vec![]))
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.store.filters().search_term.clone();
            term.push(*c);
            tracing::trace!(query = %term, "search term updated");
            apply_filter(state, FilterUpdate::search_term(term));
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut term = state.store.filters().search_term.clone();
            if term.pop().is_none() {
                return Ok((false, vec![]));
            }
            apply_filter(state, FilterUpdate::search_term(term));
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.store.filters().search_term, "clearing search");
            state.input_mode = InputMode::Normal;
            if !state.store.filters().search_term.is_empty() {
                apply_filter(state, FilterUpdate::search_term(String::new()));
            }
            Ok((true, vec![]))
        }

        Event::NextYear | Event::PrevYear => {
            let year = state.cycle_year(matches!(event, Event::NextYear));
            tracing::debug!(year = %year, "year filter changed");
            apply_filter(state, FilterUpdate::year(year));
            Ok((true, vec![]))
        }
        Event::ToggleSuccessfulOnly => {
            let enabled = !state.store.filters().successful_only;
            apply_filter(state, FilterUpdate::successful_only(enabled));
            Ok((true, vec![]))
        }
        Event::ToggleShowFavorites => {
            let enabled = !state.store.filters().show_favorites;
            apply_filter(state, FilterUpdate::show_favorites(enabled));
            Ok((true, vec![]))
        }

        Event::ToggleFavorite => {
            let target = state
                .detail
                .as_ref()
                .map(|detail| detail.launch_id.clone())
                .or_else(|| state.selected_launch().map(|launch| launch.id.clone()));

            let Some(id) = target else {
                return Ok((false, vec![]));
            };
            state.store.toggle_favorite(&id);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::OpenDetails => {
            let Some(launch) = state.selected_launch() else {
                return Ok((false, vec![]));
            };
            let launch_id = launch.id.clone();
            let rocket_id = launch.rocket.as_ref().and_then(RocketRef::id).map(str::to_string);

            tracing::debug!(launch_id = %launch_id, rocket_id = ?rocket_id, "opening details");

            let (rocket, actions) = match rocket_id {
                Some(rocket_id) => (
                    RocketSlot::Loading,
                    vec![Action::FetchRocket {
                        launch_id: launch_id.clone(),
                        rocket_id,
                    }],
                ),
                None => (RocketSlot::Unavailable, vec![]),
            };
            state.detail = Some(DetailView { launch_id, rocket });
            Ok((true, actions))
        }
        Event::CloseDetails => {
            if state.detail.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Starts a launch list fetch unless one is already in flight.
fn begin_load(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.store.is_loading() {
        tracing::debug!("launch fetch already in flight, ignoring");
        return (false, vec![]);
    }
    state.store.dispatch(Transition::BeginLoad);
    (true, vec![Action::FetchLaunches])
}

fn apply_filter(state: &mut AppState, update: FilterUpdate) {
    state.store.update_filters(update);
    state.selected_index = 0;
}

fn page_number(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}

/// Translates a web response into the matching event.
///
/// Returns `None` when the response carries no recognizable request tag.
/// Failures are logged with their cause and reduced to the user-facing message.
#[must_use]
pub fn response_event(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
    let Some(kind) = RequestKind::from_context(context) else {
        tracing::warn!(status, "web response without request tag ignored");
        return None;
    };

    let event = match kind {
        RequestKind::Launches => Event::LaunchesFetched(api::decode_launches(status, body).map_err(|e| {
            tracing::error!(error = %e, "error fetching launches");
            LAUNCHES_FAILED_MESSAGE.to_string()
        })),
        RequestKind::Rocket { launch_id } => {
            let result = api::decode_rocket(status, body).map_err(|e| {
                tracing::warn!(launch_id = %launch_id, error = %e, "error fetching rocket");
                ROCKET_FAILED_MESSAGE.to_string()
            });
            Event::RocketFetched { launch_id, result }
        }
    };
    Some(event)
}

/// Variant name for span fields; payloads can hold hundreds of launches.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::LoadLaunches => "LoadLaunches",
        Event::LaunchesFetched(_) => "LaunchesFetched",
        Event::RocketFetched { .. } => "RocketFetched",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::SearchMode => "SearchMode",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SubmitSearch => "SubmitSearch",
        Event::ExitSearch => "ExitSearch",
        Event::NextYear => "NextYear",
        Event::PrevYear => "PrevYear",
        Event::ToggleSuccessfulOnly => "ToggleSuccessfulOnly",
        Event::ToggleShowFavorites => "ToggleShowFavorites",
        Event::ToggleFavorite => "ToggleFavorite",
        Event::OpenDetails => "OpenDetails",
        Event::CloseDetails => "CloseDetails",
        Event::CloseFocus => "CloseFocus",
    }
}
