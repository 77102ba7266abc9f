//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Launchdeck library and Zellij: it turns
//! Zellij events into [`launchdeck::Event`]s, runs the returned
//! [`launchdeck::Action`]s, and renders.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the launch list is fetched once granted
//! 3. **Update**: Keys and web responses go through `handle_event`
//! 4. **Render**: Draw the view model computed from state

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use launchdeck::api::{self, RequestKind};
use launchdeck::app::AppState;
use launchdeck::{handle_event, response_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: launchdeck::initialize_with_storage(
                &Config::default(),
                Box::new(launchdeck::storage::MemoryStorage::new()),
            ),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        launchdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = launchdeck::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match response_event(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => Event::PermissionsResult {
                granted: matches!(permissions, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        launchdeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an application event for the current screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        if ctrl && key.bare_key == BareKey::Char('n') {
            return Some(Event::KeyDown);
        }
        if ctrl && key.bare_key == BareKey::Char('p') {
            return Some(Event::KeyUp);
        }

        if self.app.input_mode == InputMode::Search {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) if key.key_modifiers.is_empty() => Event::Char(c),
                _ => return None,
            });
        }

        if self.app.store.error().is_some() {
            return match key.bare_key {
                BareKey::Char('r') => Some(Event::LoadLaunches),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Char(' ' | 'f') => Some(Event::ToggleFavorite),
                BareKey::Esc | BareKey::Enter | BareKey::Backspace => Some(Event::CloseDetails),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('y') => Event::NextYear,
            BareKey::Char('Y') => Event::PrevYear,
            BareKey::Char('s') => Event::ToggleSuccessfulOnly,
            BareKey::Char('f') => Event::ToggleShowFavorites,
            BareKey::Char(' ') => Event::ToggleFavorite,
            BareKey::Enter => Event::OpenDetails,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn execute_action(&self, action: &Action) {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::CloseFocus => hide_self(),
            Action::RequestWebAccess => request_permission(&[PermissionType::WebAccess]),
            Action::FetchLaunches => {
                let url = api::launches_url(&self.app.api_base_url);
                tracing::info!(url = %url, "fetching launches");
                Self::get(&url, &RequestKind::Launches);
            }
            Action::FetchRocket { launch_id, rocket_id } => {
                let url = api::rocket_url(&self.app.api_base_url, rocket_id);
                tracing::debug!(url = %url, launch_id = %launch_id, "fetching rocket");
                Self::get(
                    &url,
                    &RequestKind::Rocket {
                        launch_id: launch_id.clone(),
                    },
                );
            }
        }
    }

    fn get(url: &str, kind: &RequestKind) {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        web_request(url, HttpVerb::Get, headers, vec![], kind.to_context());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searching() -> State {
        let mut state = State::default();
        state.app.input_mode = InputMode::Search;
        state
    }

    #[test]
    fn plain_characters_are_typed_into_search() {
        let state = searching();
        let key = KeyWithModifier::new(BareKey::Char('a'));
        assert_eq!(state.map_key_event(&key), Some(Event::Char('a')));
    }

    #[test]
    fn modified_characters_are_not_typed_into_search() {
        let state = searching();
        let alt = KeyWithModifier::new(BareKey::Char('a')).with_alt_modifier();
        let ctrl = KeyWithModifier::new(BareKey::Char('x')).with_ctrl_modifier();
        assert_eq!(state.map_key_event(&alt), None);
        assert_eq!(state.map_key_event(&ctrl), None);
    }

    #[test]
    fn ctrl_n_still_moves_while_searching() {
        let state = searching();
        let key = KeyWithModifier::new(BareKey::Char('n')).with_ctrl_modifier();
        assert_eq!(state.map_key_event(&key), Some(Event::KeyDown));
    }
}
