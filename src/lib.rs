//! Launchdeck: a Zellij plugin for browsing SpaceX launches.
//!
//! Launchdeck fetches the public SpaceX launch list once per session and lets
//! you narrow it down by name, year, outcome and favorites, page through the
//! results as cards, and open a detail view with rocket information fetched on
//! demand. Favorites persist across sessions in a small JSON file.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Store: reducer + derived filtered list           │
//! │  - Filter engine and pagination planner             │
//! │  - Event handling, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - Rendering   │   │ - JSON file   │   │ - URLs        │
//! │ - Theming     │   │ - Favorites   │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Launch, rocket and favorite types                │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: SpaceX API endpoints, request routing and response decoding
//! - [`app`]: Store, filters, pagination and the event/action model
//! - [`domain`]: Core domain types (Launch, `FavoriteSet`, errors)
//! - [`infrastructure`]: Sandbox paths
//! - [`storage`]: Favorites persistence
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/launchdeck.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use launchdeck::storage::MemoryStorage;
//! use launchdeck::app::{handle_event, Event, Store};
//! use launchdeck::{AppState, Launch, LaunchOutcome, Theme};
//!
//! let store = Store::new(Box::new(MemoryStorage::new()));
//! let mut state = AppState::new(store, Theme::default(), launchdeck::api::DEFAULT_API_BASE_URL);
//!
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! let launches = vec![Launch::new("1", "FalconSat", "2006-03-24T22:30:00.000Z", LaunchOutcome::Failure)];
//! handle_event(&mut state, &Event::LaunchesFetched(Ok(launches)))?;
//!
//! assert_eq!(state.store.filtered_launches().len(), 1);
//! # Ok::<(), launchdeck::LaunchdeckError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, response_event, Action, AppState, Event, InputMode, Store};
pub use domain::{FavoriteSet, Launch, LaunchOutcome, LaunchdeckError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use storage::{JsonStorage, MemoryStorage, Storage};

/// Plugin configuration parsed from Zellij's plugin options.
///
/// ```kdl
/// plugin location="file:/path/to/launchdeck.wasm" {
///     api_base_url "https://api.spacexdata.com/v4"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/launchdeck/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SpaceX API root without a trailing `/launches`.
    pub api_base_url: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` expanded to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_API_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent. An `api_base_url` that is not an
    /// `http(s)://` URL falls back to the public API.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use launchdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("theme_file".to_string(), "~/deck.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/deck.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let api_base_url = value("api_base_url")
            .filter(|url| url.starts_with("https://") || url.starts_with("http://"))
            .unwrap_or_else(|| api::DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url,
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }
}

/// Resolves the theme: file first, then built-in name, then the default.
fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Opens the favorites file, falling back to memory if the data directory is
/// unusable. Favorites then last for the session only.
fn open_storage() -> Box<dyn Storage> {
    let path = infrastructure::favorites_file(&infrastructure::get_data_dir());
    match JsonStorage::new(path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "favorites file unavailable, keeping favorites in memory");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Builds the initial application state with on-disk favorites.
pub fn initialize(config: &Config) -> AppState {
    initialize_with_storage(config, open_storage())
}

/// Builds the initial application state on top of `storage`.
///
/// No launch request is made here; the plugin waits for the web access
/// permission first.
pub fn initialize_with_storage(config: &Config, storage: Box<dyn Storage>) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing launchdeck plugin");

    let store = Store::new(storage);
    AppState::new(store, resolve_theme(config), config.api_base_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", "ftp://example.com"),
            ("theme", "  "),
            ("trace_level", ""),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn custom_api_base_url_is_kept() {
        let config = Config::from_zellij(&map(&[("api_base_url", " http://localhost:8080/v4/ ")]));
        assert_eq!(config.api_base_url, "http://localhost:8080/v4/");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.toml");
        let mut custom = Theme::default();
        custom.name = "deck".into();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".into()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(resolve_theme(&config).name, "deck");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config), Theme::default());

        let missing = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&missing), Theme::default());
    }

    #[test]
    fn initialize_with_storage_loads_favorites() {
        let storage = MemoryStorage::new().with_entry(storage::FAVORITES_KEY, &["5eb87cd9ffd86e000604b32a"]);
        let state = initialize_with_storage(&Config::default(), Box::new(storage));

        assert!(state.store.favorites().contains("5eb87cd9ffd86e000604b32a"));
        assert!(!state.store.is_loading());
        assert_eq!(state.api_base_url, api::DEFAULT_API_BASE_URL);
    }
}
