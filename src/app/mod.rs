//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, storage and api
//! layers.
//!
//! # Architecture
//!
//! ```text
//! Keys / Web responses → Events → handle_event → Store transitions → Actions
//!                                     ↑                                 ↓
//!                                     └──────── fetch results ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: Canonical state, the transition reducer and the derivation effect
//! - [`filters`]: Filter state and the pure filter engine
//! - [`pagination`]: Pagination state and the pure page planner
//! - [`state`]: View-only state around the store and view model computation
//! - [`handler`]: Event processing
//! - [`actions`]: Side effect commands emitted by the handler
//! - [`modes`]: Input mode
//!
//! # Example
//!
//! ```rust
//! use launchdeck::app::{handle_event, AppState, Event};
//! use launchdeck::app::store::Store;
//! use launchdeck::storage::MemoryStorage;
//! use launchdeck::ui::Theme;
//!
//! let store = Store::new(Box::new(MemoryStorage::new()));
//! let mut state = AppState::new(store, Theme::default(), "https://api.spacexdata.com/v4");
//! let (_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), launchdeck::LaunchdeckError>(())
//! ```

pub mod actions;
pub mod filters;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;
pub mod store;

pub use actions::Action;
pub use filters::{filter_launches, FilterState, FilterUpdate, YearFilter};
pub use handler::{handle_event, response_event, Event};
pub use modes::InputMode;
pub use pagination::{paginate, Page, PaginationState, PaginationUpdate, ITEMS_PER_PAGE};
pub use state::{AppState, DetailView, RocketSlot};
pub use store::{Store, Transition};
