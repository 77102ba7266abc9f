//! Domain layer for the Launchdeck plugin.
//!
//! Core types independent of Zellij APIs, the remote data source wire format and
//! persistence. Everything here is plain data plus small pure helpers.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`launch`]: Launch, rocket and status model
//! - [`favorites`]: Toggle-only favorite identifier set
//!
//! # Examples
//!
//! ```
//! use launchdeck::domain::{FavoriteSet, Launch, LaunchOutcome};
//!
//! let launch = Launch::new("b", "CRS-1", "2022-06-01T00:00:00.000Z", LaunchOutcome::Failure);
//! let favorites = FavoriteSet::default().toggled(&launch.id);
//! assert!(favorites.contains("b"));
//! ```

pub mod error;
pub mod favorites;
pub mod launch;

pub use error::{LaunchdeckError, Result};
pub use favorites::FavoriteSet;
pub use launch::{
    Launch, LaunchLinks, LaunchOutcome, LaunchStatus, RocketInfo, RocketRef, RocketSummary,
};
