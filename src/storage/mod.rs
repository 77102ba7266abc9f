//! Storage layer for persisted plugin data.
//!
//! The only persisted data is the favorite set. It is written through a small
//! key-value [`Storage`] capability so the application layer never touches the
//! filesystem directly.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction
//! - `json`: JSON file backend with atomic writes
//! - `memory`: In-memory backend (fallback and tests)
//! - `favorites`: Favorites key, load and save rules

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use favorites::{load_favorites, save_favorites, FAVORITES_KEY};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
