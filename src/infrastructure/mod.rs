//! Sandbox path handling.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox;
//! everything persistent (favorites, traces) lives below the data directory
//! resolved here.

pub mod paths;

pub use paths::{expand_tilde, favorites_file, get_data_dir, trace_file};
