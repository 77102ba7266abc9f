//! Error types for the Launchdeck plugin.
//!
//! This module defines the centralized error type [`LaunchdeckError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for Launchdeck operations.
///
/// Covers persistence failures, remote data source failures, payload decoding and
/// theme loading. Variants wrapping errors from external crates use `#[from]` for
/// automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use launchdeck::LaunchdeckError;
///
/// fn fetch() -> Result<(), LaunchdeckError> {
///     Err(LaunchdeckError::Fetch("HTTP error! status: 503".to_string()))
/// }
///
/// assert_eq!(
///     fetch().unwrap_err().to_string(),
///     "Fetch error: HTTP error! status: 503"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LaunchdeckError {
    /// Reading or writing the persisted key-value document failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote data source answered with a failure (network or HTTP status).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A payload from the data source or from disk was not valid JSON for the
    /// expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Launchdeck operations.
pub type Result<T> = std::result::Result<T, LaunchdeckError>;
