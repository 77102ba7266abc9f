//! Path utilities for the Zellij sandbox.

use std::path::{Path, PathBuf};

/// Favorites store file name inside the data directory.
pub const FAVORITES_FILE_NAME: &str = "launchdeck.json";
/// OTLP trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "launchdeck-otlp.json";

/// Returns the data directory for Launchdeck storage.
///
/// Resolves to `/host/.local/share/zellij/launchdeck` in the sandbox, which is
/// `~/.local/share/zellij/launchdeck` when Zellij was started from the home
/// directory.
///
/// # Examples
///
/// ```
/// use launchdeck::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/launchdeck"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("launchdeck")
}

/// Path of the favorites file below `data_dir`.
#[must_use]
pub fn favorites_file(data_dir: &Path) -> PathBuf {
    data_dir.join(FAVORITES_FILE_NAME)
}

/// Path of the trace file below `data_dir`.
#[must_use]
pub fn trace_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use launchdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/deck.toml"), "/host/themes/deck.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_the_data_dir() {
        let dir = get_data_dir();
        assert_eq!(favorites_file(&dir), PathBuf::from("/host/.local/share/zellij/launchdeck/launchdeck.json"));
        assert_eq!(trace_file(&dir), PathBuf::from("/host/.local/share/zellij/launchdeck/launchdeck-otlp.json"));
    }

    #[test]
    fn only_leading_tilde_expands() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
