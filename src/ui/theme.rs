//! Theme management and ANSI escape sequence generation.
//!
//! Supports the built-in Catppuccin themes and custom themes loaded from TOML
//! files. Colors are hex strings turned into 24-bit ANSI sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! filter_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! favorite_fg = "#f9e2af"
//! success_fg = "#a6e3a1"
//! failure_fg = "#f38ba8"
//! upcoming_fg = "#fab387"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{LaunchdeckError, Result};
use crate::domain::LaunchStatus;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    pub filter_bar_border: String,

    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Favorite star color.
    pub favorite_fg: String,

    /// Status badge colors.
    pub success_fg: String,
    pub failure_fg: String,
    pub upcoming_fg: String,

    /// Error screen title color.
    pub error_fg: String,
}

impl ThemeColors {
    /// Badge color for a launch status; `Tbd` uses the dimmed text color.
    #[must_use]
    pub fn status(&self, status: LaunchStatus) -> &str {
        match status {
            LaunchStatus::Successful => &self.success_fg,
            LaunchStatus::Failed => &self.failure_fg,
            LaunchStatus::Upcoming => &self.upcoming_fg,
            LaunchStatus::Tbd => &self.text_dim,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use launchdeck::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LaunchdeckError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| LaunchdeckError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple; white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").map(|t| t.name), Some("catppuccin-latte".to_string()));
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".into();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"broken\"\n").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(LaunchdeckError::Theme(_))));
        assert!(matches!(Theme::from_file(dir.path().join("missing.toml")), Err(LaunchdeckError::Theme(_))));
    }

    #[test]
    fn hex_colors_become_ansi() {
        assert_eq!(Theme::fg("#a6e3a1"), "\u{1b}[38;2;166;227;161m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn status_colors() {
        let colors = Theme::default().colors;
        assert_eq!(colors.status(LaunchStatus::Successful), colors.success_fg);
        assert_eq!(colors.status(LaunchStatus::Tbd), colors.text_dim);
    }
}
