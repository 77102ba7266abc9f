//! Input mode state for the application.
//!
//! The plugin is either in **Normal** mode, where single keys drive navigation
//! and filter toggles, or in **Search** mode, where printable keys edit the
//! search term.

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer hint text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// j/k navigate, h/l change page, `/` searches, `y`/`Y` cycle the year,
    /// `s` and `f` toggle filters, space stars, enter opens details, q quits.
    #[default]
    Normal,

    /// Typing edits the search term live; enter keeps it, esc clears it.
    Search,
}
