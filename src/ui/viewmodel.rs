//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings and flags only; all decisions
//! (which screen, which labels, which characters to highlight) are made while
//! computing them, so the renderer stays a dumb printer.

use crate::domain::LaunchStatus;

/// Favorite marker plus trailing space.
pub const STAR_COLUMN_WIDTH: usize = 2;
/// `MM/DD/YYYY, HH:MM:SS` plus gap.
pub const DATE_COLUMN_WIDTH: usize = 22;
pub const ROCKET_COLUMN_WIDTH: usize = 18;
pub const STATUS_COLUMN_WIDTH: usize = 10;

/// Width of the card name column for a pane `cols` wide.
#[must_use]
pub const fn name_column_width(cols: usize) -> usize {
    let rest = cols.saturating_sub(STAR_COLUMN_WIDTH + DATE_COLUMN_WIDTH + ROCKET_COLUMN_WIDTH + STATUS_COLUMN_WIDTH);
    if rest < 12 {
        12
    } else if rest > 48 {
        48
    } else {
        rest
    }
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Main content area. Exactly one screen is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Waiting for permission or for the launch list.
    Loading { message: String },
    /// Fatal launch-list failure.
    Error(ErrorScreen),
    /// The current page has no launches.
    Empty(EmptyState),
    /// Visible launch cards with the selection position inside the window.
    Cards {
        items: Vec<DisplayItem>,
        selected_index: usize,
    },
    /// Detail panel for one launch.
    Detail(Box<DetailPanel>),
}

/// One launch card row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Name, truncated to the name column.
    pub name: String,
    /// `MM/DD/YYYY, HH:MM:SS` in UTC, or the raw string if unparseable.
    pub date: String,
    pub rocket: String,
    pub status: LaunchStatus,
    pub is_favorite: bool,
    pub is_selected: bool,

    /// Character ranges of `name` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Result summary, e.g. `37 of 205 launches`.
    pub subtitle: String,
}

/// Active filters as shown above the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub search_term: String,
    /// Whether the search box has keyboard focus.
    pub searching: bool,
    /// `All years` or the selected year.
    pub year: String,
    pub successful_only: bool,
    pub show_favorites: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `Page 2 of 9`, omitted outside the card list.
    pub pagination: Option<String>,
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Full-screen error shown when the launch list cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorScreen {
    pub title: String,
    pub message: String,
    pub hint: String,
}

/// Everything shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub name: String,
    pub status: LaunchStatus,
    pub is_favorite: bool,
    /// Long-form launch date, e.g. `Friday, March 24, 2006 at 10:30 PM UTC`.
    pub date: String,
    pub year: Option<i32>,
    pub launchpad: String,
    pub flight_number: String,
    pub rocket: RocketPanel,
    pub details: Option<String>,
    /// `(label, url)` pairs in display order.
    pub links: Vec<(String, String)>,
}

/// Rocket section of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RocketPanel {
    Loading,
    Loaded {
        name: String,
        kind: String,
        company: String,
    },
    Unavailable,
}
