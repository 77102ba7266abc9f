//! Filter bar component renderer.
//!
//! A bordered box showing the search term and every filter toggle, so the
//! active predicates are always visible above the cards.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Horizontal margin for the filter box (spaces on left and right).
const FILTER_BOX_MARGIN: usize = 2;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the filter box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────────────────────────────────────┐
/// [margin] │ Search: star_  Year: 2020  [x] Successful only  [ ] Favorites │
/// [margin] └──────────────────────────────────────────────────────────────┘
/// ```
///
/// A trailing cursor is drawn after the term while search mode is active.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_filter_bar(row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FILTER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.filter_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if filters.searching { "_" } else { "" };
    let search = if filters.search_term.is_empty() && !filters.searching {
        "e.g., Starlink, CRS, Demo...".to_string()
    } else {
        format!("{}{cursor}", filters.search_term)
    };
    let text = format!(
        " Search: {search}  Year: {}  {} Successful only  {} Favorites",
        filters.year,
        checkbox(filters.successful_only),
        checkbox(filters.show_favorites)
    );
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(display_width(&text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.filter_bar_border));
    print!("│");
    if filters.searching {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.filter_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FILTER_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.filter_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
