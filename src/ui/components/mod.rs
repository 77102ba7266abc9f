//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and result summary
//! - [`filter_bar`]: Search term and filter toggles
//! - [`cards`]: Launch card rows with column headers
//! - [`detail`]: Launch detail panel
//! - [`screens`]: Loading, empty and error messages
//! - [`footer`]: Pagination label and keybinding hints
//!
//! # Layouts
//!
//! - [`render_list_layout`]: Header + Filter bar + Cards (or a message) + Footer
//! - [`render_detail_layout`]: Header + Detail panel + Footer
//! - [`render_error_layout`]: Header + Error screen + Footer

mod cards;
mod detail;
mod filter_bar;
mod footer;
mod header;
mod screens;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, DetailPanel, ErrorScreen, UIViewModel};

use cards::{render_card_headers, render_cards};
use detail::render_detail;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use screens::{render_empty_state, render_error_screen, render_loading};

/// Rows used by the bottom border and the two footer lines.
const FOOTER_ROWS: usize = 3;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_border(rows.saturating_sub(FOOTER_ROWS - 1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the list layout used for cards, empty results and loading.
///
/// ```text
/// [blank line]
/// [Header - 2 lines]
/// [Border]
/// [Filter bar - 3 lines]
/// [Card headers]
/// [Card rows | centered message]
/// [Border]
/// [Pagination]
/// [Keybindings]
/// ```
pub fn render_list_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);

    match &vm.body {
        Body::Cards { items, .. } => {
            current_row = render_card_headers(current_row, theme, cols);
            let _current_row = render_cards(current_row, items, theme, cols);
        }
        Body::Empty(empty) => render_empty_state(current_row + 2, empty, theme, cols),
        Body::Loading { message } => render_loading(current_row + 2, message, theme, cols),
        Body::Error(_) | Body::Detail(_) => {}
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail layout.
pub fn render_detail_layout(vm: &UIViewModel, panel: &DetailPanel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let last_row = rows.saturating_sub(FOOTER_ROWS);
    render_detail(current_row + 1, last_row, panel, theme, cols);

    render_bottom(vm, theme, cols, rows);
}

/// Renders the full-screen error layout; the filter bar is hidden.
pub fn render_error_layout(vm: &UIViewModel, screen: &ErrorScreen, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let middle = current_row + rows.saturating_sub(current_row + FOOTER_ROWS + 5) / 2;
    render_error_screen(middle, screen, theme, cols);

    render_bottom(vm, theme, cols, rows);
}
