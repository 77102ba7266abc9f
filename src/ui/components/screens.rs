//! Centered message screens: loading, empty results, and the fatal error.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorScreen};

fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Renders the empty state message at `row` (message) and `row + 1` (subtitle).
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    centered_line(row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    let dim = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(row + 1, &empty.subtitle, &dim, cols);
}

pub fn render_loading(row: usize, message: &str, theme: &Theme, cols: usize) {
    centered_line(row, message, &Theme::fg(&theme.colors.text_dim), cols);
}

/// Renders the error screen: bold title, the message, then the retry hint.
pub fn render_error_screen(row: usize, screen: &ErrorScreen, theme: &Theme, cols: usize) {
    let title = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    centered_line(row, &screen.title, &title, cols);
    centered_line(row + 2, &screen.message, &Theme::fg(&theme.colors.text_normal), cols);
    centered_line(row + 4, &screen.hint, &Theme::fg(&theme.colors.text_dim), cols);
}
