//! Launch card list renderer.
//!
//! Each card is one row: favorite star, name, date, rocket and status badge.
//! Column widths come from [`crate::ui::viewmodel`] so the view model and the
//! renderer agree on truncation.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    name_column_width, DisplayItem, DATE_COLUMN_WIDTH, ROCKET_COLUMN_WIDTH, STAR_COLUMN_WIDTH,
};

/// Renders the column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_card_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(STAR_COLUMN_WIDTH));
    print!("{:<name_width$} ", "MISSION");
    print!("{:<DATE_COLUMN_WIDTH$}", "DATE (UTC)");
    print!("{:<ROCKET_COLUMN_WIDTH$}", "ROCKET");
    print!("STATUS");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all card rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_cards(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single card row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The star and the status badge keep their own colors on the selected row.
/// The row is padded to the full pane width so the selection background is
/// continuous.
fn render_card(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);
    let base = || {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    position_cursor(row, 1);
    print!("{}", base());

    if item.is_favorite {
        print!("{}★ ", Theme::fg(&theme.colors.favorite_fg));
    } else {
        print!("☆ ");
    }
    print!("{}", base());

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(name_width.saturating_sub(display_width(&item.name)) + 1));

    print!("{:<DATE_COLUMN_WIDTH$}", item.date);
    print!("{:<ROCKET_COLUMN_WIDTH$}", item.rocket);

    let label = item.status.label();
    print!("{}{}", Theme::fg(theme.colors.status(item.status)), Theme::bold());
    print!("{label}");
    print!("{}", Theme::reset());
    print!("{}", base());

    let line_len = STAR_COLUMN_WIDTH + name_width + 1 + DATE_COLUMN_WIDTH + ROCKET_COLUMN_WIDTH + label.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
