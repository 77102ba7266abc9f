//! Footer component renderer.
//!
//! Renders the pagination label and the keybinding hints at the bottom of the pane.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer on the last two rows of the pane.
///
/// # Layout
///
/// ```text
/// [padding] Page 2 of 9 [padding]
/// [padding] keybindings [padding]
/// ```
///
/// The pagination row is left blank when the footer has no pagination label.
/// Keybinding text wider than the pane is truncated.
pub fn render_footer(rows: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let keys_row = rows;
    let pagination_row = rows.saturating_sub(1);

    position_cursor(pagination_row, 1);
    match &footer.pagination {
        Some(label) => {
            let label_len = display_width(label).min(cols);
            let padding = (cols.saturating_sub(label_len)) / 2;
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", " ".repeat(padding));
            print!("{label}");
            print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }

    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(keys_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
