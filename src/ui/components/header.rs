//! Header component renderer.
//!
//! Renders the plugin title bar and the result summary line beneath it.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle, both centered, starting at `row`.
///
/// # Layout
///
/// ```text
/// [padding] TITLE [padding]
/// [padding] 37 of 205 launches  3 favorites [padding]
/// ```
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_width(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate(&header.subtitle, cols);
    let subtitle_len = display_width(&subtitle);
    let padding = (cols.saturating_sub(subtitle_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + subtitle_len)));
    print!("{}", Theme::reset());

    row + 2
}
