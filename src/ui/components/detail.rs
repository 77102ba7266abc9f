//! Launch detail panel renderer.
//!
//! Two-column information block (launch / rocket) followed by the mission
//! description and the external links, mirroring a card opened in a modal.

use crate::ui::helpers::{display_width, position_cursor, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, RocketPanel};

/// Left margin of the panel.
const MARGIN: usize = 3;

fn label_value(row: usize, col: usize, label: &str, value: &str, theme: &Theme, width: usize) {
    position_cursor(row, col);
    print!("{}{}{label}:{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset());
    let value = truncate(value, width.saturating_sub(display_width(label) + 2));
    print!(" {}{value}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
}

fn section_title(row: usize, col: usize, title: &str, theme: &Theme) {
    position_cursor(row, col);
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
}

/// Renders the detail panel starting at `row`, never drawing past `last_row`.
#[allow(clippy::too_many_lines)]
pub fn render_detail(row: usize, last_row: usize, panel: &DetailPanel, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(MARGIN * 2);
    let column_width = width / 2;
    let right_col = MARGIN + 1 + column_width;
    let mut current_row = row;

    position_cursor(current_row, MARGIN + 1);
    if panel.is_favorite {
        print!("{}★ {}", Theme::fg(&theme.colors.favorite_fg), Theme::reset());
    }
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", truncate(&panel.name, width.saturating_sub(2)));
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, MARGIN + 1);
    print!("{}{}", Theme::bold(), Theme::fg(theme.colors.status(panel.status)));
    print!("{}", panel.status.label());
    print!("{}", Theme::reset());
    if let Some(year) = panel.year {
        print!("  {}{year}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
    current_row += 1;

    position_cursor(current_row, MARGIN + 1);
    print!("{}{}{}", Theme::fg(&theme.colors.text_dim), panel.status.description(), Theme::reset());
    current_row += 2;

    section_title(current_row, MARGIN + 1, "Launch Information", theme);
    section_title(current_row, right_col, "Rocket Information", theme);
    current_row += 1;

    let left = [
        ("Date & Time", panel.date.as_str()),
        ("Launchpad", panel.launchpad.as_str()),
        ("Flight Number", panel.flight_number.as_str()),
    ];
    for (offset, (label, value)) in left.iter().enumerate() {
        label_value(current_row + offset, MARGIN + 1, label, value, theme, column_width);
    }

    match &panel.rocket {
        RocketPanel::Loading => {
            position_cursor(current_row, right_col);
            print!("{}Loading rocket details...{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
        RocketPanel::Loaded { name, kind, company } => {
            label_value(current_row, right_col, "Rocket", name, theme, column_width);
            label_value(current_row + 1, right_col, "Type", kind, theme, column_width);
            label_value(current_row + 2, right_col, "Company", company, theme, column_width);
        }
        RocketPanel::Unavailable => {
            position_cursor(current_row, right_col);
            print!(
                "{}Rocket information not available{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
    }
    current_row += left.len() + 1;

    if let Some(details) = &panel.details {
        section_title(current_row, MARGIN + 1, "Mission Details", theme);
        current_row += 1;

        let reserved = if panel.links.is_empty() { 0 } else { panel.links.len() + 2 };
        let available = last_row.saturating_sub(current_row + reserved);
        let lines = wrap(details, width);
        let shown = lines.len().min(available.max(1));
        for (offset, line) in lines.iter().take(shown).enumerate() {
            position_cursor(current_row + offset, MARGIN + 1);
            let line = if offset + 1 == shown && shown < lines.len() {
                truncate(&format!("{line} ..."), width)
            } else {
                line.clone()
            };
            print!("{}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        }
        current_row += shown + 1;
    }

    if !panel.links.is_empty() && current_row <= last_row {
        section_title(current_row, MARGIN + 1, "Links", theme);
        current_row += 1;
        for (label, url) in &panel.links {
            if current_row > last_row {
                break;
            }
            label_value(current_row, MARGIN + 1, label, url, theme, width);
            current_row += 1;
        }
    }
}
