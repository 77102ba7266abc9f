//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, search
//! match highlighting, and the text and date formatting applied while the view
//! model is computed.
//!
//! All width and index arithmetic here is in characters, never bytes, so
//! mission names with non-ASCII characters neither panic nor misalign.

use crate::domain::Launch;
use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges use character indices with an exclusive end. When `is_selected` is
/// `true`, match highlighting is disabled so it does not fight the selection
/// background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Character ranges of every non-overlapping, case-insensitive occurrence of
/// `term` in `text`.
///
/// # Examples
///
/// ```
/// use launchdeck::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Starlink Star", "star"), vec![(0, 4), (9, 13)]);
/// assert!(match_ranges("CRS-1", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // One folded char per source char keeps indices aligned with `text`.
    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Number of characters in `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `max` characters, ending with `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap to `width` characters. Words longer than a line are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while display_width(&word) > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        let needed = if line.is_empty() { display_width(&word) } else { display_width(&line) + 1 + display_width(&word) };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Card date, `MM/DD/YYYY, HH:MM:SS` in UTC.
///
/// Falls back to the raw string when the timestamp cannot be parsed.
#[must_use]
pub fn format_card_date(launch: &Launch) -> String {
    launch.timestamp().map_or_else(
        || launch.date_utc.clone(),
        |dt| dt.format("%m/%d/%Y, %H:%M:%S").to_string(),
    )
}

/// Detail date, e.g. `Friday, March 24, 2006 at 10:30 PM UTC`.
#[must_use]
pub fn format_long_date(launch: &Launch) -> String {
    launch.timestamp().map_or_else(
        || launch.date_utc.clone(),
        |dt| dt.format("%A, %B %-d, %Y at %I:%M %p UTC").to_string(),
    )
}
