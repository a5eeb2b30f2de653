//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! highlighted-text rendering with proper ANSI escape management. Highlight
//! ranges operate on character indices, not bytes, so multibyte names render
//! correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighting is suppressed on the selected row
/// so it does not fight the selection background.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges `(start, end)`, exclusive end
/// * `theme` - Active color theme
/// * `is_selected` - Whether the row carries the selection background
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start >= chars.len() {
            break;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
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
