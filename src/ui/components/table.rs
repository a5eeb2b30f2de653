//! Entry list component renderer.
//!
//! Renders the visible window of directory entries as tree-style rows with
//! branch prefixes, selection highlighting, directory coloring and fuzzy
//! match highlights.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders all visible entry rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_entry_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_entry_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single entry row.
///
/// # Styling Precedence
///
/// 1. Selection colors (full-width background) when the row is selected
/// 2. Fuzzy match highlights (suppressed on the selected row)
/// 3. Directory color, dim for other/binary files, normal text otherwise
fn render_entry_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else if item.is_dir {
        print!("{}", Theme::fg(&theme.colors.directory_fg));
    } else if item.is_dim {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{}", item.branch);

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    }

    let line_len = item.branch.chars().count() + item.name.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
