//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row. Two layout functions assemble them:
//!
//! - [`render_normal_mode`]: Header + entry list + footer
//! - [`render_input_mode`]: Header + input bar + entry list + footer
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Input bar - 3 lines, Search/CreateNote only]
//! [Entry rows / empty state]
//! [Border]
//! [Footer or notice]
//! ```

mod empty;
mod footer;
mod header;
mod input;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{InputBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::{render_footer, render_notice};
use header::render_header;
use input::render_input_bar;
use table::render_entry_rows;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer area: the active notice when set, the mode keybinding
/// hints otherwise.
fn render_footer_area(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);

    match &vm.notice {
        Some(notice) => render_notice(footer_row, notice, theme, cols),
        None => render_footer(footer_row, &vm.footer, theme, cols),
    };
}

/// Renders the Normal mode layout (no input bar).
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        render_entry_rows(current_row, &vm.display_items, theme, cols);
    }

    render_footer_area(vm, theme, cols, rows);
}

/// Renders the Search/CreateNote layout (with the 3-line input bar).
pub fn render_input_mode(
    vm: &UIViewModel,
    input: &InputBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_input_bar(current_row, input, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        render_entry_rows(current_row, &vm.display_items, theme, cols);
    }

    render_footer_area(vm, theme, cols, rows);
}
