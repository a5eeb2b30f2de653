//! Input bar component renderer.
//!
//! Renders the bordered input box used by Search and CreateNote mode: a
//! 3-line frame containing the prompt label and the live buffer, with a
//! block cursor marking the insertion point.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Renders the input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: query▌  │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// Returns the next available row position (row + 3).
pub fn render_input_bar(row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prompt = format!(" {}: {}▌", input.label, input.text);
    let prompt_len = prompt.chars().count().min(inner_width);
    let truncated: String = prompt.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(prompt_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{truncated}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
