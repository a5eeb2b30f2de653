//! Footer component renderer.
//!
//! Renders the bottom help bar: centered keybinding hints in dim styling, or
//! the active notice in the warning color when one is pending.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Hints are centered; text wider than the terminal is truncated so narrow
/// terminals never corrupt the layout. Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.keybindings, &theme.colors.text_dim, true, cols)
}

/// Renders a pending notice in place of the keybinding hints.
pub fn render_notice(row: usize, notice: &str, theme: &Theme, cols: usize) -> usize {
    render_centered(row, notice, &theme.colors.notice_fg, false, cols)
}

fn render_centered(row: usize, text: &str, color: &str, dim: bool, cols: usize) -> usize {
    let truncated: String = text.chars().take(cols).collect();
    let text_len = truncated.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    if dim {
        print!("{}", Theme::dim());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{truncated}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
