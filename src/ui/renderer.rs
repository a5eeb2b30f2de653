//! Top-level rendering coordinator.
//!
//! Computes the view model from session state and delegates to the
//! mode-appropriate component layout. Each frame is a full redraw: the
//! screen is cleared, components reposition the cursor per row and pad every
//! line to the terminal width, and the buffered output is flushed once, so a
//! resize simply produces a clean next frame.

use crate::app::AppState;
use crate::ui::components;
use std::io::Write;

/// Renders the session UI to stdout.
///
/// Pure consumer of a state snapshot: never mutates session state. Scroll
/// clamping happens in the event loop before this is called.
///
/// # Parameters
///
/// * `state` - Current session state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    // Clear and home before drawing the frame.
    print!("\u{1b}[2J\u{1b}[H");

    match &viewmodel.input_bar {
        Some(input) => {
            components::render_input_mode(&viewmodel, input, &state.theme, cols, rows);
        }
        None => components::render_normal_mode(&viewmodel, &state.theme, cols, rows),
    }

    let _ = std::io::stdout().flush();
}
