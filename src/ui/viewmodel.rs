//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from [`crate::app::AppState`]
//! via `compute_viewmodel` and consumed by the renderer. They contain no
//! business logic, only display-ready data: pre-windowed rows, highlight
//! ranges, and the chrome text for the current mode.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the entry list visible in the current viewport window.
    pub display_items: Vec<DisplayItem>,

    /// Selected row index relative to the visible window.
    pub selected_index: usize,

    /// Header information (current path, entry count).
    pub header: HeaderInfo,

    /// Footer information (mode keybinding hints).
    pub footer: FooterInfo,

    /// Input bar content when Search or CreateNote mode is active.
    pub input_bar: Option<InputBarInfo>,

    /// Empty-state message when the active list has no entries.
    pub empty_state: Option<EmptyState>,

    /// Pending user notice shown in place of the footer hints.
    pub notice: Option<String>,
}

/// Display information for a single entry row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Tree-branch prefix (`├── ` or `└── ` for the final row).
    pub branch: &'static str,

    /// Display name, `/`-suffixed for directories, possibly truncated.
    pub name: String,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Whether the entry renders dimmed (other/binary files).
    pub is_dim: bool,

    /// Whether this row is the selection cursor.
    pub is_selected: bool,

    /// Character ranges to highlight for the current search query.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text: the current directory and entry count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Input bar content for the text-input modes.
#[derive(Debug, Clone)]
pub struct InputBarInfo {
    /// Prompt label (`Search` or `New note title`).
    pub label: &'static str,

    /// Current buffer content.
    pub text: String,
}

/// Empty state message shown when no entries are visible.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No files found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
