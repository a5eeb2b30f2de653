//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single session-state container: the
//! current directory and its entries, the active input mode, selection and
//! scroll position, the mode-scoped text buffers, and any pending user
//! notice. One instance exists per invocation, owned by the event loop and
//! mutated in place by the event handler.
//!
//! # State Components
//!
//! - **Entries**: Master listing of the current directory from the last scan
//! - **Filtered Entries**: Subset after applying the live search query
//! - **Selection**: Cursor position within the active list, always in bounds
//! - **Scroll Offset**: First visible row, clamped so the cursor stays on
//!   screen
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **Buffers**: Search query and note title, cleared on mode exit
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms a state snapshot into a renderable
//! representation, handling windowing, fuzzy match highlighting, and
//! responsive path truncation. Rendering never mutates state; scroll
//! clamping happens in the event loop before each frame.

use super::modes::InputMode;
use crate::domain::{Entry, Result};
use crate::search::SearchEngine;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputBarInfo, UIViewModel,
};
use std::path::{Path, PathBuf};

/// Central session state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// key events; view models are computed on demand from snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory currently being browsed.
    pub current_dir: PathBuf,

    /// Entries of `current_dir` from the most recent scan, in listing order.
    ///
    /// Replaced wholesale by `rescan()`; never edited in place.
    pub entries: Vec<Entry>,

    /// Entries matching the current search query, in rank order.
    ///
    /// Recomputed by `apply_search_filter()`. Only meaningful in Search mode.
    pub filtered_entries: Vec<Entry>,

    /// Zero-based cursor position within the active list.
    ///
    /// Clamped to `[0, len-1]`; selection is disabled when the active list
    /// is empty (`selected_entry()` returns `None`).
    pub selected_index: usize,

    /// Index of the first visible row of the active list.
    ///
    /// Clamped by `clamp_scroll()` so the cursor always lies within the
    /// viewport.
    pub scroll_offset: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Live search query. Cleared when Search mode exits.
    pub search_query: String,

    /// Title buffer for a new note. Cleared when CreateNote mode exits.
    pub note_title: String,

    /// Pending user-facing message (degraded search, scan/create failures).
    ///
    /// Rendered in the footer area until the next mode change or buffer
    /// edit.
    pub notice: Option<String>,

    /// Matching engine used for filtering and highlight computation.
    pub search: SearchEngine,

    /// Whether dotfiles are included when scanning.
    pub show_hidden: bool,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a session state rooted at `current_dir` with empty listings.
    ///
    /// The caller runs `rescan()` afterwards to populate entries; see
    /// [`crate::initialize`].
    #[must_use]
    pub fn new(current_dir: PathBuf, search: SearchEngine, theme: Theme, show_hidden: bool) -> Self {
        Self {
            current_dir,
            entries: vec![],
            filtered_entries: vec![],
            selected_index: 0,
            scroll_offset: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            note_title: String::new(),
            notice: None,
            search,
            show_hidden,
            theme,
        }
    }

    /// Returns the list selection currently operates on.
    ///
    /// Search mode navigates the filtered list; Normal and CreateNote
    /// navigate the full listing.
    #[must_use]
    pub fn active_entries(&self) -> &[Entry] {
        match self.input_mode {
            InputMode::Search => &self.filtered_entries,
            InputMode::Normal | InputMode::CreateNote => &self.entries,
        }
    }

    /// Returns the currently selected entry, or `None` on an empty list.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.active_entries().get(self.selected_index)
    }

    /// Moves the cursor down one row, clamped to the end of the active list.
    pub fn move_selection_down(&mut self) {
        let len = self.active_entries().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(len - 1);
    }

    /// Moves the cursor up one row, clamped to the top of the active list.
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Re-enumerates `current_dir`, replacing the listing wholesale.
    ///
    /// Selection, scroll and the search query are reset: the old positions
    /// are meaningless against a fresh listing.
    ///
    /// # Errors
    ///
    /// Propagates scan failures (unreadable directory). State is left
    /// unchanged in that case.
    pub fn rescan(&mut self) -> Result<()> {
        let entries = crate::scan::scan(&self.current_dir, self.show_hidden)?;
        self.entries = entries;
        self.filtered_entries = vec![];
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.search_query.clear();
        Ok(())
    }

    /// Descends (or ascends) into `target` and re-scans.
    ///
    /// Exits Search mode: a new directory starts with a clean listing.
    ///
    /// # Errors
    ///
    /// Propagates scan failures; `current_dir` and the listing are restored
    /// so the session stays where it was.
    pub fn navigate_to(&mut self, target: &Path) -> Result<()> {
        let _span = tracing::debug_span!("navigate_to", target = %target.display()).entered();

        let previous = std::mem::replace(&mut self.current_dir, target.to_path_buf());
        if let Err(e) = self.rescan() {
            self.current_dir = previous;
            return Err(e);
        }
        self.input_mode = InputMode::Normal;
        Ok(())
    }

    /// Recomputes `filtered_entries` from the current query.
    ///
    /// The cursor is clamped into the new list's bounds; callers that change
    /// the query reset it to the top so the best match is selected.
    pub fn apply_search_filter(&mut self) {
        self.filtered_entries = self.search.filter(&self.search_query, &self.entries);
        if self.filtered_entries.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_entries.len() - 1);
        }
    }

    /// Rows available for the entry list given the terminal height.
    ///
    /// Accounts for UI chrome: blank top line, header, borders and footer,
    /// plus the 3-line input bar in Search/CreateNote mode.
    #[must_use]
    pub const fn visible_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search | InputMode::CreateNote => total_rows.saturating_sub(9),
        }
    }

    /// Clamps `scroll_offset` so the cursor lies within a viewport of
    /// `visible` rows.
    ///
    /// Called by the event loop before each render; rendering itself never
    /// mutates state.
    pub fn clamp_scroll(&mut self, visible: usize) {
        let len = self.active_entries().len();
        if visible == 0 || len == 0 {
            self.scroll_offset = 0;
            return;
        }

        let max_offset = len.saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
    }

    /// Computes a renderable view model from the current state and terminal
    /// dimensions.
    ///
    /// Windows the active list at `scroll_offset`, attaches fuzzy highlight
    /// ranges in Search mode, and fills in header, footer, input bar, notice
    /// and empty-state content.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let active = self.active_entries();
        let visible = self.visible_rows(rows);

        let window_start = self.scroll_offset.min(active.len());
        let window_end = (window_start + visible).min(active.len());

        let display_items: Vec<DisplayItem> = active[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| {
                let absolute_idx = window_start + relative_idx;
                self.compute_display_item(entry, absolute_idx, active.len(), cols)
            })
            .collect();

        let empty_state = if active.is_empty() {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(window_start),
            header: self.compute_header(cols),
            footer: self.compute_footer(),
            input_bar: self.compute_input_bar(),
            empty_state,
            notice: self.notice.clone(),
        }
    }

    /// Builds the display row for one entry within the visible window.
    fn compute_display_item(
        &self,
        entry: &Entry,
        absolute_idx: usize,
        active_len: usize,
        cols: usize,
    ) -> DisplayItem {
        let branch = if absolute_idx + 1 == active_len {
            "└── "
        } else {
            "├── "
        };

        let mut name = entry.name.clone();
        if entry.is_dir() {
            name.push('/');
        }

        let max_name = cols.saturating_sub(8);
        if name.chars().count() > max_name && max_name > 3 {
            name = name.chars().take(max_name - 3).collect();
            name.push_str("...");
        }

        let highlight_ranges = if self.input_mode == InputMode::Search {
            self.search.highlight_ranges(&entry.name, &self.search_query)
        } else {
            vec![]
        };

        DisplayItem {
            branch,
            name,
            is_dir: entry.is_dir(),
            is_dim: !entry.is_dir() && entry.kind == crate::domain::EntryKind::Other,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Builds the header line: current path plus the active entry count.
    fn compute_header(&self, cols: usize) -> HeaderInfo {
        let count = self.active_entries().len();
        let path = Self::format_display_path(&self.current_dir.display().to_string(), cols / 2);
        HeaderInfo {
            title: format!(" {path} ({count}) "),
        }
    }

    /// Builds mode-specific keybinding hints for the footer.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "↑↓: navigate  Enter: open  /: search  Ctrl+n: new note  Ctrl+d: daily note  q: quit"
            }
            InputMode::Search => "Type to filter  ↑↓: navigate  Enter: open  ESC: cancel",
            InputMode::CreateNote => "Type a title  Enter: create  ESC: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Builds the input bar content for the text-input modes.
    fn compute_input_bar(&self) -> Option<InputBarInfo> {
        match self.input_mode {
            InputMode::Search => Some(InputBarInfo {
                label: "Search",
                text: self.search_query.clone(),
            }),
            InputMode::CreateNote => Some(InputBarInfo {
                label: "New note title",
                text: self.note_title.clone(),
            }),
            InputMode::Normal => None,
        }
    }

    /// Builds the empty-state message for the active mode.
    fn compute_empty_state(&self) -> EmptyState {
        match self.input_mode {
            InputMode::Search => EmptyState {
                message: "No matching files".to_string(),
                subtitle: "ESC clears the search".to_string(),
            },
            InputMode::Normal | InputMode::CreateNote => EmptyState {
                message: "No files found".to_string(),
                subtitle: "Ctrl+n creates a note here".to_string(),
            },
        }
    }

    /// Truncates a path for display, keeping the tail.
    fn format_display_path(path: &str, max_width: usize) -> String {
        let chars: Vec<char> = path.chars().collect();
        if chars.len() > max_width && max_width > 3 {
            let tail: String = chars[chars.len() - (max_width - 3)..].iter().collect();
            format!("...{tail}")
        } else {
            path.to_string()
        }
    }
}
