//! Input mode state machine types.
//!
//! The session is always in exactly one input mode. The mode decides which
//! keybindings are live, where character input goes, and which entry list
//! (full or filtered) selection operates on.

/// Current input handling mode.
///
/// Determines active keybindings, the footer text, and whether typed
/// characters feed the search query or the note title buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default browsing mode.
    ///
    /// Available keybindings: arrows (navigate), Enter (open/descend),
    /// `/` (search), Ctrl+N (new note), Ctrl+D (daily note), `q` (quit).
    Normal,

    /// Live fuzzy filtering of the current directory.
    ///
    /// Typed characters extend the query; selection moves over the filtered
    /// list; ESC returns to Normal and clears the query.
    Search,

    /// Collecting a title for a new note.
    ///
    /// Typed characters extend the title buffer; Enter creates and opens the
    /// note; ESC discards the buffer without creating anything.
    CreateNote,
}

impl InputMode {
    /// Returns `true` while one of the text-input modes is active.
    ///
    /// Used by the renderer to decide whether the input bar is shown.
    #[must_use]
    pub fn has_input_bar(&self) -> bool {
        matches!(self, Self::Search | Self::CreateNote)
    }
}
