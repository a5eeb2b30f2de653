//! Event handling and state transition logic.
//!
//! This module implements the controller: key events arrive as [`Event`]
//! values, [`handle_event`] pattern-matches on them, mutates [`AppState`],
//! and returns the side-effect [`Action`]s for the runtime to execute. All
//! transitions run synchronously to completion before the next event is
//! read.
//!
//! # Event Flow
//!
//! ```text
//! Key press → map_key_event (binary) → Event → handle_event
//!                                                  │
//!                              state mutations ←───┴───→ Vec<Action>
//! ```
//!
//! Mode gating happens twice: the key mapper only produces mode-appropriate
//! events (`q`/Ctrl+D exist only in Normal mode), and the handler branches on
//! the active mode for the shared events (`Char`, `Select`, `Escape`).

use super::modes::InputMode;
use super::{Action, AppState};
use crate::domain::Result;
use crate::notes;

/// Events triggered by user input.
///
/// Each event is a discrete occurrence that may mutate session state and
/// emit actions. The handler processes them sequentially, so transitions are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor up one row (clamped).
    KeyUp,
    /// Moves the cursor down one row (clamped).
    KeyDown,
    /// Activates the selected entry, or submits the note title in
    /// CreateNote mode.
    Select,
    /// Enters Search mode with a cleared query.
    SearchMode,
    /// Enters CreateNote mode with a cleared title buffer.
    NoteMode,
    /// Creates (if absent) and opens today's daily note.
    DailyNote,
    /// Appends a character to the active text buffer.
    Char(char),
    /// Removes the last character from the active text buffer.
    Backspace,
    /// Cancels the active mode, clearing its buffer.
    Escape,
    /// Ends the session without opening anything.
    Quit,
}

/// Processes an event, mutates session state, and returns actions.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a redraw, and the side
/// effects to execute. Both current actions terminate the session, so a
/// non-empty action list means the loop is about to end.
///
/// # Errors
///
/// Propagates only failures the session cannot absorb locally; recoverable
/// filesystem errors (unreadable directory, note creation failure) become
/// notices and keep the session running.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::Select => handle_select(state),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.search_query.clear();
            state.notice = None;
            state.selected_index = 0;
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::NoteMode => {
            tracing::debug!("entering note mode");
            state.input_mode = InputMode::CreateNote;
            state.note_title.clear();
            state.notice = None;
            Ok((true, vec![]))
        }
        Event::DailyNote => {
            let filename = notes::daily_filename(chrono::Local::now().date_naive());
            let path = state.current_dir.join(filename);
            match notes::create_if_absent(&path) {
                Ok(()) => Ok((false, vec![Action::OpenFile { path }])),
                Err(e) => {
                    tracing::debug!(error = %e, "daily note creation failed");
                    state.notice = Some(format!("Cannot create daily note: {e}"));
                    Ok((true, vec![]))
                }
            }
        }
        Event::Char(c) => {
            match state.input_mode {
                InputMode::Search => {
                    state.search_query.push(*c);
                    state.notice = None;
                    state.selected_index = 0;
                    state.apply_search_filter();
                }
                InputMode::CreateNote => {
                    state.note_title.push(*c);
                    state.notice = None;
                }
                InputMode::Normal => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Backspace => {
            match state.input_mode {
                InputMode::Search => {
                    state.search_query.pop();
                    state.notice = None;
                    state.selected_index = 0;
                    state.apply_search_filter();
                }
                InputMode::CreateNote => {
                    state.note_title.pop();
                    state.notice = None;
                }
                InputMode::Normal => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            tracing::debug!(mode = ?state.input_mode, "leaving input mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.note_title.clear();
            state.notice = None;
            state.selected_index = state.selected_index.min(state.entries.len().saturating_sub(1));
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Handles Enter: open a file, descend into a directory, or submit a note
/// title, depending on mode and selection.
fn handle_select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.input_mode == InputMode::CreateNote {
        return submit_note(state);
    }

    let Some(entry) = state.selected_entry().cloned() else {
        // Enter on an empty filtered list backs out of the search.
        if state.input_mode == InputMode::Search {
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.selected_index = 0;
            return Ok((true, vec![]));
        }
        return Ok((false, vec![]));
    };

    if entry.is_dir() {
        tracing::debug!(target = %entry.path.display(), "descending into directory");
        if let Err(e) = state.navigate_to(&entry.path) {
            state.notice = Some(format!("Cannot open directory: {e}"));
        }
        Ok((true, vec![]))
    } else {
        tracing::debug!(path = %entry.path.display(), "opening file");
        Ok((false, vec![Action::OpenFile { path: entry.path }]))
    }
}

/// Handles Enter in CreateNote mode: sanitize the title, create the backing
/// file, and open it.
///
/// A blank title cancels the mode without creating anything. Creation
/// failures keep the mode and buffer intact so the user can retry or cancel.
fn submit_note(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.note_title.trim().is_empty() {
        state.input_mode = InputMode::Normal;
        state.note_title.clear();
        return Ok((true, vec![]));
    }

    let filename = notes::sanitize_title(&state.note_title);
    let path = state.current_dir.join(filename);

    match notes::create_if_absent(&path) {
        Ok(()) => Ok((false, vec![Action::OpenFile { path }])),
        Err(e) => {
            tracing::debug!(error = %e, path = %path.display(), "note creation failed");
            state.notice = Some(format!("Cannot create note: {e}"));
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchEngine;
    use crate::ui::theme::Theme;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    /// A populated session rooted in a fresh temp directory containing
    /// `a.txt`, `b.bin` and `sub/`.
    fn picker_session() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "text").unwrap();
        fs::write(dir.path().join("b.bin"), [0u8, 1, 2]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut state = AppState::new(
            dir.path().to_path_buf(),
            SearchEngine::new(),
            Theme::default(),
            false,
        );
        state.rescan().unwrap();
        (dir, state)
    }

    fn select_by_name(state: &mut AppState, name: &str) {
        state.selected_index = state
            .active_entries()
            .iter()
            .position(|e| e.name == name)
            .unwrap();
    }

    #[test]
    fn normal_mode_lists_every_kind() {
        let (_dir, state) = picker_session();
        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"a.txt"));
        assert!(names.contains(&"b.bin"));
        assert!(names.contains(&"sub"));
    }

    #[test]
    fn search_then_enter_opens_the_match() {
        let (dir, mut state) = picker_session();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search);

        handle_event(&mut state, &Event::Char('a')).unwrap();
        let names: Vec<&str> = state
            .filtered_entries
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert!(names.contains(&"a.txt"));
        assert!(!names.contains(&"sub"));

        select_by_name(&mut state, "a.txt");
        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenFile {
                path: dir.path().join("a.txt")
            }]
        );
    }

    #[test]
    fn enter_on_a_directory_descends() {
        let (dir, mut state) = picker_session();
        select_by_name(&mut state, "sub");

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.current_dir, dir.path().join("sub"));
    }

    #[test]
    fn enter_on_a_binary_file_still_opens_it() {
        let (dir, mut state) = picker_session();
        select_by_name(&mut state, "b.bin");

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenFile {
                path: dir.path().join("b.bin")
            }]
        );
    }

    #[test]
    fn enter_on_a_filtered_directory_descends_and_clears_search() {
        let (dir, mut state) = picker_session();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('s')).unwrap();
        handle_event(&mut state, &Event::Char('u')).unwrap();
        select_by_name(&mut state, "sub");

        handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.current_dir, dir.path().join("sub"));
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn escape_leaves_search_and_clears_the_query() {
        let (_dir, mut state) = picker_session();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn backspace_refilters_the_query() {
        let (_dir, mut state) = picker_session();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        assert!(state.filtered_entries.is_empty());

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.filtered_entries.len(), state.entries.len());
    }

    #[test]
    fn enter_on_an_empty_filtered_list_backs_out() {
        let (_dir, mut state) = picker_session();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::Char('q')).unwrap();
        assert!(state.filtered_entries.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn note_mode_collects_a_title_and_creates_the_file() {
        let (dir, mut state) = picker_session();

        handle_event(&mut state, &Event::NoteMode).unwrap();
        for c in "My Note".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.note_title, "My Note");

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        let expected = dir.path().join("My-Note.md");
        assert_eq!(
            actions,
            vec![Action::OpenFile {
                path: expected.clone()
            }]
        );
        assert!(expected.is_file());
    }

    #[test]
    fn escape_discards_the_note_title_without_creating() {
        let (dir, mut state) = picker_session();

        handle_event(&mut state, &Event::NoteMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.note_title.is_empty());
        assert!(!dir.path().join("x.md").exists());
    }

    #[test]
    fn blank_note_title_cancels_without_creating() {
        let (dir, mut state) = picker_session();
        let before = fs::read_dir(dir.path()).unwrap().count();

        handle_event(&mut state, &Event::NoteMode).unwrap();
        handle_event(&mut state, &Event::Char(' ')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), before);
    }

    #[test]
    fn failed_note_creation_keeps_the_buffer_for_retry() {
        let (dir, mut state) = picker_session();
        // Point the session at a directory that no longer exists.
        state.current_dir = dir.path().join("gone");

        handle_event(&mut state, &Event::NoteMode).unwrap();
        for c in "keep me".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::CreateNote);
        assert_eq!(state.note_title, "keep me");
        assert!(state.notice.is_some());
    }

    #[test]
    fn daily_note_is_created_then_reused() {
        let (dir, mut state) = picker_session();
        let filename = notes::daily_filename(chrono::Local::now().date_naive());
        let path = dir.path().join(&filename);
        assert!(!path.exists());

        let (_, actions) = handle_event(&mut state, &Event::DailyNote).unwrap();
        assert_eq!(actions, vec![Action::OpenFile { path: path.clone() }]);
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        // Simulate the user having written to it, then a second Ctrl+D.
        fs::write(&path, "journal").unwrap();
        let (_, actions) = handle_event(&mut state, &Event::DailyNote).unwrap();
        assert_eq!(actions, vec![Action::OpenFile { path: path.clone() }]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "journal");
    }

    #[test]
    fn failed_daily_note_surfaces_a_notice() {
        let (dir, mut state) = picker_session();
        state.current_dir = dir.path().join("gone");

        let (_, actions) = handle_event(&mut state, &Event::DailyNote).unwrap();
        assert!(actions.is_empty());
        assert!(state.notice.is_some());
    }

    #[test]
    fn unreadable_descent_target_sets_a_notice_and_stays() {
        let (dir, mut state) = picker_session();
        select_by_name(&mut state, "sub");
        fs::remove_dir(dir.path().join("sub")).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.current_dir, dir.path());
        assert!(state.notice.is_some());
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let (_dir, mut state) = picker_session();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn characters_in_normal_mode_are_ignored() {
        let (_dir, mut state) = picker_session();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_query.is_empty());
        assert!(state.note_title.is_empty());
    }
}
