//! notepick: an interactive terminal file picker for text files and notes.
//!
//! notepick lets you browse a directory tree, fuzzy-filter entries by name,
//! create a new note or today's dated note, and hand the chosen file to the
//! editor named by `$EDITOR`.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shim (main.rs)                            │  ← crossterm loop,
//! └─────────────────────────────────────────────────────┘    key mapping
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Mode transitions
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                 │                  │
//! ┌───────────────┐ ┌───────────────┐ ┌───────────────┐
//! │ UI Layer      │ │ Scan Layer    │ │ Search Layer  │
//! │ (ui/)         │ │ (scan/)       │ │ (search/)     │
//! │ - Rendering   │ │ - Enumeration │ │ - Fuzzy rank  │
//! │ - Theming     │ │ - Classify    │ │ - Fallback    │
//! └───────────────┘ └───────────────┘ └───────────────┘
//!         │                 │                  │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Notes & Editor Layers                      │
//! │  - Entry model, error types (domain/)               │
//! │  - Note filenames and creation (notes/)             │
//! │  - Editor launching seam (editor/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The editor comes from the `EDITOR` environment variable. Everything else
//! is optional, read from `<config dir>/notepick/config.toml`:
//!
//! ```toml
//! show_hidden = false
//! match = "fuzzy"          # or "substring"
//! theme = "default"
//! # theme_file = "/path/to/theme.toml"
//! trace_level = "info"
//! ```
//!
//! # Session Flow
//!
//! 1. `Config::load` merges the config file and environment
//! 2. [`initialize`] scans the starting directory and builds the session
//!    state (an unreadable starting directory is a fatal, non-zero exit)
//! 3. The binary's event loop maps key presses to [`Event`]s, runs
//!    [`handle_event`], and renders via [`ui::render`]
//! 4. An [`Action`] ends the session: quit, or restore the terminal and hand
//!    the chosen path to the editor

pub mod app;
pub mod domain;
pub mod editor;
pub mod notes;
pub mod observability;
pub mod scan;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Entry, EntryKind, NotepickError, Result};
pub use editor::{CommandEditor, EditorLauncher};
pub use search::{MatchMode, SearchEngine};
pub use ui::Theme;

use serde::Deserialize;

/// Session configuration merged from the config file and environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// External editor command line, from the `EDITOR` environment variable.
    ///
    /// `None` when unset; the session refuses to start without it.
    pub editor: Option<String>,

    /// Whether dotfiles appear in listings. Default: `false`.
    pub show_hidden: bool,

    /// Matching strategy for the search engine. Default: fuzzy.
    pub match_mode: MatchMode,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level for the log file. `NOTEPICK_LOG` overrides it.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            show_hidden: false,
            match_mode: MatchMode::Fuzzy,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// On-disk shape of the optional config file. Every field has a default so a
/// partial file is fine.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    show_hidden: bool,
    #[serde(default, rename = "match")]
    match_mode: Option<MatchMode>,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    theme_file: Option<String>,
    #[serde(default)]
    trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the config file and environment.
    ///
    /// Reads `<config dir>/notepick/config.toml` when present (a malformed
    /// file is ignored with a trace event, not fatal), then overlays the
    /// `EDITOR` environment variable.
    #[must_use]
    pub fn load() -> Self {
        let file_contents = dirs::config_dir()
            .map(|d| d.join("notepick").join("config.toml"))
            .and_then(|path| std::fs::read_to_string(path).ok());

        let mut config = match file_contents {
            Some(contents) => Self::from_toml(&contents),
            None => Self::default(),
        };

        config.editor = std::env::var("EDITOR")
            .ok()
            .filter(|s| !s.trim().is_empty());
        config
    }

    /// Parses configuration from TOML contents, falling back to defaults on
    /// parse failure.
    #[must_use]
    pub fn from_toml(contents: &str) -> Self {
        let file: FileConfig = match toml::from_str(contents) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed config file");
                FileConfig::default()
            }
        };

        Self {
            editor: None,
            show_hidden: file.show_hidden,
            match_mode: file.match_mode.unwrap_or(MatchMode::Fuzzy),
            theme_name: file.theme,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
        }
    }
}

/// Builds the session state for a starting directory.
///
/// Resolves the theme (custom file, built-in name, or default), constructs
/// the search engine, scans the starting directory, and surfaces the
/// one-time degraded-search notice if fuzzy matching is unavailable.
///
/// # Errors
///
/// Returns an error when the starting directory cannot be read; the caller
/// exits non-zero with a diagnostic.
pub fn initialize(config: &Config, start_dir: std::path::PathBuf) -> Result<AppState> {
    tracing::debug!(start_dir = %start_dir.display(), "initializing session");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        },
    );

    let engine = SearchEngine::from_mode(config.match_mode);

    let mut state = AppState::new(start_dir, engine, theme, config.show_hidden);
    state.rescan()?;

    if engine.is_degraded() {
        state.notice =
            Some("Fuzzy matching unavailable - falling back to substring search".to_string());
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml("");
        assert!(!config.show_hidden);
        assert_eq!(config.match_mode, MatchMode::Fuzzy);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn toml_fields_are_applied() {
        let config = Config::from_toml(
            r#"
            show_hidden = true
            match = "substring"
            theme = "default"
            trace_level = "debug"
            "#,
        );
        assert!(config.show_hidden);
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert_eq!(config.theme_name.as_deref(), Some("default"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let config = Config::from_toml("show_hidden = definitely");
        assert!(!config.show_hidden);
    }

    #[test]
    fn initialize_scans_the_starting_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "hello").unwrap();

        let state = initialize(&Config::default(), dir.path().to_path_buf()).unwrap();
        assert!(state.entries.iter().any(|e| e.name == "readme.md"));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.notice.is_none());
    }

    #[test]
    fn initialize_fails_on_an_unreadable_starting_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(initialize(&Config::default(), missing).is_err());
    }
}
