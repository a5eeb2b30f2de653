//! External editor launching.
//!
//! Opening a file is the session's terminal hand-off: the interactive loop
//! stops, the configured editor takes over the terminal, and the process
//! exits with the editor's exit code when it returns. The launcher is a trait
//! so the controller and tests can run against a recording fake instead of
//! spawning real processes.

use crate::domain::{NotepickError, Result};
use std::path::Path;
use std::process::Command;

/// Capability to open a file in an external editor.
///
/// Implementations block until the editor exits and return its exit code.
pub trait EditorLauncher {
    /// Opens `path` in the editor and returns the editor's exit code.
    ///
    /// # Errors
    ///
    /// Returns an error when the editor process cannot be spawned.
    fn open(&self, path: &Path) -> Result<i32>;
}

/// Launcher that spawns the editor named by the `EDITOR` environment
/// variable (command plus optional flags, whitespace-separated).
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    /// Creates a launcher for the given command line.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the command is empty or blank.
    pub fn new(command: impl Into<String>) -> Result<Self> {
        let command = command.into();
        if command.split_whitespace().next().is_none() {
            return Err(NotepickError::Config(
                "editor command is empty".to_string(),
            ));
        }
        Ok(Self { command })
    }

    /// Splits the configured command line into program and leading arguments.
    ///
    /// The editor setting may carry flags (`"code --wait"`), so the first
    /// token is the program and the rest are passed through before the path.
    fn command_line(&self) -> (&str, Vec<&str>) {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().unwrap_or_default();
        (program, parts.collect())
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, path: &Path) -> Result<i32> {
        let (program, args) = self.command_line();
        tracing::debug!(editor = %program, path = %path.display(), "launching editor");

        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|e| NotepickError::Editor(format!("failed to launch '{program}': {e}")))?;

        // A signal-terminated editor has no code; report generic failure.
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Test double that records opened paths instead of spawning anything.
    pub struct RecordingEditor {
        pub opened: RefCell<Vec<PathBuf>>,
        pub exit_code: i32,
    }

    impl RecordingEditor {
        pub fn new(exit_code: i32) -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
                exit_code,
            }
        }
    }

    impl EditorLauncher for RecordingEditor {
        fn open(&self, path: &Path) -> Result<i32> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(self.exit_code)
        }
    }

    #[test]
    fn empty_command_is_a_config_error() {
        assert!(matches!(
            CommandEditor::new(""),
            Err(NotepickError::Config(_))
        ));
        assert!(matches!(
            CommandEditor::new("   "),
            Err(NotepickError::Config(_))
        ));
    }

    #[test]
    fn command_line_splits_flags_from_the_program() {
        let editor = CommandEditor::new("code --wait --new-window").unwrap();
        let (program, args) = editor.command_line();
        assert_eq!(program, "code");
        assert_eq!(args, vec!["--wait", "--new-window"]);
    }

    #[test]
    fn bare_command_has_no_arguments() {
        let editor = CommandEditor::new("micro").unwrap();
        let (program, args) = editor.command_line();
        assert_eq!(program, "micro");
        assert!(args.is_empty());
    }

    #[test]
    fn missing_binary_is_an_editor_error() {
        let editor = CommandEditor::new("definitely-not-a-real-editor-9f2c").unwrap();
        assert!(matches!(
            editor.open(Path::new("/tmp/x.md")),
            Err(NotepickError::Editor(_))
        ));
    }

    #[test]
    fn recording_fake_observes_the_exact_path() {
        let editor = RecordingEditor::new(0);
        let code = editor.open(Path::new("/tmp/notes/a.txt")).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            editor.opened.borrow().as_slice(),
            &[PathBuf::from("/tmp/notes/a.txt")]
        );
    }
}
