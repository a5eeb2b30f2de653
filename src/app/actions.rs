//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns actions instead of performing terminal or
//! process side effects itself, keeping state transitions unit-testable. The
//! binary's main loop executes them: both variants terminate the session, so
//! an action is always the last thing a session does.

use std::path::PathBuf;

/// Commands produced by the event handler for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Restores the terminal and hands `path` to the external editor.
    ///
    /// The process exits with the editor's exit code afterwards; the
    /// interactive loop does not resume.
    OpenFile {
        /// Absolute path of the file to open.
        path: PathBuf,
    },

    /// Ends the session without opening anything, exit status 0.
    Quit,
}
