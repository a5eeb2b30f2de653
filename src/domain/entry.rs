//! Directory entry domain model.
//!
//! This module defines the core `Entry` type produced by directory scans. An
//! entry is a named filesystem object together with its classification
//! (directory, text file, or other). Entries are immutable once produced and
//! replaced wholesale by the next scan.

use std::path::{Path, PathBuf};

/// Display name used for the synthetic parent-directory entry.
pub const PARENT_NAME: &str = "..";

/// Classification of a scanned filesystem object.
///
/// Text files are identified by extension or by content sniffing (see
/// [`crate::scan::classify`]); everything else that is not a directory is
/// `Other` and is handed to the editor untouched when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory that can be descended into.
    Directory,
    /// A file whose bytes look like human-readable text.
    TextFile,
    /// Any other file (binary, unknown extension).
    Other,
}

/// A single entry in the current directory listing.
///
/// Produced by [`crate::scan::scan`]. The `name` is the bare file name as it
/// appears in the listing; `path` is the absolute location used for descending
/// or opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare file name shown in the listing.
    pub name: String,
    /// Absolute path to the filesystem object.
    pub path: PathBuf,
    /// Classification decided at scan time.
    pub kind: EntryKind,
}

impl Entry {
    /// Creates an entry with the given name, path and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Creates the synthetic `..` entry pointing at `parent`.
    #[must_use]
    pub fn parent(parent: &Path) -> Self {
        Self::new(PARENT_NAME, parent, EntryKind::Directory)
    }

    /// Returns `true` for directory entries (including the parent entry).
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_entry_is_a_directory() {
        let entry = Entry::parent(Path::new("/tmp"));
        assert_eq!(entry.name, PARENT_NAME);
        assert_eq!(entry.path, PathBuf::from("/tmp"));
        assert!(entry.is_dir());
    }

    #[test]
    fn file_entry_is_not_a_directory() {
        let entry = Entry::new("notes.md", "/tmp/notes.md", EntryKind::TextFile);
        assert!(!entry.is_dir());
    }
}
