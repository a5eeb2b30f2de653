//! Directory enumeration.
//!
//! Produces the ordered entry list for one directory: a synthetic parent
//! entry first (when the directory has a parent), then child directories,
//! then files, each group sorted case-insensitively by name. Hidden entries
//! (dotfiles) are skipped unless requested. Entries that cannot be stat'd are
//! skipped with a trace event; the scan continues.

use super::classify::classify_file;
use crate::domain::{Entry, EntryKind, Result};
use std::path::Path;

/// Scans a directory and returns its ordered entries.
///
/// # Parameters
///
/// * `dir` - Directory to enumerate
/// * `show_hidden` - Whether dotfiles are included in the listing
///
/// # Errors
///
/// Returns an error when the directory itself cannot be read (missing,
/// permission denied). Failures on individual entries are skipped, not
/// propagated.
pub fn scan(dir: &Path, show_hidden: bool) -> Result<Vec<Entry>> {
    let _span = tracing::debug_span!("scan", dir = %dir.display()).entered();

    let mut children = Vec::new();
    for dirent in std::fs::read_dir(dir)? {
        let dirent = match dirent {
            Ok(d) => d,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let name = match dirent.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                tracing::debug!(name = ?raw, "skipping entry with non-UTF-8 name");
                continue;
            }
        };

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let file_type = match dirent.file_type() {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(name = %name, error = %e, "skipping unstatable entry");
                continue;
            }
        };

        let path = dirent.path();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else {
            classify_file(&path)
        };

        children.push(Entry::new(name, path, kind));
    }

    // Directories before files, each group alphabetical ignoring case.
    children.sort_by(|a, b| {
        (!a.is_dir(), a.name.to_lowercase()).cmp(&(!b.is_dir(), b.name.to_lowercase()))
    });

    let mut entries = Vec::with_capacity(children.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(Entry::parent(parent));
    }
    entries.extend(children);

    tracing::debug!(entry_count = entries.len(), "scan complete");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PARENT_NAME;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn lists_directories_then_files_alphabetically() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let entries = scan(dir.path(), false).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![PARENT_NAME, "Alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn parent_entry_points_at_parent_directory() {
        let dir = tempdir().unwrap();
        let entries = scan(dir.path(), false).unwrap();
        assert_eq!(entries[0].name, PARENT_NAME);
        assert_eq!(entries[0].path, dir.path().parent().unwrap());
    }

    #[test]
    fn hidden_entries_are_skipped_by_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), "x").unwrap();
        fs::write(dir.path().join("seen.txt"), "x").unwrap();

        let entries = scan(dir.path(), false).unwrap();
        assert!(entries.iter().all(|e| e.name != ".hidden"));

        let entries = scan(dir.path(), true).unwrap();
        assert!(entries.iter().any(|e| e.name == ".hidden"));
    }

    #[test]
    fn binary_files_are_listed_as_other() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "text").unwrap();
        fs::write(dir.path().join("b.bin"), [0u8, 1, 2]).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = scan(dir.path(), false).unwrap();
        let kind_of = |name: &str| entries.iter().find(|e| e.name == name).unwrap().kind;
        assert_eq!(kind_of("a.txt"), EntryKind::TextFile);
        assert_eq!(kind_of("b.bin"), EntryKind::Other);
        assert_eq!(kind_of("sub"), EntryKind::Directory);
    }

    #[test]
    fn rescan_replaces_nothing_in_place() {
        // Two scans of unchanged content produce identical listings.
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.md")).unwrap();
        let first = scan(dir.path(), false).unwrap();
        let second = scan(dir.path(), false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan(&missing, false).is_err());
    }
}
