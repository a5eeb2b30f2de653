//! Note filename generation and creation.
//!
//! Turns free-form note titles into safe filenames, names the daily note
//! after the local calendar date, and creates empty backing files without
//! ever touching existing content.
//!
//! # Filename convention
//!
//! Sanitized titles keep `[A-Za-z0-9._-]`; whitespace runs become single
//! hyphens and everything else is stripped. A title with no extension gets
//! `.md`; a title that sanitizes to nothing becomes the fallback name. Daily
//! notes are always `YYYY-MM-DD.md`.

use crate::domain::Result;
use chrono::NaiveDate;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

/// Name used when a title sanitizes down to nothing.
pub const FALLBACK_NAME: &str = "untitled";

/// Default extension appended to extensionless note titles.
pub const NOTE_EXTENSION: &str = "md";

/// Sanitizes a note title into a filename.
///
/// Surrounding whitespace is trimmed, internal whitespace runs collapse to a
/// single `-`, characters outside `[A-Za-z0-9._-]` (path separators and
/// control characters included) are stripped, and runs of `-` collapse.
/// Leading/trailing hyphens and leading dots are trimmed so the result is
/// never hidden or awkwardly hyphenated. An empty result becomes
/// [`FALLBACK_NAME`]; a result without an extension gets `.md` appended.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if c.is_whitespace() {
            if !name.ends_with('-') {
                name.push('-');
            }
        } else if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            if c == '-' && name.ends_with('-') {
                continue;
            }
            name.push(c);
        }
    }

    let name = name.trim_matches('-').trim_start_matches('.');
    let mut name = if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name.to_string()
    };

    if Path::new(&name).extension().is_none() {
        name.push('.');
        name.push_str(NOTE_EXTENSION);
    }

    name
}

/// Returns the daily-note filename for a calendar date.
///
/// Zero-padded ISO date plus the note extension, e.g. `2025-06-24.md`.
#[must_use]
pub fn daily_filename(date: NaiveDate) -> String {
    format!("{}.{NOTE_EXTENSION}", date.format("%Y-%m-%d"))
}

/// Creates an empty file at `path` if none exists.
///
/// Succeeds without touching the file when it already exists; the create is
/// atomic (`create_new`), so existing content is never truncated.
///
/// # Errors
///
/// Returns an error on permission or other filesystem failures. Callers
/// surface it to the user without crashing the session.
pub fn create_if_absent(path: &Path) -> Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "created empty note file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sanitize_replaces_spaces_with_hyphens() {
        assert_eq!(sanitize_title("My Note Title"), "My-Note-Title.md");
    }

    #[test]
    fn sanitize_strips_special_characters() {
        assert_eq!(sanitize_title("test!@#$%^&*()note"), "testnote.md");
        assert_eq!(sanitize_title(" My Note! "), "My-Note.md");
    }

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_title("../etc/passwd"), "etcpasswd.md");
        assert_eq!(sanitize_title("a/b\\c"), "abc.md");
    }

    #[test]
    fn sanitize_collapses_whitespace_and_hyphens() {
        assert_eq!(sanitize_title("  spaced  note  "), "spaced-note.md");
        assert_eq!(sanitize_title("multiple---hyphens"), "multiple-hyphens.md");
    }

    #[test]
    fn sanitize_keeps_an_explicit_extension() {
        assert_eq!(sanitize_title("todo.txt"), "todo.txt");
        assert_eq!(sanitize_title("123-abc_def"), "123-abc_def.md");
    }

    #[test]
    fn sanitize_never_yields_an_empty_or_hidden_name() {
        assert_eq!(sanitize_title(""), "untitled.md");
        assert_eq!(sanitize_title("!!!"), "untitled.md");
        assert_eq!(sanitize_title(".bashrc"), "bashrc.md");
    }

    #[test]
    fn sanitize_is_deterministic() {
        assert_eq!(sanitize_title(" My Note! "), sanitize_title(" My Note! "));
    }

    #[test]
    fn daily_filename_is_zero_padded_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        assert_eq!(daily_filename(date), "2025-06-24.md");

        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(daily_filename(date), "2025-01-03.md");
    }

    #[test]
    fn create_if_absent_creates_an_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("2025-06-24.md");

        create_if_absent(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn create_if_absent_never_touches_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("2025-06-24.md");
        fs::write(&path, "existing journal entry").unwrap();

        create_if_absent(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing journal entry");
    }

    #[test]
    fn create_if_absent_fails_in_a_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("note.md");
        assert!(create_if_absent(&path).is_err());
    }
}
