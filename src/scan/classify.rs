//! Text/binary classification of files.
//!
//! Classification is a two-stage heuristic: a known set of text extensions
//! decides most files immediately, and extensionless files are decided by
//! sniffing a bounded prefix of their content. The byte heuristic is a pure
//! function over a byte slice so it can be tested without touching the
//! filesystem.

use crate::domain::EntryKind;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File extensions treated as text without looking at content.
///
/// Covers common code, web, config and documentation formats.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "js", "json", "yaml", "yml", "html", "css", "sh", "conf", "cfg", "ini",
    "log", "sql", "xml", "csv", "toml", "rs", "go", "c", "cpp", "h", "hpp", "java", "php", "rb",
    "pl", "ts", "jsx", "tsx", "vue", "svelte", "scss", "sass", "less",
];

/// Number of bytes read from the head of an extensionless file for sniffing.
const SNIFF_LEN: usize = 512;

/// Minimum fraction of printable/whitespace bytes for a sample to count as text.
const PRINTABLE_THRESHOLD: f64 = 0.8;

/// Decides whether a byte sample looks like human-readable text.
///
/// A sample is text when it contains no NUL byte and more than 80% of its
/// bytes are printable ASCII or ordinary whitespace (tab, newline, carriage
/// return). An empty sample is text: a freshly created note has no bytes yet.
///
/// The result is a pure function of the sample, so classification is stable
/// for unchanged file content.
#[must_use]
pub fn is_text_bytes(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return true;
    }
    if bytes.contains(&0) {
        return false;
    }

    let printable = bytes
        .iter()
        .filter(|&&b| matches!(b, b'\t' | b'\n' | b'\r') || (0x20..0x7f).contains(&b))
        .count();

    printable as f64 / bytes.len() as f64 > PRINTABLE_THRESHOLD
}

/// Classifies a file path as text or other.
///
/// Files with a known text extension are `TextFile` without any I/O. Files
/// with no extension are sniffed via [`is_text_bytes`] on the first
/// [`SNIFF_LEN`] bytes. Files with an unrecognized extension, and files whose
/// content cannot be read, are `Other`.
///
/// Directories are not handled here; the scanner classifies them from file
/// type before calling this.
#[must_use]
pub fn classify_file(path: &Path) -> EntryKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                EntryKind::TextFile
            } else {
                EntryKind::Other
            }
        }
        None => match sniff(path) {
            Ok(sample) if is_text_bytes(&sample) => EntryKind::TextFile,
            Ok(_) => EntryKind::Other,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "content sniff failed");
                EntryKind::Other
            }
        },
    }
}

/// Reads up to [`SNIFF_LEN`] bytes from the head of a file.
fn sniff(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut sample = vec![0u8; SNIFF_LEN];
    let read = file.read(&mut sample)?;
    sample.truncate(read);
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn empty_sample_is_text() {
        assert!(is_text_bytes(b""));
    }

    #[test]
    fn plain_ascii_is_text() {
        assert!(is_text_bytes(b"Hello world\nthis is a note\n"));
    }

    #[test]
    fn nul_byte_is_binary() {
        assert!(!is_text_bytes(b"\x00\x01\x02\x03"));
        assert!(!is_text_bytes(b"mostly text but\x00one nul"));
    }

    #[test]
    fn high_byte_soup_is_binary() {
        let bytes: Vec<u8> = (0x80..0xff).cycle().take(256).collect();
        assert!(!is_text_bytes(&bytes));
    }

    #[test]
    fn sniff_is_deterministic() {
        let sample = b"#!/bin/sh\necho hi\n";
        assert_eq!(is_text_bytes(sample), is_text_bytes(sample));
    }

    #[test]
    fn known_extensions_are_text_without_io() {
        // Paths do not exist; extension alone decides.
        assert_eq!(classify_file(Path::new("a.txt")), EntryKind::TextFile);
        assert_eq!(classify_file(Path::new("a.RS")), EntryKind::TextFile);
        assert_eq!(classify_file(Path::new("a.py")), EntryKind::TextFile);
    }

    #[test]
    fn unknown_extension_is_other() {
        assert_eq!(classify_file(Path::new("a.bin")), EntryKind::Other);
        assert_eq!(classify_file(Path::new("a.png")), EntryKind::Other);
    }

    #[test]
    fn extensionless_files_are_sniffed() {
        let dir = tempdir().unwrap();

        let script = dir.path().join("script");
        std::fs::write(&script, "#!/bin/sh\necho hi\n").unwrap();
        assert_eq!(classify_file(&script), EntryKind::TextFile);

        let blob = dir.path().join("blob");
        let mut f = File::create(&blob).unwrap();
        f.write_all(&[0u8, 1, 2, 3, 0xff, 0xfe]).unwrap();
        assert_eq!(classify_file(&blob), EntryKind::Other);

        let empty = dir.path().join("empty");
        File::create(&empty).unwrap();
        assert_eq!(classify_file(&empty), EntryKind::TextFile);
    }

    #[test]
    fn unreadable_extensionless_file_is_other() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(classify_file(&missing), EntryKind::Other);
    }
}
