//! Fuzzy entry filtering with a substring fallback.
//!
//! The engine ranks entries against a live query using the Skim fuzzy
//! matcher. When fuzzy matching is unavailable, or explicitly disabled in the
//! configuration, it falls back to case-insensitive substring containment in
//! original scan order. The matcher itself is constructed per filter call;
//! the engine only carries the chosen strategy, so session state stays
//! cheaply cloneable.

use crate::domain::Entry;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Deserialize;
use std::cmp::Reverse;

/// Matching strategy for the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Skim fuzzy matching with relevance ranking (default).
    Fuzzy,
    /// Case-insensitive substring containment, scan order preserved.
    Substring,
}

/// Ranks directory entries against a search query.
///
/// Created once per session via [`SearchEngine::new`] or
/// [`SearchEngine::from_mode`] and stored in the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    mode: MatchMode,
    degraded: bool,
}

impl SearchEngine {
    /// Creates an engine with fuzzy matching, degrading to substring
    /// matching when the matcher cannot be initialized.
    #[must_use]
    pub fn new() -> Self {
        // SkimMatcherV2 construction currently cannot fail; a panic during
        // construction is treated as the capability being unavailable.
        match std::panic::catch_unwind(|| drop(SkimMatcherV2::default())) {
            Ok(()) => Self {
                mode: MatchMode::Fuzzy,
                degraded: false,
            },
            Err(_) => {
                tracing::warn!("fuzzy matcher unavailable, falling back to substring matching");
                Self {
                    mode: MatchMode::Substring,
                    degraded: true,
                }
            }
        }
    }

    /// Creates an engine for the configured matching mode.
    ///
    /// `MatchMode::Substring` here is an explicit choice, not a degradation,
    /// so no degraded-mode notice is raised for it.
    #[must_use]
    pub fn from_mode(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Fuzzy => Self::new(),
            MatchMode::Substring => Self {
                mode: MatchMode::Substring,
                degraded: false,
            },
        }
    }

    /// Returns `true` when fuzzy matching was requested but unavailable.
    ///
    /// The controller surfaces a one-time notice for this; the session keeps
    /// functioning on the substring fallback.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Filters and ranks entries against a query.
    ///
    /// An empty query returns the entries unchanged and unscored. With fuzzy
    /// matching, results are ordered by descending match score, ties broken
    /// by original scan order. With substring matching, scan order is
    /// preserved.
    #[must_use]
    pub fn filter(&self, query: &str, entries: &[Entry]) -> Vec<Entry> {
        let _span = tracing::debug_span!(
            "filter",
            query_len = query.len(),
            entry_count = entries.len(),
            mode = ?self.mode
        )
        .entered();

        if query.is_empty() {
            return entries.to_vec();
        }

        let filtered: Vec<Entry> = match self.mode {
            MatchMode::Fuzzy => {
                let matcher = SkimMatcherV2::default();
                let mut scored: Vec<(i64, usize)> = entries
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, entry)| {
                        matcher.fuzzy_match(&entry.name, query).map(|s| (s, idx))
                    })
                    .collect();
                scored.sort_by_key(|&(score, idx)| (Reverse(score), idx));
                scored
                    .into_iter()
                    .map(|(_, idx)| entries[idx].clone())
                    .collect()
            }
            MatchMode::Substring => entries
                .iter()
                .filter(|entry| find_ignore_case(&entry.name, query).is_some())
                .cloned()
                .collect(),
        };

        tracing::debug!(filtered_count = filtered.len(), "filter applied");
        filtered
    }

    /// Computes character index ranges to highlight for the current query.
    ///
    /// Fuzzy mode coalesces the matcher's matched-character indices into
    /// contiguous `(start, end)` ranges (exclusive end). Substring mode
    /// returns the single matched span. No match, or an empty query, yields
    /// no ranges.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str, query: &str) -> Vec<(usize, usize)> {
        if query.is_empty() {
            return vec![];
        }

        match self.mode {
            MatchMode::Fuzzy => {
                let matcher = SkimMatcherV2::default();
                match matcher.fuzzy_indices(text, query) {
                    Some((_score, indices)) => coalesce(&indices),
                    None => vec![],
                }
            }
            MatchMode::Substring => find_ignore_case(text, query)
                .map(|start| vec![(start, start + query.chars().count())])
                .unwrap_or_default(),
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Coalesces sorted character indices into contiguous ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in indices {
        match (start, prev) {
            (None, _) => {
                start = Some(idx);
                prev = Some(idx);
            }
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {}
        }
    }

    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }

    ranges
}

/// Finds the character position of `needle` in `haystack`, ignoring ASCII case.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay: Vec<char> = haystack.chars().collect();
    let ndl: Vec<char> = needle.chars().collect();
    if ndl.is_empty() || ndl.len() > hay.len() {
        return None;
    }
    hay.windows(ndl.len())
        .position(|w| w.iter().zip(&ndl).all(|(a, b)| a.eq_ignore_ascii_case(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryKind;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(*n, format!("/tmp/{n}"), EntryKind::TextFile))
            .collect()
    }

    #[test]
    fn empty_query_returns_original_order() {
        let engine = SearchEngine::new();
        let list = entries(&["readme.md", "test.py", "main.js"]);
        assert_eq!(engine.filter("", &list), list);
    }

    #[test]
    fn exact_name_ranks_first() {
        let engine = SearchEngine::new();
        let list = entries(&["testing-notes.md", "test.py", "contest.py"]);
        let filtered = engine.filter("test.py", &list);
        assert_eq!(filtered[0].name, "test.py");
    }

    #[test]
    fn fuzzy_matches_skip_gaps() {
        let engine = SearchEngine::new();
        let list = entries(&["readme.md", "test.py", "main.js"]);
        let filtered = engine.filter("tst", &list);
        assert!(filtered.iter().any(|e| e.name == "test.py"));
        assert!(filtered.iter().all(|e| e.name != "main.js"));
    }

    #[test]
    fn ties_keep_scan_order() {
        let engine = SearchEngine::new();
        let list = entries(&["note-a.md", "note-b.md"]);
        let filtered = engine.filter("note", &list);
        assert_eq!(filtered[0].name, "note-a.md");
        assert_eq!(filtered[1].name, "note-b.md");
    }

    #[test]
    fn substring_mode_preserves_scan_order() {
        let engine = SearchEngine::from_mode(MatchMode::Substring);
        let list = entries(&["zz-config.yaml", "config.yaml", "main.js"]);
        let filtered = engine.filter("CONFIG", &list);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "zz-config.yaml");
        assert_eq!(filtered[1].name, "config.yaml");
    }

    #[test]
    fn explicit_substring_mode_is_not_degraded() {
        let engine = SearchEngine::from_mode(MatchMode::Substring);
        assert!(!engine.is_degraded());
    }

    #[test]
    fn highlight_ranges_coalesce_consecutive_indices() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 6, 9]), vec![(0, 3), (5, 7), (9, 10)]);
        assert_eq!(coalesce(&[]), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn substring_highlight_covers_the_match() {
        let engine = SearchEngine::from_mode(MatchMode::Substring);
        assert_eq!(engine.highlight_ranges("my-notes.md", "notes"), vec![(3, 8)]);
        assert_eq!(engine.highlight_ranges("my-notes.md", "zzz"), vec![]);
    }

    #[test]
    fn filter_is_deterministic() {
        let engine = SearchEngine::new();
        let list = entries(&["aa.md", "ab.md", "ba.md"]);
        assert_eq!(engine.filter("a", &list), engine.filter("a", &list));
    }
}
