//! Entry filtering and ranking.
//!
//! Wraps the fuzzy matcher behind a small engine type that the application
//! state owns. See [`engine`] for the strategy and ranking rules.

pub mod engine;

pub use engine::{MatchMode, SearchEngine};
