//! Error types for notepick.
//!
//! This module defines the centralized error type [`NotepickError`] and a
//! [`Result`] alias used throughout the crate. All errors are implemented
//! using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for notepick operations.
///
/// Consolidates the error conditions that can occur during a session, from
/// directory scanning to editor configuration. I/O errors convert
/// automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum NotepickError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed,
    /// most notably an unset or empty editor command. The string describes
    /// the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external editor could not be launched.
    ///
    /// Occurs when spawning the configured editor process fails. The string
    /// contains the underlying spawn failure.
    #[error("Editor error: {0}")]
    Editor(String),

    /// Terminal setup or teardown failed.
    ///
    /// Occurs when raw mode or the alternate screen cannot be entered before
    /// any UI is drawn. Fatal: the session exits with a diagnostic.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for notepick operations.
pub type Result<T> = std::result::Result<T, NotepickError>;
