//! Unified error types for the book and quoting engine.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Order book construction error.
    #[error("book error: {0}")]
    Book(#[from] BookError),
}

/// Order book construction errors.
///
/// Malformed individual orders never surface here: the builder drops them so
/// a single bad resting order cannot deny price discovery to the rest of the
/// market. Only invalid input shape is an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// The market itself is misconfigured: no YES token id to classify against.
    #[error("market has no YES token id")]
    MissingYesTokenId,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
