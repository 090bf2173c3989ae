//! Error types for the teksti library.

use thiserror::Error;

/// Result type alias for teksti operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while mapping an upstream document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be deserialized as JSON at all.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The mandatory `teletext.page` nesting is absent from the document.
    ///
    /// Missing optional fields never produce this error; only the
    /// structurally required nesting does.
    #[error("upstream document is missing the teletext page")]
    MissingPage,
}
