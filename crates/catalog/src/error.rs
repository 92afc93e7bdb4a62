//! Error types for the catalog crate.
//!
//! Everything here is a configuration-time failure: a catalog or alias table
//! that cannot be constructed fails loudly before any request is served.
//! Per-request lookups never produce these errors.

use thiserror::Error;

/// Errors that can occur while building or loading catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file was not valid JSON or did not match the schema
    #[error("Failed to parse catalog file {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two genre sections share the same key (case-insensitive)
    #[error("Duplicate genre key: {key}")]
    DuplicateGenre { key: String },

    /// A genre key was empty or whitespace-only
    #[error("Empty genre key at position {index}")]
    EmptyGenreKey { index: usize },

    /// A recommendation entry violated a catalog invariant
    #[error("Invalid entry under {genre}: {reason}")]
    InvalidEntry { genre: String, reason: String },

    /// An alias rule violated a table invariant
    #[error("Invalid alias rule at position {index}: {reason}")]
    InvalidAliasRule { index: usize, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
