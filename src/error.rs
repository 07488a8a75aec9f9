//! Error types for giftr
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using GiftrError
pub type Result<T> = std::result::Result<T, GiftrError>;

/// Unified error type for giftr operations
#[derive(Debug, Error)]
pub enum GiftrError {
    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    /// The durable backend failed to read or write the snapshot.
    /// Mutations reporting this have left both the in-memory and the
    /// durable state unchanged.
    #[error("persistence error: {0}")]
    Persistence(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    /// Snapshot encode/decode failed. Same no-partial-state guarantee
    /// as [`GiftrError::Persistence`].
    #[error("snapshot serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    /// An operation referenced a person id that does not exist, where
    /// absence is not valid input (`add_idea`). Deletions treat absence
    /// as a successful no-op instead.
    #[error("person not found: {0}")]
    PersonNotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GiftrError {
    fn from(err: serde_json::Error) -> Self {
        GiftrError::Serialization(err.to_string())
    }
}
