//! Error types for pokeclient
//!
//! Provides a unified error type for all operations.

use std::str::Utf8Error;
use thiserror::Error;

/// Result type alias using PokeError
pub type Result<T> = std::result::Result<T, PokeError>;

/// Unified error type for pokeclient operations
#[derive(Debug, Error)]
pub enum PokeError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Name too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Empty entity name")]
    EmptyName,

    // -------------------------------------------------------------------------
    // Response Errors
    // -------------------------------------------------------------------------
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid UTF-8 in segment at byte {segment}: {source}")]
    Decode {
        /// Offset of the segment's first byte in the payload
        segment: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("No reply for '{name}' within {timeout_ms} ms")]
    Timeout { name: String, timeout_ms: u64 },

    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PokeError {
    /// Whether this error only affects the current request.
    ///
    /// Skippable errors drop the entity and let the run continue; anything
    /// else aborts the run.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            PokeError::NameTooLong { .. }
                | PokeError::EmptyName
                | PokeError::MalformedResponse(_)
                | PokeError::Decode { .. }
                | PokeError::Timeout { .. }
        )
    }
}
