//! Core error types for sorting runs
//!
//! The engine itself is pure in-memory computation, so the taxonomy is narrow:
//! bad selections coming in from the outside, and I/O at the rendering edge.

use thiserror::Error;

/// Core error types for sorting runs
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Unknown list kind: {name}")]
    UnknownListKind { name: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SortError {
    /// Create a new unknown algorithm error
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Create a new unknown list kind error
    pub fn unknown_list_kind(name: impl Into<String>) -> Self {
        Self::UnknownListKind { name: name.into() }
    }
}

/// Result alias used across the crate
pub type Result<T, E = SortError> = std::result::Result<T, E>;
