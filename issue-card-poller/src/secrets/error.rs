//! Secret retrieval error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a secret.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The secret is not present in any searched location.
    #[error("secret '{name}' not found (searched {searched:?})")]
    NotFound { name: String, searched: Vec<PathBuf> },

    /// The secret exists but could not be read.
    #[error("Failed to read secret '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The secret is not valid UTF-8.
    #[error("secret '{name}' is not valid UTF-8")]
    InvalidUtf8 { name: String },
}
