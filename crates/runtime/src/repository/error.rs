//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by key-value store implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("key-value store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid key {0:?}: keys must be non-empty ASCII alphanumerics, '_', '-' or '.'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
