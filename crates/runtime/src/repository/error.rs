//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("hero repository lock was poisoned")]
    LockPoisoned,

    #[error("invalid save slot name '{0}'")]
    InvalidSlot(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
