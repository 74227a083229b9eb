//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, encounter sequencing and repositories
//! so clients can bubble them up with consistent context.
use game_core::{EncounterError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load content: {0:#}")]
    Content(anyhow::Error),

    #[error(transparent)]
    Encounter(#[from] EncounterError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no saved hero in slot '{slot}'")]
    NoSavedHero { slot: String },

    #[error("hero has been defeated; start a new game")]
    HeroDefeated,
}

impl RuntimeError {
    /// Severity of the underlying failure, for logging and exit decisions.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Content(_) => ErrorSeverity::Fatal,
            Self::Encounter(err) => err.severity(),
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::NoSavedHero { .. } | Self::HeroDefeated => ErrorSeverity::Validation,
        }
    }
}
