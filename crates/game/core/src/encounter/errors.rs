//! Error types for encounter setup and sequencing.

use super::{EncounterOutcome, EncounterPhase};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while building or driving an encounter.
///
/// Combat itself never errors; these cover preconditions and misuse of the
/// state machine's sequencing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("cannot start an encounter without monsters")]
    EmptyRoster,

    #[error("monster template catalog is empty")]
    EmptyTemplateCatalog,

    #[error("monster template '{template}' has no life")]
    LifelessTemplate { template: String },

    #[error("hero is already defeated")]
    HeroDefeated,

    #[error("roster is full (capacity {capacity})")]
    RosterFull { capacity: usize },

    #[error("invalid roster size range {min}..={max}")]
    InvalidRosterSize { min: usize, max: usize },

    #[error("no action expected while in phase {phase:?}")]
    ActionNotExpected { phase: EncounterPhase },

    #[error("encounter is waiting for an action")]
    AwaitingAction,

    #[error("encounter already finished with {outcome}")]
    AlreadyFinished { outcome: EncounterOutcome },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        use EncounterError::*;
        match self {
            EmptyTemplateCatalog | LifelessTemplate { .. } => ErrorSeverity::Fatal,
            EmptyRoster | HeroDefeated | InvalidRosterSize { .. } | AlreadyFinished { .. } => {
                ErrorSeverity::Validation
            }
            ActionNotExpected { .. } | AwaitingAction => ErrorSeverity::Recoverable,
            RosterFull { .. } => ErrorSeverity::Internal,
            Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use EncounterError::*;
        match self {
            EmptyRoster => "ENCOUNTER_EMPTY_ROSTER",
            EmptyTemplateCatalog => "ENCOUNTER_EMPTY_TEMPLATE_CATALOG",
            LifelessTemplate { .. } => "ENCOUNTER_LIFELESS_TEMPLATE",
            HeroDefeated => "ENCOUNTER_HERO_DEFEATED",
            RosterFull { .. } => "ENCOUNTER_ROSTER_FULL",
            InvalidRosterSize { .. } => "ENCOUNTER_INVALID_ROSTER_SIZE",
            ActionNotExpected { .. } => "ENCOUNTER_ACTION_NOT_EXPECTED",
            AwaitingAction => "ENCOUNTER_AWAITING_ACTION",
            AlreadyFinished { .. } => "ENCOUNTER_ALREADY_FINISHED",
            Oracle(err) => err.error_code(),
        }
    }
}
