//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::WeaponHandle;

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is fatal: no encounter can be generated or resolved
/// without content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MonsterOracle is not available in the environment.
    #[error("MonsterOracle not available")]
    MonstersNotAvailable,

    /// WeaponOracle is not available in the environment.
    #[error("WeaponOracle not available")]
    WeaponsNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// A template or participant references a weapon missing from the catalog.
    #[error("weapon definition {0} not found")]
    WeaponNotFound(WeaponHandle),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            MonstersNotAvailable | WeaponsNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,
            WeaponNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MonstersNotAvailable => "ORACLE_MONSTERS_NOT_AVAILABLE",
            WeaponsNotAvailable => "ORACLE_WEAPONS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
        }
    }
}
