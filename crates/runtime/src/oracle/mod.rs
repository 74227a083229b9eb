//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the session can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; the hero lives in the session
//! and its repository.
mod monsters;
mod weapons;

use game_content::ContentBundle;
use game_core::{Env, GameEnv, PcgRng};
use std::sync::Arc;

pub use monsters::MonsterOracleImpl;
pub use weapons::WeaponOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) monsters: Arc<MonsterOracleImpl>,
    pub(crate) weapons: Arc<WeaponOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(monsters: Arc<MonsterOracleImpl>, weapons: Arc<WeaponOracleImpl>) -> Self {
        Self {
            monsters,
            weapons,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds oracles from loaded content.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(MonsterOracleImpl::new(content.monsters.clone())),
            Arc::new(WeaponOracleImpl::from_definitions(content.weapons.clone())),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(self.monsters.as_ref(), self.weapons.as_ref(), &self.rng).into_game_env()
    }

    pub fn weapons(&self) -> &WeaponOracleImpl {
        &self.weapons
    }
}
