//! Traits describing read-only content.
//!
//! Oracles expose the monster template pool, the weapon catalog, and the
//! random source. The [`Env`] aggregate bundles them so encounter generation
//! and combat can reach everything they need without hard coupling to concrete
//! implementations.
mod error;
mod items;
mod monsters;
mod rng;

pub use error::OracleError;
pub use items::{WeaponDefinition, WeaponKind, WeaponOracle};
pub use monsters::{HeroTemplate, MonsterOracle, MonsterTemplate};
pub use rng::{EncounterSeed, PcgRng, RngOracle, RollContext, compute_seed};

/// Aggregates read-only oracles required by the encounter factory and combat.
pub struct Env<'a, M, W, R>
where
    M: MonsterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    monsters: Option<&'a M>,
    weapons: Option<&'a W>,
    rng: Option<&'a R>,
}

impl<M, W, R> Clone for Env<'_, M, W, R>
where
    M: MonsterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, W, R> Copy for Env<'_, M, W, R>
where
    M: MonsterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> =
    Env<'a, dyn MonsterOracle + 'a, dyn WeaponOracle + 'a, dyn RngOracle + 'a>;

impl<'a, M, W, R> Env<'a, M, W, R>
where
    M: MonsterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(monsters: Option<&'a M>, weapons: Option<&'a W>, rng: Option<&'a R>) -> Self {
        Self {
            monsters,
            weapons,
            rng,
        }
    }

    pub fn with_all(monsters: &'a M, weapons: &'a W, rng: &'a R) -> Self {
        Self::new(Some(monsters), Some(weapons), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            monsters: None,
            weapons: None,
            rng: None,
        }
    }

    pub fn monsters(&self) -> Result<&'a M, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    pub fn weapons(&self) -> Result<&'a W, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, M, W, R> Env<'a, M, W, R>
where
    M: MonsterOracle + 'a,
    W: WeaponOracle + 'a,
    R: RngOracle + 'a,
{
    /// Erases the concrete oracle types.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let monsters = self.monsters.map(|m| m as &'a (dyn MonsterOracle + 'a));
        let weapons = self.weapons.map(|w| w as &'a (dyn WeaponOracle + 'a));
        let rng = self.rng.map(|r| r as &'a (dyn RngOracle + 'a));
        Env::new(monsters, weapons, rng)
    }
}
