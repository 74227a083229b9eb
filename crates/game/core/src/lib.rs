//! Deterministic combat rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (stats, combat resolution, the
//! encounter state machine) and exposes pure APIs that can be reused by the
//! runtime and offline tools. It performs no I/O; content and randomness are
//! injected through the oracles in [`env`].
pub mod combat;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use combat::{
    AttackOutcome, AttackResult, DefensePolicy, DefenseRule, IgnoreDefense, SubtractDefense,
    raw_damage, resolve_attack,
};
pub use config::GameConfig;
pub use encounter::{
    Acknowledge, ChosenTarget, Encounter, EncounterError, EncounterEvent, EncounterFactory,
    EncounterOutcome, EncounterPhase, FirstLiving, HeroAction, TacticalEffect, TargetSelector,
};
pub use env::{
    EncounterSeed, Env, GameEnv, HeroTemplate, MonsterOracle, MonsterTemplate, OracleError,
    PcgRng, RngOracle, RollContext, WeaponDefinition, WeaponKind, WeaponOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{CombatParticipant, Hero, ItemHandle, Monster, MonsterId, Roster, WeaponHandle};
pub use stats::{CoreStats, LifeMeter};
