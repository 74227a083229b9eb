//! Session orchestration around the deterministic encounter rules.
//!
//! This crate wires content oracles, the hero repository, and the topic event
//! bus into a [`GameSession`] that owns the persistent hero across encounters.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and the per-encounter driver
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, SessionEvent, Topic};
pub use oracle::{MonsterOracleImpl, OracleManager, WeaponOracleImpl};
pub use repository::{HeroRepository, InMemoryHeroRepo, RepositoryError};
pub use session::{EncounterDriver, GameSession};
