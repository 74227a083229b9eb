//! Participants and the encounter roster.
//!
//! Heroes and monsters are distinct value types sharing the
//! [`CombatParticipant`] capability. Weapons and loot are referenced by handle;
//! their definitions live in the content oracles.
mod common;
mod hero;
mod monster;
mod participant;
mod roster;

pub use common::{ItemHandle, MonsterId, WeaponHandle};
pub use hero::Hero;
pub use monster::Monster;
pub use participant::CombatParticipant;
pub use roster::Roster;
