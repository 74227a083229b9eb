//! Encounter lifecycle: roster generation, the round state machine, and the
//! events it reports.
//!
//! An [`Encounter`] borrows the persistent hero and owns a [`Roster`](crate::state::Roster)
//! produced by the [`EncounterFactory`]. Every transition returns
//! [`EncounterEvent`]s in the order they happened.
mod action;
mod errors;
mod event;
mod factory;
mod machine;
mod phase;
mod targeting;

pub use action::{Acknowledge, HeroAction, TacticalEffect};
pub use errors::EncounterError;
pub use event::EncounterEvent;
pub use factory::EncounterFactory;
pub use machine::Encounter;
pub use phase::{EncounterOutcome, EncounterPhase};
pub use targeting::{ChosenTarget, FirstLiving, TargetSelector};
