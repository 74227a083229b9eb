use game_core::EncounterOutcome;
use serde::{Deserialize, Serialize};

/// Session lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new hero was created from the starting template.
    HeroCreated { name: String, life: u32 },
    /// An existing hero was loaded from the repository.
    HeroLoaded { name: String, life: u32 },
    /// A roster was generated and combat begins.
    EncounterStarted { nonce: u64, monsters: Vec<String> },
    /// Combat finished and the hero was saved.
    EncounterEnded {
        nonce: u64,
        outcome: EncounterOutcome,
        rounds: u32,
        hero_life: u32,
    },
}
