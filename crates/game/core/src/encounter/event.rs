use super::{EncounterOutcome, HeroAction};
use crate::state::{ItemHandle, MonsterId};

/// Observable result of one encounter transition.
///
/// Events are returned in the order they happened; presentation layers narrate
/// them without inspecting encounter internals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterEvent {
    /// The hero attacked a monster.
    HeroHit {
        target: MonsterId,
        name: String,
        damage: u32,
        did_damage: bool,
    },
    /// A monster attacked the hero.
    MonsterHit {
        attacker: MonsterId,
        name: String,
        damage: u32,
        did_damage: bool,
    },
    /// A monster died and left the roster, dropping its loot.
    MonsterDied {
        monster: MonsterId,
        name: String,
        loot: Vec<ItemHandle>,
    },
    /// A non-attack action resolved through its tactical effect.
    ActionAcknowledged(HeroAction),
    /// The selected target was gone; the attack was skipped.
    TargetLost { target: Option<MonsterId> },
    Victory,
    Defeat,
    Fled,
    /// Round finished without a winner; back to action selection.
    Continuing { round: u32 },
}

impl EncounterEvent {
    pub const fn finished(outcome: EncounterOutcome) -> Self {
        match outcome {
            EncounterOutcome::Victory => Self::Victory,
            EncounterOutcome::Defeat => Self::Defeat,
            EncounterOutcome::Fled => Self::Fled,
        }
    }

    pub const fn outcome(&self) -> Option<EncounterOutcome> {
        match self {
            Self::Victory => Some(EncounterOutcome::Victory),
            Self::Defeat => Some(EncounterOutcome::Defeat),
            Self::Fled => Some(EncounterOutcome::Fled),
            _ => None,
        }
    }
}
