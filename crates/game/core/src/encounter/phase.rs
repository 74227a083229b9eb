use super::HeroAction;

/// Where an encounter currently is.
///
/// ```text
/// SelectingAction → HeroActing → HeroActionResolved → MonsterPhase ─┐
///        ↑                 │                                        │
///        └──── Continuing ─┼────────────────────────────────────────┘
///                          └→ Finished(Victory | Defeat | Fled)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterPhase {
    /// Waiting for the hero's action.
    SelectingAction,
    /// An action was chosen and is about to resolve.
    HeroActing(HeroAction),
    /// Hero action applied, monsters still standing.
    HeroActionResolved,
    /// Monsters counter-attack in roster order.
    MonsterPhase,
    Finished(EncounterOutcome),
}

impl EncounterPhase {
    /// True for the transient phases between an action and the next selection.
    pub const fn is_resolving(&self) -> bool {
        matches!(
            self,
            Self::HeroActing(_) | Self::HeroActionResolved | Self::MonsterPhase
        )
    }

    pub const fn outcome(&self) -> Option<EncounterOutcome> {
        match self {
            Self::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    /// Every monster died.
    Victory,
    /// The hero died during the monster phase.
    Defeat,
    /// The hero fled or the encounter was abandoned. No reward.
    Fled,
}
