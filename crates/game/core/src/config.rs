use crate::combat::DefenseRule;
use crate::encounter::EncounterError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Smallest roster the encounter factory may generate.
    pub roster_size_min: usize,
    /// Largest roster the encounter factory may generate (at most [`Self::MAX_ROSTER`]).
    pub roster_size_max: usize,
    /// How a defender's `defense` stat reduces incoming damage.
    pub defense: DefenseRule,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of a single encounter roster.
    pub const MAX_ROSTER: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROSTER_SIZE_MIN: usize = 1;
    pub const DEFAULT_ROSTER_SIZE_MAX: usize = 3;

    pub fn new() -> Self {
        Self {
            roster_size_min: Self::DEFAULT_ROSTER_SIZE_MIN,
            roster_size_max: Self::DEFAULT_ROSTER_SIZE_MAX,
            defense: DefenseRule::default(),
        }
    }

    pub fn with_defense(mut self, defense: DefenseRule) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_roster_size(mut self, min: usize, max: usize) -> Self {
        self.roster_size_min = min;
        self.roster_size_max = max;
        self
    }

    /// Checks that the roster bounds describe a non-empty range that fits a roster.
    pub fn validate(&self) -> Result<(), EncounterError> {
        let (min, max) = (self.roster_size_min, self.roster_size_max);
        if min == 0 || min > max || max > Self::MAX_ROSTER {
            return Err(EncounterError::InvalidRosterSize { min, max });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
