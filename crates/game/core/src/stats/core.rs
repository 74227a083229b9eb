//! Core stats shared by every combat participant.
//!
//! Core stats are static for the duration of an encounter: no buffs or debuffs
//! are modeled, so combat reads them directly without a derived layer.

/// The five attributes that define a participant in combat.
///
/// - **attack**: base damage before the weapon bonus
/// - **magic**: reserved for spell resolution
/// - **defense**: consumed by the configured [`crate::combat::DefensePolicy`]
/// - **speed**: reserved for turn ordering
/// - **level**: progression marker persisted with the hero
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub attack: u32,
    pub magic: u32,
    pub defense: u32,
    pub speed: u32,
    pub level: u32,
}

impl CoreStats {
    /// Create new core stats with specified values
    pub const fn new(attack: u32, magic: u32, defense: u32, speed: u32, level: u32) -> Self {
        Self {
            attack,
            magic,
            defense,
            speed,
            level,
        }
    }

    /// Returns a copy with a different attack value.
    #[must_use]
    pub const fn with_attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    /// Returns a copy with a different defense value.
    #[must_use]
    pub const fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }
}

impl Default for CoreStats {
    /// Level 1 with no offensive or defensive power.
    fn default() -> Self {
        Self::new(0, 0, 0, 0, 1)
    }
}
