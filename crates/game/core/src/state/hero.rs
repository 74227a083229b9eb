use super::{CombatParticipant, WeaponHandle};
use crate::env::HeroTemplate;
use crate::stats::{CoreStats, LifeMeter};

/// The persistent player character.
///
/// Survives across encounters. After an encounter ends, its life and stats are
/// what the save subsystem needs to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    name: String,
    stats: CoreStats,
    life: LifeMeter,
    weapon: Option<WeaponHandle>,
}

impl Hero {
    /// Creates a hero at full life.
    pub fn new(name: impl Into<String>, stats: CoreStats, max_life: u32) -> Self {
        Self {
            name: name.into(),
            stats,
            life: LifeMeter::full(max_life),
            weapon: None,
        }
    }

    /// Creates a fresh hero for a new game.
    pub fn from_template(name: impl Into<String>, template: &HeroTemplate) -> Self {
        Self::new(name, template.stats, template.max_life).with_weapon(template.weapon)
    }

    /// Rebuilds a hero from persisted values; `life` is clamped on construction.
    pub fn restore(
        name: impl Into<String>,
        stats: CoreStats,
        life: LifeMeter,
        weapon: Option<WeaponHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            stats,
            life,
            weapon,
        }
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: Option<WeaponHandle>) -> Self {
        self.weapon = weapon;
        self
    }

    /// Swaps the equipped weapon, returning the previous handle if any.
    pub fn equip(&mut self, weapon: WeaponHandle) -> Option<WeaponHandle> {
        self.weapon.replace(weapon)
    }
}

impl CombatParticipant for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CoreStats {
        &self.stats
    }

    fn life(&self) -> LifeMeter {
        self.life
    }

    fn equipped_weapon(&self) -> Option<WeaponHandle> {
        self.weapon
    }

    fn apply_damage(&mut self, amount: u32) -> u32 {
        self.life.apply_damage(amount)
    }
}
