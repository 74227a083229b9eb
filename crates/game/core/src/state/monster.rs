use super::{CombatParticipant, ItemHandle, WeaponHandle};
use crate::stats::{CoreStats, LifeMeter};

/// A monster instance, created fresh for one encounter.
///
/// Usually spawned from a [`crate::env::MonsterTemplate`]; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    name: String,
    /// Definition id of the template this instance came from.
    template: String,
    sprite: String,
    stats: CoreStats,
    life: LifeMeter,
    weapon: Option<WeaponHandle>,
    /// Dropped on death, consumed by the inventory collaborator.
    loot: Vec<ItemHandle>,
}

impl Monster {
    pub fn new(name: impl Into<String>, stats: CoreStats, life: LifeMeter) -> Self {
        Self {
            name: name.into(),
            template: String::new(),
            sprite: String::new(),
            stats,
            life,
            weapon: None,
            loot: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: Option<WeaponHandle>) -> Self {
        self.weapon = weapon;
        self
    }

    #[must_use]
    pub fn with_loot(mut self, loot: Vec<ItemHandle>) -> Self {
        self.loot = loot;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    pub fn loot(&self) -> &[ItemHandle] {
        &self.loot
    }

    /// Consumes the monster, handing its loot to the caller.
    pub fn into_loot(self) -> Vec<ItemHandle> {
        self.loot
    }
}

impl CombatParticipant for Monster {
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
