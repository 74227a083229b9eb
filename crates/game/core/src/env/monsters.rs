//! Monster archetypes and oracle interface.
//!
//! `MonsterTemplate` is the data-driven definition of a monster kind. Templates
//! are loaded from RON files and spawned into fresh [`Monster`] instances per
//! encounter; the template itself is never mutated.

use crate::state::{ItemHandle, Monster, WeaponHandle};
use crate::stats::{CoreStats, LifeMeter};

/// Base-stat definition used to instantiate monsters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    /// Definition identifier (e.g., "slime", "skeleton").
    pub id: String,
    pub name: String,
    /// Sprite identifier for the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: String,
    pub stats: CoreStats,
    pub max_life: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponHandle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: Vec<ItemHandle>,
}

impl MonsterTemplate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: CoreStats,
        max_life: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sprite: String::new(),
            stats,
            max_life,
            weapon: None,
            loot: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: WeaponHandle) -> Self {
        self.weapon = Some(weapon);
        self
    }

    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    #[must_use]
    pub fn with_loot(mut self, loot: Vec<ItemHandle>) -> Self {
        self.loot = loot;
        self
    }

    /// Spawns a fresh monster at full life.
    ///
    /// Every call copies the template, so instances never share life state.
    pub fn spawn(&self, name: impl Into<String>) -> Monster {
        Monster::new(name, self.stats, LifeMeter::full(self.max_life))
            .with_template(self.id.clone())
            .with_sprite(self.sprite.clone())
            .with_weapon(self.weapon)
            .with_loot(self.loot.clone())
    }
}

/// Oracle providing the monster template pool for the encounter factory.
pub trait MonsterOracle: Send + Sync {
    /// All templates, in catalog order.
    fn templates(&self) -> &[MonsterTemplate];
}

/// Template used for a fresh game's hero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub stats: CoreStats,
    pub max_life: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon: Option<WeaponHandle>,
}

impl Default for HeroTemplate {
    fn default() -> Self {
        Self {
            stats: CoreStats::new(10, 2, 3, 8, 1),
            max_life: 50,
            weapon: None,
        }
    }
}
