//! Repository contract for saving and loading the hero.

use game_core::Hero;

use super::Result;

/// Repository for hero persistence between encounters, keyed by save slot.
///
/// The on-disk format is left to implementations.
pub trait HeroRepository: Send + Sync {
    /// Save the hero, replacing any previous save in the slot
    fn save(&self, slot: &str, hero: &Hero) -> Result<()>;

    /// Load the hero saved in a slot
    fn load(&self, slot: &str) -> Result<Option<Hero>>;

    /// Check if a slot holds a hero
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot (no-op when empty)
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
