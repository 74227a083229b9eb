//! In-memory HeroRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::Hero;

use super::{HeroRepository, RepositoryError, Result};

/// In-memory implementation of HeroRepository.
#[derive(Debug, Default)]
pub struct InMemoryHeroRepo {
    heroes: RwLock<HashMap<String, Hero>>,
}

impl InMemoryHeroRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeroRepository for InMemoryHeroRepo {
    fn save(&self, slot: &str, hero: &Hero) -> Result<()> {
        if slot.trim().is_empty() {
            return Err(RepositoryError::InvalidSlot(slot.to_owned()));
        }
        let mut heroes = self
            .heroes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        heroes.insert(slot.to_owned(), hero.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<Hero>> {
        let heroes = self
            .heroes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(heroes.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.heroes
            .read()
            .map(|heroes| heroes.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut heroes = self
            .heroes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        heroes.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let heroes = self
            .heroes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut slots: Vec<String> = heroes.keys().cloned().collect();
        slots.sort();
        Ok(slots)
    }
}
