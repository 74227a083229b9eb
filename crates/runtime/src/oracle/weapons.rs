//! Minimal [`game_core::WeaponOracle`] backed by an in-memory map.
use game_core::{WeaponDefinition, WeaponHandle, WeaponOracle};
use std::collections::HashMap;

/// WeaponOracle implementation with static weapon definitions
#[derive(Debug, Default)]
pub struct WeaponOracleImpl {
    definitions: HashMap<WeaponHandle, WeaponDefinition>,
}

impl WeaponOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = WeaponDefinition>) -> Self {
        let mut oracle = Self::new();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add a weapon definition, replacing any previous one with the same handle
    pub fn add_definition(&mut self, def: WeaponDefinition) {
        self.definitions.insert(def.handle, def);
    }
}

impl WeaponOracle for WeaponOracleImpl {
    fn weapon(&self, handle: WeaponHandle) -> Option<&WeaponDefinition> {
        self.definitions.get(&handle)
    }
}
