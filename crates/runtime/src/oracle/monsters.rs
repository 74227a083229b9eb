//! [`game_core::MonsterOracle`] backed by a template list.
use game_core::{MonsterOracle, MonsterTemplate};

/// MonsterOracle implementation with static templates in catalog order
#[derive(Debug, Default)]
pub struct MonsterOracleImpl {
    templates: Vec<MonsterTemplate>,
}

impl MonsterOracleImpl {
    pub fn new(templates: Vec<MonsterTemplate>) -> Self {
        Self { templates }
    }
}

impl MonsterOracle for MonsterOracleImpl {
    fn templates(&self) -> &[MonsterTemplate] {
        &self.templates
    }
}
