//! Monster template loader.

use std::path::Path;

use game_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for monster templates from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load the monster template pool from a RON file.
    ///
    /// An empty pool is rejected; the encounter factory cannot draw from it.
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: MonsterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        if catalog.monsters.is_empty() {
            anyhow::bail!("Monster catalog is empty");
        }
        for template in &catalog.monsters {
            if template.max_life == 0 {
                anyhow::bail!("Monster template '{}' has no life", template.id);
            }
        }

        Ok(catalog.monsters)
    }
}
