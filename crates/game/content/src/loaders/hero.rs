//! Starting hero loader.

use std::path::Path;

use game_core::HeroTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for the new-game hero template from RON files.
pub struct HeroLoader;

impl HeroLoader {
    pub fn load(path: &Path) -> LoadResult<HeroTemplate> {
        let content = read_file(path)?;
        let template: HeroTemplate = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero template RON: {}", e))?;

        if template.max_life == 0 {
            anyhow::bail!("Hero template has no life");
        }

        Ok(template)
    }
}
