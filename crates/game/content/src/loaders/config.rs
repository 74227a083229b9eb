//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]. The roster bounds are
    /// validated before returning.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;

        Ok(config)
    }
}
