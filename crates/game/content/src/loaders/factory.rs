//! Content factory for building catalogs from data files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use game_core::{GameConfig, HeroTemplate, MonsterTemplate, WeaponDefinition};

use crate::loaders::{ConfigLoader, HeroLoader, LoadResult, MonsterLoader, WeaponLoader};

/// Everything a session needs, loaded and cross-checked.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub hero: HeroTemplate,
    pub monsters: Vec<MonsterTemplate>,
    pub weapons: Vec<WeaponDefinition>,
}

impl ContentBundle {
    /// Checks that every weapon referenced by a template exists in the catalog.
    pub fn validate(&self) -> LoadResult<()> {
        let known: HashSet<_> = self.weapons.iter().map(|weapon| weapon.handle).collect();

        for template in &self.monsters {
            if let Some(handle) = template.weapon
                && !known.contains(&handle)
            {
                anyhow::bail!(
                    "Monster template '{}' references unknown weapon {}",
                    template.id,
                    handle
                );
            }
        }
        if let Some(handle) = self.hero.weapon
            && !known.contains(&handle)
        {
            anyhow::bail!("Hero template references unknown weapon {}", handle);
        }

        Ok(())
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── hero.ron      (optional, defaults to HeroTemplate::default())
/// ├── monsters.ron
/// └── weapons.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<WeaponDefinition>> {
        let path = self.data_dir.join("weapons.ron");
        WeaponLoader::load(&path)
    }

    /// Load the monster template pool from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterTemplate>> {
        let path = self.data_dir.join("monsters.ron");
        MonsterLoader::load(&path)
    }

    /// Load the new-game hero from `hero.ron`, or the default template when
    /// the file is absent.
    pub fn load_hero(&self) -> LoadResult<HeroTemplate> {
        let path = self.data_dir.join("hero.ron");
        if !path.exists() {
            return Ok(HeroTemplate::default());
        }
        HeroLoader::load(&path)
    }

    /// Load every catalog and validate cross references.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            hero: self.load_hero()?,
            monsters: self.load_monsters()?,
            weapons: self.load_weapons()?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
