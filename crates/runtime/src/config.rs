//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_content::ContentFactory;

/// Settings for a game session that do not belong to the rules themselves.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml`, `monsters.ron`, `weapons.ron`, `hero.ron`.
    pub data_dir: PathBuf,
    /// Fixed for a session; every encounter roster derives from it.
    pub game_seed: u64,
    /// Broadcast capacity per event bus topic.
    pub event_capacity: usize,
    /// Repository slot the hero is saved under.
    pub save_slot: String,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_CAPACITY: usize = 100;
    pub const DEFAULT_SAVE_SLOT: &'static str = "default";

    /// Construct configuration from process environment variables.
    ///
    /// - `DUNGEON_DATA_DIR`
    /// - `DUNGEON_SEED` (random when unset or unparsable)
    /// - `DUNGEON_EVENT_CAPACITY`
    /// - `DUNGEON_SAVE_SLOT`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(seed) = read_env::<u64>("DUNGEON_SEED") {
            config.game_seed = seed;
        }

        if let Some(capacity) = read_env::<usize>("DUNGEON_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        if let Some(slot) = read_env::<String>("DUNGEON_SAVE_SLOT")
            && !slot.trim().is_empty()
        {
            config.save_slot = slot;
        }

        config
    }

    #[must_use]
    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn content(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: ContentFactory::bundled().data_dir().to_path_buf(),
            game_seed: rand::random(),
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
            save_slot: Self::DEFAULT_SAVE_SLOT.to_owned(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
