//! Client configuration loaded from the environment.
use std::env;

/// Settings for the headless client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub hero_name: String,
    /// Encounters to play before exiting (stops earlier on defeat).
    pub auto_encounters: u32,
    /// Flee once hero life drops to this percentage or below.
    pub flee_below_percent: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hero_name: "Hero".to_owned(),
            auto_encounters: 3,
            flee_below_percent: 20,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DUNGEON_HERO_NAME`
    /// - `DUNGEON_AUTO_ENCOUNTERS`
    /// - `DUNGEON_FLEE_BELOW`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(name) = read_env::<String>("DUNGEON_HERO_NAME")
            && !name.trim().is_empty()
        {
            config.hero_name = name;
        }

        if let Some(count) = read_env::<u32>("DUNGEON_AUTO_ENCOUNTERS") {
            config.auto_encounters = count;
        }

        if let Some(percent) = read_env::<u32>("DUNGEON_FLEE_BELOW") {
            config.flee_below_percent = percent.min(100);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
