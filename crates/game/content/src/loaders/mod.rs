//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into game-core types; [`ContentFactory`]
//! ties them to a data directory and cross-checks the catalogs.

pub mod config;
pub mod factory;
pub mod hero;
pub mod monsters;
pub mod weapons;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use hero::HeroLoader;
pub use monsters::MonsterLoader;
pub use weapons::WeaponLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
