//! Stat model shared by heroes and monsters.
//!
//! - [`CoreStats`]: attack, magic, defense, speed, level (static per encounter)
//! - [`LifeMeter`]: current/maximum life with a single damage entry point

pub mod core;
pub mod resources;

pub use self::core::CoreStats;
pub use resources::LifeMeter;
