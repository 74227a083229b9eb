//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Monster templates (data-driven via RON)
//! - Weapon catalog (data-driven via RON)
//! - Starting hero (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in encounter state.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, HeroLoader, MonsterLoader, WeaponLoader,
};
