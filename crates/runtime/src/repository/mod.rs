//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during gameplay, which here is the
//! hero saved between encounters. Static game content (monsters, weapons) is
//! handled by Oracles, not Repositories.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryHeroRepo;
pub use traits::HeroRepository;
