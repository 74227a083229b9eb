//! Combat resolution system.
//!
//! Pure functions that turn one attack into a life change. All combat logic is
//! deterministic; the only side effect is the defender's life going down.
//!
//! # Core Functions
//!
//! - `resolve_attack`: guard against dead participants, compute and apply damage
//! - `raw_damage`: attack stat plus weapon bonus
//! - [`DefensePolicy`]: pluggable defense mitigation (`IgnoreDefense`, `SubtractDefense`)

pub mod damage;
pub mod result;

pub use damage::{DefensePolicy, DefenseRule, IgnoreDefense, SubtractDefense, raw_damage};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
