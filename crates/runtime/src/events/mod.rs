//! Topic-based event bus for runtime events.
//!
//! Encounter events produced by `game-core` and session lifecycle events are
//! published to separate topics; consumers subscribe only to what they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::SessionEvent;
