//! Topic-based event bus implementation.

use game_core::EncounterEvent;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::SessionEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Combat transitions (hits, deaths, outcomes)
    Encounter,
    /// Hero lifecycle and encounter boundaries
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Encounter { nonce: u64, event: EncounterEvent },
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Encounter { .. } => Topic::Encounter,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events sent while a topic
/// has no subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

struct Channels {
    encounter: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                encounter: broadcast::channel(capacity).0,
                session: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Encounter => &self.channels.encounter,
            Topic::Session => &self.channels.session,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut encounter = bus.subscribe(Topic::Encounter);
        let mut session = bus.subscribe(Topic::Session);

        bus.publish(Event::Encounter {
            nonce: 0,
            event: EncounterEvent::Victory,
        });

        assert!(matches!(
            encounter.try_recv(),
            Ok(Event::Encounter {
                event: EncounterEvent::Victory,
                ..
            })
        ));
        assert!(session.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = EventBus::new();
        bus.publish(Event::Encounter {
            nonce: 1,
            event: EncounterEvent::Fled,
        });

        let mut late = bus.subscribe(Topic::Encounter);
        assert!(late.try_recv().is_err());
    }
}
