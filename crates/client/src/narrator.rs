//! Turns runtime events into log lines for the terminal.
use game_core::{EncounterEvent, EncounterOutcome};
use runtime::{Event, EventBus, SessionEvent, Topic};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Formats one event, or `None` for events that are not shown.
pub fn describe(event: &Event) -> Option<String> {
    match event {
        Event::Encounter { event, .. } => describe_encounter(event),
        Event::Session(event) => Some(describe_session(event)),
    }
}

fn describe_encounter(event: &EncounterEvent) -> Option<String> {
    let text = match event {
        EncounterEvent::HeroHit {
            name,
            damage,
            did_damage: true,
            ..
        } => format!("You hit {name} for {damage}."),
        EncounterEvent::HeroHit { name, .. } => format!("Your attack glances off {name}."),
        EncounterEvent::MonsterHit {
            name,
            damage,
            did_damage: true,
            ..
        } => format!("{name} hits you for {damage}."),
        EncounterEvent::MonsterHit { name, .. } => format!("{name} misses."),
        EncounterEvent::MonsterDied { name, loot, .. } if loot.is_empty() => {
            format!("{name} dies.")
        }
        EncounterEvent::MonsterDied { name, loot, .. } => {
            format!("{name} dies and drops {} item(s).", loot.len())
        }
        EncounterEvent::ActionAcknowledged(action) => format!("{action}: done."),
        EncounterEvent::TargetLost { .. } => "Your target is gone.".to_owned(),
        EncounterEvent::Victory => "Victory!".to_owned(),
        EncounterEvent::Defeat => "You have been defeated.".to_owned(),
        EncounterEvent::Fled => "You escaped.".to_owned(),
        EncounterEvent::Continuing { .. } => return None,
    };
    Some(text)
}

fn describe_session(event: &SessionEvent) -> String {
    match event {
        SessionEvent::HeroCreated { name, life } => format!("{name} sets out with {life} life."),
        SessionEvent::HeroLoaded { name, life } => format!("{name} returns with {life} life."),
        SessionEvent::EncounterStarted { nonce, monsters } => {
            format!("Encounter {}: {}", nonce + 1, monsters.join(", "))
        }
        SessionEvent::EncounterEnded {
            outcome,
            rounds,
            hero_life,
            ..
        } => {
            let verdict = match outcome {
                EncounterOutcome::Victory => "won",
                EncounterOutcome::Defeat => "lost",
                EncounterOutcome::Fled => "fled",
            };
            format!("Encounter {verdict} after {rounds} round(s); {hero_life} life left.")
        }
    }
}

/// Prints every event until the bus is dropped.
pub fn spawn(bus: &EventBus) -> JoinHandle<()> {
    let mut encounter = bus.subscribe(Topic::Encounter);
    let mut session = bus.subscribe(Topic::Session);

    tokio::spawn(async move {
        let (mut encounter_open, mut session_open) = (true, true);
        while encounter_open || session_open {
            tokio::select! {
                received = encounter.recv(), if encounter_open => {
                    encounter_open = narrate(received);
                }
                received = session.recv(), if session_open => {
                    session_open = narrate(received);
                }
            }
        }
    })
}

/// Returns false once the channel is closed.
fn narrate(received: Result<Event, RecvError>) -> bool {
    match received {
        Ok(event) => {
            if let Some(line) = describe(&event) {
                println!("{line}");
            }
            true
        }
        Err(RecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "narrator lagged behind the event bus");
            true
        }
        Err(RecvError::Closed) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{HeroAction, ItemHandle, MonsterId};

    fn encounter(event: EncounterEvent) -> Event {
        Event::Encounter { nonce: 0, event }
    }

    #[test]
    fn describes_hits_and_deaths() {
        let hit = encounter(EncounterEvent::HeroHit {
            target: MonsterId(0),
            name: "Monstruo 1".into(),
            damage: 12,
            did_damage: true,
        });
        assert_eq!(describe(&hit).unwrap(), "You hit Monstruo 1 for 12.");

        let died = encounter(EncounterEvent::MonsterDied {
            monster: MonsterId(0),
            name: "Slime 2".into(),
            loot: vec![ItemHandle(1)],
        });
        assert_eq!(describe(&died).unwrap(), "Slime 2 dies and drops 1 item(s).");
    }

    #[test]
    fn hides_round_markers() {
        assert!(describe(&encounter(EncounterEvent::Continuing { round: 2 })).is_none());
        assert_eq!(
            describe(&encounter(EncounterEvent::ActionAcknowledged(HeroAction::Defend))).unwrap(),
            "Defend: done."
        );
    }

    #[test]
    fn describes_session_boundaries() {
        let started = Event::Session(SessionEvent::EncounterStarted {
            nonce: 0,
            monsters: vec!["Monstruo 1".into(), "Slime 2".into()],
        });
        assert_eq!(describe(&started).unwrap(), "Encounter 1: Monstruo 1, Slime 2");
    }
}
