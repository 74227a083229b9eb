//! Game session: the persistent hero and the encounters it fights.
//!
//! [`GameSession`] owns the hero between encounters. Each call to
//! [`GameSession::start_encounter`] generates a roster and hands out an
//! [`EncounterDriver`] that mutably borrows the hero until combat ends, so
//! only one encounter can be in flight at a time.

use std::sync::Arc;

use game_content::ContentBundle;
use game_core::{
    CombatParticipant, Encounter, EncounterEvent, EncounterFactory, EncounterOutcome,
    EncounterSeed, GameConfig, GameError, Hero, HeroAction, TargetSelector,
};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent};
use crate::oracle::OracleManager;
use crate::repository::HeroRepository;

/// Owns the hero, content oracles and event bus for one play session.
pub struct GameSession {
    hero: Hero,
    oracles: OracleManager,
    game_config: GameConfig,
    seed: EncounterSeed,
    slot: String,
    bus: EventBus,
    repo: Arc<dyn HeroRepository>,
}

impl GameSession {
    /// Loads and validates content from the configured data directory.
    pub fn load_content(config: &RuntimeConfig) -> Result<ContentBundle> {
        config.content().load_all().map_err(RuntimeError::Content)
    }

    /// Starts a new game with a fresh hero and saves it immediately.
    pub fn new_game(
        name: impl Into<String>,
        content: &ContentBundle,
        config: &RuntimeConfig,
        repo: Arc<dyn HeroRepository>,
    ) -> Result<Self> {
        let hero = Hero::from_template(name, &content.hero);
        let session = Self::with_hero(hero, content, config, repo)?;
        session.repo.save(&session.slot, &session.hero)?;
        info!(hero = session.hero.name(), slot = %session.slot, "new game");

        session.publish(Event::Session(SessionEvent::HeroCreated {
            name: session.hero.name().to_owned(),
            life: session.hero.life().current(),
        }));
        Ok(session)
    }

    /// Resumes the hero saved in the configured slot.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::NoSavedHero`] when the slot is empty.
    pub fn continue_game(
        content: &ContentBundle,
        config: &RuntimeConfig,
        repo: Arc<dyn HeroRepository>,
    ) -> Result<Self> {
        let hero = repo
            .load(&config.save_slot)?
            .ok_or_else(|| RuntimeError::NoSavedHero {
                slot: config.save_slot.clone(),
            })?;
        info!(
            hero = hero.name(),
            life = hero.life().current(),
            slot = %config.save_slot,
            "continuing game"
        );

        let session = Self::with_hero(hero, content, config, repo)?;
        session.publish(Event::Session(SessionEvent::HeroLoaded {
            name: session.hero.name().to_owned(),
            life: session.hero.life().current(),
        }));
        Ok(session)
    }

    fn with_hero(
        hero: Hero,
        content: &ContentBundle,
        config: &RuntimeConfig,
        repo: Arc<dyn HeroRepository>,
    ) -> Result<Self> {
        content.config.validate()?;
        Ok(Self {
            hero,
            oracles: OracleManager::from_content(content),
            game_config: content.config.clone(),
            seed: EncounterSeed::new(config.game_seed, 0),
            slot: config.save_slot.clone(),
            bus: EventBus::with_capacity(config.event_capacity),
            repo,
        })
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Number of encounters started so far.
    pub fn encounters_started(&self) -> u64 {
        self.seed.nonce
    }

    /// Generates a roster and starts combat against it.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::HeroDefeated`] once the hero has died, or any factory
    /// error (empty catalog, unknown weapon, bad roster bounds).
    pub fn start_encounter(&mut self) -> Result<EncounterDriver<'_>> {
        if self.hero.is_dead() {
            return Err(RuntimeError::HeroDefeated);
        }

        let nonce = self.seed.nonce;
        let roster =
            EncounterFactory::new(self.oracles.as_game_env(), &self.game_config).build(self.seed)?;
        self.seed = self.seed.next();

        let monsters: Vec<String> = roster
            .iter()
            .map(|(_, monster)| monster.name().to_owned())
            .collect();
        info!(nonce, monsters = ?monsters, "encounter started");
        self.bus
            .publish(Event::Session(SessionEvent::EncounterStarted { nonce, monsters }));

        let encounter = Encounter::new(&mut self.hero, roster, self.oracles.weapons())?
            .with_config(&self.game_config);

        Ok(EncounterDriver {
            encounter,
            nonce,
            bus: &self.bus,
            repo: self.repo.as_ref(),
            slot: &self.slot,
        })
    }

    fn publish(&self, event: Event) {
        self.bus.publish(event);
    }
}

/// Drives one encounter and reports everything that happens on the bus.
///
/// When the encounter reaches a terminal outcome the hero is saved and a
/// [`SessionEvent::EncounterEnded`] is published.
pub struct EncounterDriver<'s> {
    encounter: Encounter<'s>,
    nonce: u64,
    bus: &'s EventBus,
    repo: &'s dyn HeroRepository,
    slot: &'s str,
}

impl<'s> EncounterDriver<'s> {
    pub fn encounter(&self) -> &Encounter<'s> {
        &self.encounter
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        self.encounter.outcome()
    }

    /// Replaces the target selector for the following Battle actions.
    pub fn set_targeting(&mut self, selector: impl TargetSelector + 'static) {
        self.encounter.set_targeting(selector);
    }

    /// Plays one round with the given action.
    pub fn submit(&mut self, action: HeroAction) -> Result<Vec<EncounterEvent>> {
        debug!(nonce = self.nonce, round = self.encounter.round(), %action, "hero action");
        let events = self.encounter.submit(action).inspect_err(|err| {
            warn!(
                nonce = self.nonce,
                code = err.error_code(),
                severity = ?err.severity(),
                %err,
                "action rejected"
            );
        })?;
        self.dispatch(&events)?;
        Ok(events)
    }

    /// Leaves the encounter; counts as fleeing.
    pub fn abandon(&mut self) -> Result<Vec<EncounterEvent>> {
        let events = self.encounter.abandon();
        self.dispatch(&events)?;
        Ok(events)
    }

    fn dispatch(&self, events: &[EncounterEvent]) -> Result<()> {
        for event in events {
            match event {
                EncounterEvent::TargetLost { target } => {
                    warn!(nonce = self.nonce, ?target, "attack target no longer available");
                }
                _ => debug!(nonce = self.nonce, ?event, "encounter event"),
            }
            self.bus.publish(Event::Encounter {
                nonce: self.nonce,
                event: event.clone(),
            });
        }

        if let Some(outcome) = events.iter().find_map(EncounterEvent::outcome) {
            self.finish(outcome)?;
        }
        Ok(())
    }

    /// Saves the hero and announces the end of the encounter.
    ///
    /// `EncounterEnded` is published even when the save fails; the save error
    /// is returned afterwards.
    fn finish(&self, outcome: EncounterOutcome) -> Result<()> {
        let hero = self.encounter.hero();
        let saved = self.repo.save(self.slot, hero);
        if let Err(err) = &saved {
            warn!(nonce = self.nonce, slot = self.slot, %err, "failed to save hero");
        }

        let rounds = self.encounter.round();
        let hero_life = hero.life().current();
        info!(
            nonce = self.nonce,
            %outcome,
            rounds,
            hero_life,
            slot = self.slot,
            saved = saved.is_ok(),
            "encounter ended"
        );
        self.bus
            .publish(Event::Session(SessionEvent::EncounterEnded {
                nonce: self.nonce,
                outcome,
                rounds,
                hero_life,
            }));
        saved.map_err(RuntimeError::from)
    }
}
