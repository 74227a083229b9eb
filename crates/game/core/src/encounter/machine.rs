//! Round-based encounter state machine.

use super::{
    Acknowledge, EncounterError, EncounterEvent, EncounterOutcome, EncounterPhase, FirstLiving,
    HeroAction, TacticalEffect, TargetSelector,
};
use crate::combat::{DefensePolicy, DefenseRule, resolve_attack};
use crate::config::GameConfig;
use crate::env::WeaponOracle;
use crate::state::{CombatParticipant, Hero, Roster};

/// One hero against a roster of monsters.
///
/// The encounter borrows the hero mutably for its whole lifetime, so the hero's
/// life after the encounter is exactly what combat left behind. The roster is
/// owned and discarded with the encounter.
///
/// Each round runs hero action, then every surviving monster in roster order.
/// Callers either drive single transitions with [`Encounter::choose`] and
/// [`Encounter::advance`], or a whole round with [`Encounter::submit`].
pub struct Encounter<'a> {
    hero: &'a mut Hero,
    roster: Roster,
    weapons: &'a (dyn WeaponOracle + 'a),
    defense: Box<dyn DefensePolicy + 'a>,
    targeting: Box<dyn TargetSelector + 'a>,
    item_effect: Box<dyn TacticalEffect + 'a>,
    defend_effect: Box<dyn TacticalEffect + 'a>,
    phase: EncounterPhase,
    round: u32,
}

impl<'a> Encounter<'a> {
    /// Starts an encounter in [`EncounterPhase::SelectingAction`], round 1.
    ///
    /// Monsters that are already dead are dropped from the roster first, so
    /// every member is alive when the first action is chosen.
    ///
    /// # Errors
    ///
    /// [`EncounterError::EmptyRoster`] without living monsters,
    /// [`EncounterError::HeroDefeated`] if the hero is already dead.
    pub fn new(
        hero: &'a mut Hero,
        mut roster: Roster,
        weapons: &'a (dyn WeaponOracle + 'a),
    ) -> Result<Self, EncounterError> {
        roster.prune_dead();
        if roster.is_empty() {
            return Err(EncounterError::EmptyRoster);
        }
        if hero.is_dead() {
            return Err(EncounterError::HeroDefeated);
        }

        Ok(Self {
            hero,
            roster,
            weapons,
            defense: Box::new(DefenseRule::default()),
            targeting: Box::new(FirstLiving),
            item_effect: Box::new(Acknowledge),
            defend_effect: Box::new(Acknowledge),
            phase: EncounterPhase::SelectingAction,
            round: 1,
        })
    }

    /// Applies the rules from a game configuration.
    #[must_use]
    pub fn with_config(mut self, config: &GameConfig) -> Self {
        self.defense = Box::new(config.defense);
        self
    }

    #[must_use]
    pub fn with_defense(mut self, policy: impl DefensePolicy + 'a) -> Self {
        self.defense = Box::new(policy);
        self
    }

    #[must_use]
    pub fn with_targeting(mut self, selector: impl TargetSelector + 'a) -> Self {
        self.targeting = Box::new(selector);
        self
    }

    #[must_use]
    pub fn with_item_effect(mut self, effect: impl TacticalEffect + 'a) -> Self {
        self.item_effect = Box::new(effect);
        self
    }

    #[must_use]
    pub fn with_defend_effect(mut self, effect: impl TacticalEffect + 'a) -> Self {
        self.defend_effect = Box::new(effect);
        self
    }

    /// Replaces the target selector between rounds.
    pub fn set_targeting(&mut self, selector: impl TargetSelector + 'a) {
        self.targeting = Box::new(selector);
    }

    pub fn hero(&self) -> &Hero {
        self.hero
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        self.phase.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Records the hero's action for this round.
    ///
    /// [`HeroAction::Flee`] ends the encounter immediately; any other action
    /// moves to [`EncounterPhase::HeroActing`] and waits for [`Self::advance`].
    pub fn choose(&mut self, action: HeroAction) -> Result<Vec<EncounterEvent>, EncounterError> {
        match self.phase {
            EncounterPhase::SelectingAction => {}
            EncounterPhase::Finished(outcome) => {
                return Err(EncounterError::AlreadyFinished { outcome });
            }
            phase => return Err(EncounterError::ActionNotExpected { phase }),
        }

        let mut events = Vec::new();
        if action == HeroAction::Flee {
            self.finish(EncounterOutcome::Fled, &mut events);
        } else {
            self.phase = EncounterPhase::HeroActing(action);
        }
        Ok(events)
    }

    /// Runs the next automatic transition.
    pub fn advance(&mut self) -> Result<Vec<EncounterEvent>, EncounterError> {
        let mut events = Vec::new();
        match self.phase {
            EncounterPhase::SelectingAction => return Err(EncounterError::AwaitingAction),
            EncounterPhase::Finished(outcome) => {
                return Err(EncounterError::AlreadyFinished { outcome });
            }
            EncounterPhase::HeroActing(action) => self.resolve_hero_action(action, &mut events),
            EncounterPhase::HeroActionResolved => {
                if self.roster.is_empty() {
                    self.finish(EncounterOutcome::Victory, &mut events);
                } else {
                    self.phase = EncounterPhase::MonsterPhase;
                }
            }
            EncounterPhase::MonsterPhase => self.resolve_monster_phase(&mut events),
        }
        Ok(events)
    }

    /// Chooses an action and resolves the round until the next selection or
    /// the end of the encounter.
    pub fn submit(&mut self, action: HeroAction) -> Result<Vec<EncounterEvent>, EncounterError> {
        let mut events = self.choose(action)?;
        while self.phase.is_resolving() {
            events.extend(self.advance()?);
        }
        Ok(events)
    }

    /// Leaves the encounter from any non-terminal phase.
    ///
    /// Pending monster attacks are discarded. Returns no events if the
    /// encounter already finished.
    pub fn abandon(&mut self) -> Vec<EncounterEvent> {
        let mut events = Vec::new();
        if !self.is_finished() {
            self.finish(EncounterOutcome::Fled, &mut events);
        }
        events
    }

    fn resolve_hero_action(&mut self, action: HeroAction, events: &mut Vec<EncounterEvent>) {
        match action {
            HeroAction::Battle => self.resolve_battle(events),
            HeroAction::Item => {
                self.item_effect.apply(self.hero, &self.roster);
                events.push(EncounterEvent::ActionAcknowledged(action));
            }
            HeroAction::Defend => {
                self.defend_effect.apply(self.hero, &self.roster);
                events.push(EncounterEvent::ActionAcknowledged(action));
            }
            HeroAction::Flee => {
                self.finish(EncounterOutcome::Fled, events);
                return;
            }
        }

        self.prune_dead(events);
        if self.roster.is_empty() {
            self.finish(EncounterOutcome::Victory, events);
        } else {
            self.phase = EncounterPhase::HeroActionResolved;
        }
    }

    fn resolve_battle(&mut self, events: &mut Vec<EncounterEvent>) {
        let Some(target) = self.targeting.select(&self.roster) else {
            events.push(EncounterEvent::TargetLost { target: None });
            return;
        };
        // A stale or dead target forfeits the attack.
        let Some(monster) = self.roster.living_mut(target) else {
            events.push(EncounterEvent::TargetLost {
                target: Some(target),
            });
            return;
        };

        let result = resolve_attack(&*self.hero, monster, self.weapons, &*self.defense);
        events.push(EncounterEvent::HeroHit {
            target,
            name: monster.name().to_owned(),
            damage: result.damage,
            did_damage: result.did_damage(),
        });
    }

    fn resolve_monster_phase(&mut self, events: &mut Vec<EncounterEvent>) {
        for id in self.roster.ids() {
            let Some(monster) = self.roster.get(id) else {
                continue;
            };

            let result = resolve_attack(monster, &mut *self.hero, self.weapons, &*self.defense);
            events.push(EncounterEvent::MonsterHit {
                attacker: id,
                name: monster.name().to_owned(),
                damage: result.damage,
                did_damage: result.did_damage(),
            });

            if self.hero.is_dead() {
                self.finish(EncounterOutcome::Defeat, events);
                return;
            }
        }

        self.prune_dead(events);
        if self.roster.is_empty() {
            self.finish(EncounterOutcome::Victory, events);
            return;
        }

        events.push(EncounterEvent::Continuing { round: self.round });
        self.round += 1;
        self.phase = EncounterPhase::SelectingAction;
    }

    fn prune_dead(&mut self, events: &mut Vec<EncounterEvent>) {
        for (id, monster) in self.roster.prune_dead() {
            let name = monster.name().to_owned();
            events.push(EncounterEvent::MonsterDied {
                monster: id,
                name,
                loot: monster.into_loot(),
            });
        }
    }

    fn finish(&mut self, outcome: EncounterOutcome, events: &mut Vec<EncounterEvent>) {
        self.phase = EncounterPhase::Finished(outcome);
        events.push(EncounterEvent::finished(outcome));
    }
}
