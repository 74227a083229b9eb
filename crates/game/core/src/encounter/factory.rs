//! Random roster generation from the monster template pool.

use super::EncounterError;
use crate::config::GameConfig;
use crate::env::{EncounterSeed, GameEnv, OracleError, RollContext};
use crate::state::Roster;

/// Builds fresh rosters for new encounters.
///
/// All randomness comes from the injected [`RngOracle`](crate::env::RngOracle)
/// and an [`EncounterSeed`], so the same seed and catalog always produce the
/// same roster.
#[derive(Clone, Copy)]
pub struct EncounterFactory<'a> {
    env: GameEnv<'a>,
    config: &'a GameConfig,
}

impl<'a> EncounterFactory<'a> {
    pub fn new(env: GameEnv<'a>, config: &'a GameConfig) -> Self {
        Self { env, config }
    }

    /// Draws the number of monsters for an encounter, within the configured bounds.
    pub fn roster_size(&self, seed: EncounterSeed) -> Result<usize, EncounterError> {
        self.config.validate()?;
        let rng = self.env.rng()?;
        let size = rng.range(
            seed.draw(0, RollContext::RosterSize),
            self.config.roster_size_min as u32,
            self.config.roster_size_max as u32,
        );
        Ok(size as usize)
    }

    /// Generates a roster of independently spawned monsters.
    ///
    /// Each slot picks a template uniformly and spawns a new instance named
    /// `"<template name> <slot>"` (1-based), so two slots drawn from the same
    /// template never share life.
    ///
    /// # Errors
    ///
    /// - [`EncounterError::EmptyTemplateCatalog`] if there are no templates
    /// - [`EncounterError::LifelessTemplate`] if a drawn template has zero life
    /// - [`OracleError::WeaponNotFound`] if a drawn template references an
    ///   unknown weapon
    /// - [`EncounterError::InvalidRosterSize`] for bad configuration
    pub fn build(&self, seed: EncounterSeed) -> Result<Roster, EncounterError> {
        let templates = self.env.monsters()?.templates();
        if templates.is_empty() {
            return Err(EncounterError::EmptyTemplateCatalog);
        }
        let weapons = self.env.weapons()?;
        let rng = self.env.rng()?;

        let size = self.roster_size(seed)?;
        let mut roster = Roster::new();
        for slot in 0..size {
            let pick = rng.index(seed.draw(slot as u32, RollContext::Template), templates.len());
            let template = &templates[pick];

            if template.max_life == 0 {
                return Err(EncounterError::LifelessTemplate {
                    template: template.id.clone(),
                });
            }

            if let Some(handle) = template.weapon
                && weapons.weapon(handle).is_none()
            {
                return Err(OracleError::WeaponNotFound(handle).into());
            }

            roster.insert(template.spawn(format!("{} {}", template.name, slot + 1)))?;
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        Env, MonsterOracle, MonsterTemplate, PcgRng, RngOracle, WeaponDefinition, WeaponKind,
        WeaponOracle,
    };
    use crate::state::{CombatParticipant, WeaponHandle};
    use crate::stats::CoreStats;

    struct Pool(Vec<MonsterTemplate>);

    impl MonsterOracle for Pool {
        fn templates(&self) -> &[MonsterTemplate] {
            &self.0
        }
    }

    struct Armory(Vec<WeaponDefinition>);

    impl WeaponOracle for Armory {
        fn weapon(&self, handle: WeaponHandle) -> Option<&WeaponDefinition> {
            self.0.iter().find(|weapon| weapon.handle == handle)
        }
    }

    /// Always returns the same raw value.
    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn debug_monster() -> MonsterTemplate {
        MonsterTemplate::new("debug", "Monstruo", CoreStats::new(4, 0, 1, 6, 1), 12)
            .with_weapon(WeaponHandle(1))
    }

    fn env<'a>(pool: &'a Pool, weapons: &'a Armory) -> GameEnv<'a> {
        Env::with_all(pool, weapons, &PcgRng).into_game_env()
    }

    fn armory() -> Armory {
        Armory(vec![WeaponDefinition::new(
            WeaponHandle(1),
            "short sword",
            2,
            WeaponKind::Melee,
        )])
    }

    #[test]
    fn sizes_stay_within_bounds() {
        let pool = Pool(vec![debug_monster()]);
        let weapons = armory();
        let config = GameConfig::default();
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        let mut seen = [false; 4];
        for nonce in 0..200 {
            let roster = factory.build(EncounterSeed::new(42, nonce)).unwrap();
            assert!((1..=3).contains(&roster.len()));
            seen[roster.len()] = true;
        }
        assert!(seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn same_seed_same_roster() {
        let pool = Pool(vec![
            debug_monster(),
            MonsterTemplate::new("slime", "Slime", CoreStats::new(2, 0, 0, 3, 1), 8),
        ]);
        let weapons = armory();
        let config = GameConfig::default();
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        let seed = EncounterSeed::new(7, 3);
        assert_eq!(factory.build(seed).unwrap(), factory.build(seed).unwrap());
    }

    #[test]
    fn shared_template_spawns_independent_monsters() {
        let pool = Pool(vec![debug_monster()]);
        let weapons = armory();
        let config = GameConfig::default().with_roster_size(3, 3);
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        let mut roster = factory.build(EncounterSeed::new(1, 0)).unwrap();
        let names: Vec<_> = roster.iter().map(|(_, m)| m.name().to_string()).collect();
        assert_eq!(names, ["Monstruo 1", "Monstruo 2", "Monstruo 3"]);

        let first = roster.first_living().unwrap();
        roster.get_mut(first).unwrap().apply_damage(5);
        let lives: Vec<_> = roster.iter().map(|(_, m)| m.life().current()).collect();
        assert_eq!(lives, [7, 12, 12]);
        assert!(roster.iter().all(|(_, m)| *m.stats() == pool.0[0].stats));
        assert_eq!(pool.0[0].max_life, 12);
    }

    #[test]
    fn fixed_rng_picks_minimum_size() {
        let pool = Pool(vec![debug_monster()]);
        let weapons = armory();
        let config = GameConfig::default();
        let env = Env::with_all(&pool, &weapons, &Fixed(0)).into_game_env();
        let factory = EncounterFactory::new(env, &config);

        assert_eq!(factory.roster_size(EncounterSeed::default()).unwrap(), 1);
    }

    #[test]
    fn empty_catalog_fails() {
        let pool = Pool(Vec::new());
        let weapons = armory();
        let config = GameConfig::default();
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        assert_eq!(
            factory.build(EncounterSeed::default()),
            Err(EncounterError::EmptyTemplateCatalog)
        );
    }

    #[test]
    fn unknown_weapon_fails() {
        let pool = Pool(vec![debug_monster().with_weapon(WeaponHandle(99))]);
        let weapons = armory();
        let config = GameConfig::default();
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        assert_eq!(
            factory.build(EncounterSeed::default()),
            Err(EncounterError::Oracle(OracleError::WeaponNotFound(WeaponHandle(99))))
        );
    }

    #[test]
    fn lifeless_template_fails() {
        let pool = Pool(vec![MonsterTemplate::new(
            "husk",
            "Husk",
            CoreStats::new(1, 0, 0, 1, 1),
            0,
        )]);
        let weapons = armory();
        let config = GameConfig::default();
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);

        assert_eq!(
            factory.build(EncounterSeed::default()),
            Err(EncounterError::LifelessTemplate {
                template: "husk".into()
            })
        );
    }

    #[test]
    fn missing_oracle_and_bad_config_fail() {
        let config = GameConfig::default();
        let factory = EncounterFactory::new(Env::empty(), &config);
        assert_eq!(
            factory.build(EncounterSeed::default()),
            Err(EncounterError::Oracle(OracleError::MonstersNotAvailable))
        );

        let pool = Pool(vec![debug_monster()]);
        let weapons = armory();
        let config = GameConfig::default().with_roster_size(2, 1);
        let factory = EncounterFactory::new(env(&pool, &weapons), &config);
        assert_eq!(
            factory.build(EncounterSeed::default()),
            Err(EncounterError::InvalidRosterSize { min: 2, max: 1 })
        );
    }
}
