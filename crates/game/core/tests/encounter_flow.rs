use game_core::{
    CombatParticipant, CoreStats, Encounter, EncounterEvent, EncounterFactory, EncounterOutcome,
    EncounterSeed, Env, GameConfig, Hero, HeroAction, LifeMeter, Monster, MonsterId,
    MonsterOracle, MonsterTemplate, PcgRng, Roster, WeaponDefinition, WeaponHandle, WeaponKind,
    WeaponOracle,
};

struct Catalog {
    monsters: Vec<MonsterTemplate>,
    weapons: Vec<WeaponDefinition>,
}

impl MonsterOracle for Catalog {
    fn templates(&self) -> &[MonsterTemplate] {
        &self.monsters
    }
}

impl WeaponOracle for Catalog {
    fn weapon(&self, handle: WeaponHandle) -> Option<&WeaponDefinition> {
        self.weapons.iter().find(|weapon| weapon.handle == handle)
    }
}

fn catalog() -> Catalog {
    Catalog {
        monsters: vec![
            MonsterTemplate::new("debug", "Monstruo", CoreStats::new(4, 0, 1, 6, 1), 12)
                .with_weapon(WeaponHandle(1)),
        ],
        weapons: vec![WeaponDefinition::new(
            WeaponHandle(1),
            "Short Sword",
            2,
            WeaponKind::Melee,
        )],
    }
}

#[test]
fn generated_encounter_plays_to_completion() {
    let catalog = catalog();
    let config = GameConfig::default();
    let env = Env::with_all(&catalog, &catalog, &PcgRng).into_game_env();

    let roster = EncounterFactory::new(env, &config)
        .build(EncounterSeed::new(99, 0))
        .unwrap();
    let size = roster.len();
    assert!((1..=3).contains(&size));

    let mut hero =
        Hero::new("Aria", CoreStats::new(10, 2, 3, 8, 1), 50).with_weapon(Some(WeaponHandle(1)));
    let mut encounter = Encounter::new(&mut hero, roster, &catalog).unwrap();

    let mut deaths = 0;
    let mut life_seen = 50;
    while !encounter.is_finished() {
        for event in encounter.submit(HeroAction::Battle).unwrap() {
            if let EncounterEvent::MonsterDied { .. } = event {
                deaths += 1;
            }
        }
        let life = encounter.hero().life().current();
        assert!(life <= life_seen);
        life_seen = life;
    }

    // 12 damage per hit kills a 12-life monster each round; at most two
    // survivors hit back for 6 each per round before the last one falls.
    assert_eq!(encounter.outcome(), Some(EncounterOutcome::Victory));
    assert_eq!(deaths, size);
    drop(encounter);
    assert!(hero.life().current() >= 50 - 6 * 3);
}

#[test]
fn monsters_attack_in_roster_order() {
    let catalog = catalog();
    let mut hero = Hero::new("Aria", CoreStats::new(1, 0, 0, 5, 1), 100);
    let roster = Roster::from_monsters(["first", "second", "third"].map(|name| {
        Monster::new(name, CoreStats::new(1, 0, 0, 1, 1), LifeMeter::full(20))
    }))
    .unwrap();
    let mut encounter = Encounter::new(&mut hero, roster, &catalog).unwrap();

    let events = encounter.submit(HeroAction::Defend).unwrap();

    let attackers: Vec<MonsterId> = events
        .iter()
        .filter_map(|event| match event {
            EncounterEvent::MonsterHit { attacker, .. } => Some(*attacker),
            _ => None,
        })
        .collect();
    assert_eq!(attackers, [MonsterId(0), MonsterId(1), MonsterId(2)]);
}

#[test]
fn dead_monster_never_acts_again() {
    let catalog = catalog();
    let mut hero = Hero::new("Aria", CoreStats::new(5, 0, 0, 5, 1), 100);
    let roster = Roster::from_monsters([
        Monster::new("weak", CoreStats::new(3, 0, 0, 1, 1), LifeMeter::full(5)),
        Monster::new("tough", CoreStats::new(2, 0, 0, 1, 1), LifeMeter::full(50)),
    ])
    .unwrap();
    let mut encounter = Encounter::new(&mut hero, roster, &catalog).unwrap();

    let first = encounter.submit(HeroAction::Battle).unwrap();
    assert!(first.contains(&EncounterEvent::MonsterDied {
        monster: MonsterId(0),
        name: "weak".into(),
        loot: Vec::new(),
    }));

    let second = encounter.submit(HeroAction::Item).unwrap();
    assert!(second.iter().all(|event| !matches!(
        event,
        EncounterEvent::MonsterHit {
            attacker: MonsterId(0),
            ..
        }
    )));
    assert_eq!(encounter.hero().life().current(), 100 - 2 - 2);
}
