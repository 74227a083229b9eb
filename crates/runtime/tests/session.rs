use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use game_content::{ContentBundle, ContentFactory};
use game_core::{
    CombatParticipant, CoreStats, EncounterEvent, EncounterOutcome, GameConfig, Hero, HeroAction,
    HeroTemplate, MonsterTemplate, WeaponDefinition, WeaponHandle, WeaponKind,
};
use runtime::{
    Event, GameSession, HeroRepository, InMemoryHeroRepo, RepositoryError, RuntimeConfig,
    RuntimeError, SessionEvent, Topic,
};

fn config() -> RuntimeConfig {
    RuntimeConfig::default().with_seed(0xD00D)
}

/// One weak monster per encounter, a hero that kills it in one hit.
fn one_hit_content() -> ContentBundle {
    ContentBundle {
        config: GameConfig::default().with_roster_size(1, 1),
        hero: HeroTemplate {
            stats: CoreStats::new(10, 2, 3, 8, 1),
            max_life: 50,
            weapon: Some(WeaponHandle(1)),
        },
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

/// In-memory repository whose saves can be switched off.
#[derive(Default)]
struct FlakyRepo {
    inner: InMemoryHeroRepo,
    failing: AtomicBool,
}

impl HeroRepository for FlakyRepo {
    fn save(&self, slot: &str, hero: &Hero) -> runtime::repository::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::LockPoisoned);
        }
        self.inner.save(slot, hero)
    }

    fn load(&self, slot: &str) -> runtime::repository::Result<Option<Hero>> {
        self.inner.load(slot)
    }

    fn exists(&self, slot: &str) -> bool {
        self.inner.exists(slot)
    }

    fn delete(&self, slot: &str) -> runtime::repository::Result<()> {
        self.inner.delete(slot)
    }
}

#[test]
fn new_game_saves_hero() {
    let repo = Arc::new(InMemoryHeroRepo::new());
    let config = config();

    let session = GameSession::new_game("Aria", &one_hit_content(), &config, repo.clone()).unwrap();

    let saved = repo.load(&config.save_slot).unwrap().unwrap();
    assert_eq!(&saved, session.hero());
    assert_eq!(saved.life().current(), 50);
}

#[test]
fn continue_without_save_fails() {
    let repo = Arc::new(InMemoryHeroRepo::new());
    let err = GameSession::continue_game(&one_hit_content(), &config(), repo).err();
    assert!(matches!(err, Some(RuntimeError::NoSavedHero { .. })));
}

#[test]
fn one_hit_victory_is_saved_and_published() {
    let repo = Arc::new(InMemoryHeroRepo::new());
    let config = config();
    let mut session =
        GameSession::new_game("Aria", &one_hit_content(), &config, repo.clone()).unwrap();
    let mut encounter_rx = session.bus().subscribe(Topic::Encounter);
    let mut session_rx = session.bus().subscribe(Topic::Session);

    let mut driver = session.start_encounter().unwrap();
    let events = driver.submit(HeroAction::Battle).unwrap();

    assert_eq!(
        events.first(),
        Some(&EncounterEvent::HeroHit {
            target: game_core::MonsterId(0),
            name: "Monstruo 1".into(),
            damage: 12,
            did_damage: true,
        })
    );
    assert_eq!(events.last(), Some(&EncounterEvent::Victory));
    assert_eq!(driver.outcome(), Some(EncounterOutcome::Victory));
    drop(driver);

    assert_eq!(session.hero().life().current(), 50);
    assert_eq!(session.encounters_started(), 1);

    let mut published = Vec::new();
    while let Ok(Event::Encounter { event, .. }) = encounter_rx.try_recv() {
        published.push(event);
    }
    assert_eq!(published, events);

    assert!(matches!(
        session_rx.try_recv(),
        Ok(Event::Session(SessionEvent::EncounterStarted { nonce: 0, .. }))
    ));
    assert!(matches!(
        session_rx.try_recv(),
        Ok(Event::Session(SessionEvent::EncounterEnded {
            outcome: EncounterOutcome::Victory,
            hero_life: 50,
            ..
        }))
    ));
}

#[test]
fn damage_carries_over_between_encounters() {
    let mut content = one_hit_content();
    content.hero.weapon = None;
    content.hero.stats = CoreStats::new(6, 0, 0, 5, 1);

    let repo = Arc::new(InMemoryHeroRepo::new());
    let config = config();
    let mut session = GameSession::new_game("Aria", &content, &config, repo.clone()).unwrap();

    // 6 damage per hit against 12 life: one monster counter-attack of 4 + 2.
    for _ in 0..2 {
        let mut driver = session.start_encounter().unwrap();
        while driver.outcome().is_none() {
            driver.submit(HeroAction::Battle).unwrap();
        }
        assert_eq!(driver.outcome(), Some(EncounterOutcome::Victory));
    }

    assert_eq!(session.hero().life().current(), 38);
    let saved = repo.load(&config.save_slot).unwrap().unwrap();
    assert_eq!(saved.life().current(), 38);

    let resumed = GameSession::continue_game(&content, &config, repo).unwrap();
    assert_eq!(resumed.hero().life().current(), 38);
}

#[test]
fn abandon_counts_as_flee() {
    let repo = Arc::new(InMemoryHeroRepo::new());
    let mut session = GameSession::new_game("Aria", &one_hit_content(), &config(), repo).unwrap();

    let mut driver = session.start_encounter().unwrap();
    assert_eq!(driver.abandon().unwrap(), vec![EncounterEvent::Fled]);
    assert!(driver.abandon().unwrap().is_empty());
    drop(driver);

    assert_eq!(session.hero().life().current(), 50);
}

#[test]
fn defeated_hero_cannot_start_encounters() {
    let mut content = one_hit_content();
    content.hero.stats = CoreStats::new(0, 0, 0, 1, 1);
    content.hero.max_life = 5;
    content.hero.weapon = None;

    let repo = Arc::new(InMemoryHeroRepo::new());
    let mut session = GameSession::new_game("Aria", &content, &config(), repo).unwrap();

    let mut driver = session.start_encounter().unwrap();
    let events = driver.submit(HeroAction::Defend).unwrap();
    assert_eq!(events.last(), Some(&EncounterEvent::Defeat));
    drop(driver);

    assert!(session.hero().is_dead());
    assert!(matches!(
        session.start_encounter().err(),
        Some(RuntimeError::HeroDefeated)
    ));
}

#[test]
fn bundled_content_runs_an_encounter() {
    let config = config();
    let content = GameSession::load_content(&config).unwrap();
    assert_eq!(
        ContentFactory::bundled().load_all().unwrap().monsters,
        content.monsters
    );

    let repo = Arc::new(InMemoryHeroRepo::new());
    let mut session = GameSession::new_game("Aria", &content, &config, repo).unwrap();
    let mut driver = session.start_encounter().unwrap();

    let size = driver.encounter().roster().len();
    assert!((1..=3).contains(&size));

    let mut rounds = 0;
    while driver.outcome().is_none() && rounds < 100 {
        driver.submit(HeroAction::Battle).unwrap();
        rounds += 1;
    }
    assert!(driver.outcome().is_some());
}

#[test]
fn encounter_end_is_published_when_save_fails() {
    let repo = Arc::new(FlakyRepo::default());
    let mut session =
        GameSession::new_game("Aria", &one_hit_content(), &config(), repo.clone()).unwrap();
    let mut encounter_rx = session.bus().subscribe(Topic::Encounter);
    let mut session_rx = session.bus().subscribe(Topic::Session);
    repo.failing.store(true, Ordering::SeqCst);

    let mut driver = session.start_encounter().unwrap();
    let err = driver.submit(HeroAction::Battle).err();
    assert!(matches!(
        err,
        Some(RuntimeError::Repository(RepositoryError::LockPoisoned))
    ));
    assert_eq!(driver.outcome(), Some(EncounterOutcome::Victory));
    drop(driver);

    let mut published = Vec::new();
    while let Ok(Event::Encounter { event, .. }) = encounter_rx.try_recv() {
        published.push(event);
    }
    assert_eq!(published.last(), Some(&EncounterEvent::Victory));

    assert!(matches!(
        session_rx.try_recv(),
        Ok(Event::Session(SessionEvent::EncounterStarted { .. }))
    ));
    assert!(matches!(
        session_rx.try_recv(),
        Ok(Event::Session(SessionEvent::EncounterEnded {
            outcome: EncounterOutcome::Victory,
            ..
        }))
    ));
}
