//! Dungeon game client binary.
//!
//! Headless composition root: loads content, starts a session, and plays a
//! number of encounters automatically while a narrator task prints every
//! event published on the runtime bus.
//!
//! # Examples
//!
//! ```bash
//! DUNGEON_SEED=7 DUNGEON_AUTO_ENCOUNTERS=5 cargo run -p dungeon-client
//! ```
mod autopilot;
mod config;
mod narrator;

use std::sync::Arc;

use anyhow::Result;
use config::ClientConfig;
use game_core::CombatParticipant;
use runtime::{GameSession, HeroRepository, InMemoryHeroRepo, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client_config = ClientConfig::from_env();
    let runtime_config = RuntimeConfig::from_env();
    tracing::info!(
        seed = runtime_config.game_seed,
        data_dir = %runtime_config.data_dir.display(),
        "Starting Dungeon client"
    );

    let content = GameSession::load_content(&runtime_config)?;
    let repo: Arc<dyn HeroRepository> = Arc::new(InMemoryHeroRepo::new());
    let mut session =
        GameSession::new_game(&client_config.hero_name, &content, &runtime_config, repo)?;

    let narrator = narrator::spawn(session.bus());

    for _ in 0..client_config.auto_encounters {
        if session.hero().is_dead() {
            break;
        }

        {
            let mut driver = session.start_encounter()?;
            while driver.outcome().is_none() {
                let action = autopilot::choose_action(
                    driver.encounter().hero(),
                    client_config.flee_below_percent,
                );
                driver.submit(action)?;
            }
        }

        // Let the narrator catch up between encounters.
        tokio::task::yield_now().await;
    }

    let hero = session.hero();
    tracing::info!(
        hero = hero.name(),
        life = hero.life().current(),
        encounters = session.encounters_started(),
        "Session finished"
    );

    drop(session);
    narrator.await?;
    Ok(())
}
