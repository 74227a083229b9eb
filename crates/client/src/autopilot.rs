//! Action choice for unattended play.
use game_core::{CombatParticipant, Hero, HeroAction};

/// Attacks until the hero's life falls to the flee threshold.
pub fn choose_action(hero: &Hero, flee_below_percent: u32) -> HeroAction {
    if hero.life().percent() <= flee_below_percent {
        HeroAction::Flee
    } else {
        HeroAction::Battle
    }
}
