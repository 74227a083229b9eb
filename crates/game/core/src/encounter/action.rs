//! Hero actions and the strategies behind the non-attack ones.

use crate::state::{Hero, Roster};

/// Action chosen for the hero's turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroAction {
    /// Attack the selected target.
    Battle,
    /// Use an item (see [`TacticalEffect`]).
    Item,
    /// Brace for the monster phase (see [`TacticalEffect`]).
    Defend,
    /// Leave the encounter without reward.
    Flee,
}

/// Mechanical effect of a non-attack action.
///
/// The state machine calls the configured effect and then proceeds to the
/// monster phase; new effects plug in here without touching transitions.
/// Life can still only be reduced through `apply_damage`.
pub trait TacticalEffect {
    fn apply(&self, hero: &mut Hero, roster: &Roster);
}

/// No mechanical effect; the action is only acknowledged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Acknowledge;

impl TacticalEffect for Acknowledge {
    fn apply(&self, _hero: &mut Hero, _roster: &Roster) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_menu_labels() {
        assert_eq!("battle".parse::<HeroAction>().unwrap(), HeroAction::Battle);
        assert_eq!("Defend".parse::<HeroAction>().unwrap(), HeroAction::Defend);
        assert_eq!("FLEE".parse::<HeroAction>().unwrap(), HeroAction::Flee);
        assert!("dance".parse::<HeroAction>().is_err());
    }

    #[test]
    fn menu_order_is_stable() {
        let labels: Vec<_> = HeroAction::iter().map(|a| a.to_string()).collect();
        assert_eq!(labels, ["Battle", "Item", "Defend", "Flee"]);
    }
}
