//! Damage calculation and defense mitigation.

use crate::env::WeaponOracle;
use crate::state::CombatParticipant;

// ============================================================================
// Raw Damage
// ============================================================================

/// Calculate the unmitigated damage of an attack.
///
/// # Formula
///
/// ```text
/// raw_damage = attacker.attack + weapon.attack
/// ```
///
/// The weapon is resolved through the oracle at call time. An unarmed
/// attacker, or a handle the catalog does not know, adds nothing.
pub fn raw_damage<A>(attacker: &A, weapons: &(impl WeaponOracle + ?Sized)) -> u32
where
    A: CombatParticipant + ?Sized,
{
    let weapon_bonus = attacker
        .equipped_weapon()
        .and_then(|handle| weapons.weapon(handle))
        .map_or(0, |weapon| weapon.attack);

    attacker.stats().attack.saturating_add(weapon_bonus)
}

// ============================================================================
// Defense Policy
// ============================================================================

/// Decides how the defender's `defense` stat changes incoming damage.
pub trait DefensePolicy {
    /// Returns the damage to apply for `raw` damage against `defense`.
    fn mitigate(&self, raw: u32, defense: u32) -> u32;
}

/// Defense does not reduce damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoreDefense;

impl DefensePolicy for IgnoreDefense {
    fn mitigate(&self, raw: u32, _defense: u32) -> u32 {
        raw
    }
}

/// Defense is subtracted from damage, saturating at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubtractDefense;

impl DefensePolicy for SubtractDefense {
    fn mitigate(&self, raw: u32, defense: u32) -> u32 {
        raw.saturating_sub(defense)
    }
}

/// Configurable selection of the built-in policies.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DefenseRule {
    /// See [`IgnoreDefense`].
    #[default]
    Ignore,
    /// See [`SubtractDefense`].
    Subtract,
}

impl DefensePolicy for DefenseRule {
    fn mitigate(&self, raw: u32, defense: u32) -> u32 {
        match self {
            Self::Ignore => IgnoreDefense.mitigate(raw, defense),
            Self::Subtract => SubtractDefense.mitigate(raw, defense),
        }
    }
}
