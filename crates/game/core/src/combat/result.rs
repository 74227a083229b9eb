//! Combat result types and attack resolution.

use crate::env::WeaponOracle;
use crate::state::CombatParticipant;

use super::damage::{DefensePolicy, raw_damage};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attacker or defender was already dead; nothing happened.
    Refused,
    /// Damage was applied.
    Hit,
    /// The attack landed but mitigated damage was zero.
    NoDamage,
}

/// Result of a combat resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Attack + weapon bonus, before defense.
    pub raw_damage: u32,

    /// Life actually removed from the defender.
    pub damage: u32,

    /// True when this attack brought the defender to zero life.
    pub defender_died: bool,
}

impl AttackResult {
    pub const REFUSED: Self = Self {
        outcome: AttackOutcome::Refused,
        raw_damage: 0,
        damage: 0,
        defender_died: false,
    };

    /// Whether the defender lost any life; drives the success/failure message.
    pub const fn did_damage(&self) -> bool {
        self.damage > 0
    }
}

/// Resolve one attack of `attacker` against `defender`.
///
/// This is the only place combat changes life. It does not prune the dead,
/// emit events, or know about presentation.
///
/// # Arguments
///
/// * `attacker` - Participant dealing damage
/// * `defender` - Participant receiving damage
/// * `weapons` - Catalog used to resolve the attacker's weapon handle
/// * `policy` - Defense mitigation rule
///
/// # Returns
///
/// [`AttackResult::REFUSED`] when either side is already dead, otherwise the
/// applied damage.
pub fn resolve_attack<A, D>(
    attacker: &A,
    defender: &mut D,
    weapons: &(impl WeaponOracle + ?Sized),
    policy: &(impl DefensePolicy + ?Sized),
) -> AttackResult
where
    A: CombatParticipant + ?Sized,
    D: CombatParticipant + ?Sized,
{
    if attacker.is_dead() || defender.is_dead() {
        return AttackResult::REFUSED;
    }

    let raw = raw_damage(attacker, weapons);
    let mitigated = policy.mitigate(raw, defender.stats().defense);
    let damage = defender.apply_damage(mitigated);

    AttackResult {
        outcome: if damage > 0 {
            AttackOutcome::Hit
        } else {
            AttackOutcome::NoDamage
        },
        raw_damage: raw,
        damage,
        defender_died: defender.is_dead(),
    }
}
