use super::WeaponHandle;
use crate::stats::{CoreStats, LifeMeter};

/// Capability set shared by every combatant.
///
/// Implemented by [`super::Hero`] and [`super::Monster`]. Life can only go
/// down, and only through [`CombatParticipant::apply_damage`].
pub trait CombatParticipant {
    /// Display name, not unique.
    fn name(&self) -> &str;

    fn stats(&self) -> &CoreStats;

    fn life(&self) -> LifeMeter;

    /// Handle into the externally owned weapon catalog.
    fn equipped_weapon(&self) -> Option<WeaponHandle>;

    /// Removes up to `amount` life and returns how much was removed.
    fn apply_damage(&mut self, amount: u32) -> u32;

    fn is_dead(&self) -> bool {
        self.life().is_depleted()
    }
}
