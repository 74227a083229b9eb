//! Ordered set of monsters taking part in one encounter.

use arrayvec::ArrayVec;

use super::{CombatParticipant, Monster, MonsterId};
use crate::config::GameConfig;
use crate::encounter::EncounterError;

/// Monsters of an encounter in display/turn order.
///
/// # Invariants
///
/// - Insertion order is turn order and never changes.
/// - Ids are assigned sequentially and never reused, even after removal.
/// - Dead monsters are removed with [`Roster::prune_dead`] before the next
///   phase begins, so at the start of a phase every member is alive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    entries: ArrayVec<(MonsterId, Monster), { GameConfig::MAX_ROSTER }>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from monsters in order.
    pub fn from_monsters(
        monsters: impl IntoIterator<Item = Monster>,
    ) -> Result<Self, EncounterError> {
        let mut roster = Self::new();
        for monster in monsters {
            roster.insert(monster)?;
        }
        Ok(roster)
    }

    /// Appends a monster at the end of the turn order.
    pub fn insert(&mut self, monster: Monster) -> Result<MonsterId, EncounterError> {
        let id = MonsterId(self.next_id);
        self.entries
            .try_push((id, monster))
            .map_err(|_| EncounterError::RosterFull {
                capacity: GameConfig::MAX_ROSTER,
            })?;
        self.next_id += 1;
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonsterId, &Monster)> {
        self.entries.iter().map(|(id, monster)| (*id, monster))
    }

    /// Ids in turn order.
    pub fn ids(&self) -> ArrayVec<MonsterId, { GameConfig::MAX_ROSTER }> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn contains(&self, id: MonsterId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, monster)| monster)
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, monster)| monster)
    }

    /// Returns the monster only if it is still in the roster and alive.
    pub fn living_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.get_mut(id).filter(|monster| !monster.is_dead())
    }

    /// First living monster in turn order.
    pub fn first_living(&self) -> Option<MonsterId> {
        self.iter()
            .find(|(_, monster)| !monster.is_dead())
            .map(|(id, _)| id)
    }

    pub fn living_count(&self) -> usize {
        self.iter().filter(|(_, monster)| !monster.is_dead()).count()
    }

    pub fn remove(&mut self, id: MonsterId) -> Option<Monster> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes every dead monster, returning them in turn order.
    pub fn prune_dead(&mut self) -> Vec<(MonsterId, Monster)> {
        let mut removed = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].1.is_dead() {
                removed.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{CoreStats, LifeMeter};

    fn monster(name: &str, life: u32) -> Monster {
        Monster::new(name, CoreStats::default(), LifeMeter::full(life))
    }

    #[test]
    fn ids_follow_insertion_order() {
        let roster =
            Roster::from_monsters([monster("a", 5), monster("b", 5), monster("c", 5)]).unwrap();

        let ids = roster.ids();
        assert_eq!(ids.as_slice(), &[MonsterId(0), MonsterId(1), MonsterId(2)]);
        let names: Vec<_> = roster.iter().map(|(_, m)| m.name().to_string()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut roster = Roster::from_monsters([monster("a", 5), monster("b", 5)]).unwrap();
        assert!(roster.remove(MonsterId(0)).is_some());

        let id = roster.insert(monster("c", 5)).unwrap();
        assert_eq!(id, MonsterId(2));
        assert!(!roster.contains(MonsterId(0)));
        assert!(roster.get(MonsterId(0)).is_none());
    }

    #[test]
    fn prune_removes_only_dead_in_order() {
        let mut roster =
            Roster::from_monsters([monster("a", 5), monster("b", 5), monster("c", 5)]).unwrap();
        roster.get_mut(MonsterId(0)).unwrap().apply_damage(5);
        roster.get_mut(MonsterId(2)).unwrap().apply_damage(9);

        let removed = roster.prune_dead();
        let removed_ids: Vec<_> = removed.iter().map(|(id, _)| *id).collect();
        assert_eq!(removed_ids, [MonsterId(0), MonsterId(2)]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.first_living(), Some(MonsterId(1)));
    }

    #[test]
    fn first_living_skips_dead_members() {
        let mut roster = Roster::from_monsters([monster("a", 1), monster("b", 4)]).unwrap();
        roster.get_mut(MonsterId(0)).unwrap().apply_damage(1);

        assert_eq!(roster.first_living(), Some(MonsterId(1)));
        assert_eq!(roster.living_count(), 1);
        assert!(roster.living_mut(MonsterId(0)).is_none());
    }

    #[test]
    fn insert_fails_past_capacity() {
        let mut roster = Roster::new();
        for i in 0..GameConfig::MAX_ROSTER {
            roster.insert(monster(&format!("m{i}"), 1)).unwrap();
        }
        let err = roster.insert(monster("overflow", 1)).unwrap_err();
        assert_eq!(
            err,
            EncounterError::RosterFull {
                capacity: GameConfig::MAX_ROSTER
            }
        );
    }
}
