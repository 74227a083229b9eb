use crate::state::{MonsterId, Roster};

/// Chooses the target of a Battle action.
pub trait TargetSelector {
    /// Returns the id to attack, or `None` when nothing can be targeted.
    ///
    /// A returned id that is no longer in the roster (or is dead) is ignored by
    /// the encounter rather than treated as an error.
    fn select(&self, roster: &Roster) -> Option<MonsterId>;
}

/// Always the first living monster in roster order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLiving;

impl TargetSelector for FirstLiving {
    fn select(&self, roster: &Roster) -> Option<MonsterId> {
        roster.first_living()
    }
}

/// A target picked ahead of time, e.g. by a player-facing cursor.
#[derive(Clone, Copy, Debug)]
pub struct ChosenTarget(pub MonsterId);

impl TargetSelector for ChosenTarget {
    fn select(&self, _roster: &Roster) -> Option<MonsterId> {
        Some(self.0)
    }
}
