//! Life pool of a combat participant.
//!
//! Only the current value changes during play, and the only way to change it
//! is [`LifeMeter::apply_damage`]. Restoring a saved participant goes through
//! [`LifeMeter::with_current`], which clamps at construction time.

/// Current and maximum life.
///
/// Invariant: `current <= maximum`. `current == 0` means the owner is dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "LifeRecord", into = "LifeRecord"))]
pub struct LifeMeter {
    current: u32,
    maximum: u32,
}

impl LifeMeter {
    /// A full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// A meter at `current`, clamped to `maximum`.
    pub const fn with_current(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Returns true once the meter has reached zero.
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Current life as a percentage of maximum (0 when maximum is 0).
    pub const fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        ((self.current as u64 * 100) / self.maximum as u64) as u32
    }

    /// Removes `amount` life, saturating at zero.
    ///
    /// Returns the life actually removed, which is less than `amount` when the
    /// blow overkills.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = before.saturating_sub(amount);
        before - self.current
    }
}

/// Unchecked wire shape; deserialization funnels through `with_current`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LifeRecord {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<LifeRecord> for LifeMeter {
    fn from(record: LifeRecord) -> Self {
        Self::with_current(record.current, record.maximum)
    }
}

#[cfg(feature = "serde")]
impl From<LifeMeter> for LifeRecord {
    fn from(meter: LifeMeter) -> Self {
        Self {
            current: meter.current,
            maximum: meter.maximum,
        }
    }
}
