//! RNG oracle for reproducible encounter generation.
//!
//! Randomness is injected rather than drawn from a free-running global
//! generator: every draw is a pure function of a seed, so the same
//! [`EncounterSeed`] always produces the same roster.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Pick an index in `0..len` (0 when `len` is 0).
    fn index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call advances a copy of the seed by one LCG step and
/// permutes it, so the oracle can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Identifies one encounter's random stream.
///
/// `game_seed` is fixed for a play session; `nonce` counts encounters so that
/// consecutive encounters draw different rosters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSeed {
    pub game_seed: u64,
    pub nonce: u64,
}

impl EncounterSeed {
    pub const fn new(game_seed: u64, nonce: u64) -> Self {
        Self { game_seed, nonce }
    }

    /// Seed for one independent draw.
    ///
    /// `slot` is the roster position being filled and `context` separates
    /// multiple draws for the same slot (see [`RollContext`]).
    pub fn draw(&self, slot: u32, context: RollContext) -> u64 {
        compute_seed(self.game_seed, self.nonce, slot, context as u32)
    }

    /// The seed of the following encounter.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            game_seed: self.game_seed,
            nonce: self.nonce.wrapping_add(1),
        }
    }
}

/// Distinguishes independent rolls made for the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    RosterSize = 0,
    Template = 1,
}

/// Mix seed components into a single well-distributed seed.
///
/// Uses SplitMix64/FxHash style multipliers followed by a murmur finalizer.
pub fn compute_seed(game_seed: u64, nonce: u64, slot: u32, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
