//! Linear congruential engine used to expand small seeds.
//!
//! Uses the glibc parameterisation `state = 1103515245 * state + 12345
//! (mod 2^32)`. Its statistical quality is poor; it exists to turn a 32-bit
//! seed into well-mixed words for other engines.

use crate::generator::Generator;

/// LCG multiplier (glibc).
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;

/// LCG increment (glibc).
pub const LCG_INCREMENT: u32 = 12_345;

/// State of a default-constructed engine.
pub const LCG_DEFAULT_STATE: u32 = 214_013;

/// Mixing term applied when copy-seeding: `0xFFFF_FFFF * 1664525 + 1013904223`
/// reduced modulo 2^32.
pub const LCG_RESEED_MIX: u32 = 0xFFFF_FFFFu32
    .wrapping_mul(1_664_525)
    .wrapping_add(1_013_904_223);

/// Seed-expansion engine.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, SeedingEngine};
///
/// // One warm-up step is taken at construction
/// let mut lcg = SeedingEngine::with_seed(1);
/// assert_eq!(lcg.next32(), 2_524_885_223);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedingEngine {
    state: u32,
}

impl SeedingEngine {
    /// Creates an engine with the fixed default state.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: LCG_DEFAULT_STATE,
        }
    }

    /// Creates an engine from an explicit seed, discarding the first output.
    #[inline]
    pub fn with_seed(seed: u32) -> Self {
        let mut engine = Self { state: seed };
        engine.next32();
        engine
    }

    /// Returns the current state word.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SeedingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeedingEngine {
    #[inline]
    fn next32(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    #[inline]
    fn seed(&mut self, s: u32) {
        *self = Self::with_seed(s);
    }

    /// Re-keys from one draw of `source`.
    ///
    /// Offers no independence guarantee between `source` and `self`.
    #[inline]
    fn seed_from<G: Generator + ?Sized>(&mut self, source: &mut G) {
        self.state = source.next32() ^ LCG_RESEED_MIX;
    }

    fn split(&mut self) -> Self {
        Self::from_generator(self)
    }
}
