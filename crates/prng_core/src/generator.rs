//! The generator capability shared by every engine.
//!
//! [`Generator`] is the seam between engines and the sampling layer. It is
//! used through static dispatch only: engines are concrete types (or the
//! [`Engine`](crate::engines::Engine) enum), never `Box<dyn Generator>`.

use chrono::Utc;
use tracing::debug;

use crate::engines::SeedingEngine;

/// A source of uniformly distributed 32-bit and 64-bit words.
///
/// Implementors supply the two primitive draws plus seeding and splitting.
/// Every derived distribution lives in [`Sample`](crate::Sample) and is
/// written against this trait alone.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, SplittableEngine};
///
/// let mut parent = SplittableEngine::new();
/// let mut child = parent.split();
///
/// // Parent and child evolve independently afterwards
/// assert_ne!(parent.next32(), child.next32());
/// ```
pub trait Generator {
    /// Advances the state and returns 32 uniformly distributed bits.
    fn next32(&mut self) -> u32;

    /// Returns 64 uniformly distributed bits, high word drawn first.
    #[inline]
    fn next64(&mut self) -> u64 {
        let high = u64::from(self.next32());
        let low = u64::from(self.next32());
        (high << 32) | low
    }

    /// Re-keys the engine from a raw 32-bit seed.
    ///
    /// The exact mapping is engine-specific; see [`Generator::seed_with`]
    /// for the expanded, wall-clock aware variant.
    fn seed(&mut self, s: u32);

    /// Re-keys the engine by drawing from another generator.
    fn seed_from<G: Generator + ?Sized>(&mut self, source: &mut G);

    /// Derives a new, exclusively owned generator from the current state.
    ///
    /// The parent keeps running after the call; the two instances share no
    /// state.
    fn split(&mut self) -> Self
    where
        Self: Sized;

    /// Seeds through a [`SeedingEngine`] expansion.
    ///
    /// A zero seed is replaced by [`time_seed`], so `seed_with(0)` yields a
    /// run-dependent stream.
    fn seed_with(&mut self, s: u32) {
        let s = if s == 0 {
            let derived = time_seed();
            debug!(seed = derived, "zero seed replaced with wall-clock seed");
            derived
        } else {
            s
        };
        let mut expander = SeedingEngine::with_seed(s);
        self.seed_from(&mut expander);
    }

    /// Constructs the default instance and copy-seeds it from `source`.
    fn from_generator<G: Generator + ?Sized>(source: &mut G) -> Self
    where
        Self: Sized + Default,
    {
        let mut generator = Self::default();
        generator.seed_from(source);
        generator
    }
}

/// Seed derived from the wall clock: seconds since the Unix epoch, truncated
/// to 32 bits.
pub fn time_seed() -> u32 {
    Utc::now().timestamp() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SplittableEngine;

    /// Minimal engine counting upwards, for exercising provided methods.
    #[derive(Default)]
    struct Counter(u32);

    impl Generator for Counter {
        fn next32(&mut self) -> u32 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }

        fn seed(&mut self, s: u32) {
            self.0 = s;
        }

        fn seed_from<G: Generator + ?Sized>(&mut self, source: &mut G) {
            self.0 = source.next32();
        }

        fn split(&mut self) -> Self {
            Counter(self.next32())
        }
    }

    #[test]
    fn test_next64_draws_high_word_first() {
        let mut counter = Counter(0);
        assert_eq!(counter.next64(), (1u64 << 32) | 2);
    }

    #[test]
    fn test_seed_with_matches_manual_expansion() {
        let mut direct = SplittableEngine::new();
        direct.seed_with(77);

        let mut expander = SeedingEngine::with_seed(77);
        let mut manual = SplittableEngine::new();
        manual.seed_from(&mut expander);

        assert_eq!(direct, manual);
    }

    #[test]
    fn test_seed_with_zero_uses_clock() {
        let before = time_seed();
        let mut counter = Counter(0);
        counter.seed_with(0);
        let after = time_seed();

        // The counter holds the first output of an LCG seeded from the clock
        let candidates: Vec<u32> = (before..=after)
            .map(|s| SeedingEngine::with_seed(s).next32())
            .collect();
        assert!(candidates.contains(&counter.0));
    }

    #[test]
    fn test_from_generator_draws_from_source() {
        let mut source = Counter(41);
        let counter = Counter::from_generator(&mut source);
        assert_eq!(counter.0, 42);
        assert_eq!(source.0, 42);
    }
}
