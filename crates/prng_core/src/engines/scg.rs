//! Synchronised congruential engine with jump-ahead and splitting.
//!
//! Two multiplicative congruential lanes modulo 2^64 run side by side; each
//! output is the high word of their sum. Only the `x` lane takes part in
//! jumps, which lets [`SplittableEngine::split`] derive child streams by
//! moving the parent far along `x` (after L'Ecuyer's splittable generators).

use tracing::trace;

use super::skip_table::jump_multiplier;
use crate::generator::Generator;

/// Multiplier of the `x` lane.
pub const SCG_MULTIPLIER_X: u64 = 0x6a5d_39ea_e116_586d;

/// Multiplier of the `y` lane.
pub const SCG_MULTIPLIER_Y: u64 = 0x3b91_f78b_dac4_c89d;

/// Default `x` lane of a default-constructed engine.
pub const SCG_DEFAULT_X: u64 = 123_456_789;

/// `y` lane used by default construction and by 32-bit seeding.
pub const SCG_DEFAULT_Y: u64 = 36_243_600;

/// Scale applied to the running offset when computing a split jump.
const SPLIT_SCALE: u64 = 5;

/// Splittable two-lane congruential engine.
///
/// `offset` records the cumulative distance the `x` lane has been moved by
/// [`step`](Self::step) and [`skip`](Self::skip) since the last reseed. It
/// wraps modulo 2^64.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, SplittableEngine};
///
/// let mut rng = SplittableEngine::with_seed(42);
/// assert_eq!(rng.next32(), 1_111_404_831);
///
/// // Jumping 1000 steps costs at most 64 multiplications
/// rng.skip(1000);
/// assert_eq!(rng.offset(), 1000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplittableEngine {
    x: u64,
    y: u64,
    offset: u64,
}

impl SplittableEngine {
    /// Creates an engine with the fixed default state.
    #[inline]
    pub fn new() -> Self {
        Self {
            x: SCG_DEFAULT_X,
            y: SCG_DEFAULT_Y,
            offset: 0,
        }
    }

    /// Creates an engine with `x = seed` and the default `y` lane.
    #[inline]
    pub fn with_seed(seed: u32) -> Self {
        let mut engine = Self::new();
        engine.seed(seed);
        engine
    }

    /// Creates an engine from explicit lane values with a zero offset.
    #[inline]
    pub fn from_lanes(x: u64, y: u64) -> Self {
        Self { x, y, offset: 0 }
    }

    /// Returns the `x` lane.
    #[inline]
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Returns the `y` lane.
    #[inline]
    pub fn y(&self) -> u64 {
        self.y
    }

    /// Returns the cumulative jump distance since the last reseed.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Advances the `x` lane by a single step.
    #[inline]
    pub fn step(&mut self) {
        self.x = self.x.wrapping_mul(SCG_MULTIPLIER_X);
        self.offset = self.offset.wrapping_add(1);
    }

    /// Advances the `x` lane by exactly `distance` steps.
    ///
    /// Runs in O(64) regardless of `distance`: each set bit `i` contributes
    /// one multiplication by `Mx^(2^i)` from the precomputed table.
    #[inline]
    pub fn skip(&mut self, distance: u64) {
        self.x = self.x.wrapping_mul(jump_multiplier(distance));
        self.offset = self.offset.wrapping_add(distance);
    }
}

impl Default for SplittableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SplittableEngine {
    #[inline]
    fn next32(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(SCG_MULTIPLIER_X);
        self.y = self.y.wrapping_mul(SCG_MULTIPLIER_Y);
        (self.x.wrapping_add(self.y) >> 32) as u32
    }

    #[inline]
    fn seed(&mut self, s: u32) {
        self.x = u64::from(s);
        self.y = SCG_DEFAULT_Y;
        self.offset = 0;
    }

    #[inline]
    fn seed_from<G: Generator + ?Sized>(&mut self, source: &mut G) {
        self.x = source.next64();
        self.y = source.next64();
        self.offset = 0;
    }

    /// Jumps the parent `5 * offset + 1` steps, copies it, and steps the copy
    /// once more.
    ///
    /// Successive splits land on distinct jump distances because each uses
    /// the offset left behind by the previous one. Non-overlap of the
    /// resulting streams is assumed, not proven.
    fn split(&mut self) -> Self {
        let distance = SPLIT_SCALE.wrapping_mul(self.offset).wrapping_add(1);
        self.skip(distance);

        let mut child = self.clone();
        child.step();

        trace!(
            distance,
            parent_offset = self.offset,
            child_offset = child.offset,
            "split splittable engine"
        );
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(mut engine: SplittableEngine, n: u64) -> SplittableEngine {
        for _ in 0..n {
            engine.step();
        }
        engine
    }

    #[test]
    fn test_default_outputs() {
        let mut rng = SplittableEngine::new();
        assert_eq!(rng.next32(), 849_323_638);
        assert_eq!(rng.next32(), 3_261_428_432);
        assert_eq!(rng.next32(), 3_632_712_627);
    }

    #[test]
    fn test_seeded_outputs() {
        let mut rng = SplittableEngine::with_seed(42);
        assert_eq!(rng.x(), 42);
        assert_eq!(rng.y(), SCG_DEFAULT_Y);
        assert_eq!(rng.next32(), 1_111_404_831);
        assert_eq!(rng.next32(), 643_253_245);
    }

    #[test]
    fn test_seed_resets_offset() {
        let mut rng = SplittableEngine::new();
        rng.skip(17);
        rng.seed(3);
        assert_eq!(rng.offset(), 0);

        rng.skip(9);
        let mut source = SplittableEngine::with_seed(8);
        rng.seed_from(&mut source);
        assert_eq!(rng.offset(), 0);
    }

    #[test]
    fn test_seed_from_draws_two_words() {
        let mut source = SplittableEngine::with_seed(11);
        let mut probe = source.clone();
        let (x, y) = (probe.next64(), probe.next64());

        let mut rng = SplittableEngine::new();
        rng.seed_from(&mut source);
        assert_eq!((rng.x(), rng.y()), (x, y));
        assert_eq!(source, probe);
    }

    #[test]
    fn test_step_leaves_y_untouched() {
        let mut rng = SplittableEngine::with_seed(5);
        rng.step();
        assert_eq!(rng.x(), 5u64.wrapping_mul(SCG_MULTIPLIER_X));
        assert_eq!(rng.y(), SCG_DEFAULT_Y);
        assert_eq!(rng.offset(), 1);
    }

    #[test]
    fn test_skip_matches_repeated_steps() {
        let start = SplittableEngine::with_seed(1234);
        for n in [0u64, 1, 2, 3, 100, 1000] {
            let mut jumped = start.clone();
            jumped.skip(n);
            assert_eq!(jumped, stepped(start.clone(), n), "skip({}) mismatch", n);
        }
    }

    #[test]
    fn test_skip_is_additive() {
        let start = SplittableEngine::new();
        let (a, b) = (123_456_789u64, 987_654_321_000u64);

        let mut twice = start.clone();
        twice.skip(a);
        twice.skip(b);

        let mut once = start;
        once.skip(a + b);

        assert_eq!(twice.x(), once.x());
        assert_eq!(twice.offset(), once.offset());
    }

    #[test]
    fn test_skip_full_group_exponent_is_identity() {
        let mut rng = SplittableEngine::with_seed(77);
        rng.skip(1u64 << 62);
        assert_eq!(rng.x(), 77);
    }

    #[test]
    fn test_offset_wraps() {
        let mut rng = SplittableEngine::new();
        rng.skip(u64::MAX);
        rng.step();
        assert_eq!(rng.offset(), 0);
    }

    #[test]
    fn test_split_jump_and_child_step() {
        let mut parent = SplittableEngine::with_seed(9);
        parent.skip(4);
        let before = parent.clone();

        let child = parent.split();

        let mut expected_parent = before;
        expected_parent.skip(5 * 4 + 1);
        assert_eq!(parent, expected_parent);
        assert_eq!(parent.offset(), 4 + 21);

        let expected_child = stepped(expected_parent, 1);
        assert_eq!(child, expected_child);
        assert_eq!(child.y(), parent.y());
    }

    #[test]
    fn test_successive_splits_use_growing_jumps() {
        let mut parent = SplittableEngine::new();
        let first = parent.split();
        assert_eq!(first.offset(), 2);
        assert_eq!(parent.offset(), 1);

        let second = parent.split();
        assert_eq!(parent.offset(), 1 + 6);
        assert_eq!(second.offset(), 8);
        assert_ne!(first.x(), second.x());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_resumes_stream() {
        let mut rng = SplittableEngine::with_seed(42);
        rng.skip(1000);

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: SplittableEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, rng);
        assert_eq!(restored.next64(), rng.next64());
    }
}
