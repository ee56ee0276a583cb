//! Adapters to the `rand` ecosystem.
//!
//! Both engines implement [`RngCore`] and [`SeedableRng`], so they can drive
//! any `rand` / `rand_distr` distribution. The adapters delegate to the
//! engines' own primitive draws; no extra state is introduced.

use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;

use crate::engines::{SeedingEngine, SplittableEngine};
use crate::generator::Generator;

impl RngCore for SplittableEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Generator::next32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Generator::next64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplittableEngine {
    /// Little-endian `x` lane followed by little-endian `y` lane.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut x = [0u8; 8];
        let mut y = [0u8; 8];
        x.copy_from_slice(&seed[..8]);
        y.copy_from_slice(&seed[8..]);
        SplittableEngine::from_lanes(u64::from_le_bytes(x), u64::from_le_bytes(y))
    }
}

impl RngCore for SeedingEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Generator::next32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Generator::next64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeedingEngine {
    /// Little-endian seed word; the warm-up step is applied.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        SeedingEngine::with_seed(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand_distr::{Distribution, StandardNormal};

    #[test]
    fn test_rng_core_matches_primitives() {
        let mut adapter = SplittableEngine::with_seed(21);
        let mut direct = SplittableEngine::with_seed(21);

        assert_eq!(adapter.next_u32(), direct.next32());
        assert_eq!(adapter.next_u64(), direct.next64());
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_words() {
        let mut adapter = SeedingEngine::with_seed(1);
        let mut direct = SeedingEngine::with_seed(1);

        let mut bytes = [0u8; 12];
        adapter.fill_bytes(&mut bytes);

        let full = direct.next64().to_le_bytes();
        let tail = direct.next32().to_le_bytes();
        assert_eq!(&bytes[..8], &full);
        assert_eq!(&bytes[8..], &tail);
    }

    #[test]
    fn test_try_fill_bytes_matches_fill_bytes() {
        let mut fallible = SplittableEngine::with_seed(5);
        let mut infallible = SplittableEngine::with_seed(5);

        let mut a = [0u8; 21];
        let mut b = [0u8; 21];
        assert!(fallible.try_fill_bytes(&mut a).is_ok());
        infallible.fill_bytes(&mut b);
        assert_eq!(a, b);
        assert_eq!(fallible, infallible);
    }

    #[test]
    fn test_from_seed_sets_lanes() {
        let mut seed = [0u8; 16];
        seed[..8].copy_from_slice(&42u64.to_le_bytes());
        seed[8..].copy_from_slice(&7u64.to_le_bytes());

        let engine = SplittableEngine::from_seed(seed);
        assert_eq!(engine.x(), 42);
        assert_eq!(engine.y(), 7);
        assert_eq!(engine.offset(), 0);
    }

    #[test]
    fn test_seeding_engine_from_seed_applies_warm_up() {
        let engine = SeedingEngine::from_seed(9u32.to_le_bytes());
        assert_eq!(engine, SeedingEngine::with_seed(9));
    }

    #[test]
    fn test_drives_rand_distr() {
        let mut rng = SplittableEngine::with_seed(2024);
        let samples: Vec<f64> = (0..20_000)
            .map(|_| StandardNormal.sample(&mut rng))
            .collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.05, "mean {} too far from 0", mean);

        let roll: u8 = rng.gen_range(1..=6);
        assert!((1..=6).contains(&roll));
    }
}
