//! Derived distributions built only from the two primitive draws.
//!
//! Every operation here is a provided method of [`Sample`], which is
//! implemented for all [`Generator`]s. No operation inspects engine state.
//!
//! ## Bit-level behaviour
//!
//! - Floats are built by packing random mantissa bits under the exponent of
//!   `1.0` and subtracting `1.0`. `float_value` fills all 23 mantissa bits,
//!   `double_value` all 52. A 22-bit fill would leave the top mantissa bit
//!   clear and confine `float_value` to `[0, 0.5)`.
//! - `bounded_int(n)` masks draws to the smallest `2^k - 1 >= n - 1` and
//!   accepts results `<= n`, so `n` itself is a possible output. This
//!   inclusive upper bound is long-standing behaviour and is preserved.
//! - `bool_value` reads the top bit of one draw, giving a fair coin.
//!
//! ## Hardening
//!
//! Out-of-domain arguments (`n <= 0` for `bounded_int`, widths above 64 for
//! `bits`, width 0 for `nonzero_bits`) are reported as [`SamplingError`]
//! instead of producing unspecified output or looping forever.

use crate::error::SamplingError;
use crate::generator::Generator;

/// Exponent bits of `1.0f32`.
const F32_ONE_BITS: u32 = 0x3F80_0000;

/// All 23 bits of a single-precision mantissa.
const F32_MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Exponent bits of `1.0f64`.
const F64_ONE_BITS: u64 = 0x3FF0_0000_0000_0000;

/// All 52 bits of a double-precision mantissa.
const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Largest width accepted by [`Sample::bits`].
pub const MAX_BIT_WIDTH: u32 = 64;

/// Sampling operations available on every generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Sample, SplittableEngine};
///
/// let mut rng = SplittableEngine::with_seed(7);
///
/// let u = rng.double_value();
/// assert!((0.0..1.0).contains(&u));
///
/// let k = rng.bounded_int(6).unwrap();
/// assert!((0..=6).contains(&k));
///
/// let z = rng.normal(0.0, 1.0);
/// assert!(z.is_finite());
/// ```
pub trait Sample: Generator {
    /// Uniform over the full 32-bit range.
    #[inline]
    fn uint32(&mut self) -> u32 {
        self.next32()
    }

    /// Uniform over the full 64-bit range.
    #[inline]
    fn uint64(&mut self) -> u64 {
        self.next64()
    }

    /// Uniform over `[0, 2^31)`.
    #[inline]
    fn int_value(&mut self) -> i32 {
        (self.next32() & 0x7FFF_FFFF) as i32
    }

    /// Rejection-sampled integer in `[0, n]`.
    ///
    /// Needs at most two draws on average for a well-behaved generator.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NonPositiveBound`] if `n <= 0`.
    fn bounded_int(&mut self, n: i32) -> Result<i32, SamplingError> {
        if n <= 0 {
            return Err(SamplingError::NonPositiveBound { bound: n });
        }

        let bound = n as u32;
        let mut mask = bound - 1;
        mask |= mask >> 1;
        mask |= mask >> 2;
        mask |= mask >> 4;
        mask |= mask >> 8;
        mask |= mask >> 16;

        loop {
            let candidate = self.next32() & mask;
            if candidate <= bound {
                return Ok(candidate as i32);
            }
        }
    }

    /// Uniform single-precision value in `[0, 1)`.
    #[inline]
    fn float_value(&mut self) -> f32 {
        f32::from_bits(F32_ONE_BITS | (self.next32() & F32_MANTISSA_MASK)) - 1.0
    }

    /// Uniform double-precision value in `[0, 1)`.
    #[inline]
    fn double_value(&mut self) -> f64 {
        f64::from_bits(F64_ONE_BITS | (self.next64() & F64_MANTISSA_MASK)) - 1.0
    }

    /// Normal deviate with mean `mu` and standard deviation `sigma`.
    ///
    /// Marsaglia polar method: points are drawn in the square `(-1, 1)^2`
    /// until one falls strictly inside the unit circle, excluding the origin.
    fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        loop {
            let x = 2.0 * self.double_value() - 1.0;
            let y = 2.0 * self.double_value() - 1.0;
            let r = x * x + y * y;
            if r > 0.0 && r < 1.0 {
                let factor = (-2.0 * r.ln() / r).sqrt();
                return mu + sigma * x * factor;
            }
        }
    }

    /// Number of failures before the first success of a fair Bernoulli trial.
    ///
    /// Counts trailing zero bits, adding 32 for every all-zero word.
    fn geometric(&mut self) -> u32 {
        let mut failures = 0u32;
        loop {
            let word = self.next32();
            if word != 0 {
                return failures.saturating_add(word.trailing_zeros());
            }
            failures = failures.saturating_add(32);
        }
    }

    /// Fair coin: the top bit of one 32-bit draw.
    ///
    /// This is not the whole-word nonzero test, which returns `true` with
    /// probability `1 - 2^-32`. A draw of `1` is therefore `false` here.
    /// The change of semantics is recorded under "bool_value" in the
    /// crate's `DESIGN.md`.
    #[inline]
    fn bool_value(&mut self) -> bool {
        self.next32() & 0x8000_0000 != 0
    }

    /// Low `n` bits of a draw; a 32-bit draw is used when `n <= 32`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidBitWidth`] if `n > 64`.
    fn bits(&mut self, n: u32) -> Result<u64, SamplingError> {
        match n {
            0..=32 => Ok(u64::from(self.next32()) & low_mask(n)),
            33..=MAX_BIT_WIDTH => Ok(self.next64() & low_mask(n)),
            _ => Err(SamplingError::InvalidBitWidth { bits: n }),
        }
    }

    /// Repeats [`bits`](Sample::bits) until the result is nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::ZeroBitWidth`] if `n == 0` and
    /// [`SamplingError::InvalidBitWidth`] if `n > 64`.
    fn nonzero_bits(&mut self, n: u32) -> Result<u64, SamplingError> {
        if n == 0 {
            return Err(SamplingError::ZeroBitWidth);
        }
        loop {
            let value = self.bits(n)?;
            if value != 0 {
                return Ok(value);
            }
        }
    }

    /// Fills the buffer with [`double_value`](Sample::double_value) draws.
    ///
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.double_value();
        }
    }

    /// Fills the buffer with [`normal`](Sample::normal) draws.
    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64], mu: f64, sigma: f64) {
        for value in buffer.iter_mut() {
            *value = self.normal(mu, sigma);
        }
    }
}

impl<G: Generator + ?Sized> Sample for G {}

#[inline]
fn low_mask(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
