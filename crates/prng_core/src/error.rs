//! Error types for the sampling layer and stream configuration.
//!
//! Engine arithmetic is total (all recurrences wrap modulo 2^32 or 2^64), so
//! no engine operation returns an error. The variants below cover caller
//! misuse of the sampling operations and invalid parallel stream settings.

use thiserror::Error;

/// Precondition violations reported by the sampling layer.
///
/// # Examples
/// ```
/// use prng_core::{Sample, SamplingError, SplittableEngine};
///
/// let mut rng = SplittableEngine::new();
/// assert_eq!(
///     rng.bits(65),
///     Err(SamplingError::InvalidBitWidth { bits: 65 })
/// );
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SamplingError {
    /// Bit width outside `[0, 64]`.
    #[error("Invalid bit width {bits}: must be in range [0, 64]")]
    InvalidBitWidth {
        /// The requested width
        bits: u32,
    },

    /// Zero-width request to an operation that loops until a nonzero draw.
    #[error("Bit width 0 can never produce a nonzero value")]
    ZeroBitWidth,

    /// Non-positive bound passed to bounded integer sampling.
    #[error("Invalid bound {bound}: must be positive")]
    NonPositiveBound {
        /// The rejected bound
        bound: i32,
    },
}

/// Configuration error for parallel stream generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Stream count outside `[1, MAX_STREAMS]`.
    #[error("Invalid stream count {0}: must be in range [1, 65_536]")]
    InvalidStreamCount(usize),

    /// Chunk size outside `[1, MAX_CHUNK_SIZE]`.
    #[error("Invalid chunk size {0}: must be in range [1, 16_777_216]")]
    InvalidChunkSize(usize),
}
