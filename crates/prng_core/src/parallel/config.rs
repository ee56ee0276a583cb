//! Parallel stream configuration.
//!
//! This module provides the validated configuration for [`StreamSet`]
//! construction and the chunked parallel fill operations.
//!
//! [`StreamSet`]: super::StreamSet

use crate::error::ConfigError;

/// Maximum number of streams a single root may hand out.
pub const MAX_STREAMS: usize = 65_536;

/// Maximum number of values filled by one stream.
pub const MAX_CHUNK_SIZE: usize = 1 << 24;

/// Default number of values filled by one stream.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Configuration for deriving independent streams.
///
/// Immutable once built. Use [`StreamConfig::builder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use prng_core::parallel::StreamConfig;
///
/// let config = StreamConfig::builder()
///     .seed(42)
///     .n_streams(8)
///     .chunk_size(1024)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.n_streams(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamConfig {
    /// Root seed; `None` or `Some(0)` selects a wall-clock seed.
    seed: Option<u32>,
    /// Number of streams handed out by `StreamSet::streams`.
    n_streams: usize,
    /// Number of values filled per stream in the parallel fills.
    chunk_size: usize,
}

impl StreamConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::default()
    }

    /// Returns the root seed, if one was set.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Returns the number of streams.
    #[inline]
    pub fn n_streams(&self) -> usize {
        self.n_streams
    }

    /// Returns the number of values filled per stream.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_streams` is 0 or greater than 65,536
    /// - `chunk_size` is 0 or greater than 2^24
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_streams == 0 || self.n_streams > MAX_STREAMS {
            return Err(ConfigError::InvalidStreamCount(self.n_streams));
        }
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            seed: None,
            n_streams: 1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Builder for [`StreamConfig`].
#[derive(Clone, Debug, Default)]
pub struct StreamConfigBuilder {
    seed: Option<u32>,
    n_streams: Option<usize>,
    chunk_size: Option<usize>,
}

impl StreamConfigBuilder {
    /// Sets the root seed.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of streams.
    #[inline]
    pub fn n_streams(mut self, n_streams: usize) -> Self {
        self.n_streams = Some(n_streams);
        self
    }

    /// Sets the number of values filled per stream.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<StreamConfig, ConfigError> {
        let defaults = StreamConfig::default();
        let config = StreamConfig {
            seed: self.seed,
            n_streams: self.n_streams.unwrap_or(defaults.n_streams),
            chunk_size: self.chunk_size.unwrap_or(defaults.chunk_size),
        };
        config.validate()?;
        Ok(config)
    }
}
