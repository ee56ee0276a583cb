//! Independent streams for worker threads.
//!
//! Children are always derived sequentially from the root with
//! [`Generator::split`], then handed to Rayon workers. The derivation order
//! depends only on the buffer length and chunk size, so results are
//! identical for any thread count.

use rayon::prelude::*;
use tracing::debug;

use super::config::StreamConfig;
use crate::engines::SplittableEngine;
use crate::generator::Generator;
use crate::sampling::Sample;

/// Derives `count` children from `root` by successive splits.
pub fn split_streams<G: Generator>(root: &mut G, count: usize) -> Vec<G> {
    (0..count).map(|_| root.split()).collect()
}

/// Fills `buffer` with uniform `[0, 1)` values, one child stream per chunk.
///
/// # Panics
///
/// Panics if `chunk_size` is 0.
pub fn par_fill_uniform<G>(root: &mut G, buffer: &mut [f64], chunk_size: usize)
where
    G: Generator + Send,
{
    assert!(chunk_size > 0, "chunk_size must be positive");
    let children = split_streams(root, buffer.len().div_ceil(chunk_size));
    buffer
        .par_chunks_mut(chunk_size)
        .zip(children.into_par_iter())
        .for_each(|(chunk, mut rng)| rng.fill_uniform(chunk));
}

/// Fills `buffer` with normal deviates, one child stream per chunk.
///
/// # Panics
///
/// Panics if `chunk_size` is 0.
pub fn par_fill_normal<G>(
    root: &mut G,
    buffer: &mut [f64],
    chunk_size: usize,
    mu: f64,
    sigma: f64,
) where
    G: Generator + Send,
{
    assert!(chunk_size > 0, "chunk_size must be positive");
    let children = split_streams(root, buffer.len().div_ceil(chunk_size));
    buffer
        .par_chunks_mut(chunk_size)
        .zip(children.into_par_iter())
        .for_each(|(chunk, mut rng)| rng.fill_normal(chunk, mu, sigma));
}

/// A root engine handing out independent streams.
///
/// # Examples
///
/// ```rust
/// use prng_core::parallel::{StreamConfig, StreamSet};
///
/// let config = StreamConfig::builder()
///     .seed(7)
///     .n_streams(4)
///     .chunk_size(256)
///     .build()
///     .unwrap();
///
/// let mut set = StreamSet::new(config);
/// let streams = set.streams();
/// assert_eq!(streams.len(), 4);
///
/// let mut buffer = vec![0.0; 1000];
/// set.par_fill_uniform(&mut buffer);
/// assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
/// ```
#[derive(Clone, Debug)]
pub struct StreamSet {
    root: SplittableEngine,
    config: StreamConfig,
}

impl StreamSet {
    /// Seeds the root engine from the configuration.
    pub fn new(config: StreamConfig) -> Self {
        let mut root = SplittableEngine::new();
        root.seed_with(config.seed().unwrap_or(0));
        debug!(
            seed = ?config.seed(),
            n_streams = config.n_streams(),
            chunk_size = config.chunk_size(),
            "created stream set"
        );
        Self { root, config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Returns the root engine.
    #[inline]
    pub fn root(&self) -> &SplittableEngine {
        &self.root
    }

    /// Splits `n_streams` children off the root.
    pub fn streams(&mut self) -> Vec<SplittableEngine> {
        split_streams(&mut self.root, self.config.n_streams())
    }

    /// Fills `buffer` in parallel with uniform `[0, 1)` values.
    pub fn par_fill_uniform(&mut self, buffer: &mut [f64]) {
        par_fill_uniform(&mut self.root, buffer, self.config.chunk_size());
    }

    /// Fills `buffer` in parallel with normal deviates.
    pub fn par_fill_normal(&mut self, buffer: &mut [f64], mu: f64, sigma: f64) {
        par_fill_normal(&mut self.root, buffer, self.config.chunk_size(), mu, sigma);
    }
}
