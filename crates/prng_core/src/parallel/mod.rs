//! Deterministic parallel sampling over split streams.
//!
//! Each worker receives its own [`SplittableEngine`](crate::SplittableEngine)
//! obtained by splitting a root; no engine is ever shared between threads.
//!
//! ## Module Structure
//!
//! - [`config`]: validated stream configuration
//! - [`streams`]: stream derivation and Rayon-backed fills

pub mod config;
pub mod streams;

pub use config::{
    StreamConfig, StreamConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MAX_STREAMS,
};
pub use streams::{par_fill_normal, par_fill_uniform, split_streams, StreamSet};
