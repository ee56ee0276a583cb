//! # prng_core: Splittable Congruential Generators
//!
//! ## Role
//!
//! prng_core provides the random number infrastructure for statistical
//! simulation:
//! - A [`Generator`] capability exposing two primitive draws
//! - [`SeedingEngine`]: LCG used to expand 32-bit seeds
//! - [`SplittableEngine`]: two-lane multiplicative engine with O(64)
//!   jump-ahead and deterministic stream splitting
//! - [`Sample`]: derived distributions written once against [`Generator`]
//! - [`parallel`]: Rayon-backed fills over split streams
//!
//! This is a statistical PRNG. It makes no cryptographic claims.
//!
//! ## Static Dispatch
//!
//! Engines are concrete types, selected through the [`Engine`] enum when a
//! runtime choice is needed. `Box<dyn Generator>` is never used.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::{Generator, Sample, SplittableEngine};
//!
//! // Seed through the LCG expansion (0 would select a wall-clock seed)
//! let mut rng = SplittableEngine::new();
//! rng.seed_with(12345);
//!
//! let u = rng.double_value();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Hand an independent stream to another worker
//! let mut worker = rng.split();
//! let z = worker.normal(0.0, 1.0);
//! assert!(z.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation support for engine state and [`parallel::StreamConfig`]

#![warn(missing_docs)]

pub mod engines;
pub mod error;
pub mod generator;
pub mod interop;
pub mod parallel;
pub mod sampling;

pub use engines::{Engine, EngineKind, SeedingEngine, SplittableEngine, SKIP_TABLE};
pub use error::{ConfigError, SamplingError};
pub use generator::{time_seed, Generator};
pub use sampling::Sample;
