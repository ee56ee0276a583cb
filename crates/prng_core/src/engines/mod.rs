//! Primitive engines supplying raw 32-bit and 64-bit draws.
//!
//! - [`SeedingEngine`]: glibc-style LCG, used to expand small seeds
//! - [`SplittableEngine`]: two-lane multiplicative engine with O(64)
//!   jump-ahead and deterministic splitting
//! - [`Engine`]: static dispatch enum over both
//!
//! ## Design Philosophy
//!
//! Dispatch between engines goes through `match` on [`Engine`], never through
//! trait objects, mirroring how the rest of the workspace selects models.

mod lcg;
mod scg;
mod skip_table;

pub use lcg::{
    SeedingEngine, LCG_DEFAULT_STATE, LCG_INCREMENT, LCG_MULTIPLIER, LCG_RESEED_MIX,
};
pub use scg::{
    SplittableEngine, SCG_DEFAULT_X, SCG_DEFAULT_Y, SCG_MULTIPLIER_X, SCG_MULTIPLIER_Y,
};
pub use skip_table::{build_skip_table, jump_multiplier, SKIP_TABLE};

use crate::generator::Generator;

/// Engine selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    /// Seed-expansion LCG; not intended for statistical use.
    Seeding,
    /// Splittable two-lane engine.
    #[default]
    Splittable,
}

/// Static dispatch enum over the available engines.
///
/// # Examples
///
/// ```
/// use prng_core::{Engine, EngineKind, Generator, Sample};
///
/// let mut engine = Engine::with_seed(EngineKind::Splittable, 42);
/// assert_eq!(engine.kind(), EngineKind::Splittable);
///
/// let u = engine.double_value();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    /// Seed-expansion LCG.
    Seeding(SeedingEngine),
    /// Splittable two-lane engine.
    Splittable(SplittableEngine),
}

impl Engine {
    /// Creates the default-state engine of the given kind.
    pub fn new(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Seeding => Engine::Seeding(SeedingEngine::new()),
            EngineKind::Splittable => Engine::Splittable(SplittableEngine::new()),
        }
    }

    /// Creates an engine of the given kind from a raw 32-bit seed.
    pub fn with_seed(kind: EngineKind, seed: u32) -> Self {
        match kind {
            EngineKind::Seeding => Engine::Seeding(SeedingEngine::with_seed(seed)),
            EngineKind::Splittable => Engine::Splittable(SplittableEngine::with_seed(seed)),
        }
    }

    /// Returns the engine kind.
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Seeding(_) => EngineKind::Seeding,
            Engine::Splittable(_) => EngineKind::Splittable,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineKind::default())
    }
}

impl From<SeedingEngine> for Engine {
    fn from(engine: SeedingEngine) -> Self {
        Engine::Seeding(engine)
    }
}

impl From<SplittableEngine> for Engine {
    fn from(engine: SplittableEngine) -> Self {
        Engine::Splittable(engine)
    }
}

impl Generator for Engine {
    #[inline]
    fn next32(&mut self) -> u32 {
        match self {
            Engine::Seeding(e) => e.next32(),
            Engine::Splittable(e) => e.next32(),
        }
    }

    #[inline]
    fn next64(&mut self) -> u64 {
        match self {
            Engine::Seeding(e) => e.next64(),
            Engine::Splittable(e) => e.next64(),
        }
    }

    fn seed(&mut self, s: u32) {
        match self {
            Engine::Seeding(e) => e.seed(s),
            Engine::Splittable(e) => e.seed(s),
        }
    }

    fn seed_from<G: Generator + ?Sized>(&mut self, source: &mut G) {
        match self {
            Engine::Seeding(e) => e.seed_from(source),
            Engine::Splittable(e) => e.seed_from(source),
        }
    }

    fn split(&mut self) -> Self {
        match self {
            Engine::Seeding(e) => Engine::Seeding(e.split()),
            Engine::Splittable(e) => Engine::Splittable(e.split()),
        }
    }
}
