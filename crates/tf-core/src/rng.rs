//! Deterministic simulation-level and per-segment RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every random draw in the engine flows from one seeded [`SimRng`] owned by
//! the caller.  Generators take it by `&mut` instead of reaching for ambient
//! thread-local randomness, so a fixed seed replays a run exactly.
//!
//! The intensity updater needs one independent stream per segment so the
//! per-segment work can run in any order (or in parallel) and still produce
//! the same values.  It draws a single `u64` tick seed from the `SimRng` and
//! derives each segment's stream as:
//!
//!   seed = tick_seed XOR (segment_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive segment ids uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::SegmentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (segment initialisation,
/// incident generation, scheduling jitter).
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, derive [`SegmentRng`]s or children from this one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f64` this is a draw in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SegmentRng ────────────────────────────────────────────────────────────────

/// Per-segment deterministic RNG for one update tick.
///
/// Never shared between threads: each Rayon worker builds its own from the
/// shared tick seed.
pub struct SegmentRng(SmallRng);

impl SegmentRng {
    /// Seed deterministically from a tick seed and a segment id.
    pub fn new(tick_seed: u64, segment: SegmentId) -> Self {
        let seed = tick_seed ^ (segment.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SegmentRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
