//! Mining-duration sampling.
//!
//! # Determinism strategy
//!
//! Every mining period in a run, across every truck, is drawn from ONE
//! stream, sequentially, in truck order within each tick.  The stream is an
//! explicit value owned by the simulation and passed by `&mut` into each
//! truck step; nothing here is process-global.  Two runs built from the same
//! seed therefore draw identical sequences.
//!
//! The draw site only sees the [`MiningSampler`] trait, so tests can swap the
//! seeded `SmallRng` for a [`FixedSampler`] with a scripted sequence.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{CoreError, CoreResult, MAX_MINING_TICKS, MIN_MINING_TICKS};

// ── MiningSampler ─────────────────────────────────────────────────────────────

/// Source of mining-period lengths, in ticks.
///
/// Implementations must return values ≥ 1; a zero-length mining period would
/// leave a truck's countdown with nothing to count.
pub trait MiningSampler {
    /// Draw the length of the next mining period.
    fn sample_mining_ticks(&mut self) -> u16;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG: uniform integers over the inclusive mining range
/// `[MIN_MINING_TICKS, MAX_MINING_TICKS]` (1–5 hours).
///
/// Used only from the single-threaded tick loop.
pub struct SimRng {
    rng:    SmallRng,
    mining: Uniform<u16>,
    seed:   u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng {
            rng: SmallRng::seed_from_u64(seed),
            mining: Uniform::new_inclusive(MIN_MINING_TICKS, MAX_MINING_TICKS),
            seed,
        }
    }

    /// Seed once from a non-deterministic source.
    ///
    /// The drawn seed is kept so the run can be replayed with [`SimRng::new`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this stream was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MiningSampler for SimRng {
    #[inline]
    fn sample_mining_ticks(&mut self) -> u16 {
        self.mining.sample(&mut self.rng)
    }
}

// ── FixedSampler ──────────────────────────────────────────────────────────────

/// Replays a fixed sequence of mining durations, wrapping at the end.
#[derive(Clone, Debug)]
pub struct FixedSampler {
    durations: Vec<u16>,
    next:      usize,
}

impl FixedSampler {
    /// Build from a non-empty sequence of non-zero durations.
    pub fn new(durations: Vec<u16>) -> CoreResult<Self> {
        if durations.is_empty() {
            return Err(CoreError::Config("fixed sampler needs at least one duration".into()));
        }
        if durations.contains(&0) {
            return Err(CoreError::Config("mining durations must be at least 1 tick".into()));
        }
        Ok(Self { durations, next: 0 })
    }

    /// A sampler that always returns `ticks`.
    pub fn constant(ticks: u16) -> CoreResult<Self> {
        Self::new(vec![ticks])
    }

    /// How many samples have been drawn so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl MiningSampler for FixedSampler {
    fn sample_mining_ticks(&mut self) -> u16 {
        let value = self.durations[self.next % self.durations.len()];
        self.next += 1;
        value
    }
}
