//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  One tick
//! is five simulated minutes; the default horizon of 864 ticks covers 72
//! hours.  The mapping to elapsed wall time is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Every duration in the model (mining, travel, queue wait) is a whole
//! number of ticks, so all accounting is exact integer arithmetic.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Seconds per tick: 5 minutes.
pub const DEFAULT_TICK_DURATION_SECS: u32 = 300;

/// 72 hours at 5 minutes per tick.
pub const DEFAULT_TOTAL_TICKS: u64 = 864;

/// Upper bound on the horizon: every ledger field is a `u16` tick count, so
/// no run may exceed 65,535 ticks.
pub const MAX_TOTAL_TICKS: u64 = u16::MAX as u64;

/// Travel time between the mining area and any station, in either direction
/// (30 minutes).
pub const TRAVEL_TIME: u16 = 6;

/// Shortest mining period (1 hour).
pub const MIN_MINING_TICKS: u16 = 12;

/// Longest mining period (5 hours).
pub const MAX_MINING_TICKS: u16 = 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to elapsed simulated time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many real seconds one tick represents.  Default: 300 (5 minutes).
    pub tick_duration_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Break elapsed time into (day, hour, minute) components from sim start.
    pub fn elapsed_dhm(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs();
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.elapsed_dhm();
        write!(f, "{} (day {} {:02}:{:02})", self.current_tick, d, h, m)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run configuration: fleet topology, horizon, seed, and debug switch.
///
/// The operator supplies `truck_count`, `station_count`, and `debug`; the
/// rest default to the fixed 72-hour / 5-minute model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of trucks, 1–65535.
    pub truck_count: u16,

    /// Number of unloading stations, 1–65535.
    pub station_count: u16,

    /// Run the per-step consistency checks.  Never changes the outcome.
    pub debug: bool,

    /// Total ticks to simulate.  Default: 864 (72 hours).
    pub total_ticks: u64,

    /// Seconds per tick.  Default: 300.
    pub tick_duration_secs: u32,

    /// Master RNG seed.  `None` seeds once from OS entropy.
    pub seed: Option<u64>,

    /// Deliver a station snapshot to the observer every N ticks.
    /// 0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// Config for the standard 72-hour run.
    pub fn new(truck_count: u16, station_count: u16, debug: bool) -> Self {
        Self {
            truck_count,
            station_count,
            debug,
            total_ticks: DEFAULT_TOTAL_TICKS,
            tick_duration_secs: DEFAULT_TICK_DURATION_SECS,
            seed: None,
            output_interval_ticks: 0,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject configurations the model cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.truck_count == 0 {
            return Err(CoreError::Config("truck count must be at least 1".into()));
        }
        if self.station_count == 0 {
            return Err(CoreError::Config("station count must be at least 1".into()));
        }
        if self.total_ticks == 0 {
            return Err(CoreError::Config("total ticks must be at least 1".into()));
        }
        if self.total_ticks > MAX_TOTAL_TICKS {
            return Err(CoreError::Config(format!(
                "total ticks {} exceeds the ledger limit of {MAX_TOTAL_TICKS}",
                self.total_ticks
            )));
        }
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick duration must be non-zero".into()));
        }
        Ok(())
    }
}
