//! `hs-sim` — tick loop orchestrator for the haulsim simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Step   — every truck takes exactly one transition, in fleet order,
//!               sharing the station list, the allocator cursor, and the
//!               mining sampler.
//!   ② Check  — debug mode only: after each truck step, the cursor must
//!               point at a station with the shortest queue.
//!   ③ Decay  — every station queue shrinks by one (floor 0).
//! after the loop:
//!   debug mode only: each truck's ledger must sum to the ticks run.
//!   build the SimReport (per-truck percentages, per-station unloads).
//! ```
//!
//! Any failed check or fleet error aborts the run with a [`SimError`]; there
//! is no partial result.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::SimConfig;
//! use hs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(10, 3, false)).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! print!("{report}");
//! ```

pub mod builder;
pub mod checks;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use checks::{ShortestWaitMiss, check_shortest_wait};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{SimReport, StationReport, TruckReport};
pub use sim::Sim;
