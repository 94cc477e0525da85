//! `hs-core` — foundational types for the `haulsim` mining-haul simulator.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TruckId`, `StationId`                                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, timing constants     |
//! | [`rng`]         | `MiningSampler` capability, `SimRng`, `FixedSampler`  |
//! | [`ledger`]      | `TimeLedger`, `LedgerField`                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod ledger;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{StationId, TruckId};
pub use ledger::{LedgerField, TimeLedger};
pub use rng::{FixedSampler, MiningSampler, SimRng};
pub use time::{
    DEFAULT_TICK_DURATION_SECS, DEFAULT_TOTAL_TICKS, MAX_MINING_TICKS, MAX_TOTAL_TICKS,
    MIN_MINING_TICKS, SimClock, SimConfig, TRAVEL_TIME, Tick,
};
