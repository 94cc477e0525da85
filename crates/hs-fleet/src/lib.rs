//! `hs-fleet` — the moving parts of the haul cycle.
//!
//! # Haul cycle
//!
//! ```text
//! Mining ──▶ TravelToStation ──▶ [Waiting] ──▶ Unloading ──▶ TravelToMining
//!   ▲                                                              │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each truck takes exactly one [`Truck::step`] per tick.  A step needs three
//! pieces of shared, mutable state, all passed in explicitly:
//!
//! - the station list (queue lengths, unloaded counters),
//! - the [`Allocator`] cursor that picks the station for each arrival,
//! - the mining-duration sampler.
//!
//! Steps therefore have to run sequentially in a fixed truck order.

pub mod allocator;
pub mod error;
pub mod station;
pub mod truck;


pub use allocator::Allocator;
pub use error::{FleetError, FleetResult};
pub use station::Station;
pub use truck::{StepOutcome, Truck, TruckState};
