//! `hs-output` — output writers for haulsim runs.
//!
//! The CSV backend creates four files in the output directory:
//!
//! | File                      | One row per                          |
//! |---------------------------|--------------------------------------|
//! | `station_snapshots.csv`   | station, every snapshot interval     |
//! | `tick_summaries.csv`      | tick                                 |
//! | `truck_utilization.csv`   | truck, at the end of the run         |
//! | `station_throughput.csv`  | station, at the end of the run       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `hs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StationSnapshotRow, StationThroughputRow, TickSummaryRow, TruckUtilizationRow};
pub use writer::OutputWriter;
