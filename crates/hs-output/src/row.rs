//! Plain data row types written by output backends.

use hs_sim::{StationReport, TruckReport};

/// One station's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSnapshotRow {
    pub tick:           u64,
    pub station_id:     u16,
    pub queue_length:   u16,
    pub unloaded_count: u16,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: u64,
    pub arrivals:     u64,
}

/// Final utilisation of one truck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruckUtilizationRow {
    pub truck_id:        u16,
    pub waiting_ticks:   u16,
    pub unloading_ticks: u16,
    pub traveling_ticks: u16,
    pub mining_ticks:    u16,
    pub waiting_pct:     f64,
    pub unloading_pct:   f64,
    pub traveling_pct:   f64,
    pub mining_pct:      f64,
}

impl From<&TruckReport> for TruckUtilizationRow {
    fn from(t: &TruckReport) -> Self {
        Self {
            truck_id:        t.truck.0,
            waiting_ticks:   t.ledger.waiting(),
            unloading_ticks: t.ledger.unloading(),
            traveling_ticks: t.ledger.traveling(),
            mining_ticks:    t.ledger.mining(),
            waiting_pct:     t.waiting_pct,
            unloading_pct:   t.unloading_pct,
            traveling_pct:   t.traveling_pct,
            mining_pct:      t.mining_pct,
        }
    }
}

/// Final throughput of one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationThroughputRow {
    pub station_id:     u16,
    pub unloaded_count: u16,
}

impl From<&StationReport> for StationThroughputRow {
    fn from(s: &StationReport) -> Self {
        Self { station_id: s.station.0, unloaded_count: s.unloaded_count }
    }
}
