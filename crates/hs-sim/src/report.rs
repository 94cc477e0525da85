//! End-of-run statistics.

use std::fmt;

use hs_core::{LedgerField, StationId, TimeLedger, TruckId};
use hs_fleet::{Station, Truck};

/// Utilisation of one truck over the run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckReport {
    pub truck:         TruckId,
    /// Raw tick counts.
    pub ledger:        TimeLedger,
    pub waiting_pct:   f64,
    pub unloading_pct: f64,
    pub traveling_pct: f64,
    pub mining_pct:    f64,
}

impl TruckReport {
    pub fn new(truck: &Truck, total_ticks: u64) -> Self {
        let ledger = *truck.ledger();
        Self {
            truck:         truck.id(),
            ledger,
            waiting_pct:   ledger.percent(LedgerField::Waiting, total_ticks),
            unloading_pct: ledger.percent(LedgerField::Unloading, total_ticks),
            traveling_pct: ledger.percent(LedgerField::Traveling, total_ticks),
            mining_pct:    ledger.percent(LedgerField::Mining, total_ticks),
        }
    }

    /// Percentages in ledger-field order: waiting, unloading, traveling, mining.
    pub fn percentages(&self) -> [f64; 4] {
        [self.waiting_pct, self.unloading_pct, self.traveling_pct, self.mining_pct]
    }
}

/// Throughput of one station over the run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationReport {
    pub station:        StationId,
    pub unloaded_count: u16,
}

/// Everything a run produces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// Ticks executed; the denominator of every percentage.
    pub total_ticks: u64,
    /// Seed of the mining-duration stream, when it came from `SimRng`.
    pub seed:        Option<u64>,
    pub trucks:      Vec<TruckReport>,
    pub stations:    Vec<StationReport>,
}

impl SimReport {
    pub fn new(trucks: &[Truck], stations: &[Station], total_ticks: u64, seed: Option<u64>) -> Self {
        Self {
            total_ticks,
            seed,
            trucks: trucks.iter().map(|t| TruckReport::new(t, total_ticks)).collect(),
            stations: stations
                .iter()
                .enumerate()
                .map(|(i, s)| StationReport {
                    station:        StationId(i as u16),
                    unloaded_count: s.unloaded_count(),
                })
                .collect(),
        }
    }

    /// Loads delivered across all stations.
    pub fn total_unloaded(&self) -> u64 {
        self.stations.iter().map(|s| s.unloaded_count as u64).sum()
    }

    /// Mean ticks spent waiting in a queue, per truck.
    pub fn mean_waiting_ticks(&self) -> f64 {
        if self.trucks.is_empty() {
            return 0.0;
        }
        let total: u64 = self.trucks.iter().map(|t| t.ledger.waiting() as u64).sum();
        total as f64 / self.trucks.len() as f64
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for truck in &self.trucks {
            for (field, pct) in LedgerField::ALL.iter().zip(truck.percentages()) {
                writeln!(f, "{}: {:.2}%", field, pct)?;
            }
            writeln!(f)?;
        }
        for station in &self.stations {
            writeln!(f, "Number of trucks unloaded: {}", station.unloaded_count)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
