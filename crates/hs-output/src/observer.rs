//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hs_core::{SimConfig, Tick};
use hs_fleet::Station;
use hs_sim::{SimObserver, SimReport};

use crate::row::{StationSnapshotRow, StationThroughputRow, TickSummaryRow, TruckUtilizationRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes station snapshots, tick summaries, and the
/// final report to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, arrivals: usize) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.0 * self.tick_duration_secs as u64,
            arrivals:     arrivals as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, stations: &[Station]) {
        let rows: Vec<StationSnapshotRow> = stations
            .iter()
            .enumerate()
            .map(|(i, s)| StationSnapshotRow {
                tick:           tick.0,
                station_id:     i as u16,
                queue_length:   s.queue_length(),
                unloaded_count: s.unloaded_count(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_station_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, report: &SimReport) {
        let trucks: Vec<TruckUtilizationRow> = report.trucks.iter().map(Into::into).collect();
        let stations: Vec<StationThroughputRow> = report.stations.iter().map(Into::into).collect();
        let result = self.writer.write_report(&trucks, &stations);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
