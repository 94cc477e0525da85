//! The `OutputWriter` trait implemented by all backend writers.

use crate::{
    OutputResult, StationSnapshotRow, StationThroughputRow, TickSummaryRow, TruckUtilizationRow,
};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of station snapshots.
    fn write_station_snapshots(&mut self, rows: &[StationSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run statistics.
    fn write_report(
        &mut self,
        trucks:   &[TruckUtilizationRow],
        stations: &[StationThroughputRow],
    ) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
