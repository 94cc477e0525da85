//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `station_snapshots.csv`
//! - `tick_summaries.csv`
//! - `truck_utilization.csv`
//! - `station_throughput.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{
    OutputResult, StationSnapshotRow, StationThroughputRow, TickSummaryRow, TruckUtilizationRow,
};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    snapshots:   Writer<File>,
    summaries:   Writer<File>,
    utilization: Writer<File>,
    throughput:  Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("station_snapshots.csv"))?;
        snapshots.write_record(["tick", "station_id", "queue_length", "unloaded_count"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "arrivals"])?;

        let mut utilization = Writer::from_path(dir.join("truck_utilization.csv"))?;
        utilization.write_record([
            "truck_id",
            "waiting_ticks",
            "unloading_ticks",
            "traveling_ticks",
            "mining_ticks",
            "waiting_pct",
            "unloading_pct",
            "traveling_pct",
            "mining_pct",
        ])?;

        let mut throughput = Writer::from_path(dir.join("station_throughput.csv"))?;
        throughput.write_record(["station_id", "unloaded_count"])?;

        Ok(Self {
            snapshots,
            summaries,
            utilization,
            throughput,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_station_snapshots(&mut self, rows: &[StationSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.station_id.to_string(),
                row.queue_length.to_string(),
                row.unloaded_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.arrivals.to_string(),
        ])?;
        Ok(())
    }

    fn write_report(
        &mut self,
        trucks:   &[TruckUtilizationRow],
        stations: &[StationThroughputRow],
    ) -> OutputResult<()> {
        for row in trucks {
            self.utilization.write_record(&[
                row.truck_id.to_string(),
                row.waiting_ticks.to_string(),
                row.unloading_ticks.to_string(),
                row.traveling_ticks.to_string(),
                row.mining_ticks.to_string(),
                format!("{:.4}", row.waiting_pct),
                format!("{:.4}", row.unloading_pct),
                format!("{:.4}", row.traveling_pct),
                format!("{:.4}", row.mining_pct),
            ])?;
        }
        for row in stations {
            self.throughput.write_record(&[
                row.station_id.to_string(),
                row.unloaded_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.utilization.flush()?;
        self.throughput.flush()?;
        Ok(())
    }
}
