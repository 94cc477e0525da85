//! Simulation observer trait for progress reporting and data collection.

use hs_core::Tick;
use hs_fleet::Station;

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, arrivals: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {arrivals} trucks reached the stations");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any truck steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after queue decay.
    ///
    /// `arrivals` is the number of trucks that joined a station queue this
    /// tick.
    fn on_tick_end(&mut self, _tick: Tick, _arrivals: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the stations after decay.
    fn on_snapshot(&mut self, _tick: Tick, _stations: &[Station]) {}

    /// Called once after the final tick, with the finished report.
    fn on_sim_end(&mut self, _final_tick: Tick, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
