//! The `Sim` struct and its tick loop.

use hs_core::{MiningSampler, SimClock, SimConfig, SimRng, Tick};
use hs_fleet::{Allocator, Station, StepOutcome, Truck};

use crate::checks::check_shortest_wait;
use crate::{SimError, SimObserver, SimReport, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns every piece of mutable state in a run.  The station list,
/// the allocator cursor, and the sampler are fields here and are lent to
/// each truck's step in turn; nothing is global.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: MiningSampler = SimRng> {
    /// Run configuration (fleet size, horizon, debug switch, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// Trucks in fixed step order.
    pub trucks: Vec<Truck>,

    /// Unloading stations, indexed by `StationId`.
    pub stations: Vec<Station>,

    /// Round-robin cursor shared by all arriving trucks.
    pub allocator: Allocator,

    /// Mining-duration stream shared by all trucks.
    pub sampler: S,
}

impl<S: MiningSampler> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` and return the report.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        log::info!(
            "starting run: {} trucks, {} stations, {} ticks, debug {}",
            self.trucks.len(),
            self.stations.len(),
            self.config.total_ticks,
            self.config.debug,
        );

        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer)?;
        }

        if self.config.debug {
            self.check_ledgers()?;
        }

        let report = self.report();
        observer.on_sim_end(self.clock.current_tick, &report);
        log::info!(
            "run finished at {}: {} loads delivered",
            self.clock,
            report.total_unloaded()
        );
        Ok(report)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Ticks executed so far.
    #[inline]
    pub fn ticks_elapsed(&self) -> u64 {
        self.clock.current_tick.0
    }

    /// Report for the ticks executed so far.
    pub fn report(&self) -> SimReport {
        SimReport::new(&self.trucks, &self.stations, self.ticks_elapsed(), self.config.seed)
    }

    /// Every truck's ledger must account for every tick executed.
    pub fn check_ledgers(&self) -> SimResult<()> {
        let expected = self.ticks_elapsed();
        for truck in &self.trucks {
            let recorded = truck.ledger().total();
            if recorded != expected {
                log::error!(
                    "{} accounted for {recorded} ticks, simulation ran {expected}",
                    truck.id()
                );
                return Err(SimError::LedgerMismatch { truck: truck.id(), recorded, expected });
            }
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let arrivals = self.process_tick(now)?;
        observer.on_tick_end(now, arrivals);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            log::debug!("{}: {arrivals} arrivals", self.clock);
            observer.on_snapshot(now, &self.stations);
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let Sim { config, trucks, stations, allocator, sampler, .. } = self;
        let mut arrivals = 0;

        // ── Phase 1: step every truck, in order ───────────────────────────
        for truck in trucks.iter_mut() {
            if let StepOutcome::Arrived { .. } = truck.step(stations, allocator, sampler)? {
                arrivals += 1;
            }

            // ── Phase 2: shortest-wait check (debug only) ─────────────────
            if config.debug {
                if let Err(miss) = check_shortest_wait(stations, allocator) {
                    log::error!(
                        "shortest queue not selected at {now}: {} has wait {}, shortest is {}",
                        miss.selected,
                        miss.selected_queue,
                        miss.minimum_queue
                    );
                    return Err(SimError::ShortestWaitViolated {
                        tick:           now,
                        truck:          truck.id(),
                        selected:       miss.selected,
                        selected_queue: miss.selected_queue,
                        minimum_queue:  miss.minimum_queue,
                    });
                }
            }
        }

        // ── Phase 3: uniform queue decay ──────────────────────────────────
        Allocator::decay_all(stations);

        Ok(arrivals)
    }
}
