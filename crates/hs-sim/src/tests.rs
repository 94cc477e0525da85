//! Integration tests for hs-sim.

use hs_core::{FixedSampler, SimConfig, Tick};

use crate::{NoopObserver, SimBuilder, SimObserver, SimReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(trucks: u16, stations: u16, debug: bool, seed: u64) -> SimConfig {
    let mut cfg = SimConfig::new(trucks, stations, debug);
    cfg.seed = Some(seed);
    cfg
}

fn run_seeded(trucks: u16, stations: u16, debug: bool, seed: u64) -> SimReport {
    SimBuilder::new(test_config(trucks, stations, debug, seed))
        .build()
        .unwrap()
        .run(&mut NoopObserver)
        .unwrap()
}

fn run_fixed(trucks: u16, stations: u16, durations: Vec<u16>) -> SimReport {
    let sampler = FixedSampler::new(durations).unwrap();
    SimBuilder::with_sampler(SimConfig::new(trucks, stations, true), sampler)
        .build()
        .unwrap()
        .run(&mut NoopObserver)
        .unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use hs_core::{StationId, TruckId, MAX_MINING_TICKS, MIN_MINING_TICKS};
    use hs_fleet::{Truck, TruckState};

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_fleet_from_config() {
        let sim = SimBuilder::new(test_config(5, 3, false, 1)).build().unwrap();
        assert_eq!(sim.trucks.len(), 5);
        assert_eq!(sim.stations.len(), 3);
        assert_eq!(sim.allocator.cursor(), StationId(0));
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
        for (i, t) in sim.trucks.iter().enumerate() {
            assert_eq!(t.id(), TruckId(i as u16));
            assert_eq!(t.state(), TruckState::Mining);
            assert!((MIN_MINING_TICKS..=MAX_MINING_TICKS).contains(&t.timer()));
        }
        assert!(sim.stations.iter().all(|s| s.queue_length() == 0 && s.unloaded_count() == 0));
    }

    #[test]
    fn initial_timers_drawn_in_truck_order() {
        let sampler = FixedSampler::new(vec![12, 13, 14]).unwrap();
        let sim = SimBuilder::with_sampler(SimConfig::new(3, 1, false), sampler)
            .build()
            .unwrap();
        let timers: Vec<u16> = sim.trucks.iter().map(Truck::timer).collect();
        assert_eq!(timers, [12, 13, 14]);
    }

    #[test]
    fn entropy_seed_is_recorded() {
        let sim = SimBuilder::new(SimConfig::new(1, 1, false)).build().unwrap();
        assert_eq!(sim.config.seed, Some(sim.sampler.seed()));
    }

    #[test]
    fn invalid_config_errors() {
        let result = SimBuilder::new(test_config(0, 1, false, 1)).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn truck_count_mismatch_errors() {
        let trucks = vec![Truck::with_state(TruckId(0), TruckState::Mining, 12, None)];
        let result = SimBuilder::new(test_config(2, 1, false, 1)).trucks(trucks).build();
        assert!(matches!(result, Err(SimError::CountMismatch { expected: 2, got: 1, .. })));
    }

    #[test]
    fn assignment_past_station_list_errors() {
        let trucks = vec![Truck::with_state(
            TruckId(0),
            TruckState::Waiting,
            2,
            Some(StationId(4)),
        )];
        let result = SimBuilder::new(test_config(1, 2, false, 1)).trucks(trucks).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use hs_core::{LedgerField, MAX_TOTAL_TICKS};
    use hs_fleet::Station;

    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let mut sim = SimBuilder::new(test_config(4, 2, false, 3)).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(864));
        assert_eq!(report.total_ticks, 864);
        assert_eq!(report.seed, Some(3));
        assert_eq!(report.trucks.len(), 4);
        assert_eq!(report.stations.len(), 2);
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(2, 1, false, 3)).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.ticks_elapsed(), 8);
        assert!(sim.check_ledgers().is_ok());
    }

    #[test]
    fn every_ledger_sums_to_ticks_run() {
        for (trucks, stations) in [(1, 1), (7, 2), (30, 3), (12, 12), (100, 1)] {
            for seed in 0..5 {
                let report = run_seeded(trucks, stations, false, seed);
                for t in &report.trucks {
                    assert_eq!(t.ledger.total(), 864, "{trucks}x{stations} seed {seed}: {t:?}");
                }
            }
        }
    }

    #[test]
    fn longest_horizon_fills_every_ledger_field_budget() {
        let mut cfg = test_config(3, 2, true, 17);
        cfg.total_ticks = MAX_TOTAL_TICKS;
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(report.total_ticks, 65_535);
        assert_eq!(sim.clock.current_tick, Tick(MAX_TOTAL_TICKS));
        for t in &report.trucks {
            assert_eq!(t.ledger.total(), MAX_TOTAL_TICKS, "{t:?}");
        }
    }

    #[test]
    fn second_run_adds_no_ticks() {
        let mut sim = SimBuilder::new(test_config(5, 2, true, 8)).build().unwrap();
        let first = sim.run(&mut NoopObserver).unwrap();
        let second = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(864));
        assert_eq!(first, second);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let report = run_seeded(20, 3, false, 17);
        for t in &report.trucks {
            let sum: f64 = t.percentages().iter().sum();
            assert!((sum - 100.0).abs() < 1e-9, "got {sum}");
            assert_eq!(t.mining_pct, t.ledger.percent(LedgerField::Mining, 864));
        }
    }

    #[test]
    fn cursor_stays_valid_every_tick() {
        let mut sim = SimBuilder::new(test_config(25, 4, false, 8)).build().unwrap();
        for _ in 0..864 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            assert!(sim.allocator.cursor().index() < sim.stations.len());
        }
    }

    #[test]
    fn unloads_match_completed_unload_ticks() {
        let report = run_seeded(15, 3, false, 5);
        let unload_ticks: u64 = report.trucks.iter().map(|t| t.ledger.unloading() as u64).sum();
        assert_eq!(report.total_unloaded(), unload_ticks);
    }

    /// Observer that counts callbacks.
    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        arrivals:  Vec<usize>,
        final_tick: Option<Tick>,
        unloaded:  u64,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, arrivals: usize) {
            self.ends += 1;
            self.arrivals.push(arrivals);
        }
        fn on_snapshot(&mut self, _t: Tick, stations: &[Station]) {
            assert_eq!(stations.len(), 4);
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, t: Tick, report: &SimReport) {
            self.final_tick = Some(t);
            self.unloaded = report.total_unloaded();
        }
    }

    #[test]
    fn observer_hooks_fire() {
        let sampler = FixedSampler::constant(12).unwrap();
        let mut cfg = SimConfig::new(4, 4, false);
        cfg.total_ticks = 100;
        cfg.output_interval_ticks = 10;
        let mut sim = SimBuilder::with_sampler(cfg, sampler).build().unwrap();
        let mut obs = Counter::default();
        let report = sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 100);
        assert_eq!(obs.ends, 100);
        assert_eq!(obs.snapshots, 10);
        assert_eq!(obs.final_tick, Some(Tick(100)));
        assert_eq!(obs.unloaded, report.total_unloaded());
        // 12 ticks mining + 6 travelling: all four trucks reach the stations
        // on tick 17.
        assert_eq!(obs.arrivals[17], 4);
        assert_eq!(obs.arrivals[..17].iter().sum::<usize>(), 0);
    }
}

// ── Debug checks ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod check_tests {
    use hs_core::{StationId, TruckId};
    use hs_fleet::{Allocator, FleetError, Station, Truck, TruckState};

    use super::*;
    use crate::{ShortestWaitMiss, SimError, check_shortest_wait};

    #[test]
    fn shortest_wait_holds_across_seeds_and_topologies() {
        for (trucks, stations) in [(1, 1), (3, 2), (40, 3), (64, 7), (9, 20)] {
            for seed in 0..5 {
                // Debug mode aborts on the first miss.
                run_seeded(trucks, stations, true, seed);
            }
        }
    }

    #[test]
    fn check_detects_cursor_off_minimum() {
        let mut stations = Station::fleet(3);
        let mut alloc = Allocator::new(3);
        stations[0].enqueue();
        assert_eq!(
            check_shortest_wait(&stations, &alloc),
            Err(ShortestWaitMiss {
                selected:       StationId(0),
                selected_queue: 1,
                minimum_queue:  0,
            })
        );
        alloc.admit(&mut stations).unwrap();
        assert!(check_shortest_wait(&stations, &alloc).is_ok());
    }

    #[test]
    fn debug_run_aborts_on_shortest_wait_violation() {
        let mut sim = SimBuilder::new(test_config(1, 2, true, 1)).build().unwrap();
        sim.stations[0].enqueue();
        sim.stations[0].enqueue();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::ShortestWaitViolated {
                tick: Tick(0),
                truck: TruckId(0),
                selected: StationId(0),
                selected_queue: 2,
                minimum_queue: 0,
            }
        ));
    }

    #[test]
    fn release_run_ignores_the_same_state() {
        let mut sim = SimBuilder::new(test_config(1, 2, false, 1)).build().unwrap();
        sim.stations[0].enqueue();
        sim.stations[0].enqueue();
        assert!(sim.run(&mut NoopObserver).is_ok());
    }

    #[test]
    fn ledger_check_reports_mismatch() {
        let mut sim = SimBuilder::new(test_config(2, 1, true, 1)).build().unwrap();
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        sim.clock.advance();
        let err = sim.check_ledgers().unwrap_err();
        assert!(matches!(
            err,
            SimError::LedgerMismatch { truck: TruckId(0), recorded: 3, expected: 4 }
        ));
    }

    #[test]
    fn fleet_errors_abort_the_run() {
        let trucks = vec![Truck::with_state(TruckId(0), TruckState::Unloading, 0, None)];
        let mut sim = SimBuilder::new(test_config(1, 1, false, 1)).trucks(trucks).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Fleet(FleetError::Unassigned(TruckId(0)))));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn single_truck_single_station_unload_bounds() {
        for seed in 0..50 {
            let report = run_seeded(1, 1, true, seed);
            let unloaded = report.stations[0].unloaded_count;
            assert!((11..=34).contains(&unloaded), "seed {seed}: {unloaded}");
            assert_eq!(report.trucks[0].ledger.waiting(), 0);
        }
    }

    #[test]
    fn single_truck_extremes_hit_bounds_exactly() {
        // 25-tick cycle, first unload on tick 18.
        assert_eq!(run_fixed(1, 1, vec![12]).stations[0].unloaded_count, 34);
        // 73-tick cycle, first unload on tick 66.
        assert_eq!(run_fixed(1, 1, vec![60]).stations[0].unloaded_count, 11);
    }

    #[test]
    fn debug_mode_does_not_change_results() {
        for (trucks, stations) in [(1, 1), (10, 3), (50, 4), (5, 5)] {
            for seed in [0, 42, 1_000_003] {
                let plain = run_seeded(trucks, stations, false, seed);
                let checked = run_seeded(trucks, stations, true, seed);
                assert_eq!(plain, checked, "{trucks}x{stations} seed {seed}");
            }
        }
    }

    #[test]
    fn same_seed_same_report() {
        assert_eq!(run_seeded(12, 3, false, 9), run_seeded(12, 3, false, 9));
    }

    #[test]
    fn enough_stations_means_no_waiting() {
        for seed in 0..10 {
            let report = run_seeded(8, 8, false, seed);
            assert_eq!(report.mean_waiting_ticks(), 0.0, "seed {seed}");
        }
    }

    #[test]
    fn more_stations_never_lengthen_the_wait() {
        // All four trucks arrive together on every cycle.
        let one = run_fixed(4, 1, vec![12]);
        let two = run_fixed(4, 2, vec![12]);
        let four = run_fixed(4, 4, vec![12]);
        assert!(one.mean_waiting_ticks() > 0.0);
        assert!(two.mean_waiting_ticks() <= one.mean_waiting_ticks());
        assert!(four.mean_waiting_ticks() <= two.mean_waiting_ticks());
        assert_eq!(four.mean_waiting_ticks(), 0.0);
        assert!(four.total_unloaded() >= one.total_unloaded());
    }

    #[test]
    fn report_renders_text_summary() {
        let text = run_fixed(1, 1, vec![12]).to_string();
        assert!(text.contains("Waiting: 0.00%"), "{text}");
        assert!(text.contains("Unloading: "));
        assert!(text.contains("Traveling: "));
        assert!(text.contains("Mining: "));
        assert!(text.contains("Number of trucks unloaded: 34"));
    }
}
