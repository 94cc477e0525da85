//! Fluent builder for constructing a [`Sim`].

use hs_core::{MiningSampler, SimConfig, SimRng, TruckId};
use hs_fleet::{Allocator, Station, Truck};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — fleet size, horizon, seed, debug switch, …
/// - `S: MiningSampler` — defaults to a [`SimRng`] seeded from
///   `config.seed` (or OS entropy when unset)
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                           |
/// |----------------|---------------------------------------------------|
/// | `.trucks(v)`   | `truck_count` trucks mining, timers drawn in order |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(10, 3, true)).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: MiningSampler> {
    config:  SimConfig,
    sampler: S,
    trucks:  Option<Vec<Truck>>,
}

impl SimBuilder<SimRng> {
    /// Builder backed by a seeded [`SimRng`].
    ///
    /// When `config.seed` is `None` a seed is drawn from OS entropy and
    /// written back into the config, so the report names it.
    pub fn new(mut config: SimConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };
        config.seed = Some(sampler.seed());
        log::info!("mining durations seeded with {}", sampler.seed());
        Self::with_sampler(config, sampler)
    }
}

impl<S: MiningSampler> SimBuilder<S> {
    /// Builder backed by any sampler (e.g. a `FixedSampler` in tests).
    pub fn with_sampler(config: SimConfig, sampler: S) -> Self {
        Self { config, sampler, trucks: None }
    }

    /// Supply the initial trucks (must be length `truck_count`).
    ///
    /// If not called, every truck starts `Mining` with a timer drawn from
    /// the sampler, truck 0 first.
    pub fn trucks(mut self, trucks: Vec<Truck>) -> Self {
        self.trucks = Some(trucks);
        self
    }

    /// Validate inputs, create the fleet and stations, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        let truck_count = self.config.truck_count as usize;
        let station_count = self.config.station_count as usize;

        let trucks = match self.trucks {
            Some(t) => {
                if t.len() != truck_count {
                    return Err(SimError::CountMismatch {
                        expected: truck_count,
                        got:      t.len(),
                        what:     "initial trucks",
                    });
                }
                if let Some(bad) = t.iter().find_map(|truck| {
                    truck.assigned_station().filter(|s| s.index() >= station_count)
                }) {
                    return Err(SimError::Config(format!(
                        "initial truck assigned to {bad}, but only {station_count} stations exist"
                    )));
                }
                t
            }
            None => (0..self.config.truck_count)
                .map(|i| Truck::new(TruckId(i), &mut self.sampler))
                .collect(),
        };

        Ok(Sim {
            clock:     self.config.make_clock(),
            config:    self.config,
            trucks,
            stations:  Station::fleet(station_count),
            allocator: Allocator::new(station_count),
            sampler:   self.sampler,
        })
    }
}
