//! The five-state haul truck.

use std::fmt;

use hs_core::{LedgerField, MiningSampler, StationId, TRAVEL_TIME, TimeLedger, TruckId};

use crate::{Allocator, FleetError, FleetResult, Station};

// ── TruckState ────────────────────────────────────────────────────────────────

/// Where a truck is in its haul cycle.
///
/// The `u8` tags are stable and are what serde reads and writes; decoding
/// any other tag is an error.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum TruckState {
    Mining          = 0,
    TravelToStation = 1,
    Waiting         = 2,
    Unloading       = 3,
    TravelToMining  = 4,
}

impl TruckState {
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Ledger field charged for a tick spent in this state.
    #[inline]
    pub fn ledger_field(self) -> LedgerField {
        match self {
            TruckState::Mining          => LedgerField::Mining,
            TruckState::TravelToStation => LedgerField::Traveling,
            TruckState::Waiting         => LedgerField::Waiting,
            TruckState::Unloading       => LedgerField::Unloading,
            TruckState::TravelToMining  => LedgerField::Traveling,
        }
    }
}

impl TryFrom<u8> for TruckState {
    type Error = FleetError;

    fn try_from(tag: u8) -> FleetResult<Self> {
        match tag {
            0 => Ok(TruckState::Mining),
            1 => Ok(TruckState::TravelToStation),
            2 => Ok(TruckState::Waiting),
            3 => Ok(TruckState::Unloading),
            4 => Ok(TruckState::TravelToMining),
            other => Err(FleetError::UnreachableState(other)),
        }
    }
}

impl From<TruckState> for u8 {
    fn from(state: TruckState) -> u8 {
        state.tag()
    }
}

impl fmt::Display for TruckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TruckState::Mining          => "mining",
            TruckState::TravelToStation => "travelling to station",
            TruckState::Waiting         => "waiting",
            TruckState::Unloading       => "unloading",
            TruckState::TravelToMining  => "travelling to mine",
        };
        f.write_str(name)
    }
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What happened during one [`Truck::step`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Timer ticked down; state unchanged.
    Continued,
    /// Timer expired and the truck moved to the given state.
    Entered(TruckState),
    /// The truck reached the stations and joined `station`'s queue with
    /// `wait` trucks ahead.
    Arrived { station: StationId, wait: u16 },
    /// The truck unloaded at `station`.
    Unloaded { station: StationId },
}

// ── Truck ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    id:               TruckId,
    state:            TruckState,
    /// Ticks left in the current state.  Unused while `Unloading`.
    timer:            u16,
    /// Set on arrival, read when unloading.
    assigned_station: Option<StationId>,
    ledger:           TimeLedger,
}

impl Truck {
    /// A truck starting the run at the mine, with its first mining period
    /// drawn from `sampler`.
    pub fn new<S: MiningSampler + ?Sized>(id: TruckId, sampler: &mut S) -> Self {
        Self::with_state(id, TruckState::Mining, sampler.sample_mining_ticks(), None)
    }

    /// A truck placed at an arbitrary point of its cycle with an empty ledger.
    pub fn with_state(
        id:               TruckId,
        state:            TruckState,
        timer:            u16,
        assigned_station: Option<StationId>,
    ) -> Self {
        Self { id, state, timer, assigned_station, ledger: TimeLedger::new() }
    }

    #[inline]
    pub fn id(&self) -> TruckId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> TruckState {
        self.state
    }

    #[inline]
    pub fn timer(&self) -> u16 {
        self.timer
    }

    #[inline]
    pub fn assigned_station(&self) -> Option<StationId> {
        self.assigned_station
    }

    #[inline]
    pub fn ledger(&self) -> &TimeLedger {
        &self.ledger
    }

    /// Advance this truck by exactly one tick.
    ///
    /// Charges one tick to the ledger field of the current state, then fires
    /// at most one transition.
    pub fn step<S: MiningSampler + ?Sized>(
        &mut self,
        stations:  &mut [Station],
        allocator: &mut Allocator,
        sampler:   &mut S,
    ) -> FleetResult<StepOutcome> {
        self.ledger.record(self.state.ledger_field())?;

        let outcome = match self.state {
            TruckState::Mining => {
                if self.count_down() {
                    self.enter(TruckState::TravelToStation, TRAVEL_TIME)
                } else {
                    StepOutcome::Continued
                }
            }

            TruckState::TravelToStation => {
                if self.count_down() {
                    let (station, wait) = allocator.admit(stations)?;
                    self.assigned_station = Some(station);
                    let next = if wait > 0 { TruckState::Waiting } else { TruckState::Unloading };
                    self.enter(next, wait);
                    StepOutcome::Arrived { station, wait }
                } else {
                    StepOutcome::Continued
                }
            }

            TruckState::Waiting => {
                if self.count_down() {
                    self.enter(TruckState::Unloading, 0)
                } else {
                    StepOutcome::Continued
                }
            }

            // Fires on the first tick in the state; there is no countdown.
            TruckState::Unloading => {
                let station = self.assigned_station.ok_or(FleetError::Unassigned(self.id))?;
                let count = stations.len();
                stations
                    .get_mut(station.index())
                    .ok_or(FleetError::StationOutOfRange { station, count })?
                    .record_unload();
                self.assigned_station = None;
                self.enter(TruckState::TravelToMining, TRAVEL_TIME);
                StepOutcome::Unloaded { station }
            }

            TruckState::TravelToMining => {
                if self.count_down() {
                    let mining = sampler.sample_mining_ticks();
                    self.enter(TruckState::Mining, mining)
                } else {
                    StepOutcome::Continued
                }
            }
        };

        Ok(outcome)
    }

    /// Decrement the timer; `true` once it reaches zero.
    #[inline]
    fn count_down(&mut self) -> bool {
        self.timer = self.timer.saturating_sub(1);
        self.timer == 0
    }

    fn enter(&mut self, state: TruckState, timer: u16) -> StepOutcome {
        log::trace!("{}: {} -> {} (timer {})", self.id, self.state, state, timer);
        self.state = state;
        self.timer = timer;
        StepOutcome::Entered(state)
    }
}
