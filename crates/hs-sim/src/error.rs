use hs_core::{CoreError, StationId, Tick, TruckId};
use hs_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match configured count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(
        "shortest queue not selected at {tick} after {truck}: {selected} has a wait of \
         {selected_queue} while the shortest wait is {minimum_queue}"
    )]
    ShortestWaitViolated {
        tick:           Tick,
        truck:          TruckId,
        selected:       StationId,
        selected_queue: u16,
        minimum_queue:  u16,
    },

    #[error("{truck} accounted for {recorded} ticks but the simulation ran {expected}")]
    LedgerMismatch {
        truck:    TruckId,
        recorded: u64,
        expected: u64,
    },

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
