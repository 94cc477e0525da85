use hs_core::{CoreError, StationId, TruckId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("truck state tag {0} is not one of the five haul-cycle states")]
    UnreachableState(u8),

    #[error("{0} is unloading without an assigned station")]
    Unassigned(TruckId),

    #[error("{station} is out of range for {count} stations")]
    StationOutOfRange { station: StationId, count: usize },

    #[error(transparent)]
    Ledger(#[from] CoreError),
}

pub type FleetResult<T> = Result<T, FleetError>;
