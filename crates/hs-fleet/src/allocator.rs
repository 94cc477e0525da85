//! Round-robin station allocator.
//!
//! Arriving trucks are offered to stations in strict cyclic order; the
//! cursor advances by one per arrival whichever station that was.  Combined
//! with the uniform once-per-tick queue decay this keeps the cursor on a
//! station with the shortest queue without ever searching for it: queue
//! lengths read in cursor order are non-decreasing and differ by at most
//! one.  The simulation can verify that at runtime in debug mode.

use hs_core::StationId;

use crate::{FleetError, FleetResult, Station};

/// Shared round-robin cursor into the station list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocator {
    cursor:        usize,
    station_count: usize,
}

impl Allocator {
    /// Cursor at station 0 over `station_count` stations (must be ≥ 1).
    pub fn new(station_count: usize) -> Self {
        debug_assert!(station_count > 0, "allocator needs at least one station");
        Self { cursor: 0, station_count }
    }

    /// The station the next arrival will be offered.
    #[inline]
    pub fn cursor(&self) -> StationId {
        StationId(self.cursor as u16)
    }

    /// Admit one arriving truck at the cursor's station.
    ///
    /// Returns the station and the queue length observed before joining,
    /// which is the number of ticks the truck must wait.  The station's
    /// queue grows by one and the cursor moves on.
    pub fn admit(&mut self, stations: &mut [Station]) -> FleetResult<(StationId, u16)> {
        let station_id = self.cursor();
        let count = stations.len();
        let station = stations
            .get_mut(self.cursor)
            .ok_or(FleetError::StationOutOfRange { station: station_id, count })?;

        let wait = station.queue_length();
        station.enqueue();
        self.cursor = (self.cursor + 1) % self.station_count;
        Ok((station_id, wait))
    }

    /// End-of-tick decay: every queue shrinks by one, floored at zero.
    pub fn decay_all(stations: &mut [Station]) {
        stations.iter_mut().for_each(Station::decay);
    }
}
