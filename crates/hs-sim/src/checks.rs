//! Debug-mode consistency checks.

use hs_core::StationId;
use hs_fleet::{Allocator, Station};

/// The cursor pointed at a station whose queue is longer than the shortest.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ShortestWaitMiss {
    pub selected:       StationId,
    pub selected_queue: u16,
    pub minimum_queue:  u16,
}

/// Verify that the allocator's cursor points at a station holding the
/// minimum queue length.  O(stations).
pub fn check_shortest_wait(
    stations:  &[Station],
    allocator: &Allocator,
) -> Result<(), ShortestWaitMiss> {
    let Some(minimum_queue) = stations.iter().map(Station::queue_length).min() else {
        return Ok(());
    };
    let selected = allocator.cursor();
    let selected_queue = stations
        .get(selected.index())
        .map(Station::queue_length)
        .unwrap_or(u16::MAX);

    if selected_queue == minimum_queue {
        Ok(())
    } else {
        Err(ShortestWaitMiss { selected, selected_queue, minimum_queue })
    }
}
