//! Unloading station state.

/// One unloading station.
///
/// `queue_length` counts the trucks ahead of (and including) the most recent
/// arrival.  It rises by one per arrival and decays by one per tick, never
/// below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    queue_length:   u16,
    unloaded_count: u16,
}

impl Station {
    pub const fn new() -> Self {
        Self { queue_length: 0, unloaded_count: 0 }
    }

    /// `count` fresh stations.
    pub fn fleet(count: usize) -> Vec<Station> {
        vec![Station::new(); count]
    }

    #[inline]
    pub fn queue_length(&self) -> u16 {
        self.queue_length
    }

    #[inline]
    pub fn unloaded_count(&self) -> u16 {
        self.unloaded_count
    }

    /// A truck joined the queue.
    #[inline]
    pub fn enqueue(&mut self) {
        self.queue_length = self.queue_length.saturating_add(1);
    }

    /// Tick-boundary decay, floored at zero.
    #[inline]
    pub fn decay(&mut self) {
        self.queue_length = self.queue_length.saturating_sub(1);
    }

    /// A truck finished unloading here.
    #[inline]
    pub fn record_unload(&mut self) {
        self.unloaded_count = self.unloaded_count.saturating_add(1);
    }
}
