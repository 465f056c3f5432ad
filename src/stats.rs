use std::sync::atomic::{AtomicU64, Ordering};

/// Diagnostic counters, snapshot of [Statistics].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Counters {
    /// Total number of messages presented
    pub messages: u64,
    /// Ephemeris messages successfully decoded
    pub ephemerides: u64,
    /// New satellites in the ephemeris cache
    pub inserted: u64,
    /// Superseded ephemeris frames
    pub replaced: u64,
    /// Ephemeris frames that did not change the cache
    pub unchanged: u64,
    /// Station coordinates applied
    pub stations: u64,
    /// Decoded observation epochs
    pub epochs: u64,
    /// Signal cells that were dropped (malformed or filtered out)
    pub dropped_cells: u64,
    /// Unhandled message types
    pub ignored: u64,
    /// Messages that could not be decoded
    pub skipped: u64,
}

/// Lock free counters, shared by all producers.
#[derive(Debug, Default)]
pub(crate) struct Statistics {
    pub messages: AtomicU64,
    pub ephemerides: AtomicU64,
    pub inserted: AtomicU64,
    pub replaced: AtomicU64,
    pub unchanged: AtomicU64,
    pub stations: AtomicU64,
    pub epochs: AtomicU64,
    pub dropped_cells: AtomicU64,
    pub ignored: AtomicU64,
    pub skipped: AtomicU64,
}

impl Statistics {
    pub fn increment(counter: &AtomicU64) {
        Self::add(counter, 1);
    }

    pub fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Counters {
        Counters {
            messages: self.messages.load(Ordering::Relaxed),
            ephemerides: self.ephemerides.load(Ordering::Relaxed),
            inserted: self.inserted.load(Ordering::Relaxed),
            replaced: self.replaced.load(Ordering::Relaxed),
            unchanged: self.unchanged.load(Ordering::Relaxed),
            stations: self.stations.load(Ordering::Relaxed),
            epochs: self.epochs.load(Ordering::Relaxed),
            dropped_cells: self.dropped_cells.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}
