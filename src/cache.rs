use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use itertools::Itertools;
use log::{debug, trace};

use crate::prelude::{EphemerisRecord, SV};

/// Outcome of [EphemerisCache::update]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CacheUpdate {
    /// First frame for this [SV]
    Inserted,
    /// Stored frame was superseded
    Replaced,
    /// Stored frame is kept (same or more recent reference time)
    Unchanged,
}

/// [EphemerisCache] stores the latest [EphemerisRecord] of each [SV].
/// Every access goes through one lock, held for the compare-and-replace only.
#[derive(Debug, Default)]
pub struct EphemerisCache {
    inner: Mutex<HashMap<SV, EphemerisRecord>>,
}

impl EphemerisCache {
    /// Builds a new empty [EphemerisCache]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, HashMap<SV, EphemerisRecord>> {
        // records are Copy and replaced wholesale: a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Proposes a new [EphemerisRecord], keyed by its [SV].
    /// It is stored if no frame exists for this [SV] yet, or if it is
    /// more recent than the stored one (see [EphemerisRecord::is_newer_than]).
    /// A frame with unchanged reference time is never stored twice.
    ///
    /// Freshness is strict and unbounded: once a frame with a reference time
    /// far in the future is stored (a corrupted week number, for example),
    /// every later genuine frame of that [SV] is reported as
    /// [CacheUpdate::Unchanged] until an even more recent one shows up.
    /// Validate the week and time of ephemeris fields upstream if your
    /// stream may carry such frames.
    pub fn update(&self, record: EphemerisRecord) -> CacheUpdate {
        let sv = record.sv;
        let mut cache = self.locked();

        match cache.get(&sv) {
            None => {
                cache.insert(sv, record);
                debug!("{} - new ephemeris (t_ref={})", sv, record.reference_time());
                CacheUpdate::Inserted
            },
            Some(stored) => {
                if record.is_newer_than(stored) {
                    debug!(
                        "{} - ephemeris update (t_ref={} -> {})",
                        sv,
                        stored.reference_time(),
                        record.reference_time()
                    );
                    cache.insert(sv, record);
                    CacheUpdate::Replaced
                } else {
                    trace!(
                        "{} - ephemeris unchanged (t_ref={})",
                        sv,
                        stored.reference_time()
                    );
                    CacheUpdate::Unchanged
                }
            },
        }
    }

    /// Returns a copy of the latest [EphemerisRecord] for this [SV].
    pub fn lookup(&self, sv: SV) -> Option<EphemerisRecord> {
        self.locked().get(&sv).copied()
    }

    /// Number of [SV] for which we have an [EphemerisRecord].
    pub fn len(&self) -> usize {
        self.locked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }

    /// Snapshot of [SV]s for which we have an [EphemerisRecord], sorted.
    pub fn satellites(&self) -> Vec<SV> {
        self.locked().keys().copied().sorted().collect()
    }
}
