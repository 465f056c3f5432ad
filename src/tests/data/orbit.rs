use std::sync::atomic::{AtomicUsize, Ordering};

use crate::prelude::{Constellation, EphemerisRecord, OrbitSource, Vector3};

/// [OrbitSource] that places every satellite at the same location
pub struct FixedOrbit {
    pub position_ecef_m: Vector3<f64>,
}

impl OrbitSource for FixedOrbit {
    fn position(&self, _: &EphemerisRecord, _: Constellation, _: f64) -> Option<Vector3<f64>> {
        Some(self.position_ecef_m)
    }
}

/// [OrbitSource] that never resolves and counts its invocations
#[derive(Default)]
pub struct CountingOrbit {
    pub calls: AtomicUsize,
}

impl CountingOrbit {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl OrbitSource for std::sync::Arc<CountingOrbit> {
    fn position(&self, _: &EphemerisRecord, _: Constellation, _: f64) -> Option<Vector3<f64>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        None
    }
}
