//! Decoded observation epochs
use std::collections::HashMap;

use crate::prelude::{Vector3, SV};

/// Observables of one signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalMeasurement {
    /// RTCM signal code, for example "1C"
    pub signal: String,
    /// Pseudo range (m), 0 when not available.
    pub pseudo_range_m: f64,
    /// Carrier phase (cycles), 0 when not available.
    pub phase_cycles: f64,
    /// Carrier to noise density (dB.Hz)
    pub snr_dbhz: f64,
    /// Lock time indicator
    pub lock_time: u16,
    /// Half cycle ambiguity indicator
    pub half_cycle: bool,
    /// Doppler shift (Hz), 0 when not available.
    pub doppler_hz: f64,
}

/// One satellite within one [EpochObservation]
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteState {
    /// [SV]
    pub sv: SV,
    /// ECEF position [m], when an orbit could be resolved.
    pub position_ecef_m: Option<Vector3<f64>>,
    /// Azimuth angle, when the receiver position is known.
    pub azimuth: Option<f64>,
    /// Elevation angle, when the receiver position is known.
    pub elevation: Option<f64>,
    /// Measurements, indexed by signal code
    pub signals: HashMap<String, SignalMeasurement>,
}

impl SatelliteState {
    pub(crate) fn new(sv: SV) -> Self {
        Self {
            sv,
            position_ecef_m: None,
            azimuth: None,
            elevation: None,
            signals: Default::default(),
        }
    }

    /// Returns [SignalMeasurement] for this signal code
    pub fn signal(&self, code: &str) -> Option<&SignalMeasurement> {
        self.signals.get(code)
    }
}

/// [EpochObservation] gathers all measurements of one MSM.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochObservation {
    /// Receiver time tag (s)
    pub epoch_time_s: f64,
    /// [SatelliteState]s, in order of first appearance
    satellites: Vec<SatelliteState>,
}

impl EpochObservation {
    pub(crate) fn new(epoch_time_s: f64) -> Self {
        Self {
            epoch_time_s,
            satellites: Vec::new(),
        }
    }

    /// Returns [SatelliteState] for this [SV]
    pub fn get(&self, sv: SV) -> Option<&SatelliteState> {
        self.satellites.iter().find(|sat| sat.sv == sv)
    }

    pub(crate) fn get_mut(&mut self, sv: SV) -> Option<&mut SatelliteState> {
        self.satellites.iter_mut().find(|sat| sat.sv == sv)
    }

    /// Appends a new [SatelliteState], unless this [SV] already exists.
    /// Returns true on insertion.
    pub(crate) fn insert(&mut self, state: SatelliteState) -> bool {
        if self.get(state.sv).is_some() {
            false
        } else {
            self.satellites.push(state);
            true
        }
    }

    /// Iterates [SatelliteState]s in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = &SatelliteState> + '_ {
        self.satellites.iter()
    }

    /// Iterates all ([SV], [SignalMeasurement]) pairs
    pub fn measurements(&self) -> impl Iterator<Item = (SV, &SignalMeasurement)> + '_ {
        self.satellites
            .iter()
            .flat_map(|sat| sat.signals.values().map(move |meas| (sat.sv, meas)))
    }

    /// Number of satellites
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }
}
