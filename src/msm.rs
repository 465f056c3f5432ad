//! Multiple Signal Message (MSM) decoding
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    constants::{RANGE_MS_M, SPEED_OF_LIGHT_M_S},
    decoder::Decoder,
    error::Error,
    message::{field, satellite_from_prn, ParsedMessage},
    observation::{EpochObservation, SatelliteState, SignalMeasurement},
    prelude::{Constellation, Vector3, SV},
    stats::Statistics,
};

/// Rough range (DF397) sentinel
const ROUGH_RANGE_INVALID: f64 = 255.0;

/// Rough phase range rate (DF399) sentinel
const ROUGH_RATE_INVALID: f64 = -8192.0;

/// Fine phase range rate (DF404) sentinel
const FINE_RATE_INVALID: f64 = -16384.0;

/// Fine phase range rate resolution (m/s)
const FINE_RATE_SCALE: f64 = 1.0E-4;

/// MSM constellation table: (identity prefix, constellation, epoch time field)
const MSM_SYSTEMS: [(&str, Constellation, &str); 6] = [
    ("107", Constellation::GPS, "DF004"),
    ("108", Constellation::Glonass, "DF034"),
    ("109", Constellation::Galileo, "DF248"),
    ("110", Constellation::SBAS, "DF004"),
    ("111", Constellation::QZSS, "DF428"),
    ("112", Constellation::BeiDou, "DF427"),
];

/// MSM cell resolution, selects cell field names and sentinels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// MSM1 to MSM5
    Standard,
    /// MSM6 and MSM7
    Extended,
}

impl Resolution {
    fn from_subtype(subtype: u8) -> Self {
        if subtype >= 6 {
            Self::Extended
        } else {
            Self::Standard
        }
    }

    fn fine_range(&self) -> (&'static str, f64) {
        match self {
            Self::Standard => ("DF400", -16384.0),
            Self::Extended => ("DF405", -524288.0),
        }
    }

    fn fine_phase(&self) -> (&'static str, f64) {
        match self {
            Self::Standard => ("DF401", -2097152.0),
            Self::Extended => ("DF406", -8388608.0),
        }
    }

    fn lock_time(&self) -> &'static str {
        match self {
            Self::Standard => "DF402",
            Self::Extended => "DF407",
        }
    }

    fn snr(&self) -> &'static str {
        match self {
            Self::Standard => "DF403",
            Self::Extended => "DF408",
        }
    }
}

/// One MSM family: constellation and resolution
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct MsmSystem {
    /// [Constellation] of this family
    pub constellation: Constellation,
    /// Epoch time field (ms)
    pub time_field: &'static str,
    /// Cell [Resolution]
    pub resolution: Resolution,
}

impl MsmSystem {
    /// Identifies MSM1..=7 messages of supported constellations ("1077", "1124"..)
    pub(crate) fn from_identity(identity: &str) -> Option<Self> {
        if identity.len() != 4 || !identity.is_ascii() {
            return None;
        }

        let (prefix, subtype) = identity.split_at(3);
        let subtype = subtype.parse::<u8>().ok()?;

        if !(1..=7).contains(&subtype) {
            return None;
        }

        MSM_SYSTEMS
            .iter()
            .find(|(id, _, _)| *id == prefix)
            .map(|(_, constellation, time_field)| Self {
                constellation: *constellation,
                time_field: *time_field,
                resolution: Resolution::from_subtype(subtype),
            })
    }
}

/// Rough range and range rate, shared by all signals of one satellite
#[derive(Debug, Copy, Clone, Default)]
struct RoughRange {
    /// Rough range (m), when the integer milliseconds are valid
    range_m: Option<f64>,
    /// Rough range (m) of the phase, reduced to the sub millisecond part
    /// when the integer milliseconds are invalid.
    phase_range_m: Option<f64>,
    /// Rough range rate (m/s)
    rate_m_s: Option<f64>,
}

impl RoughRange {
    fn new(msg: &dyn ParsedMessage, ordinal: usize) -> Self {
        let modulo = msg.value(&format!("DF398_{:02}", ordinal));

        let integer_ms = msg
            .value(&format!("DF397_{:02}", ordinal))
            .filter(|ms| *ms != ROUGH_RANGE_INVALID);

        let range_m = integer_ms.map(|ms| (ms + modulo.unwrap_or(0.0)) * RANGE_MS_M);

        let phase_range_m = match integer_ms {
            Some(_) => range_m,
            None => modulo.map(|modulo| modulo * RANGE_MS_M),
        };

        let rate_m_s = msg
            .value(&format!("DF399_{:02}", ordinal))
            .filter(|rate| *rate != ROUGH_RATE_INVALID);

        Self {
            range_m,
            phase_range_m,
            rate_m_s,
        }
    }
}

/// Reads one fine field, unless absent or equal to its sentinel
fn fine_value(msg: &dyn ParsedMessage, (name, sentinel): (&str, f64), cell: &str) -> Option<f64> {
    msg.value(&format!("{}_{}", name, cell))
        .filter(|value| *value != sentinel)
}

impl Decoder {
    /// Decodes one MSM into an [EpochObservation].
    pub(crate) fn decode_msm(
        &self,
        msg: &dyn ParsedMessage,
        system: MsmSystem,
    ) -> Result<EpochObservation, Error> {
        let constellation = system.constellation;

        if !self.cfg.is_enabled(constellation) {
            return Err(Error::DisabledConstellation(constellation));
        }

        let epoch_time_s = field(msg, system.time_field)? / 1000.0;

        // cells are contiguous, starting at 1
        let mut cells = Vec::<i64>::new();

        for i in 1..=self.cfg.max_cells {
            match msg.value(&format!("CELLPRN_{:02}", i)) {
                Some(prn) => cells.push(prn.round() as i64),
                None => break,
            }
        }

        if cells.is_empty() {
            return Err(Error::NoCells);
        }

        // satellite ordinal (1 based) by ascending PRN
        let ordinals = cells
            .iter()
            .copied()
            .sorted()
            .dedup()
            .enumerate()
            .map(|(k, prn)| (prn, k + 1))
            .collect::<HashMap<_, _>>();

        let receiver = self.receiver_position();

        let mut epoch = EpochObservation::new(epoch_time_s);
        let mut rough_ranges = HashMap::<i64, RoughRange>::new();
        let mut channels = HashMap::<SV, Option<i8>>::new();
        let mut dropped = 0_u64;

        for (i, prn) in cells.iter().enumerate() {
            let cell = format!("{:02}", i + 1);

            let sv = match satellite_from_prn(constellation, *prn) {
                Ok(sv) => sv,
                Err(e) => {
                    trace!("{} - cell #{}: {}", msg.identity(), cell, e);
                    dropped += 1;
                    continue;
                },
            };

            if !channels.contains_key(&sv) {
                let channel = self.new_satellite(&mut epoch, sv, constellation, receiver);
                channels.insert(sv, channel);
            }

            let signal = match msg.text(&format!("CELLSIG_{}", cell)) {
                Some(signal) => signal,
                None => {
                    trace!("{}({}) - cell #{}: missing signal", epoch_time_s, sv, cell);
                    dropped += 1;
                    continue;
                },
            };

            let channel = channels.get(&sv).copied().flatten();

            let frequency = self
                .frequencies
                .frequency(&signal, sv, channel)
                .map(|(frequency, _)| frequency)
                .unwrap_or(0.0);

            let rough = *rough_ranges
                .entry(*prn)
                .or_insert_with(|| RoughRange::new(msg, ordinals[prn]));

            let measurement = Self::signal_measurement(
                msg,
                system.resolution,
                &cell,
                signal,
                rough,
                frequency,
            );

            if measurement.snr_dbhz > 0.0 || measurement.phase_cycles != 0.0 {
                if let Some(state) = epoch.get_mut(sv) {
                    state
                        .signals
                        .insert(measurement.signal.clone(), measurement);
                }
            } else {
                trace!(
                    "{}({}) - {} discarded: no snr nor phase",
                    epoch_time_s,
                    sv,
                    measurement.signal
                );
                dropped += 1;
            }
        }

        Statistics::add(&self.stats.dropped_cells, dropped);
        Statistics::increment(&self.stats.epochs);

        debug!(
            "{}({}) - epoch t={} with {} satellites",
            msg.identity(),
            constellation,
            epoch_time_s,
            epoch.len()
        );

        Ok(epoch)
    }

    /// Creates the [SatelliteState] of a newly seen [SV] and resolves its
    /// position and angles when possible. The cached frame is copied out of the
    /// cache first: collaborators are never invoked while the cache is locked.
    /// Returns the GLONASS frequency channel, if known.
    fn new_satellite(
        &self,
        epoch: &mut EpochObservation,
        sv: SV,
        constellation: Constellation,
        receiver: Option<Vector3<f64>>,
    ) -> Option<i8> {
        let mut state = SatelliteState::new(sv);
        let ephemeris = self.cache.lookup(sv);

        if let (Some(ephemeris), Some(orbit)) = (&ephemeris, &self.orbit) {
            match orbit.position(ephemeris, constellation, epoch.epoch_time_s) {
                Some(position) => {
                    state.position_ecef_m = Some(position);

                    if let Some(receiver) = receiver {
                        let (azimuth, elevation) =
                            self.geometry.azimuth_elevation(&position, &receiver);
                        state.azimuth = Some(azimuth);
                        state.elevation = Some(elevation);
                    }
                },
                None => {
                    trace!("{}({}) - unresolved position", epoch.epoch_time_s, sv);
                },
            }
        }

        epoch.insert(state);

        if sv.constellation == Constellation::Glonass {
            ephemeris.and_then(|eph| eph.frequency_channel())
        } else {
            None
        }
    }

    /// Rebuilds the observables of one cell from rough and fine values.
    fn signal_measurement(
        msg: &dyn ParsedMessage,
        resolution: Resolution,
        cell: &str,
        signal: String,
        rough: RoughRange,
        frequency: f64,
    ) -> SignalMeasurement {
        let mut measurement = SignalMeasurement {
            signal,
            ..Default::default()
        };

        if let Some(range_m) = rough.range_m {
            if let Some(fine) = fine_value(msg, resolution.fine_range(), cell) {
                measurement.pseudo_range_m = range_m + fine * RANGE_MS_M;
            }
        }

        if let Some(range_m) = rough.phase_range_m {
            if let Some(fine) = fine_value(msg, resolution.fine_phase(), cell) {
                let phase_range_m = range_m + fine * RANGE_MS_M;
                if frequency > 0.0 {
                    measurement.phase_cycles = phase_range_m * frequency / SPEED_OF_LIGHT_M_S;
                }
            }
        }

        if let Some(rate_m_s) = rough.rate_m_s {
            if let Some(fine) = fine_value(msg, ("DF404", FINE_RATE_INVALID), cell) {
                let total_rate_m_s = rate_m_s + fine * FINE_RATE_SCALE;
                if frequency > 0.0 {
                    measurement.doppler_hz = -total_rate_m_s * frequency / SPEED_OF_LIGHT_M_S;
                }
            }
        }

        let cell_value = |name: &str| msg.value(&format!("{}_{}", name, cell));

        measurement.snr_dbhz = cell_value(resolution.snr()).unwrap_or(0.0);
        measurement.lock_time = cell_value(resolution.lock_time())
            .map(|lock| lock.round() as u16)
            .unwrap_or(0);
        measurement.half_cycle = cell_value("DF420").map(|flag| flag != 0.0).unwrap_or(false);

        measurement
    }
}
