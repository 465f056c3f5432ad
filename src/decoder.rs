//! Message dispatcher
use std::sync::{PoisonError, RwLock};

use log::{debug, trace, warn};

use crate::{
    cache::{CacheUpdate, EphemerisCache},
    carrier::{FrequencySource, SignalTable},
    cfg::Config,
    ephemeris::EphemerisKind,
    error::Error,
    message::{field, ParsedMessage},
    msm::MsmSystem,
    orbit::{GeometrySource, OrbitSource, Topocentric},
    prelude::{EpochObservation, Vector3, SV},
    stats::{Counters, Statistics},
};

/// Message families we know how to handle
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum MessageKind {
    /// Broadcast ephemeris
    Ephemeris(EphemerisKind),
    /// Station coordinates (1005, 1006)
    StationCoordinates,
    /// Multiple Signal Message
    Observation(MsmSystem),
}

impl MessageKind {
    pub(crate) fn from_identity(identity: &str) -> Option<Self> {
        if let Some(kind) = EphemerisKind::from_identity(identity) {
            return Some(Self::Ephemeris(kind));
        }

        match identity {
            "1005" | "1006" => Some(Self::StationCoordinates),
            _ => MsmSystem::from_identity(identity).map(Self::Observation),
        }
    }
}

/// Successful outcome of [Decoder::decode]
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Ephemeris frame was decoded and proposed to the cache
    Ephemeris { sv: SV, update: CacheUpdate },
    /// Approximate receiver position was updated (ECEF [m])
    ReceiverPosition(Vector3<f64>),
    /// One observation epoch
    Observation(EpochObservation),
}

/// [Decoder] routes parsed RTCM messages to the ephemeris decoders
/// or the MSM decoder. One [Decoder] may be shared by several stream
/// readers (wrap it in an [std::sync::Arc]): the ephemeris cache is the only
/// shared mutable state and it is lock protected.
pub struct Decoder {
    /// [Config] this [Decoder] was built with
    pub(crate) cfg: Config,
    /// Latest ephemeris of each satellite
    pub(crate) cache: EphemerisCache,
    /// Approximate receiver position, null when unknown.
    receiver: RwLock<Vector3<f64>>,
    /// Optional [OrbitSource]
    pub(crate) orbit: Option<Box<dyn OrbitSource + Send + Sync>>,
    /// [GeometrySource]
    pub(crate) geometry: Box<dyn GeometrySource + Send + Sync>,
    /// [FrequencySource]
    pub(crate) frequencies: Box<dyn FrequencySource + Send + Sync>,
    /// Diagnostic counters
    pub(crate) stats: Statistics,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Decoder {
    /// Builds a new [Decoder] from this [Config], with the default
    /// [SignalTable] and [Topocentric] collaborators and no [OrbitSource].
    pub fn new(cfg: Config) -> Self {
        let receiver = match cfg.receiver_position {
            Some((x, y, z)) => Vector3::new(x, y, z),
            None => Vector3::zeros(),
        };

        Self {
            cfg,
            cache: EphemerisCache::new(),
            receiver: RwLock::new(receiver),
            orbit: None,
            geometry: Box::new(Topocentric),
            frequencies: Box::new(SignalTable),
            stats: Statistics::default(),
        }
    }

    /// Attaches an [OrbitSource] so satellite positions get resolved.
    pub fn with_orbit_source<O: OrbitSource + Send + Sync + 'static>(mut self, orbit: O) -> Self {
        self.orbit = Some(Box::new(orbit));
        self
    }

    /// Replaces the default [GeometrySource]
    pub fn with_geometry_source<G: GeometrySource + Send + Sync + 'static>(
        mut self,
        geometry: G,
    ) -> Self {
        self.geometry = Box::new(geometry);
        self
    }

    /// Replaces the default [FrequencySource]
    pub fn with_frequency_source<F: FrequencySource + Send + Sync + 'static>(
        mut self,
        frequencies: F,
    ) -> Self {
        self.frequencies = Box::new(frequencies);
        self
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// [EphemerisCache] (read access and external updates)
    pub fn cache(&self) -> &EphemerisCache {
        &self.cache
    }

    /// Diagnostic [Counters] snapshot
    pub fn statistics(&self) -> Counters {
        self.stats.snapshot()
    }

    /// Returns approximate receiver position (ECEF [m]), if known.
    /// A null vector means unknown.
    pub fn receiver_position(&self) -> Option<Vector3<f64>> {
        let position = *self.receiver.read().unwrap_or_else(PoisonError::into_inner);
        if position == Vector3::zeros() {
            None
        } else {
            Some(position)
        }
    }

    /// Decodes one message. Any [Error] means this message was skipped
    /// and has no side effect.
    pub fn decode(&self, msg: &dyn ParsedMessage) -> Result<Decoded, Error> {
        Statistics::increment(&self.stats.messages);

        let kind = MessageKind::from_identity(msg.identity()).ok_or_else(|| {
            Statistics::increment(&self.stats.ignored);
            Error::UnknownMessage(msg.identity().to_string())
        })?;

        let decoded = match kind {
            MessageKind::Ephemeris(kind) => self.ephemeris(msg, kind),
            MessageKind::StationCoordinates => self.station_coordinates(msg),
            MessageKind::Observation(system) => {
                self.decode_msm(msg, system).map(Decoded::Observation)
            },
        };

        if decoded.is_err() {
            Statistics::increment(&self.stats.skipped);
        }

        decoded
    }

    /// Processes one message and returns the decoded [EpochObservation], if any.
    /// Never fails: anything that cannot be decoded is skipped (and counted).
    pub fn process(&self, msg: &dyn ParsedMessage) -> Option<EpochObservation> {
        match self.decode(msg) {
            Ok(Decoded::Observation(epoch)) => Some(epoch),
            Ok(_) => None,
            Err(e) => {
                trace!("{} - skipped: {}", msg.identity(), e);
                None
            },
        }
    }

    fn ephemeris(&self, msg: &dyn ParsedMessage, kind: EphemerisKind) -> Result<Decoded, Error> {
        let record = kind.decode(msg, self.cfg.gps_week_rollover)?;
        let sv = record.sv;

        Statistics::increment(&self.stats.ephemerides);

        let update = self.cache.update(record);

        match update {
            CacheUpdate::Inserted => Statistics::increment(&self.stats.inserted),
            CacheUpdate::Replaced => Statistics::increment(&self.stats.replaced),
            CacheUpdate::Unchanged => Statistics::increment(&self.stats.unchanged),
        }

        Ok(Decoded::Ephemeris { sv, update })
    }

    /// Single mutation path of the approximate receiver position
    fn station_coordinates(&self, msg: &dyn ParsedMessage) -> Result<Decoded, Error> {
        let position = Vector3::new(
            field(msg, "DF025")?,
            field(msg, "DF026")?,
            field(msg, "DF027")?,
        );

        if !position.iter().all(|x| x.is_finite()) {
            warn!("{} - invalid station coordinates: {}", msg.identity(), position);
            return Err(Error::InvalidField("DF025".to_string()));
        }

        *self
            .receiver
            .write()
            .unwrap_or_else(PoisonError::into_inner) = position;

        Statistics::increment(&self.stats.stations);
        debug!(
            "{} - receiver position: ({:.3}, {:.3}, {:.3})",
            msg.identity(),
            position[0],
            position[1],
            position[2]
        );

        Ok(Decoded::ReceiverPosition(position))
    }
}
