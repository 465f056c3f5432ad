use crate::{
    constants::{SECONDS_PER_DAY, SECONDS_PER_WEEK},
    prelude::{Epoch, Vector3, SV},
};

pub(crate) mod decoding;

pub(crate) use decoding::EphemerisKind;

/// Keplerian parameters broadcast by GPS, Galileo and BeiDou.
/// Names are shared between constellations so orbit propagation
/// does not have to care about the message it came from.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Keplerian {
    /// Week counter, in the constellation timescale
    pub week: u32,

    /// Time of Ephemeris (seconds of week)
    pub toe: f64,

    /// Time of Clock (seconds of week)
    pub toc: f64,

    /// Issue of Data (IODE, IODnav or AODE)
    pub iod: u16,

    /// Square root of the semi-major axis (m^1/2)
    pub sqrt_a: f64,

    /// Eccentricity
    pub e: f64,

    /// Mean anomaly at reference time (radians)
    pub m0: f64,

    /// Argument of perigee (radians)
    pub omega: f64,

    /// Inclination at reference time (radians)
    pub i0: f64,

    /// Longitude of ascending node (radians)
    pub omega0: f64,

    /// Mean motion difference (radians/s)
    pub dn: f64,

    /// Rate of right ascension (radians/s)
    pub omega_dot: f64,

    /// Rate of inclination (radians/s)
    pub idot: f64,

    pub cuc: f64,
    pub cus: f64,
    pub crc: f64,
    pub crs: f64,
    pub cic: f64,
    pub cis: f64,

    /// Clock bias (s)
    pub af0: f64,

    /// Clock drift (s.s⁻¹)
    pub af1: f64,

    /// Clock drift rate (s.s⁻²)
    pub af2: f64,

    /// Group delay: TGD (GPS), BGD E1/E5a (Galileo) or TGD1 (BeiDou)
    pub tgd: f64,

    /// Second group delay: BGD E5b/E1 (Galileo) or TGD2 (BeiDou)
    pub tgd2: Option<f64>,

    /// Health flag(s)
    pub health: u16,

    /// User Range Accuracy Index (BeiDou)
    pub urai: Option<u8>,

    /// Age of Data Clock (BeiDou)
    pub aodc: Option<u16>,
}

/// GLONASS broadcast state, in PZ-90 Cartesian coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlonassState {
    /// `tb` as seconds of day (15' slot index x 900)
    pub tb: f64,

    /// `tk` frame time, as decoded
    pub tk: f64,

    /// Frequency channel number, as decoded
    pub frequency_channel: i8,

    /// Position (km)
    pub position_km: Vector3<f64>,

    /// Velocity (km/s)
    pub velocity_km_s: Vector3<f64>,

    /// Lunisolar acceleration (km/s²)
    pub acceleration_km_s2: Vector3<f64>,

    /// Clock bias (s)
    pub tau_n: f64,

    /// Relative frequency offset
    pub gamma_n: f64,

    /// Health flag (Bn)
    pub health: u8,
}

/// [EphemerisState] is either orbital elements or a Cartesian state vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EphemerisState {
    Keplerian(Keplerian),
    Glonass(GlonassState),
}

/// [EphemerisRecord] is the normalized broadcast navigation frame of one satellite.
/// It is never modified once built: a new frame supersedes it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EphemerisRecord {
    /// [SV] this frame describes
    pub sv: SV,

    /// Broadcast state
    pub state: EphemerisState,
}

impl EphemerisRecord {
    /// Freshness tag: `toe` for Keplerian frames, `tb` for GLONASS.
    pub fn reference_time(&self) -> f64 {
        match &self.state {
            EphemerisState::Keplerian(kepler) => kepler.toe,
            EphemerisState::Glonass(glonass) => glonass.tb,
        }
    }

    pub fn keplerian(&self) -> Option<&Keplerian> {
        match &self.state {
            EphemerisState::Keplerian(kepler) => Some(kepler),
            _ => None,
        }
    }

    pub fn glonass(&self) -> Option<&GlonassState> {
        match &self.state {
            EphemerisState::Glonass(glonass) => Some(glonass),
            _ => None,
        }
    }

    /// GLONASS frequency channel number, as decoded.
    pub fn frequency_channel(&self) -> Option<i8> {
        self.glonass().map(|glonass| glonass.frequency_channel)
    }

    /// Returns ToE as [Epoch] expressed in the constellation timescale.
    /// GLONASS frames do not carry a week counter: this returns None.
    pub fn toe_epoch(&self) -> Option<Epoch> {
        let kepler = self.keplerian()?;
        let timescale = self.sv.constellation.timescale()?;
        let nanos = (kepler.toe * 1.0E9).round() as u64;
        Some(Epoch::from_time_of_week(kepler.week, nanos, timescale))
    }

    /// True if this frame is more recent than `rhs`.
    /// Keplerian frames compare (week, toe).
    /// GLONASS `tb` rolls over at midnight: anything within the following
    /// 12 hours is considered more recent.
    pub fn is_newer_than(&self, rhs: &Self) -> bool {
        match (&self.state, &rhs.state) {
            (EphemerisState::Keplerian(lhs), EphemerisState::Keplerian(rhs)) => {
                let t_lhs = lhs.week as f64 * SECONDS_PER_WEEK + lhs.toe;
                let t_rhs = rhs.week as f64 * SECONDS_PER_WEEK + rhs.toe;
                t_lhs > t_rhs
            },
            (EphemerisState::Glonass(lhs), EphemerisState::Glonass(rhs)) => {
                let dt = (lhs.tb - rhs.tb).rem_euclid(SECONDS_PER_DAY);
                dt > 0.0 && dt < SECONDS_PER_DAY / 2.0
            },
            _ => true,
        }
    }
}
