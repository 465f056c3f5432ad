use crate::prelude::{Constellation, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Carrier {
    /// L1 (GPS/QZSS/SBAS) same frequency as E1 and B1aB1c
    #[default]
    L1,
    /// L2 (GPS/QZSS)
    L2,
    /// L5 (GPS/QZSS/SBAS) same frequency as E5A and B2A
    L5,
    /// L6 (QZSS) same frequency as E6
    L6,
    /// G1 (GLONASS FDMA) for this frequency channel number `k`
    G1(i8),
    /// G2 (GLONASS FDMA) for this frequency channel number `k`
    G2(i8),
    /// G1a (GLONASS CDMA)
    G1a,
    /// G2a (GLONASS CDMA)
    G2a,
    /// G3 (GLONASS CDMA)
    G3,
    /// E1 (Galileo)
    E1,
    /// E5 (Galileo) same frequency as B2
    E5,
    /// E5A (Galileo) same frequency as L5
    E5A,
    /// E5B (Galileo) same frequency as B2iB2b
    E5B,
    /// E6 (Galileo) same frequency as L6
    E6,
    /// B1aB1c (BDS) same frequency as L1
    B1aB1c,
    /// B1I (BDS)
    B1I,
    /// B2I/B2B (BDS) same frequency as E5b
    B2iB2b,
    /// B2 (BDS) same frequency as E5
    B2,
    /// B2A (BDS) same frequency as L5 and E5A
    B2A,
    /// B3 (BDS)
    B3,
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::L1 => write!(f, "L1"),
            Self::L2 => write!(f, "L2"),
            Self::L5 => write!(f, "L5"),
            Self::L6 => write!(f, "L6"),
            Self::G1(k) => write!(f, "G1({:+})", k),
            Self::G2(k) => write!(f, "G2({:+})", k),
            Self::G1a => write!(f, "G1a"),
            Self::G2a => write!(f, "G2a"),
            Self::G3 => write!(f, "G3"),
            Self::E1 => write!(f, "E1"),
            Self::E5 => write!(f, "E5"),
            Self::E5A => write!(f, "E5A"),
            Self::E5B => write!(f, "E5B"),
            Self::E6 => write!(f, "E6"),
            Self::B1I => write!(f, "B1I"),
            Self::B1aB1c => write!(f, "B1A/B1C"),
            Self::B2iB2b => write!(f, "B2I/B2B"),
            Self::B2 => write!(f, "B2"),
            Self::B3 => write!(f, "B3"),
            Self::B2A => write!(f, "B2A"),
        }
    }
}

impl Carrier {
    pub fn frequency(&self) -> f64 {
        match self {
            Self::L1 | Self::E1 | Self::B1aB1c => 1575.42E6_f64,
            Self::L2 => 1227.60E6_f64,
            Self::L5 | Self::E5A | Self::B2A => 1176.45E6_f64,
            Self::E5 | Self::B2 => 1191.795E6_f64,
            Self::L6 | Self::E6 => 1278.750E6_f64,
            Self::G1(k) => 1602.0E6_f64 + *k as f64 * 562.5E3_f64,
            Self::G2(k) => 1246.0E6_f64 + *k as f64 * 437.5E3_f64,
            Self::G1a => 1600.995E6_f64,
            Self::G2a => 1248.06E6_f64,
            Self::G3 => 1202.025E6_f64,
            Self::B3 => 1268.52E6_f64,
            Self::E5B | Self::B2iB2b => 1207.14E6_f64,
            Self::B1I => 1561.098E6_f64,
        }
    }

    /// Identifies [Carrier] from RTCM MSM signal code (`1C`, `2W`, `7I`..).
    /// GLONASS FDMA signals require the channel number `k` (-7..=+6).
    pub fn from_signal(constellation: Constellation, code: &str, k: Option<i8>) -> Option<Self> {
        let band = code.trim().chars().next()?;
        match constellation {
            Constellation::GPS => match band {
                '1' => Some(Self::L1),
                '2' => Some(Self::L2),
                '5' => Some(Self::L5),
                _ => None,
            },
            Constellation::QZSS => match band {
                '1' => Some(Self::L1),
                '2' => Some(Self::L2),
                '5' => Some(Self::L5),
                '6' => Some(Self::L6),
                _ => None,
            },
            Constellation::Glonass => match band {
                '1' => Some(Self::G1(k?)),
                '2' => Some(Self::G2(k?)),
                '4' => Some(Self::G1a),
                '6' => Some(Self::G2a),
                '3' => Some(Self::G3),
                _ => None,
            },
            Constellation::Galileo => match band {
                '1' => Some(Self::E1),
                '5' => Some(Self::E5A),
                '7' => Some(Self::E5B),
                '8' => Some(Self::E5),
                '6' => Some(Self::E6),
                _ => None,
            },
            Constellation::BeiDou => match band {
                '2' => Some(Self::B1I),
                '1' => Some(Self::B1aB1c),
                '7' => Some(Self::B2iB2b),
                '5' => Some(Self::B2A),
                '8' => Some(Self::B2),
                '6' => Some(Self::B3),
                _ => None,
            },
            c if c.is_sbas() => match band {
                '1' => Some(Self::L1),
                '5' => Some(Self::L5),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Implement [FrequencySource] to resolve the carrier frequency of one MSM signal.
pub trait FrequencySource {
    /// Returns carrier frequency (Hz) and [Carrier] of this signal.
    /// - signal: RTCM signal code, for example "1C"
    /// - sv: [SV] that emits this signal
    /// - channel: GLONASS frequency channel number as decoded from the latest
    ///   ephemeris frame. None for other constellations, or when no frame is known.
    fn frequency(&self, signal: &str, sv: SV, channel: Option<i8>) -> Option<(f64, Carrier)>;
}

/// [SignalTable] is the default [FrequencySource].
/// It expects the GLONASS channel number as broadcast in message 1020 (DF040),
/// which is offset by +7.
#[derive(Debug, Default, Copy, Clone)]
pub struct SignalTable;

impl SignalTable {
    /// DF040 offset
    const CHANNEL_OFFSET: i8 = 7;
}

impl FrequencySource for SignalTable {
    fn frequency(&self, signal: &str, sv: SV, channel: Option<i8>) -> Option<(f64, Carrier)> {
        let k = channel.and_then(|ch| ch.checked_sub(Self::CHANNEL_OFFSET));
        let carrier = Carrier::from_signal(sv.constellation, signal, k)?;
        Some((carrier.frequency(), carrier))
    }
}
