#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::prelude::Constellation;

fn default_constellations() -> Vec<Constellation> {
    vec![
        Constellation::GPS,
        Constellation::Glonass,
        Constellation::Galileo,
        Constellation::BeiDou,
        Constellation::QZSS,
        Constellation::SBAS,
    ]
}

fn default_max_cells() -> usize {
    64
}

fn default_gps_week_rollover() -> u32 {
    2048
}

/// [Decoder](crate::prelude::Decoder) parametrization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Enabled target [Constellation]s. Observations of other
    /// systems are not decoded. Ephemerides are always decoded.
    #[cfg_attr(feature = "serde", serde(default = "default_constellations"))]
    pub constellations: Vec<Constellation>,

    /// Initial approximate receiver position, in ECEF [m].
    /// Stations coordinates messages (1005/1006) override it.
    /// Azimuth and elevation angles are only resolved once this is known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub receiver_position: Option<(f64, f64, f64)>,

    /// Maximal number of signal cells scanned per MSM
    #[cfg_attr(feature = "serde", serde(default = "default_max_cells"))]
    pub max_cells: usize,

    /// Weeks added to the GPS week counter (message 1019)
    #[cfg_attr(feature = "serde", serde(default = "default_gps_week_rollover"))]
    pub gps_week_rollover: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constellations: default_constellations(),
            receiver_position: None,
            max_cells: default_max_cells(),
            gps_week_rollover: default_gps_week_rollover(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with only these [Constellation]s enabled
    pub fn with_constellations(&self, constellations: &[Constellation]) -> Self {
        let mut s = self.clone();
        s.constellations = constellations.to_vec();
        s
    }

    /// Copies and returns [Config] with an initial receiver position (ECEF [m])
    pub fn with_receiver_position(&self, ecef_m: (f64, f64, f64)) -> Self {
        let mut s = self.clone();
        s.receiver_position = Some(ecef_m);
        s
    }

    /// True if observations of this [Constellation] should be decoded
    pub fn is_enabled(&self, constellation: Constellation) -> bool {
        self.constellations.contains(&constellation)
    }
}
