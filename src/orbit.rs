use map_3d::{ecef2aer, ecef2geodetic, rad2deg, Ellipsoid};

use crate::prelude::{Constellation, EphemerisRecord, Vector3};

/// Any orbit propagator should implement the [OrbitSource] trait to
/// attach satellite positions to the decoded epochs.
pub trait OrbitSource {
    /// Resolves the ECEF position [m] of the satellite described by this
    /// [EphemerisRecord], at `t_s` (receiver time of the ongoing epoch,
    /// in seconds of week or seconds of day for GLONASS).
    /// `constellation` is the system of the MSM being decoded.
    /// Returns None when the frame cannot be propagated.
    fn position(
        &self,
        ephemeris: &EphemerisRecord,
        constellation: Constellation,
        t_s: f64,
    ) -> Option<Vector3<f64>>;
}

/// [GeometrySource] resolves the observation angles.
pub trait GeometrySource {
    /// Returns (azimuth, elevation) of the satellite at `sv_ecef_m`
    /// seen from receiver at `rx_ecef_m`.
    fn azimuth_elevation(&self, sv_ecef_m: &Vector3<f64>, rx_ecef_m: &Vector3<f64>) -> (f64, f64);
}

/// [Topocentric] is the default [GeometrySource]:
/// azimuth and elevation from the WGS84 geodetic coordinates of the receiver.
/// Angles are expressed in degrees, azimuth in [0, 360[.
#[derive(Debug, Default, Copy, Clone)]
pub struct Topocentric;

impl GeometrySource for Topocentric {
    fn azimuth_elevation(&self, sv_ecef_m: &Vector3<f64>, rx_ecef_m: &Vector3<f64>) -> (f64, f64) {
        let (lat, lon, h) =
            ecef2geodetic(rx_ecef_m[0], rx_ecef_m[1], rx_ecef_m[2], Ellipsoid::WGS84);

        let (azimuth, elevation, _) = ecef2aer(
            sv_ecef_m[0],
            sv_ecef_m[1],
            sv_ecef_m[2],
            lat,
            lon,
            h,
            Ellipsoid::WGS84,
        );

        (rad2deg(azimuth).rem_euclid(360.0), rad2deg(elevation))
    }
}
