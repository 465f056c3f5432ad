use anise::constants::SPEED_OF_LIGHT_KM_S;

/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = SPEED_OF_LIGHT_KM_S * 1000.0;

/// Distance travelled by light in one millisecond (meters).
/// MSM ranges are expressed in light milliseconds.
pub const RANGE_MS_M: f64 = SPEED_OF_LIGHT_M_S / 1000.0;

/// Seconds per GLONASS day, used to compare `tb` tags across midnight
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per week
pub(crate) const SECONDS_PER_WEEK: f64 = 604_800.0;
