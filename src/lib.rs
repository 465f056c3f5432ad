#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cache;
mod carrier;
mod cfg;
mod constants;
mod decoder;
mod ephemeris;
mod error;
mod message;
mod msm;
mod observation;
mod orbit;
mod stats;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cache::{CacheUpdate, EphemerisCache};
    pub use crate::carrier::{Carrier, FrequencySource, SignalTable};
    pub use crate::cfg::Config;
    pub use crate::constants::{RANGE_MS_M, SPEED_OF_LIGHT_M_S};
    pub use crate::decoder::{Decoded, Decoder};
    pub use crate::ephemeris::{EphemerisRecord, EphemerisState, GlonassState, Keplerian};
    pub use crate::error::Error;
    pub use crate::message::{Field, FieldRecord, ParsedMessage};
    pub use crate::observation::{EpochObservation, SatelliteState, SignalMeasurement};
    pub use crate::orbit::{GeometrySource, OrbitSource, Topocentric};
    pub use crate::stats::Counters;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
