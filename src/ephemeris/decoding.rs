//! RTCM ephemeris messages to [EphemerisRecord]
use std::f64::consts::PI;

use crate::{
    ephemeris::{EphemerisRecord, EphemerisState, GlonassState, Keplerian},
    error::Error,
    message::{bounded, field, satellite, ParsedMessage},
    prelude::{Constellation, Vector3},
};

/// Galileo navigation message flavor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum GalileoNav {
    /// 1045
    FNav,
    /// 1046
    INav,
}

/// One variant per supported ephemeris message family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum EphemerisKind {
    /// 1019
    Gps,
    /// 1020
    Glonass,
    /// 1045, 1046
    Galileo(GalileoNav),
    /// 1042 and draft 63
    BeiDou,
}

impl EphemerisKind {
    /// Message identity to [EphemerisKind] table
    const TABLE: [(&'static str, Self); 6] = [
        ("1019", Self::Gps),
        ("1020", Self::Glonass),
        ("1042", Self::BeiDou),
        ("63", Self::BeiDou),
        ("1045", Self::Galileo(GalileoNav::FNav)),
        ("1046", Self::Galileo(GalileoNav::INav)),
    ];

    pub(crate) fn from_identity(identity: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(id, _)| *id == identity)
            .map(|(_, kind)| *kind)
    }

    /// Decodes this message into an [EphemerisRecord].
    /// `gps_week_rollover` is added to the 10 bit GPS week counter.
    pub(crate) fn decode(
        &self,
        msg: &dyn ParsedMessage,
        gps_week_rollover: u32,
    ) -> Result<EphemerisRecord, Error> {
        match self {
            Self::Gps => gps(msg, gps_week_rollover),
            Self::Glonass => glonass(msg),
            Self::Galileo(nav) => galileo(msg, *nav),
            Self::BeiDou => beidou(msg),
        }
    }
}

/// Angles are broadcast in semicircles
fn semicircles(msg: &dyn ParsedMessage, name: &str) -> Result<f64, Error> {
    Ok(field(msg, name)? * PI)
}

fn gps(msg: &dyn ParsedMessage, week_rollover: u32) -> Result<EphemerisRecord, Error> {
    let sv = satellite(msg, Constellation::GPS, "DF009")?;

    let kepler = Keplerian {
        week: bounded::<u32>(msg, "DF076")?
            .checked_add(week_rollover)
            .ok_or_else(|| Error::InvalidField("DF076".to_string()))?,
        toe: field(msg, "DF093")?,
        toc: field(msg, "DF081")?,
        iod: bounded(msg, "DF071")?,
        sqrt_a: field(msg, "DF092")?,
        e: field(msg, "DF090")?,
        m0: semicircles(msg, "DF088")?,
        omega: semicircles(msg, "DF099")?,
        i0: semicircles(msg, "DF097")?,
        omega0: semicircles(msg, "DF095")?,
        dn: semicircles(msg, "DF087")?,
        omega_dot: semicircles(msg, "DF100")?,
        idot: semicircles(msg, "DF079")?,
        cuc: field(msg, "DF089")?,
        cus: field(msg, "DF091")?,
        crc: field(msg, "DF098")?,
        crs: field(msg, "DF086")?,
        cic: field(msg, "DF094")?,
        cis: field(msg, "DF096")?,
        af0: field(msg, "DF084")?,
        af1: field(msg, "DF083")?,
        af2: field(msg, "DF082")?,
        tgd: field(msg, "DF101")?,
        tgd2: None,
        health: bounded(msg, "DF102")?,
        urai: None,
        aodc: None,
    };

    Ok(EphemerisRecord {
        sv,
        state: EphemerisState::Keplerian(kepler),
    })
}

fn galileo(msg: &dyn ParsedMessage, nav: GalileoNav) -> Result<EphemerisRecord, Error> {
    let sv = satellite(msg, Constellation::Galileo, "DF252")?;

    // signal health status: E5a (F/NAV) or E5b (I/NAV)
    let health = match nav {
        GalileoNav::FNav => "DF314",
        GalileoNav::INav => "DF287",
    };

    let health = match msg.value(health) {
        Some(_) => bounded::<u16>(msg, health)?,
        None => 0,
    };

    let kepler = Keplerian {
        week: bounded(msg, "DF289")?,
        toe: field(msg, "DF304")?,
        toc: field(msg, "DF293")?,
        iod: bounded(msg, "DF290")?,
        sqrt_a: field(msg, "DF303")?,
        e: field(msg, "DF301")?,
        m0: semicircles(msg, "DF299")?,
        omega: semicircles(msg, "DF310")?,
        i0: semicircles(msg, "DF308")?,
        omega0: semicircles(msg, "DF306")?,
        dn: semicircles(msg, "DF298")?,
        omega_dot: semicircles(msg, "DF311")?,
        idot: semicircles(msg, "DF292")?,
        cuc: field(msg, "DF300")?,
        cus: field(msg, "DF302")?,
        crc: field(msg, "DF309")?,
        crs: field(msg, "DF297")?,
        cic: field(msg, "DF305")?,
        cis: field(msg, "DF307")?,
        af0: field(msg, "DF296")?,
        af1: field(msg, "DF295")?,
        af2: field(msg, "DF294")?,
        tgd: field(msg, "DF312")?,
        // BGD E5b/E1 only exists in I/NAV
        tgd2: msg.value("DF313"),
        health,
        urai: None,
        aodc: None,
    };

    Ok(EphemerisRecord {
        sv,
        state: EphemerisState::Keplerian(kepler),
    })
}

/// BeiDou fields already come in radians: no semicircle conversion here.
fn beidou(msg: &dyn ParsedMessage) -> Result<EphemerisRecord, Error> {
    let sv = satellite(msg, Constellation::BeiDou, "DF488")?;

    let kepler = Keplerian {
        week: bounded(msg, "DF489")?,
        toe: field(msg, "DF505")?,
        toc: field(msg, "DF493")?,
        iod: bounded(msg, "DF492")?,
        sqrt_a: field(msg, "DF504")?,
        e: field(msg, "DF502")?,
        m0: field(msg, "DF500")?,
        omega: field(msg, "DF511")?,
        i0: field(msg, "DF509")?,
        omega0: field(msg, "DF507")?,
        dn: field(msg, "DF499")?,
        omega_dot: field(msg, "DF512")?,
        idot: field(msg, "DF491")?,
        cuc: field(msg, "DF501")?,
        cus: field(msg, "DF503")?,
        crc: field(msg, "DF510")?,
        crs: field(msg, "DF498")?,
        cic: field(msg, "DF506")?,
        cis: field(msg, "DF508")?,
        af0: field(msg, "DF496")?,
        af1: field(msg, "DF495")?,
        af2: field(msg, "DF494")?,
        tgd: field(msg, "DF513")?,
        tgd2: Some(field(msg, "DF514")?),
        health: bounded(msg, "DF515")?,
        urai: Some(bounded(msg, "DF490")?),
        aodc: Some(bounded(msg, "DF497")?),
    };

    Ok(EphemerisRecord {
        sv,
        state: EphemerisState::Keplerian(kepler),
    })
}

fn glonass(msg: &dyn ParsedMessage) -> Result<EphemerisRecord, Error> {
    let sv = satellite(msg, Constellation::Glonass, "DF038")?;

    // tb is the 15' slot index within the day
    let tb = bounded::<u32>(msg, "DF110")? as f64 * 900.0;

    // broadcast with a +7 offset, for k in -7..=+13
    let frequency_channel = bounded::<i8>(msg, "DF040")?;

    if !(0..=20).contains(&frequency_channel) {
        return Err(Error::InvalidField("DF040".to_string()));
    }

    let state = GlonassState {
        tb,
        tk: field(msg, "DF107")?,
        frequency_channel,
        position_km: Vector3::new(
            field(msg, "DF112")?,
            field(msg, "DF115")?,
            field(msg, "DF118")?,
        ),
        velocity_km_s: Vector3::new(
            field(msg, "DF111")?,
            field(msg, "DF114")?,
            field(msg, "DF117")?,
        ),
        acceleration_km_s2: Vector3::new(
            field(msg, "DF113")?,
            field(msg, "DF116")?,
            field(msg, "DF119")?,
        ),
        tau_n: field(msg, "DF124")?,
        gamma_n: field(msg, "DF121")?,
        health: bounded(msg, "DF104")?,
    };

    Ok(EphemerisRecord {
        sv,
        state: EphemerisState::Glonass(state),
    })
}
