use crate::prelude::FieldRecord;

use super::record;

/// Angles broadcast by our test frames (semicircles for GPS and Galileo)
pub const M0: f64 = 0.25;
pub const OMEGA: f64 = 0.8;
pub const I0: f64 = 0.31;
pub const OMEGA0: f64 = -0.6;
pub const DN: f64 = 1.5E-9;
pub const OMEGA_DOT: f64 = -2.6E-9;
pub const IDOT: f64 = 1.0E-10;

/// GPS 1019 frame. `week` is the 10 bit counter.
pub fn gps_1019(prn: u8, week: u32, toe: f64) -> FieldRecord {
    record(
        "1019",
        &[
            ("DF009", prn as f64),
            ("DF076", week as f64),
            ("DF077", 0.0),
            ("DF078", 1.0),
            ("DF079", IDOT),
            ("DF071", 45.0),
            ("DF081", toe),
            ("DF082", 0.0),
            ("DF083", -1.0E-12),
            ("DF084", 1.0E-4),
            ("DF085", 45.0),
            ("DF086", 20.5),
            ("DF087", DN),
            ("DF088", M0),
            ("DF089", 1.0E-6),
            ("DF090", 0.01),
            ("DF091", 8.0E-6),
            ("DF092", 5153.6),
            ("DF093", toe),
            ("DF094", 1.0E-7),
            ("DF095", OMEGA0),
            ("DF096", -5.0E-8),
            ("DF097", I0),
            ("DF098", 220.0),
            ("DF099", OMEGA),
            ("DF100", OMEGA_DOT),
            ("DF101", -1.0E-8),
            ("DF102", 0.0),
            ("DF103", 0.0),
            ("DF137", 0.0),
        ],
    )
}

/// Galileo frame: "1045" (F/NAV) or "1046" (I/NAV)
pub fn galileo(identity: &str, prn: u8, week: u32, toe: f64) -> FieldRecord {
    let mut record = record(
        identity,
        &[
            ("DF252", prn as f64),
            ("DF289", week as f64),
            ("DF290", 97.0),
            ("DF291", 107.0),
            ("DF292", IDOT),
            ("DF293", toe),
            ("DF294", 0.0),
            ("DF295", 2.0E-12),
            ("DF296", -3.0E-4),
            ("DF297", -11.2),
            ("DF298", DN),
            ("DF299", M0),
            ("DF300", -5.0E-7),
            ("DF301", 2.0E-4),
            ("DF302", 9.0E-6),
            ("DF303", 5440.6),
            ("DF304", toe),
            ("DF305", 2.0E-8),
            ("DF306", OMEGA0),
            ("DF307", 1.0E-8),
            ("DF308", I0),
            ("DF309", 160.0),
            ("DF310", OMEGA),
            ("DF311", OMEGA_DOT),
            ("DF312", 2.3E-9),
        ],
    );

    if identity == "1045" {
        record.insert_number("DF314", 1.0);
        record.insert_number("DF315", 0.0);
    } else {
        record.insert_number("DF313", 2.6E-9);
        record.insert_number("DF287", 2.0);
        record.insert_number("DF288", 0.0);
    }

    record
}

/// BeiDou frame, angles already in radians
pub fn beidou(identity: &str, prn: u8, week: u32, toe: f64) -> FieldRecord {
    record(
        identity,
        &[
            ("DF488", prn as f64),
            ("DF489", week as f64),
            ("DF490", 2.0),
            ("DF491", IDOT),
            ("DF492", 1.0),
            ("DF493", toe),
            ("DF494", 0.0),
            ("DF495", 4.0E-11),
            ("DF496", 5.0E-4),
            ("DF497", 1.0),
            ("DF498", 12.0),
            ("DF499", DN),
            ("DF500", M0),
            ("DF501", 3.0E-7),
            ("DF502", 5.0E-4),
            ("DF503", 7.0E-6),
            ("DF504", 5282.6),
            ("DF505", toe),
            ("DF506", -3.0E-8),
            ("DF507", OMEGA0),
            ("DF508", 4.0E-8),
            ("DF509", I0),
            ("DF510", 200.0),
            ("DF511", OMEGA),
            ("DF512", OMEGA_DOT),
            ("DF513", 1.5E-8),
            ("DF514", -2.0E-9),
            ("DF515", 0.0),
        ],
    )
}

/// GLONASS 1020 frame.
/// - `tb_slot`: 15' slot index within the day
/// - `channel`: DF040 (channel number + 7)
pub fn glonass_1020(slot: u8, tb_slot: u32, channel: i8) -> FieldRecord {
    record(
        "1020",
        &[
            ("DF038", slot as f64),
            ("DF040", channel as f64),
            ("DF104", 0.0),
            ("DF105", 0.0),
            ("DF106", 0.0),
            ("DF107", 3600.0),
            ("DF108", 0.0),
            ("DF109", 0.0),
            ("DF110", tb_slot as f64),
            ("DF111", 1.234),
            ("DF112", 12345.678),
            ("DF113", 1.0E-9),
            ("DF114", -2.345),
            ("DF115", -9876.543),
            ("DF116", 2.0E-9),
            ("DF117", 0.456),
            ("DF118", 19876.012),
            ("DF119", -3.0E-9),
            ("DF120", 0.0),
            ("DF121", 9.1E-13),
            ("DF124", -6.2E-5),
        ],
    )
}

/// Station coordinates (1005)
pub fn station_1005(ecef_m: (f64, f64, f64)) -> FieldRecord {
    record(
        "1005",
        &[
            ("DF002", 1005.0),
            ("DF003", 0.0),
            ("DF022", 1.0),
            ("DF023", 1.0),
            ("DF024", 1.0),
            ("DF025", ecef_m.0),
            ("DF026", ecef_m.1),
            ("DF027", ecef_m.2),
        ],
    )
}
