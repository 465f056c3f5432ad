mod ephemeris;
mod msm;
mod orbit;

pub use ephemeris::*;
pub use msm::*;
pub use orbit::*;

/// Reference station coordinates (ECEF [m])
pub const REFERENCE_COORDS_ECEF_M: (f64, f64, f64) = (4696989.688, 723994.197, 4239678.304);

/// Numerical [FieldRecord](crate::prelude::FieldRecord) from (name, value) pairs
pub fn record(identity: &str, fields: &[(&str, f64)]) -> crate::prelude::FieldRecord {
    let mut record = crate::prelude::FieldRecord::new(identity);
    for (name, value) in fields.iter() {
        record.insert_number(name, *value);
    }
    record
}
