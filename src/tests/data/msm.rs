use crate::prelude::FieldRecord;

/// Rough values of one satellite
#[derive(Debug, Copy, Clone)]
pub struct Rough {
    pub prn: u8,
    /// DF397 (ms)
    pub ms: f64,
    /// DF398 (ms)
    pub modulo: f64,
    /// DF399 (m/s)
    pub rate: f64,
}

/// Fine values of one signal cell. None means absent.
#[derive(Debug, Clone)]
pub struct Cell {
    pub prn: u8,
    pub signal: String,
    pub fine_range: Option<f64>,
    pub fine_phase: Option<f64>,
    pub fine_rate: Option<f64>,
    pub snr: Option<f64>,
    pub lock_time: f64,
    pub half_cycle: bool,
}

impl Cell {
    /// Complete and valid cell
    pub fn new(prn: u8, signal: &str) -> Self {
        Self {
            prn,
            signal: signal.to_string(),
            fine_range: Some(1.0E-4),
            fine_phase: Some(1.5E-4),
            fine_rate: Some(0.25),
            snr: Some(45.0),
            lock_time: 500.0,
            half_cycle: false,
        }
    }

    pub fn with_snr(mut self, snr: Option<f64>) -> Self {
        self.snr = snr;
        self
    }

    pub fn with_fine_phase(mut self, phase: Option<f64>) -> Self {
        self.fine_phase = phase;
        self
    }
}

/// Synthetic MSM builder. Satellite ordinals (rough fields suffix)
/// follow ascending PRN, cells are numbered in order of insertion.
#[derive(Debug, Clone)]
pub struct MsmBuilder {
    identity: String,
    time_field: String,
    time_ms: f64,
    satellites: Vec<Rough>,
    cells: Vec<Cell>,
}

impl MsmBuilder {
    pub fn new(identity: &str, time_field: &str, time_ms: f64) -> Self {
        Self {
            identity: identity.to_string(),
            time_field: time_field.to_string(),
            time_ms,
            satellites: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// GPS MSM7 at this time of week (ms)
    pub fn gps_msm7(time_ms: f64) -> Self {
        Self::new("1077", "DF004", time_ms)
    }

    pub fn satellite(mut self, prn: u8, ms: f64, modulo: f64, rate: f64) -> Self {
        self.satellites.push(Rough {
            prn,
            ms,
            modulo,
            rate,
        });
        self
    }

    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    fn extended(&self) -> bool {
        self.identity.ends_with('6') || self.identity.ends_with('7')
    }

    pub fn build(&self) -> FieldRecord {
        let mut record = FieldRecord::new(&self.identity);
        record.insert_number(&self.time_field, self.time_ms);

        let mut satellites = self.satellites.clone();
        satellites.sort_by_key(|sat| sat.prn);

        for (k, sat) in satellites.iter().enumerate() {
            let ordinal = k + 1;
            record.insert_number(&format!("DF397_{:02}", ordinal), sat.ms);
            record.insert_number(&format!("DF398_{:02}", ordinal), sat.modulo);
            record.insert_number(&format!("DF399_{:02}", ordinal), sat.rate);
        }

        let (range, phase, lock, snr) = if self.extended() {
            ("DF405", "DF406", "DF407", "DF408")
        } else {
            ("DF400", "DF401", "DF402", "DF403")
        };

        for (i, cell) in self.cells.iter().enumerate() {
            let suffix = format!("{:02}", i + 1);

            record.insert_number(&format!("CELLPRN_{}", suffix), cell.prn as f64);
            record.insert_text(&format!("CELLSIG_{}", suffix), &cell.signal);

            for (name, value) in [
                (range, cell.fine_range),
                (phase, cell.fine_phase),
                ("DF404", cell.fine_rate),
                (snr, cell.snr),
            ] {
                if let Some(value) = value {
                    record.insert_number(&format!("{}_{}", name, suffix), value);
                }
            }

            record.insert_number(&format!("{}_{}", lock, suffix), cell.lock_time);
            record.insert_number(
                &format!("DF420_{}", suffix),
                if cell.half_cycle { 1.0 } else { 0.0 },
            );
        }

        record
    }
}
