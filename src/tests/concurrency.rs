use std::{sync::Arc, thread};

use crate::{
    prelude::{Config, Constellation, Decoder, SV},
    tests::{gps_1019, init_logger, Cell, FixedOrbit, MsmBuilder, REFERENCE_COORDS_ECEF_M},
};

use nalgebra::Vector3;

const TOE_STEPS: u32 = 12;

#[test]
fn shared_decoder() {
    init_logger();

    let cfg = Config::default().with_receiver_position(REFERENCE_COORDS_ECEF_M);

    let decoder = Arc::new(Decoder::new(cfg).with_orbit_source(FixedOrbit {
        position_ecef_m: Vector3::new(15_600E3, 7_540E3, 20_140E3),
    }));

    // ephemeris stream: each satellite goes forward in time, with late repetitions
    let ephemerides = {
        let decoder = Arc::clone(&decoder);
        thread::spawn(move || {
            for step in 0..TOE_STEPS {
                for prn in 1..=32 {
                    let toe = step as f64 * 7200.0;
                    decoder.process(&gps_1019(prn, 200, toe));

                    if step > 0 {
                        decoder.process(&gps_1019(prn, 200, toe - 7200.0));
                    }
                }
            }
        })
    };

    // observation stream
    let observations = {
        let decoder = Arc::clone(&decoder);
        thread::spawn(move || {
            let mut epochs = Vec::new();

            for i in 0..200 {
                let mut builder = MsmBuilder::gps_msm7(i as f64 * 1000.0);

                for prn in [3, 8, 17, 29] {
                    builder = builder
                        .satellite(prn, 70.0 + prn as f64, 0.5, 100.0)
                        .cell(Cell::new(prn, "1C"))
                        .cell(Cell::new(prn, "5Q"));
                }

                if let Some(epoch) = decoder.process(&builder.build()) {
                    epochs.push(epoch);
                }
            }

            epochs
        })
    };

    ephemerides.join().unwrap();
    let epochs = observations.join().unwrap();

    assert_eq!(epochs.len(), 200);

    for epoch in epochs.iter() {
        assert_eq!(epoch.len(), 4);

        for sat in epoch.iter() {
            assert_eq!(sat.signals.len(), 2);

            // position and angles are either fully resolved or not at all
            match sat.position_ecef_m {
                Some(_) => {
                    assert!(sat.azimuth.is_some());
                    assert!(sat.elevation.is_some());
                },
                None => {
                    assert!(sat.azimuth.is_none());
                    assert!(sat.elevation.is_none());
                },
            }
        }
    }

    let cache = decoder.cache();
    assert_eq!(cache.len(), 32);

    for prn in 1..=32 {
        let sv = SV::new(Constellation::GPS, prn);
        let stored = cache.lookup(sv).unwrap();
        assert_eq!(
            stored.reference_time(),
            (TOE_STEPS - 1) as f64 * 7200.0,
            "{} regressed",
            sv
        );
    }

    let frames = 32 * (2 * TOE_STEPS as u64 - 1);
    let stats = decoder.statistics();

    assert_eq!(stats.messages, frames + 200);
    assert_eq!(stats.ephemerides, frames);
    assert_eq!(stats.inserted, 32);
    assert_eq!(stats.replaced, 32 * (TOE_STEPS as u64 - 1));
    assert_eq!(stats.unchanged, 32 * (TOE_STEPS as u64 - 1));
    assert_eq!(stats.epochs, 200);
    assert_eq!(stats.skipped, 0);
}
