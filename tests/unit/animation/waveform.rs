use super::*;

#[test]
fn periodic_within_tolerance() {
    let p = WaveformParams::default();
    let period = p.period_secs();
    for i in 0..200 {
        let t = i as f64 * 0.0173;
        let a = heartbeat_scale(t, &p);
        let b = heartbeat_scale(t + period, &p);
        assert!((a - b).abs() < 1e-9, "t={t}: {a} vs {b}");
    }
}

#[test]
fn stays_within_range() {
    let p = WaveformParams {
        amplitude: 0.5,
        ..WaveformParams::default()
    };
    for i in 0..2000 {
        let t = -5.0 + i as f64 * 0.005;
        let v = heartbeat_scale(t, &p);
        assert!(v >= 1.0);
        assert!(v <= 1.0 + 2.0 * p.amplitude + 1e-12);
    }
}

#[test]
fn coincident_lobes_peak_at_one_plus_two_amplitude() {
    let p = WaveformParams {
        amplitude: 0.25,
        freq_hz: 2.0,
        sharpness_1: 10.0,
        sharpness_2: 10.0,
        phase_1: 0.0,
        phase_2: 0.0,
    };
    assert!((heartbeat_scale(0.0, &p) - 1.5).abs() < 1e-12);
}

#[test]
fn zero_amplitude_is_flat() {
    let p = WaveformParams {
        amplitude: 0.0,
        ..WaveformParams::default()
    };
    assert_eq!(heartbeat_scale(0.37, &p), 1.0);
}

#[test]
fn validate_rejects_bad_values() {
    assert!(WaveformParams::default().validate().is_ok());
    for bad in [
        WaveformParams {
            freq_hz: 0.0,
            ..WaveformParams::default()
        },
        WaveformParams {
            amplitude: -1.0,
            ..WaveformParams::default()
        },
        WaveformParams {
            sharpness_2: f64::NAN,
            ..WaveformParams::default()
        },
    ] {
        assert!(bad.validate().is_err());
    }
}
