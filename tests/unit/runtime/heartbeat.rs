use super::*;
use crate::runtime::frame::ManualFrameDriver;

#[test]
fn pulses_from_first_frame_and_repeats_each_period() {
    let driver = Rc::new(ManualFrameDriver::new());
    let params = WaveformParams::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let beat = HeartbeatAnimation::setup(
        driver.clone(),
        params,
        Some(move |s: f64| sink.borrow_mut().push(s)),
    )
    .unwrap()
    .unwrap();

    let period_ms = params.period_secs() * 1000.0;
    driver.advance(5_000.0);
    driver.advance(5_000.0 + 250.0);
    driver.advance(5_000.0 + 250.0 + period_ms);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!((seen[0] - heartbeat_scale(0.0, &params)).abs() < 1e-12);
    assert!((seen[1] - seen[2]).abs() < 1e-9);
    assert!(seen.iter().all(|s| *s >= 1.0));
    assert_eq!(beat.last_scale(), Some(seen[2]));
}

#[test]
fn restart_rezeroes_time_without_double_subscribing() {
    let driver = Rc::new(ManualFrameDriver::new());
    let params = WaveformParams::default();
    let mut beat = HeartbeatAnimation::setup(driver.clone(), params, Some(|_: f64| {}))
        .unwrap()
        .unwrap();
    driver.advance(0.0);
    driver.advance(300.0);

    beat.restart();
    beat.restart();
    assert_eq!(driver.live_subscriptions(), 1);
    driver.advance(900.0);
    assert_eq!(beat.last_scale(), Some(heartbeat_scale(0.0, &params)));

    beat.teardown();
    assert!(!beat.is_running());
    assert_eq!(driver.live_subscriptions(), 0);
}

#[test]
fn no_surface_or_bad_params() {
    let driver = Rc::new(ManualFrameDriver::new());
    let none = HeartbeatAnimation::setup(
        driver.clone(),
        WaveformParams::default(),
        None::<fn(f64)>,
    )
    .unwrap();
    assert!(none.is_none());
    assert_eq!(driver.live_subscriptions(), 0);

    let bad = WaveformParams {
        freq_hz: 0.0,
        ..WaveformParams::default()
    };
    assert!(HeartbeatAnimation::setup(driver, bad, Some(|_: f64| {})).is_err());
}
