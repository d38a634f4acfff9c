use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutQuart,
    Ease::InOutExpo,
    Ease::InOutBack,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL.into_iter().filter(|e| *e != Ease::InOutBack) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn back_overshoots_below_zero_early() {
    assert!(Ease::InOutBack.apply(0.1) < 0.0);
    assert!(Ease::InOutBack.apply(0.9) > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InOutExpo.apply(-3.0), 0.0);
    assert_eq!(Ease::InOutExpo.apply(7.0), 1.0);
}
