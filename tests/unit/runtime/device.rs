use super::*;

const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/131.0";

#[test]
fn desktop_supports_cursor() {
    let caps = InputCapabilities::desktop(DESKTOP_UA);
    assert!(!caps.is_touch_device());
    assert!(caps.supports_custom_cursor());
}

#[test]
fn headless_has_no_cursor() {
    let caps = InputCapabilities::headless();
    assert!(!caps.is_touch_device());
    assert!(!caps.supports_custom_cursor());
}

#[test]
fn each_signal_marks_touch() {
    let base = InputCapabilities::desktop(DESKTOP_UA);
    let coarse = InputCapabilities {
        coarse_pointer: true,
        ..base.clone()
    };
    let events = InputCapabilities {
        touch_events: true,
        ..base.clone()
    };
    let points = InputCapabilities {
        max_touch_points: 5,
        ..base.clone()
    };
    let ua = InputCapabilities {
        user_agent: "Mozilla/5.0 (Linux; ANDROID 14) Mobile".to_string(),
        ..base
    };
    for caps in [coarse, events, points, ua] {
        assert!(caps.is_touch_device(), "{caps:?}");
        assert!(!caps.supports_custom_cursor());
    }
}
