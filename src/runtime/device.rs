/// User-agent tokens that identify touch-first devices.
const MOBILE_UA_TOKENS: [&str; 8] = [
    "iphone",
    "ipad",
    "ipod",
    "android",
    "webos",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Pointer/touch capabilities reported by the host environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    /// A pointing device with hover exists at all (false in headless environments).
    pub has_pointer: bool,
    /// The `(pointer: coarse)` media query matches.
    pub coarse_pointer: bool,
    /// Touch events are supported.
    pub touch_events: bool,
    /// Maximum simultaneous touch points.
    pub max_touch_points: u32,
    /// Raw user agent string.
    pub user_agent: String,
}

impl InputCapabilities {
    /// A desktop with a mouse.
    pub fn desktop(user_agent: impl Into<String>) -> Self {
        Self {
            has_pointer: true,
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    /// No pointer, no touch (e.g. server-side or test rendering).
    pub fn headless() -> Self {
        Self::default()
    }

    /// Touch-first device, checked from the most to the least reliable signal.
    pub fn is_touch_device(&self) -> bool {
        if self.coarse_pointer {
            return true;
        }
        if self.touch_events || self.max_touch_points > 0 {
            return true;
        }
        let ua = self.user_agent.to_ascii_lowercase();
        MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t))
    }

    /// Whether a pointer-following cursor can run here.
    pub fn supports_custom_cursor(&self) -> bool {
        self.has_pointer && !self.is_touch_device()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/device.rs"]
mod tests;
