pub use kurbo::{BezPath, Point, Vec2};

/// Timing derived from one host frame timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first frame seen by the clock.
    pub elapsed_secs: f64,
    /// Seconds since the previous frame (0 on the first frame).
    pub delta_secs: f64,
}

/// Converts host frame timestamps (milliseconds) into elapsed/delta seconds.
///
/// The first timestamp is captured once and becomes the zero point for `elapsed_secs`.
/// Timestamps that go backwards produce a zero delta instead of a negative one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Create a clock that has not seen any frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock whose zero point and previous frame are `now_ms`.
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            start_ms: Some(now_ms),
            last_ms: Some(now_ms),
        }
    }

    /// Feed one frame timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTime {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let last = self.last_ms.replace(timestamp_ms).unwrap_or(timestamp_ms);
        FrameTime {
            elapsed_secs: ((timestamp_ms - start) / 1000.0).max(0.0),
            delta_secs: ((timestamp_ms - last) / 1000.0).max(0.0),
        }
    }

    /// Forget every timestamp; the next tick starts a new session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
