use crate::{
    foundation::core::Vec2,
    foundation::error::{FolioError, FolioResult},
    foundation::math::clamp_lenient,
};

/// Exponential smoothing factor for one step: `1 - exp(-k * dt)`, always in `[0, 1]`.
///
/// Negative, zero or NaN `dt` (and non-positive `k`) yield `0`, i.e. no movement.
pub fn smoothing_alpha(dt: f64, k: f64) -> f64 {
    let k = k.max(0.0);
    if dt.is_nan() || dt <= 0.0 || k == 0.0 {
        return 0.0;
    }
    (1.0 - (-k * dt).exp()).clamp(0.0, 1.0)
}

/// Position of a damped follower chasing a target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowerState {
    /// Externally set position being chased (e.g. the pointer).
    pub target: Vec2,
    /// Integrated position.
    pub current: Vec2,
}

impl FollowerState {
    /// A follower at rest on `at`.
    pub fn at_rest(at: Vec2) -> Self {
        Self {
            target: at,
            current: at,
        }
    }

    /// Move toward `self.target` by one step of `dt` seconds with rate `k`.
    ///
    /// Each axis moves independently and never passes the target.
    pub fn step(&mut self, dt: f64, k: f64) {
        let alpha = smoothing_alpha(dt, k);
        if alpha >= 1.0 {
            self.current = self.target;
            return;
        }
        self.current = Vec2::new(
            approach(self.current.x, self.target.x, alpha),
            approach(self.current.y, self.target.y, alpha),
        );
    }

    /// Pure form of [`FollowerState::step`]: returns the next state for `target`.
    pub fn stepped(mut self, target: Vec2, dt: f64, k: f64) -> Self {
        self.target = target;
        self.step(dt, k);
        self
    }

    /// Distance between the integrated position and the target.
    pub fn distance(&self) -> f64 {
        (self.current - self.target).hypot()
    }
}

fn approach(from: f64, to: f64, alpha: f64) -> f64 {
    let next = from + (to - from) * alpha;
    // Rounding must not push the value past the target.
    clamp_lenient(next, from.min(to), from.max(to))
}

/// Maps the follower's lag distance to a display scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FollowerScale {
    /// Lower bound of the scale.
    pub min_scale: f64,
    /// Upper bound of the scale.
    pub max_scale: f64,
    /// Distance at which the scale bottoms out.
    pub max_distance: f64,
}

impl Default for FollowerScale {
    fn default() -> Self {
        Self {
            min_scale: 0.4,
            max_scale: 1.0,
            max_distance: 200.0,
        }
    }
}

impl FollowerScale {
    /// Build a validated scale mapping.
    pub fn new(min_scale: f64, max_scale: f64, max_distance: f64) -> FolioResult<Self> {
        let out = Self {
            min_scale,
            max_scale,
            max_distance,
        };
        out.validate()?;
        Ok(out)
    }

    /// Check bounds are finite, ordered, and the distance is positive.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.min_scale.is_finite() && self.max_scale.is_finite()) {
            return Err(FolioError::validation("scale bounds must be finite"));
        }
        if self.min_scale > self.max_scale {
            return Err(FolioError::validation("min_scale must be <= max_scale"));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(FolioError::validation("max_distance must be finite and > 0"));
        }
        Ok(())
    }

    /// `clamp(1 - distance / max_distance, min_scale, max_scale)`.
    pub fn scale_for_distance(&self, distance: f64) -> f64 {
        clamp_lenient(
            1.0 - distance / self.max_distance,
            self.min_scale,
            self.max_scale,
        )
    }

    /// Scale for the current lag of `state`.
    pub fn scale(&self, state: &FollowerState) -> f64 {
        self.scale_for_distance(state.distance())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/follower.rs"]
mod tests;
