use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl<const N: usize> Lerp for [f64; N] {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
    }
}

/// A single eased transition from one value to another over a fixed duration.
///
/// Time is pushed in by the caller (`advance`) so the tween stays deterministic under a
/// manual frame driver.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_secs: f64,
    elapsed_secs: f64,
    ease: Ease,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Start a tween. A non-positive or non-finite duration completes on the first sample.
    pub fn new(from: T, to: T, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_secs,
            elapsed_secs: 0.0,
            ease,
        }
    }

    /// Advance by `dt_secs` (negative values are ignored) and return the current value.
    pub fn advance(&mut self, dt_secs: f64) -> T {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.elapsed_secs += dt_secs;
        }
        self.value()
    }

    /// Value at the current elapsed time.
    pub fn value(&self) -> T {
        let p = self.progress();
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Whether the tween has reached its target.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Target value.
    pub fn target(&self) -> &T {
        &self.to
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
