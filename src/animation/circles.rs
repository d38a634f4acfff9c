use crate::{
    animation::ease::Ease,
    animation::noise::Noise2D,
    animation::polygon::{PolygonPathSpec, generate_polygon},
    animation::tween::{Lerp, Tween},
    foundation::core::Point,
    foundation::error::{FolioError, FolioResult},
};

/// Animated parameters of the two rings that are eased between presets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresetValues {
    /// Noise strength of the inner ring.
    pub noise_strength_1: f64,
    /// Noise strength of the outer ring.
    pub noise_strength_2: f64,
    /// Amplitude of the slow radius pulse.
    pub pulse_amplitude: f64,
}

impl Lerp for PresetValues {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            noise_strength_1: f64::lerp(&a.noise_strength_1, &b.noise_strength_1, t),
            noise_strength_2: f64::lerp(&a.noise_strength_2, &b.noise_strength_2, t),
            pulse_amplitude: f64::lerp(&a.pulse_amplitude, &b.pulse_amplitude, t),
        }
    }
}

/// The "rest" and "hovered" presets the rings ease between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CirclePresets {
    /// Values while the pointer is away.
    pub rest: PresetValues,
    /// Values while the pointer is over the menu button.
    pub hovered: PresetValues,
}

impl Default for CirclePresets {
    fn default() -> Self {
        Self {
            rest: PresetValues {
                noise_strength_1: 3.0,
                noise_strength_2: 5.0,
                pulse_amplitude: 0.7,
            },
            hovered: PresetValues {
                noise_strength_1: 1.0,
                noise_strength_2: 2.0,
                pulse_amplitude: 0.2,
            },
        }
    }
}

impl CirclePresets {
    /// Preset for the given hover state.
    pub fn for_hover(&self, hovered: bool) -> PresetValues {
        if hovered { self.hovered } else { self.rest }
    }
}

/// Geometry and timing of the menu button rings and its two icon lines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Ring center inside the button's local box.
    pub center: Point,
    /// Segments per ring.
    pub point_count: u32,
    /// Base radius of both rings.
    pub radius: f64,
    /// Amount the shared tick advances every frame.
    pub tick_step: f64,
    /// Duration of a preset transition.
    pub transition_secs: f64,
    /// Easing of a preset transition.
    pub transition_ease: Ease,
    /// Icon line end `x` at rest (line 1, line 2).
    pub line_rest_x2: [f64; 2],
    /// Icon line end `x` while hovered.
    pub line_hovered_x2: [f64; 2],
    /// Line transition duration when entering hover.
    pub line_enter_secs: f64,
    /// Line transition duration when leaving hover.
    pub line_leave_secs: f64,
    /// Easing of the line transition.
    pub line_ease: Ease,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            center: Point::new(32.0, 32.0),
            point_count: 360,
            radius: 20.0,
            tick_step: 0.01,
            transition_secs: 0.6,
            transition_ease: Ease::InOutExpo,
            line_rest_x2: [30.0, 25.0],
            line_hovered_x2: [22.0, 22.0],
            line_enter_secs: 0.6,
            line_leave_secs: 0.5,
            line_ease: Ease::InOutQuart,
        }
    }
}

impl CircleConfig {
    /// Reject configurations the ring generator or tweens cannot honor.
    pub fn validate(&self) -> FolioResult<()> {
        if self.point_count == 0 {
            return Err(FolioError::config("circles.point_count must be > 0"));
        }
        let finite = [
            self.center.x,
            self.center.y,
            self.radius,
            self.tick_step,
            self.transition_secs,
            self.line_enter_secs,
            self.line_leave_secs,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(FolioError::config("circles values must be finite"));
        }
        if self.transition_secs < 0.0 || self.line_enter_secs < 0.0 || self.line_leave_secs < 0.0
        {
            return Err(FolioError::config("circles durations must be >= 0"));
        }
        Ok(())
    }
}

/// Everything a renderer needs to draw one frame of the menu button.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleFrame {
    /// Inner ring outline.
    pub ring_1: Vec<Point>,
    /// Outer ring outline.
    pub ring_2: Vec<Point>,
    /// Icon line end `x` values.
    pub line_x2: [f64; 2],
}

/// State of the two-ring menu button animation.
///
/// The noise field is owned by the animation and only ever read; the perpetual motion comes
/// from the tick advancing the sampling offset.
#[derive(Debug)]
pub struct MenuCircles<N> {
    config: CircleConfig,
    presets: CirclePresets,
    noise: N,
    tick: f64,
    hovered: bool,
    values: PresetValues,
    values_tween: Option<Tween<PresetValues>>,
    line_x2: [f64; 2],
    line_tween: Option<Tween<[f64; 2]>>,
}

impl<N: Noise2D> MenuCircles<N> {
    /// Start at rest.
    pub fn new(config: CircleConfig, presets: CirclePresets, noise: N) -> FolioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            presets,
            noise,
            tick: 0.0,
            hovered: false,
            values: presets.rest,
            values_tween: None,
            line_x2: config.line_rest_x2,
            line_tween: None,
        })
    }

    /// Current hover state.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Instantaneous preset values.
    pub fn values(&self) -> PresetValues {
        self.values
    }

    /// Shared tick driving the ring offsets.
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Switch hover state, easing from the current instantaneous values.
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        let c = &self.config;
        self.values_tween = Some(Tween::new(
            self.values,
            self.presets.for_hover(hovered),
            c.transition_secs,
            c.transition_ease,
        ));
        let (line_to, line_secs) = if hovered {
            (c.line_hovered_x2, c.line_enter_secs)
        } else {
            (c.line_rest_x2, c.line_leave_secs)
        };
        self.line_tween = Some(Tween::new(self.line_x2, line_to, line_secs, c.line_ease));
    }

    /// Advance one frame (`dt_secs` drives the tweens, the tick advances by a fixed step).
    pub fn advance(&mut self, dt_secs: f64) -> FolioResult<CircleFrame> {
        if let Some(tw) = self.values_tween.as_mut() {
            self.values = tw.advance(dt_secs);
            if tw.is_finished() {
                self.values_tween = None;
            }
        }
        if let Some(tw) = self.line_tween.as_mut() {
            self.line_x2 = tw.advance(dt_secs);
            if tw.is_finished() {
                self.line_tween = None;
            }
        }

        self.tick += self.config.tick_step;
        self.render()
    }

    /// Outline for the current state without advancing time.
    pub fn render(&self) -> FolioResult<CircleFrame> {
        let c = &self.config;
        let v = &self.values;
        let tick = self.tick;

        let radius_1 = c.radius + (tick * 1.5).sin() * v.pulse_amplitude;
        let radius_2 = c.radius + (tick * 1.1).cos() * v.pulse_amplitude;

        let ring_1 = generate_polygon(
            &PolygonPathSpec {
                center: c.center,
                base_radius: radius_1,
                noise_strength: v.noise_strength_1,
                angle_offset: tick * 0.5,
                point_count: c.point_count,
            },
            &self.noise,
        )?;
        let ring_2 = generate_polygon(
            &PolygonPathSpec {
                center: c.center,
                base_radius: radius_2,
                noise_strength: v.noise_strength_2,
                angle_offset: tick * 0.2,
                point_count: c.point_count,
            },
            &self.noise,
        )?;

        Ok(CircleFrame {
            ring_1,
            ring_2,
            line_x2: self.line_x2,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/circles.rs"]
mod tests;
