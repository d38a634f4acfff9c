use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::ease::Ease,
    animation::follower::{FollowerScale, FollowerState},
    animation::tween::Tween,
    foundation::core::{FrameClock, Vec2},
    foundation::error::{FolioError, FolioResult},
    runtime::device::InputCapabilities,
    runtime::frame::{AnimationHandle, FrameDriver},
};

/// Tuning of the pointer-following cursor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Damping rate; higher values catch up faster.
    pub k: f64,
    /// Cursor edge length at scale 1, in pixels.
    pub base_size: f64,
    /// Lag-distance to scale mapping.
    pub scale: FollowerScale,
    /// Duration of the hover shape morph, in seconds.
    pub morph_secs: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            k: 14.0,
            base_size: 40.0,
            scale: FollowerScale::default(),
            morph_secs: 0.3,
        }
    }
}

impl CursorConfig {
    /// Reject values the follower cannot honor.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(FolioError::config("cursor.k must be finite and > 0"));
        }
        if !(self.base_size.is_finite() && self.base_size > 0.0) {
            return Err(FolioError::config(
                "cursor.base_size must be finite and > 0",
            ));
        }
        if !(self.morph_secs.is_finite() && self.morph_secs >= 0.0) {
            return Err(FolioError::config(
                "cursor.morph_secs must be finite and >= 0",
            ));
        }
        self.scale
            .validate()
            .map_err(|e| FolioError::config(format!("cursor.scale: {e}")))
    }
}

/// Glyph drawn inside the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// Resting dot.
    #[default]
    Dot,
    /// Diagonal arrow shown over buttons.
    Arrow,
    /// Vertical double arrow shown over draggable follow targets.
    ArrowUpDown,
}

impl CursorShape {
    /// SVG path data of the glyph in a 40x40 view box.
    pub fn path_data(self) -> &'static str {
        match self {
            Self::Dot => {
                "M20 17.5C21.3807 17.5 22.5 18.6193 22.5 20C22.5 21.3807 21.3807 22.5 20 22.5C18.6193 22.5 17.5 21.3807 17.5 20C17.5 18.6193 18.6193 17.5 20 17.5Z"
            }
            Self::Arrow => "M10.5 31.5L29.9998 9M29.9998 9H15.6147M29.9998 9V23.5",
            Self::ArrowUpDown => {
                "M23.5 25.5L20.24 29M20.24 11L17 15M20.24 11L23.5 15M20.24 11V17.5M17 25.5L20.24 29M20.24 29V22.5"
            }
        }
    }
}

/// What the renderer applies to the cursor element on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    /// Top-left translation in viewport pixels.
    pub translate: Vec2,
    /// Edge length in pixels.
    pub size: f64,
    /// Scale that produced `size`.
    pub scale: f64,
    /// Glyph the cursor is morphing away from.
    pub from_shape: CursorShape,
    /// Glyph the cursor is morphing towards.
    pub shape: CursorShape,
    /// Eased morph amount from `from_shape` (0) to `shape` (1). Overshoots slightly at both
    /// ends of the transition.
    pub morph: f64,
}

/// Render target of the cursor.
pub trait CursorSurface {
    /// Apply one frame's transform and size.
    fn apply(&mut self, frame: CursorFrame);
}

impl<F> CursorSurface for F
where
    F: FnMut(CursorFrame),
{
    fn apply(&mut self, frame: CursorFrame) {
        self(frame)
    }
}

struct CursorState {
    config: CursorConfig,
    follower: FollowerState,
    clock: FrameClock,
    size: f64,
    from_shape: CursorShape,
    shape: CursorShape,
    morph: Tween<f64>,
    last: Option<CursorFrame>,
    surface: Box<dyn CursorSurface>,
}

impl CursorState {
    fn morph_to(&mut self, shape: CursorShape) {
        if shape == self.shape {
            return;
        }
        self.from_shape = self.shape;
        self.shape = shape;
        self.morph = Tween::new(0.0, 1.0, self.config.morph_secs, Ease::InOutBack);
    }

    fn on_frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms).delta_secs;
        self.follower.step(dt, self.config.k);
        let morph = self.morph.advance(dt);

        let scale = self.config.scale.scale(&self.follower);
        let frame = CursorFrame {
            translate: self.follower.current,
            size: scale * self.config.base_size,
            scale,
            from_shape: self.from_shape,
            shape: self.shape,
            morph,
        };
        self.size = frame.size;
        self.last = Some(frame);
        self.surface.apply(frame);
    }
}

/// Damped cursor follower wired to a frame driver.
pub struct CursorAnimation {
    state: Rc<RefCell<CursorState>>,
    handle: AnimationHandle,
}

impl std::fmt::Debug for CursorAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorAnimation")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl CursorAnimation {
    /// Start the cursor animation.
    ///
    /// Returns `Ok(None)` without subscribing anything when the environment has no fine
    /// pointer (touch-first or headless) or when there is no surface to draw into.
    #[tracing::instrument(skip(driver, surface))]
    pub fn setup<S>(
        driver: Rc<dyn FrameDriver>,
        caps: &InputCapabilities,
        config: CursorConfig,
        surface: Option<S>,
    ) -> FolioResult<Option<Self>>
    where
        S: CursorSurface + 'static,
    {
        config.validate()?;
        if !caps.supports_custom_cursor() {
            tracing::debug!("no fine pointer, custom cursor disabled");
            return Ok(None);
        }
        let Some(surface) = surface else {
            tracing::debug!("no cursor surface, custom cursor disabled");
            return Ok(None);
        };

        let state = Rc::new(RefCell::new(CursorState {
            config,
            follower: FollowerState::default(),
            clock: FrameClock::new(),
            size: config.base_size,
            from_shape: CursorShape::Dot,
            shape: CursorShape::Dot,
            morph: Tween::new(0.0, 1.0, 0.0, Ease::InOutBack),
            last: None,
            surface: Box::new(surface),
        }));
        let mut out = Self {
            state,
            handle: AnimationHandle::new(driver),
        };
        out.restart();
        Ok(Some(out))
    }

    /// (Re)subscribe the frame callback. Safe to call repeatedly, e.g. on resize.
    pub fn restart(&mut self) {
        let state = Rc::clone(&self.state);
        state.borrow_mut().clock.reset();
        self.handle
            .attach(Box::new(move |ts| state.borrow_mut().on_frame(ts)));
    }

    /// Stop receiving frames. The follower keeps its position for a later `restart`.
    pub fn teardown(&mut self) {
        self.handle.detach();
    }

    /// Whether the frame callback is subscribed.
    pub fn is_running(&self) -> bool {
        self.handle.is_attached()
    }

    /// Pointer moved to viewport coordinates `(x, y)`; the cursor centers on it.
    pub fn pointer_moved(&self, x: f64, y: f64) {
        let mut s = self.state.borrow_mut();
        let half = s.size / 2.0;
        s.follower.target = Vec2::new(x - half, y - half);
    }

    /// Pointer entered an interactive element: buttons morph the cursor into an arrow,
    /// follow targets (`follow == true`) into an up/down arrow.
    pub fn pointer_enter(&self, follow: bool) {
        let shape = if follow {
            CursorShape::ArrowUpDown
        } else {
            CursorShape::Arrow
        };
        self.state.borrow_mut().morph_to(shape);
    }

    /// Pointer left an interactive element; the cursor morphs back into the dot.
    pub fn pointer_leave(&self) {
        self.state.borrow_mut().morph_to(CursorShape::Dot);
    }

    /// Glyph the cursor is currently morphing towards.
    pub fn shape(&self) -> CursorShape {
        self.state.borrow().shape
    }

    /// Current follower state.
    pub fn follower(&self) -> FollowerState {
        self.state.borrow().follower
    }

    /// Most recently rendered frame.
    pub fn last_frame(&self) -> Option<CursorFrame> {
        self.state.borrow().last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/cursor.rs"]
mod tests;
