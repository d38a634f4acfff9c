use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::curtain::overlay_curve_path,
    animation::ease::Ease,
    animation::tween::Tween,
    foundation::core::{BezPath, FrameClock},
    foundation::error::{FolioError, FolioResult},
    runtime::frame::{AnimationHandle, FrameDriver},
    runtime::overlay::OverlayCloser,
};

/// Timing and shape of the menu overlay's slide and curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Slide-in duration, in seconds.
    pub open_secs: f64,
    /// Slide-out duration, in seconds. The overlay unmounts when it completes.
    pub close_secs: f64,
    /// How far the trailing edge sags at full curve, in pixels.
    pub curve_depth: f64,
    /// Curve shared by the slide and the edge.
    pub ease: Ease,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            open_secs: 1.2,
            close_secs: 1.8,
            curve_depth: 400.0,
            ease: Ease::InOutQuad,
        }
    }
}

impl OverlayConfig {
    /// Reject durations and depths the sequence cannot honor.
    pub fn validate(&self) -> FolioResult<()> {
        for (name, v) in [
            ("open_secs", self.open_secs),
            ("close_secs", self.close_secs),
            ("curve_depth", self.curve_depth),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(FolioError::config(format!(
                    "overlay.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Where the overlay is in its open/close sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Off screen and unmounted.
    #[default]
    Hidden,
    /// Sliding in.
    Opening,
    /// Fully on screen.
    Open,
    /// Sliding out; still mounted.
    Closing,
}

/// What the renderer applies to the overlay on one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Sequence phase.
    pub phase: OverlayPhase,
    /// 0 is fully above the viewport (shifted up by its own height plus the curve depth),
    /// 1 is fully on screen.
    pub slide: f64,
    /// Current sag of the trailing edge, in pixels.
    pub curve_depth: f64,
    /// Vertical shift of the edge as a fraction of its height: towards +1 while opening,
    /// towards -1 while closing.
    pub curve_shift: f64,
    /// Trailing edge outline for the current viewport width.
    pub edge: BezPath,
}

impl OverlayFrame {
    /// Whether the overlay should be visible at all.
    pub fn visible(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }
}

/// Render target of the menu overlay.
pub trait OverlaySurface {
    /// Apply one frame of the slide and edge curve.
    fn draw(&mut self, frame: &OverlayFrame);
}

impl<F> OverlaySurface for F
where
    F: FnMut(&OverlayFrame),
{
    fn draw(&mut self, frame: &OverlayFrame) {
        self(frame)
    }
}

struct OverlayAnimState {
    config: OverlayConfig,
    closer: OverlayCloser,
    width: f64,
    clock: FrameClock,
    phase: OverlayPhase,
    slide: Tween<f64>,
    curve: Tween<f64>,
    last: Option<OverlayFrame>,
    surface: Box<dyn OverlaySurface>,
}

impl OverlayAnimState {
    fn on_frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms).delta_secs;
        self.sync_with_flags();

        let slide = self.slide.advance(dt);
        let curve = self.curve.advance(dt);
        let mut depth = curve * self.config.curve_depth;
        let mut shift = match self.phase {
            OverlayPhase::Closing => -curve,
            _ => curve,
        };

        match self.phase {
            OverlayPhase::Opening if self.slide.is_finished() => {
                self.phase = OverlayPhase::Open;
                depth = 0.0;
                shift = 0.0;
                tracing::debug!("menu overlay opened");
            }
            OverlayPhase::Closing if self.slide.is_finished() => {
                self.phase = OverlayPhase::Hidden;
                depth = 0.0;
                shift = 0.0;
                self.closer.finish_close();
                tracing::debug!("menu overlay closed, unmounting");
            }
            OverlayPhase::Open | OverlayPhase::Hidden => {
                depth = 0.0;
                shift = 0.0;
            }
            _ => {}
        }

        let frame = OverlayFrame {
            phase: self.phase,
            slide,
            curve_depth: depth,
            curve_shift: shift,
            edge: overlay_curve_path(self.width, depth),
        };
        self.surface.draw(&frame);
        self.last = Some(frame);
    }

    fn sync_with_flags(&mut self) {
        let flags = self.closer.get();
        match (flags.view_modal, self.phase) {
            (true, OverlayPhase::Hidden | OverlayPhase::Closing) => {
                self.phase = OverlayPhase::Opening;
                self.slide = Tween::new(0.0, 1.0, self.config.open_secs, self.config.ease);
                self.curve = Tween::new(0.0, 1.0, self.config.open_secs, self.config.ease);
            }
            (false, OverlayPhase::Opening | OverlayPhase::Open) => {
                let from = self.slide.value();
                self.phase = OverlayPhase::Closing;
                self.slide = Tween::new(from, 0.0, self.config.close_secs, self.config.ease);
                self.curve = Tween::new(0.0, 1.0, self.config.close_secs, self.config.ease);
            }
            (false, OverlayPhase::Hidden) if flags.should_render_modal => {
                // Opened and closed again between two frames: nothing to animate.
                self.closer.finish_close();
            }
            _ => {}
        }
    }
}

fn settled(value: f64) -> Tween<f64> {
    Tween::new(value, value, 0.0, Ease::Linear)
}

/// The full-screen menu overlay: slides in with a sagging edge when the overlay opens, slides
/// out when it closes, and unmounts itself once the close sequence completes.
pub struct MenuOverlay {
    state: Rc<RefCell<OverlayAnimState>>,
    handle: AnimationHandle,
}

impl std::fmt::Debug for MenuOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuOverlay")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl MenuOverlay {
    /// Start watching the overlay flags.
    ///
    /// With no surface nothing is subscribed and `Ok(None)` is returned; the overlay then
    /// never animates and the host is responsible for `finish_close`.
    #[tracing::instrument(skip(driver, closer, surface))]
    pub fn setup<S>(
        driver: Rc<dyn FrameDriver>,
        closer: OverlayCloser,
        config: OverlayConfig,
        viewport_width: f64,
        surface: Option<S>,
    ) -> FolioResult<Option<Self>>
    where
        S: OverlaySurface + 'static,
    {
        config.validate()?;
        check_width(viewport_width)?;
        let Some(surface) = surface else {
            tracing::debug!("no overlay surface, menu overlay disabled");
            return Ok(None);
        };
        let mut out = Self {
            state: Rc::new(RefCell::new(OverlayAnimState {
                config,
                closer,
                width: viewport_width,
                clock: FrameClock::new(),
                phase: OverlayPhase::Hidden,
                slide: settled(0.0),
                curve: settled(0.0),
                last: None,
                surface: Box::new(surface),
            })),
            handle: AnimationHandle::new(driver),
        };
        out.restart();
        Ok(Some(out))
    }

    /// (Re)subscribe the frame callback without double-registering.
    pub fn restart(&mut self) {
        let state = Rc::clone(&self.state);
        state.borrow_mut().clock.reset();
        self.handle
            .attach(Box::new(move |ts| state.borrow_mut().on_frame(ts)));
    }

    /// Stop receiving frames.
    pub fn teardown(&mut self) {
        self.handle.detach();
    }

    /// Whether the frame callback is subscribed.
    pub fn is_running(&self) -> bool {
        self.handle.is_attached()
    }

    /// The viewport was resized; later edges span the new width.
    pub fn resize(&self, viewport_width: f64) -> FolioResult<()> {
        check_width(viewport_width)?;
        self.state.borrow_mut().width = viewport_width;
        Ok(())
    }

    /// A menu entry was chosen: close the overlay.
    pub fn item_clicked(&self) {
        self.state.borrow().closer.close();
    }

    /// Current sequence phase.
    pub fn phase(&self) -> OverlayPhase {
        self.state.borrow().phase
    }

    /// Most recently rendered frame.
    pub fn last_frame(&self) -> Option<OverlayFrame> {
        self.state.borrow().last.clone()
    }
}

fn check_width(width: f64) -> FolioResult<()> {
    if width.is_finite() && width >= 0.0 {
        Ok(())
    } else {
        Err(FolioError::validation(
            "viewport width must be finite and >= 0",
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/menu_overlay.rs"]
mod tests;
