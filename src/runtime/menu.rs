use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::circles::{CircleFrame, MenuCircles},
    animation::noise::Noise2D,
    foundation::core::FrameClock,
    runtime::frame::{AnimationHandle, FrameDriver},
    runtime::overlay::{OverlayCloser, OverlayWriter},
};

/// Render target of the menu button.
pub trait CircleSurface {
    /// Draw one frame of the rings and icon lines.
    fn draw(&mut self, frame: &CircleFrame);
}

impl<F> CircleSurface for F
where
    F: FnMut(&CircleFrame),
{
    fn draw(&mut self, frame: &CircleFrame) {
        self(frame)
    }
}

struct MenuState<N> {
    circles: MenuCircles<N>,
    clock: FrameClock,
    overlay: OverlayWriter,
    surface: Box<dyn CircleSurface>,
}

impl<N: Noise2D> MenuState<N> {
    fn on_frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms).delta_secs;
        match self.circles.advance(dt) {
            Ok(frame) => self.surface.draw(&frame),
            Err(err) => tracing::warn!(%err, "menu circle frame skipped"),
        }
    }
}

/// The menu button: perpetually animated rings, hover presets, and the overlay toggle.
///
/// The button owns the overlay's single writer; every other component reads the flags through
/// an `OverlayReader`.
pub struct MenuButton<N> {
    state: Rc<RefCell<MenuState<N>>>,
    handle: AnimationHandle,
}

impl<N> std::fmt::Debug for MenuButton<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuButton")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl<N: Noise2D + 'static> MenuButton<N> {
    /// Start the ring animation. With no surface nothing is subscribed and `None` is returned.
    pub fn setup<S>(
        driver: Rc<dyn FrameDriver>,
        circles: MenuCircles<N>,
        overlay: OverlayWriter,
        surface: Option<S>,
    ) -> Option<Self>
    where
        S: CircleSurface + 'static,
    {
        let Some(surface) = surface else {
            tracing::debug!("no menu button surface, ring animation disabled");
            return None;
        };
        let state = Rc::new(RefCell::new(MenuState {
            circles,
            clock: FrameClock::new(),
            overlay,
            surface: Box::new(surface),
        }));
        let mut out = Self {
            state,
            handle: AnimationHandle::new(driver),
        };
        out.restart();
        Some(out)
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

    /// Pointer entered the button.
    pub fn pointer_enter(&self) {
        self.state.borrow_mut().circles.set_hovered(true);
    }

    /// Pointer left the button.
    pub fn pointer_leave(&self) {
        self.state.borrow_mut().circles.set_hovered(false);
    }

    /// Button clicked: toggle the overlay, returning whether it is now open.
    pub fn click(&self) -> bool {
        let open = self.state.borrow().overlay.toggle_view_modal();
        tracing::debug!(open, "menu overlay toggled");
        open
    }

    /// Close the overlay without toggling, e.g. after a menu entry was chosen.
    pub fn close(&self) {
        self.state.borrow().overlay.set_view_modal(false);
        tracing::debug!("menu overlay closed");
    }

    /// Unmount the overlay after its close animation. Ignored while it is open.
    pub fn finish_close(&self) {
        self.state.borrow().overlay.finish_close();
    }

    /// Close-only overlay handle for the overlay component.
    pub fn overlay_closer(&self) -> OverlayCloser {
        self.state.borrow().overlay.closer()
    }

    /// Read access to the ring state.
    pub fn with_circles<R>(&self, f: impl FnOnce(&MenuCircles<N>) -> R) -> R {
        f(&self.state.borrow().circles)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/menu.rs"]
mod tests;
