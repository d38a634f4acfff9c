use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::waveform::{WaveformParams, heartbeat_scale},
    foundation::core::FrameClock,
    foundation::error::FolioResult,
    runtime::frame::{AnimationHandle, FrameDriver},
};

/// Render target of the pulsing element; receives a uniform scale.
pub trait ScaleSurface {
    /// Apply the scale for one frame.
    fn set_scale(&mut self, scale: f64);
}

impl<F> ScaleSurface for F
where
    F: FnMut(f64),
{
    fn set_scale(&mut self, scale: f64) {
        self(scale)
    }
}

struct HeartbeatState {
    params: WaveformParams,
    clock: FrameClock,
    last: Option<f64>,
    surface: Box<dyn ScaleSurface>,
}

/// Heartbeat pulse driven by elapsed time since the first frame after (re)start.
pub struct HeartbeatAnimation {
    state: Rc<RefCell<HeartbeatState>>,
    handle: AnimationHandle,
}

impl std::fmt::Debug for HeartbeatAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeartbeatAnimation")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl HeartbeatAnimation {
    /// Start pulsing. With no surface nothing is subscribed and `Ok(None)` is returned.
    pub fn setup<S>(
        driver: Rc<dyn FrameDriver>,
        params: WaveformParams,
        surface: Option<S>,
    ) -> FolioResult<Option<Self>>
    where
        S: ScaleSurface + 'static,
    {
        params.validate()?;
        let Some(surface) = surface else {
            tracing::debug!("no heartbeat surface, pulse disabled");
            return Ok(None);
        };
        let mut out = Self {
            state: Rc::new(RefCell::new(HeartbeatState {
                params,
                clock: FrameClock::new(),
                last: None,
                surface: Box::new(surface),
            })),
            handle: AnimationHandle::new(driver),
        };
        out.restart();
        Ok(Some(out))
    }

    /// (Re)subscribe; the waveform restarts at `t = 0` on the next frame.
    pub fn restart(&mut self) {
        let state = Rc::clone(&self.state);
        state.borrow_mut().clock.reset();
        self.handle.attach(Box::new(move |ts| {
            let mut s = state.borrow_mut();
            let t = s.clock.tick(ts).elapsed_secs;
            let scale = heartbeat_scale(t, &s.params);
            s.last = Some(scale);
            s.surface.set_scale(scale);
        }));
    }

    /// Stop receiving frames.
    pub fn teardown(&mut self) {
        self.handle.detach();
    }

    /// Whether the frame callback is subscribed.
    pub fn is_running(&self) -> bool {
        self.handle.is_attached()
    }

    /// Scale applied on the most recent frame.
    pub fn last_scale(&self) -> Option<f64> {
        self.state.borrow().last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/heartbeat.rs"]
mod tests;
