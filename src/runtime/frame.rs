use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Callback invoked once per host frame with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Identifies one live frame subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Host-owned "next frame" scheduler.
///
/// Implementations use interior mutability: components hold an `Rc<dyn FrameDriver>` and
/// subscribe from inside their own setup code.
pub trait FrameDriver {
    /// Register `callback` to run on every frame until unsubscribed.
    fn subscribe(&self, callback: FrameCallback) -> SubscriptionId;

    /// Remove a subscription. Returns `false` if it was not live.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Number of live subscriptions.
    fn live_subscriptions(&self) -> usize;
}

type SharedCallback = Rc<RefCell<FrameCallback>>;

/// Deterministic frame driver that only runs frames when told to.
#[derive(Default)]
pub struct ManualFrameDriver {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(SubscriptionId, SharedCallback)>>,
}

impl std::fmt::Debug for ManualFrameDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualFrameDriver")
            .field("live", &self.callbacks.borrow().len())
            .finish()
    }
}

impl ManualFrameDriver {
    /// Create a driver with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame at `timestamp_ms`.
    ///
    /// Callbacks may subscribe or unsubscribe while the frame runs; a callback removed
    /// mid-frame is not invoked afterwards, and one added mid-frame first runs next frame.
    pub fn advance(&self, timestamp_ms: f64) {
        let snapshot: Vec<(SubscriptionId, SharedCallback)> = self.callbacks.borrow().clone();
        for (id, callback) in snapshot {
            if !self.is_live(id) {
                continue;
            }
            let Ok(mut callback) = callback.try_borrow_mut() else {
                // Re-entrant advance from inside this callback; skip rather than panic.
                continue;
            };
            (*callback)(timestamp_ms);
        }
    }

    /// Run `frames` frames spaced `step_ms` apart, starting at `start_ms`.
    pub fn run(&self, start_ms: f64, step_ms: f64, frames: usize) {
        for i in 0..frames {
            self.advance(start_ms + step_ms * i as f64);
        }
    }

    fn is_live(&self, id: SubscriptionId) -> bool {
        self.callbacks.borrow().iter().any(|(live, _)| *live == id)
    }
}

impl FrameDriver for ManualFrameDriver {
    fn subscribe(&self, callback: FrameCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(live, _)| *live != id);
        callbacks.len() != before
    }

    fn live_subscriptions(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

/// Owner of at most one frame subscription.
///
/// `attach` tears down the previous subscription before registering the new one, so running
/// setup twice never double-registers. Dropping the handle unsubscribes.
pub struct AnimationHandle {
    driver: Rc<dyn FrameDriver>,
    id: Option<SubscriptionId>,
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl AnimationHandle {
    /// A detached handle bound to `driver`.
    pub fn new(driver: Rc<dyn FrameDriver>) -> Self {
        Self { driver, id: None }
    }

    /// Replace the current subscription (if any) with `callback`.
    pub fn attach(&mut self, callback: FrameCallback) -> SubscriptionId {
        self.detach();
        let id = self.driver.subscribe(callback);
        self.id = Some(id);
        id
    }

    /// Remove the current subscription. Idempotent.
    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            self.driver.unsubscribe(id);
        }
    }

    /// Whether a subscription is live.
    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Driver this handle subscribes to.
    pub fn driver(&self) -> &Rc<dyn FrameDriver> {
        &self.driver
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/frame.rs"]
mod tests;
