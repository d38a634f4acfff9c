use std::sync::{Arc, Mutex, PoisonError};

use futures::{
    FutureExt,
    future::{AbortHandle, Abortable, Aborted, BoxFuture, join_all},
};

use crate::{
    assets::loader::{AssetLoader, LoadedAsset},
    assets::manifest::{AssetDescriptor, validate_manifest},
    foundation::error::FolioResult,
};

/// Percentage of `total` that `settled` represents, rounded half up.
///
/// `total == 0` reports 100 (there is nothing left to wait for).
pub fn progress_percent(settled: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let settled = settled.min(total) as u128;
    let total = total as u128;
    ((settled * 100 + total / 2) / total) as u8
}

/// How one manifest entry ended.
#[derive(Clone, Debug)]
pub enum LoadOutcome {
    /// The asset is ready.
    Success(LoadedAsset),
    /// The load failed; the reason is a human-readable message.
    Failure(String),
    /// The session was cancelled before this load settled.
    Cancelled,
}

impl LoadOutcome {
    /// `true` for [`LoadOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for [`LoadOutcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// `true` for [`LoadOutcome::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Payload of a successful load.
    pub fn asset(&self) -> Option<&LoadedAsset> {
        match self {
            Self::Success(asset) => Some(asset),
            _ => None,
        }
    }
}

type ProgressFn = Box<dyn FnMut(u8) + Send>;

struct PreloadSession {
    total: usize,
    settled: usize,
    last_reported: u8,
    on_progress: ProgressFn,
}

impl PreloadSession {
    fn new(total: usize, on_progress: ProgressFn) -> Self {
        Self {
            total,
            settled: 0,
            last_reported: 0,
            on_progress,
        }
    }

    fn settle_one(&mut self) {
        debug_assert!(self.settled < self.total, "asset settled twice");
        self.settled = (self.settled + 1).min(self.total);
        let pct = progress_percent(self.settled, self.total).max(self.last_reported);
        self.last_reported = pct;
        (self.on_progress)(pct);
    }
}

/// Cancels every load of one preload session that has not settled yet.
#[derive(Clone, Debug)]
pub struct PreloadCancel {
    handles: Vec<AbortHandle>,
}

impl PreloadCancel {
    /// Resolve every pending load as [`LoadOutcome::Cancelled`].
    ///
    /// Loads that already settled keep their outcome. Calling this more than once is harmless.
    pub fn cancel(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }

    /// Whether [`PreloadCancel::cancel`] was called.
    pub fn is_cancelled(&self) -> bool {
        self.handles.iter().any(AbortHandle::is_aborted)
    }
}

/// Start a preload session and return its completion future plus a cancel handle.
///
/// Every load is issued before this function returns. `on_progress` is called once per
/// settled asset (success, failure and cancellation alike) with a non-decreasing percentage
/// that ends at 100. The outcomes come back in manifest order.
pub fn preload_cancellable<L, F>(
    manifest: &[AssetDescriptor],
    loader: &L,
    on_progress: F,
) -> FolioResult<(BoxFuture<'static, Vec<LoadOutcome>>, PreloadCancel)>
where
    L: AssetLoader + ?Sized,
    F: FnMut(u8) + Send + 'static,
{
    validate_manifest(manifest)?;
    tracing::debug!(total = manifest.len(), "preload session started");

    let session = Arc::new(Mutex::new(PreloadSession::new(
        manifest.len(),
        Box::new(on_progress),
    )));

    let mut handles = Vec::with_capacity(manifest.len());
    let mut pending = Vec::with_capacity(manifest.len());
    for asset in manifest {
        let (handle, registration) = AbortHandle::new_pair();
        handles.push(handle);

        let load = Abortable::new(loader.load(asset), registration);
        let session = Arc::clone(&session);
        let kind = asset.kind();
        let locator = asset.locator().to_string();
        pending.push(async move {
            let outcome = match load.await {
                Ok(Ok(ready)) => LoadOutcome::Success(ready),
                Ok(Err(err)) => {
                    let reason = format!("{err:#}");
                    tracing::warn!(kind, locator = %locator, %reason, "asset failed to load");
                    LoadOutcome::Failure(reason)
                }
                Err(Aborted) => {
                    tracing::debug!(kind, locator = %locator, "asset load cancelled");
                    LoadOutcome::Cancelled
                }
            };
            session
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .settle_one();
            outcome
        });
    }

    let done = join_all(pending).boxed();
    Ok((done, PreloadCancel { handles }))
}

/// Load every asset of `manifest` concurrently, reporting progress as they settle.
///
/// Fails only when the manifest is rejected; individual load failures are returned as
/// [`LoadOutcome::Failure`] at their manifest position.
pub async fn preload<L, F>(
    manifest: &[AssetDescriptor],
    loader: &L,
    on_progress: F,
) -> FolioResult<Vec<LoadOutcome>>
where
    L: AssetLoader + ?Sized,
    F: FnMut(u8) + Send + 'static,
{
    let (done, _cancel) = preload_cancellable(manifest, loader, on_progress)?;
    Ok(done.await)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/preload.rs"]
mod tests;
