use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::Context;

use crate::{
    assets::loader::AssetLoader,
    assets::manifest::AssetDescriptor,
    assets::preload::{LoadOutcome, preload},
    foundation::error::{FolioError, FolioResult},
};

/// Persisted "this visitor has seen the loading screen" marker.
pub trait LoadFlag {
    /// Whether a previous session completed a preload.
    fn has_loaded_before(&self) -> bool;
    /// Record a completed preload.
    fn mark_loaded(&self) -> FolioResult<()>;
}

/// In-process flag, for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryLoadFlag {
    loaded: AtomicBool,
}

impl MemoryLoadFlag {
    /// Flag that has not been set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag that starts out set.
    pub fn already_loaded() -> Self {
        Self {
            loaded: AtomicBool::new(true),
        }
    }
}

impl LoadFlag for MemoryLoadFlag {
    fn has_loaded_before(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    fn mark_loaded(&self) -> FolioResult<()> {
        self.loaded.store(true, Ordering::Release);
        Ok(())
    }
}

/// Flag stored as one key of a JSON object file, e.g. `{"folio": true}`.
///
/// Other keys in the file are preserved when the flag is written.
#[derive(Clone, Debug)]
pub struct FileLoadFlag {
    path: PathBuf,
    key: String,
}

impl FileLoadFlag {
    /// Flag `key` inside the JSON file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> FolioResult<BTreeMap<String, serde_json::Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let s = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read load flag '{}'", self.path.display()))?;
        if s.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&s)?)
    }
}

impl LoadFlag for FileLoadFlag {
    fn has_loaded_before(&self) -> bool {
        match self.read_map() {
            Ok(map) => map.get(&self.key).is_some_and(|v| v.as_bool() == Some(true)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %format!("{err:#}"), "ignoring unreadable load flag");
                false
            }
        }
    }

    fn mark_loaded(&self) -> FolioResult<()> {
        // An unreadable file is replaced rather than blocking startup forever.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(self.key.clone(), serde_json::Value::Bool(true));

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir '{}'", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write load flag '{}'", self.path.display()))
            .map_err(FolioError::from)
    }
}

/// What [`boot`] did before handing control to the app.
#[derive(Debug)]
pub enum BootReport {
    /// The flag was set; nothing was loaded.
    Skipped,
    /// The preload ran to completion.
    Loaded {
        /// Per-asset outcomes in manifest order.
        outcomes: Vec<LoadOutcome>,
        /// Number of `Failure` outcomes.
        failed: usize,
    },
    /// The preload could not start; the app proceeds without it.
    Degraded {
        /// Why the preload was abandoned.
        reason: String,
    },
}

impl BootReport {
    /// Whether the preload ran (as opposed to being skipped or abandoned).
    pub fn did_preload(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Preload on a first visit, skip on later ones, and never block the app on errors.
///
/// The flag is marked only after a preload that ran to completion, even if some assets
/// failed. A failure to persist the flag is logged and otherwise ignored.
#[tracing::instrument(skip_all, fields(assets = manifest.len()))]
pub async fn boot<Fl, L, F>(
    flag: &Fl,
    manifest: &[AssetDescriptor],
    loader: &L,
    on_progress: F,
) -> BootReport
where
    Fl: LoadFlag + ?Sized,
    L: AssetLoader + ?Sized,
    F: FnMut(u8) + Send + 'static,
{
    if flag.has_loaded_before() {
        tracing::debug!("assets loaded on a previous visit, skipping preload");
        return BootReport::Skipped;
    }

    let outcomes = match preload(manifest, loader, on_progress).await {
        Ok(outcomes) => outcomes,
        Err(err) => {
            let reason = format!("{err:#}");
            tracing::error!(%reason, "preload could not start, continuing without it");
            return BootReport::Degraded { reason };
        }
    };

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "preload finished with failures");
    }
    if let Err(err) = flag.mark_loaded() {
        tracing::warn!(error = %format!("{err:#}"), "could not persist load flag");
    }
    BootReport::Loaded { outcomes, failed }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/startup.rs"]
mod tests;
