use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::circles::{CircleConfig, CirclePresets},
    animation::waveform::WaveformParams,
    foundation::error::{FolioError, FolioResult},
    runtime::cursor::CursorConfig,
    runtime::menu_overlay::OverlayConfig,
};

/// Tunables of every animated component, loadable from JSON.
///
/// Every section and field is optional; missing values fall back to the defaults, which
/// reproduce the portfolio site's motion.
///
/// ```json
/// { "cursor": { "k": 10, "scale": { "min_scale": 0.5 } }, "heartbeat": { "freq_hz": 1.0 } }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Damped cursor follower.
    pub cursor: CursorConfig,
    /// Menu button ring geometry and timing.
    pub circles: CircleConfig,
    /// Rest/hovered ring presets.
    pub presets: CirclePresets,
    /// Menu overlay slide and edge curve.
    pub overlay: OverlayConfig,
    /// Loading screen heartbeat.
    pub heartbeat: WaveformParams,
}

impl FolioConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| FolioError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a configuration from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> FolioResult<()> {
        self.cursor.validate()?;
        self.circles.validate()?;
        self.overlay.validate()?;
        self.heartbeat
            .validate()
            .map_err(|e| FolioError::config(format!("heartbeat: {e}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
