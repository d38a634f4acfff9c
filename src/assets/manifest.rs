use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{FolioError, FolioResult};

/// One asset to preload.
///
/// Serialized as `{"kind": "image" | "model" | "font", "locator": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "locator", rename_all = "lowercase")]
pub enum AssetDescriptor {
    /// Raster or SVG image, by path.
    Image(String),
    /// Binary glTF model, by path.
    Model(String),
    /// Font family, by name.
    Font(String),
}

impl AssetDescriptor {
    /// Path or family name of the asset.
    pub fn locator(&self) -> &str {
        match self {
            Self::Image(s) | Self::Model(s) | Self::Font(s) => s,
        }
    }

    /// Lowercase kind tag, as used in manifests and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Model(_) => "model",
            Self::Font(_) => "font",
        }
    }
}

/// Reject manifests that must not start a preload session.
pub fn validate_manifest(entries: &[AssetDescriptor]) -> FolioResult<()> {
    if entries.is_empty() {
        return Err(FolioError::manifest("manifest must contain at least one asset"));
    }
    for (i, entry) in entries.iter().enumerate() {
        if entry.locator().trim().is_empty() {
            return Err(FolioError::manifest(format!(
                "entry {i} ({}) has an empty locator",
                entry.kind()
            )));
        }
    }
    Ok(())
}

/// A validated, ordered list of assets.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<AssetDescriptor>,
}

impl Manifest {
    /// Validate and wrap `entries`.
    pub fn new(entries: Vec<AssetDescriptor>) -> FolioResult<Self> {
        validate_manifest(&entries)?;
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{kind, locator}` objects.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let entries: Vec<AssetDescriptor> =
            serde_json::from_str(s).map_err(|e| FolioError::manifest(e.to_string()))?;
        Self::new(entries)
    }

    /// Read and parse a manifest file.
    pub fn from_json_path(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Entries in manifest order.
    pub fn entries(&self) -> &[AssetDescriptor] {
        &self.entries
    }

    /// Number of entries (never zero).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<[AssetDescriptor]> for Manifest {
    fn as_ref(&self) -> &[AssetDescriptor] {
        &self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manifest.rs"]
mod tests;
