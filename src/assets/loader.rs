use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use anyhow::Context;
use futures::{FutureExt, channel::oneshot, future::BoxFuture};

use crate::{
    assets::decode,
    assets::manifest::AssetDescriptor,
    foundation::error::{FolioError, FolioResult},
};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Parsed SVG document size.
pub struct PreparedSvg {
    /// Document width in user units.
    pub width: f32,
    /// Document height in user units.
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Summary of a validated glTF model.
pub struct ModelInfo {
    /// glTF major version.
    pub version: u32,
    /// Size of the file in bytes.
    pub byte_len: usize,
    /// Number of meshes declared by the document.
    pub mesh_count: usize,
    /// Whether the model needs a Draco mesh decoder.
    pub draco: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A font family that is ready for use.
pub struct ReadyFont {
    /// Family name as requested.
    pub family: String,
    /// Number of faces (weights/styles) found for the family.
    pub faces: usize,
}

#[derive(Clone, Debug)]
/// Payload of a successful load.
pub enum LoadedAsset {
    /// Raster image.
    Image(PreparedImage),
    /// SVG image.
    Svg(PreparedSvg),
    /// glTF model.
    Model(ModelInfo),
    /// Font family.
    Font(ReadyFont),
}

/// Issues the load for one asset.
///
/// `load` must start the work before returning (the preloader calls it for every asset up
/// front) and the returned future must not borrow the loader.
pub trait AssetLoader: Send + Sync {
    /// Start loading `asset`.
    fn load(&self, asset: &AssetDescriptor) -> BoxFuture<'static, FolioResult<LoadedAsset>>;
}

impl<L: AssetLoader + ?Sized> AssetLoader for Arc<L> {
    fn load(&self, asset: &AssetDescriptor) -> BoxFuture<'static, FolioResult<LoadedAsset>> {
        (**self).load(asset)
    }
}

/// Loads manifest assets from a directory tree, decoding on the rayon pool.
///
/// Image and model locators are resolved against `root` (a leading `/` means the site root).
/// Fonts are looked up by family name among the font files in `fonts_dir`.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    inner: Arc<FsRoots>,
}

struct FsRoots {
    root: PathBuf,
    fonts_dir: PathBuf,
    fonts: OnceLock<usvg::fontdb::Database>,
}

impl std::fmt::Debug for FsRoots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsRoots")
            .field("root", &self.root)
            .field("fonts_dir", &self.fonts_dir)
            .field("fonts_loaded", &self.fonts.get().map(|db| db.len()))
            .finish()
    }
}

impl FsAssetLoader {
    /// Resolve assets under `root`, fonts under `root/fonts`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let fonts_dir = root.join("fonts");
        Self::with_fonts_dir(root, fonts_dir)
    }

    /// Resolve assets under `root`, fonts under `fonts_dir`.
    pub fn with_fonts_dir(root: impl Into<PathBuf>, fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(FsRoots {
                root: root.into(),
                fonts_dir: fonts_dir.into(),
                fonts: OnceLock::new(),
            }),
        }
    }

    /// Directory image and model locators are resolved against.
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Load synchronously on the calling thread.
    pub fn load_blocking(&self, asset: &AssetDescriptor) -> FolioResult<LoadedAsset> {
        self.inner.load(asset)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, asset: &AssetDescriptor) -> BoxFuture<'static, FolioResult<LoadedAsset>> {
        let (tx, rx) = oneshot::channel();
        let roots = Arc::clone(&self.inner);
        let asset = asset.clone();
        rayon::spawn(move || {
            // The receiver is gone only if the caller stopped waiting.
            let _ = tx.send(roots.load(&asset));
        });

        async move {
            match rx.await {
                Ok(res) => res,
                Err(oneshot::Canceled) => Err(FolioError::asset("load worker exited early")),
            }
        }
        .boxed()
    }
}

impl FsRoots {
    #[tracing::instrument(skip(self))]
    fn load(&self, asset: &AssetDescriptor) -> FolioResult<LoadedAsset> {
        let out = match asset {
            AssetDescriptor::Image(locator) => {
                let norm = normalize_locator(locator)?;
                let bytes = self.read_bytes(&norm)?;
                if has_extension(&norm, "svg") {
                    LoadedAsset::Svg(decode::parse_svg(&bytes)?)
                } else {
                    LoadedAsset::Image(decode::decode_image(&bytes)?)
                }
            }
            AssetDescriptor::Model(locator) => {
                let norm = normalize_locator(locator)?;
                let bytes = self.read_bytes(&norm)?;
                LoadedAsset::Model(decode::inspect_gltf(&bytes)?)
            }
            AssetDescriptor::Font(family) => LoadedAsset::Font(self.find_font(family)?),
        };
        tracing::debug!("asset ready");
        Ok(out)
    }

    fn read_bytes(&self, norm_path: &str) -> FolioResult<Vec<u8>> {
        let path = self.root.join(Path::new(norm_path));
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(FolioError::from)
    }

    fn find_font(&self, family: &str) -> FolioResult<ReadyFont> {
        let db = self.fonts.get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            load_fonts_from_dir(&mut db, &self.fonts_dir);
            tracing::debug!(faces = db.len(), dir = %self.fonts_dir.display(), "font database built");
            db
        });

        let wanted = family.trim();
        let faces = db
            .faces()
            .filter(|face| {
                face.families
                    .iter()
                    .any(|(name, _)| name.eq_ignore_ascii_case(wanted))
            })
            .count();
        if faces == 0 {
            return Err(FolioError::asset(format!(
                "font family '{wanted}' not found in '{}'",
                self.fonts_dir.display()
            )));
        }
        Ok(ReadyFont {
            family: wanted.to_string(),
            faces,
        })
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "skipping unreadable font file");
        }
    }
}

fn has_extension(path: &str, ext: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Normalize a manifest locator into a root-relative path.
///
/// A single leading `/` is read as "site root"; the result uses `/` separators, drops `.`
/// segments, and rejects parent traversals (`..`).
pub fn normalize_locator(locator: &str) -> FolioResult<String> {
    let s = locator.trim().replace('\\', "/");
    let s = s.strip_prefix('/').unwrap_or(&s);
    if s.is_empty() {
        return Err(FolioError::validation("asset locator must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FolioError::validation(
                "asset locators must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FolioError::validation(
            "asset locator must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
