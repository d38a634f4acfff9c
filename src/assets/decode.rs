use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::loader::{ModelInfo, PreparedImage, PreparedSvg},
    foundation::error::{FolioError, FolioResult},
};

const DRACO_EXTENSION: &str = "KHR_draco_mesh_compression";

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> FolioResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes and report the document size.
pub fn parse_svg(bytes: &[u8]) -> FolioResult<PreparedSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let size = tree.size();
    Ok(PreparedSvg {
        width: size.width(),
        height: size.height(),
    })
}

/// Validate a glTF model, binary (`.glb`) or JSON (`.gltf`), and summarize it.
///
/// The container and the document schema are both checked; external buffers are not fetched.
pub fn inspect_gltf(bytes: &[u8]) -> FolioResult<ModelInfo> {
    let gltf = gltf::Gltf::from_slice(bytes).context("parse glTF model")?;
    let version = &gltf.as_json().asset.version;
    if !version.starts_with("2.") {
        return Err(FolioError::asset(format!(
            "unsupported glTF version {version}"
        )));
    }
    Ok(ModelInfo {
        version: 2,
        byte_len: bytes.len(),
        mesh_count: gltf.meshes().count(),
        draco: gltf.extensions_used().any(|ext| ext == DRACO_EXTENSION),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
