//! Folio is the animation and asset-loading core of an animated single-page portfolio.
//!
//! It owns everything that can be computed or awaited without a renderer, so the host (a
//! browser shell, a native window, a test) only has to feed it frame timestamps and pointer
//! events and apply what comes back.
//!
//! # Components
//!
//! 1. **Asset preloading**: [`preload`] issues every load of a [`Manifest`] at once through an
//!    [`AssetLoader`] and reports a single non-decreasing percentage. [`boot`] wraps it with a
//!    persisted [`LoadFlag`] so repeat visitors skip the loading screen.
//! 2. **Procedural motion**: pure functions for the loading-screen [`heartbeat_scale`], the
//!    noise-perturbed ring outline ([`generate_polygon`]) and the damped cursor
//!    ([`FollowerState`]).
//! 3. **Runtime**: components that subscribe to a [`FrameDriver`] ([`CursorAnimation`],
//!    [`MenuButton`], [`MenuOverlay`], [`HeartbeatAnimation`]) with idempotent setup and
//!    teardown.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic motion**: noise fields are seeded; the same inputs give the same frames.
//! - **Fail-open loading**: a broken asset is reported, never fatal.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod assets;
mod config;
mod foundation;
mod runtime;

pub use animation::circles::{CircleConfig, CircleFrame, CirclePresets, MenuCircles, PresetValues};
pub use animation::curtain::{overlay_curve_path, overlay_curve_svg};
pub use animation::ease::Ease;
pub use animation::follower::{FollowerScale, FollowerState, smoothing_alpha};
pub use animation::noise::{Noise2D, SimplexNoise2D};
pub use animation::polygon::{
    PolygonPathSpec, generate_polygon, polygon_to_bez_path, polygon_to_svg_path,
};
pub use animation::tween::{Lerp, Tween};
pub use animation::waveform::{WaveformParams, heartbeat_scale};
pub use assets::decode::{decode_image, inspect_gltf, parse_svg};
pub use assets::loader::{
    AssetLoader, FsAssetLoader, LoadedAsset, ModelInfo, PreparedImage, PreparedSvg, ReadyFont,
    normalize_locator,
};
pub use assets::manifest::{AssetDescriptor, Manifest, validate_manifest};
pub use assets::preload::{
    LoadOutcome, PreloadCancel, preload, preload_cancellable, progress_percent,
};
pub use assets::startup::{BootReport, FileLoadFlag, LoadFlag, MemoryLoadFlag, boot};
pub use config::FolioConfig;
pub use foundation::core::{BezPath, FrameClock, FrameTime, Point, Vec2};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::math::Rng64;
pub use runtime::cursor::{
    CursorAnimation, CursorConfig, CursorFrame, CursorShape, CursorSurface,
};
pub use runtime::device::InputCapabilities;
pub use runtime::frame::{
    AnimationHandle, FrameCallback, FrameDriver, ManualFrameDriver, SubscriptionId,
};
pub use runtime::heartbeat::{HeartbeatAnimation, ScaleSurface};
pub use runtime::menu::{CircleSurface, MenuButton};
pub use runtime::menu_overlay::{
    MenuOverlay, OverlayConfig, OverlayFrame, OverlayPhase, OverlaySurface,
};
pub use runtime::overlay::{
    OverlayCloser, OverlayFlags, OverlayReader, OverlayWriter, overlay_state,
};
