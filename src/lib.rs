//! Shotframe composites framed screenshots onto a background for app store listings.
//!
//! Sizes and positions are fractions of the background, so one layout works across devices of
//! different resolutions:
//!
//! - Describe each placement with a [`ScreenshotEntry`] (or load a [`Layout`] from JSON)
//! - Call [`compose`] with a background and the entries
//! - Inspect the [`ComposeReport`] for the image, the saved path, and per-entry outcomes
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Image decoding and encoding.
pub mod assets;
/// Alpha compositing.
pub mod effects;
mod foundation;
/// Geometry resolution.
pub mod layout;
/// Frame and mask rasterization.
pub mod render;
/// Entry configuration and layout files.
pub mod scene;
/// Top-level compose operation.
pub mod session;

pub use crate::assets::decode::ImageSource;
pub use crate::foundation::core::{BLACK, PixelPoint, PixelSize, Rgba8, TRANSPARENT};
pub use crate::foundation::error::{ShotframeError, ShotframeResult};
pub use crate::layout::geometry::{
    GeometryInput, ResolvedGeometry, resolve_geometry, resolve_geometry_with_warnings,
};
pub use crate::render::frame::{FrameSpec, build_device_frame};
pub use crate::scene::diagnostics::{EntryWarning, SkipReason};
pub use crate::scene::entry::{
    DEFAULT_FRAME_COLOR, DEFAULT_RELATIVE_BORDER_WIDTH, DEFAULT_RELATIVE_CORNER_RADIUS,
    DEFAULT_Z_ORDER, ScreenshotEntry, ValidatedEntry,
};
pub use crate::scene::layout::{Layout, RejectedEntry};
pub use crate::session::compose::{
    ComposeReport, EntryOutcome, EntryReport, Output, compose, compose_layout, compose_onto,
    paint_entry,
};
