//! Rasterization of device frames and content masks.

/// Frame Builder.
pub mod frame;
/// Rounded-corner alpha masks.
pub mod mask;
pub(crate) mod shape;
