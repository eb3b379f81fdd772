use image::{Rgba, RgbaImage};

use crate::foundation::core::{PixelSize, Rgba8, TRANSPARENT};
use crate::render::shape::{PixelRoundedRect, fill_rounded_rect};

/// Absolute inputs of a device frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSpec {
    /// Outer frame size.
    pub frame: PixelSize,
    /// Transparent window size, centered in the frame.
    pub content: PixelSize,
    /// Requested border thickness.
    pub border: u32,
    /// Outer corner radius.
    pub corner_radius: u32,
    /// Fill of the opaque part.
    pub color: Rgba8,
}

impl FrameSpec {
    /// Border clamped to half of each side and to the outer radius.
    pub fn effective_border(&self) -> u32 {
        self.border
            .min(self.frame.width / 2)
            .min(self.frame.height / 2)
            .min(self.corner_radius)
    }

    /// Corner radius of the transparent window.
    pub fn inner_radius(&self) -> u32 {
        self.corner_radius.saturating_sub(self.effective_border())
    }

    /// Top-left of the window inside the frame.
    pub fn window_offset(&self) -> (u32, u32) {
        (
            self.frame.width.saturating_sub(self.content.width) / 2,
            self.frame.height.saturating_sub(self.content.height) / 2,
        )
    }
}

/// Build a frame-sized image: an opaque rounded rectangle with a transparent rounded window.
///
/// Degenerate sizes produce an empty or fully transparent image.
pub fn build_device_frame(spec: &FrameSpec) -> RgbaImage {
    let mut frame = RgbaImage::from_pixel(spec.frame.width, spec.frame.height, Rgba(TRANSPARENT));

    let outer = PixelRoundedRect::at(0, 0, spec.frame.width, spec.frame.height, spec.corner_radius);
    fill_rounded_rect(&mut frame, &outer, Rgba(spec.color));

    let (cx, cy) = spec.window_offset();
    let window = PixelRoundedRect::at(
        i64::from(cx),
        i64::from(cy),
        spec.content.width,
        spec.content.height,
        spec.inner_radius(),
    );
    fill_rounded_rect(&mut frame, &window, Rgba(TRANSPARENT));

    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
