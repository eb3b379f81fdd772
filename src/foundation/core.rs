/// Pixel dimensions of an image or box.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for PixelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Signed pixel position on the canvas. May lie outside the canvas bounds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPoint {
    /// Horizontal offset from the left edge.
    pub x: i64,
    /// Vertical offset from the top edge.
    pub y: i64,
}

impl PixelPoint {
    /// Construct a point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset both coordinates by the same amount, saturating at the `i64` range.
    pub fn inset(self, by: i64) -> Self {
        Self {
            x: self.x.saturating_add(by),
            y: self.y.saturating_add(by),
        }
    }
}

/// Straight-alpha RGBA8 color.
pub type Rgba8 = [u8; 4];

/// Opaque black.
pub const BLACK: Rgba8 = [0, 0, 0, 255];

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
