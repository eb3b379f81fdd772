use image::{GrayImage, Luma, RgbaImage};

use crate::render::shape::{PixelRoundedRect, fill_rounded_rect};

/// Opaque-inside, transparent-outside mask of a `width x height` rounded rectangle.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    fill_rounded_rect(
        &mut mask,
        &PixelRoundedRect::at(0, 0, width, height, radius),
        Luma([255]),
    );
    mask
}

/// Replace the alpha channel of `img` with `mask`. Sizes must match.
pub fn put_alpha(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
}

/// Clip `img` to rounded corners of `radius`.
pub fn round_corners(img: &mut RgbaImage, radius: u32) {
    let (w, h) = img.dimensions();
    let mask = rounded_mask(w, h, radius);
    put_alpha(img, &mask);
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
