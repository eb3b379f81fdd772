use image::RgbaImage;

use crate::foundation::core::PixelPoint;
use crate::foundation::math::{mul_div255_u8, premultiply, unpremultiply};

/// Premultiplied RGBA8.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(src[i], dc);
    }
    out
}

/// Source-over for straight-alpha pixels.
///
/// Fully transparent sources leave `dst` untouched and fully opaque ones replace it, so binary
/// masks composite without rounding drift.
pub fn over_straight(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => dst,
        255 => src,
        _ => unpremultiply(over(premultiply(dst), premultiply(src))),
    }
}

/// Paste `src` onto `dst` with its top-left at `at`, blending through `src`'s own alpha.
///
/// `at` may be negative or past the edges; only the overlap is touched.
pub fn paste_over(dst: &mut RgbaImage, src: &RgbaImage, at: PixelPoint) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x_start = at.x.max(0);
    let y_start = at.y.max(0);
    let x_end = at.x.saturating_add(sw).min(dw);
    let y_end = at.y.saturating_add(sh).min(dh);
    if x_end <= x_start || y_end <= y_start {
        return;
    }

    for y in y_start..y_end {
        for x in x_start..x_end {
            let s = src.get_pixel((x - at.x) as u32, (y - at.y) as u32).0;
            let d = dst.get_pixel_mut(x as u32, y as u32);
            d.0 = over_straight(d.0, s);
        }
    }
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
