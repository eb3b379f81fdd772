use image::Rgba;

use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_straight_half_alpha_mixes() {
    let out = over_straight([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    for c in &out[..3] {
        assert!((i32::from(*c) - 128).abs() <= 1);
    }
}

#[test]
fn paste_clips_to_destination() {
    let mut dst = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
    paste_over(&mut dst, &src, PixelPoint::new(-1, 2));

    let red = dst.pixels().filter(|p| p.0 == [255, 0, 0, 255]).count();
    assert_eq!(red, 4);
    assert_eq!(dst.get_pixel(0, 2).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(1, 3).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(2, 2).0, [0, 0, 0, 255]);
    assert_eq!(dst.get_pixel(0, 1).0, [0, 0, 0, 255]);
}

#[test]
fn paste_fully_outside_is_noop() {
    let mut dst = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
    let before = dst.clone();
    let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
    paste_over(&mut dst, &src, PixelPoint::new(10, -20));
    paste_over(&mut dst, &src, PixelPoint::new(-3, 0));
    assert_eq!(dst, before);
}

#[test]
fn transparent_source_pixels_leave_destination() {
    let mut dst = RgbaImage::from_pixel(2, 1, Rgba([9, 9, 9, 77]));
    let mut src = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
    src.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
    paste_over(&mut dst, &src, PixelPoint::new(0, 0));
    assert_eq!(dst.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(dst.get_pixel(1, 0).0, [9, 9, 9, 77]);
}

#[test]
fn paste_near_i64_limits_is_noop() {
    let mut dst = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
    let before = dst.clone();
    let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
    paste_over(&mut dst, &src, PixelPoint::new(i64::MAX - 1, 0));
    paste_over(&mut dst, &src, PixelPoint::new(0, i64::MAX));
    paste_over(&mut dst, &src, PixelPoint::new(i64::MIN, i64::MIN));
    assert_eq!(dst, before);
}
