use image::{ImageBuffer, Pixel};
use kurbo::{Point, Rect, RoundedRect, Shape};

/// Rounded rectangle over an inclusive pixel range `[x0, x1] x [y0, y1]`.
///
/// Coverage is binary: a pixel is inside when its center is inside the shape. The frame window
/// and the content mask are both drawn through this type so that their edges agree exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PixelRoundedRect {
    pub(crate) x0: i64,
    pub(crate) y0: i64,
    pub(crate) x1: i64,
    pub(crate) y1: i64,
    pub(crate) radius: f64,
}

impl PixelRoundedRect {
    /// Box covering `width x height` pixels starting at `(x, y)`.
    pub(crate) fn at(x: i64, y: i64, width: u32, height: u32, radius: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + i64::from(width) - 1,
            y1: y + i64::from(height) - 1,
            radius: f64::from(radius),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    fn to_kurbo(self) -> RoundedRect {
        let rect = Rect::new(
            self.x0 as f64,
            self.y0 as f64,
            (self.x1 + 1) as f64,
            (self.y1 + 1) as f64,
        );
        let max_r = rect.width().min(rect.height()) / 2.0;
        RoundedRect::from_rect(rect, self.radius.clamp(0.0, max_r))
    }

    /// Return `true` when pixel `(x, y)` is covered.
    #[cfg(test)]
    pub(crate) fn covers(&self, x: i64, y: i64) -> bool {
        !self.is_empty() && self.to_kurbo().contains(pixel_center(x, y))
    }
}

fn pixel_center(x: i64, y: i64) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Overwrite every covered pixel with `value`. Pixels outside `img` are ignored.
pub(crate) fn fill_rounded_rect<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    shape: &PixelRoundedRect,
    value: P,
) {
    if shape.is_empty() {
        return;
    }
    let (w, h) = img.dimensions();
    let x_start = shape.x0.max(0);
    let y_start = shape.y0.max(0);
    let x_end = shape.x1.min(i64::from(w) - 1);
    let y_end = shape.y1.min(i64::from(h) - 1);
    if x_end < x_start || y_end < y_start {
        return;
    }

    let rr = shape.to_kurbo();
    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if rr.contains(pixel_center(x, y)) {
                img.put_pixel(x as u32, y as u32, value);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
