//! Relative-to-absolute geometry resolution.
//!
//! Border feasibility depends on the device height, which in turn depends on the border through
//! the content box. The border is therefore settled in two fixed passes: once against the device
//! width alone, then again against the device height that the first pass produced.

use crate::foundation::core::{PixelPoint, PixelSize};
use crate::foundation::math::round_i64;
use crate::scene::diagnostics::{EntryWarning, SkipReason};
use crate::scene::entry::coerce_frame_fractions;

/// Largest device frame, in pixels, that will be rasterized.
pub const MAX_DEVICE_PIXELS: i64 = 1 << 28;

/// Relative placement of one entry against a concrete background and source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryInput {
    /// Background dimensions.
    pub background: PixelSize,
    /// Native screenshot dimensions.
    pub source: PixelSize,
    /// Device width as a fraction of background width.
    pub relative_width: f64,
    /// Device center as fractions of background width and height.
    pub relative_center: (f64, f64),
    /// Border as a fraction of device width.
    pub relative_border_width: f64,
    /// Outer corner radius as a fraction of device width.
    pub relative_corner_radius: f64,
}

/// Absolute geometry for one entry, all in background pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedGeometry {
    /// Outer frame size.
    pub device: PixelSize,
    /// Content window size; aspect matches the source.
    pub content: PixelSize,
    /// Border before feasibility correction.
    pub tentative_border: u32,
    /// Border after both correction passes.
    pub border: u32,
    /// Outer corner radius.
    pub corner_radius: u32,
    /// Corner radius of the content window and mask.
    pub content_corner_radius: u32,
    /// Top-left of the frame.
    pub frame_origin: PixelPoint,
    /// Top-left of the content, inset by `border`.
    pub content_origin: PixelPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ContentBox {
    content_width: i64,
    content_height: i64,
    device_height: i64,
}

/// Resolve absolute geometry, or the reason the entry cannot be placed.
///
/// Fractions are coerced the same way [`ScreenshotEntry::validate`] coerces them; the warnings
/// are dropped. Use [`resolve_geometry_with_warnings`] to keep them.
///
/// [`ScreenshotEntry::validate`]: crate::ScreenshotEntry::validate
pub fn resolve_geometry(input: &GeometryInput) -> Result<ResolvedGeometry, SkipReason> {
    resolve_geometry_with_warnings(input, &mut Vec::new())
}

/// [`resolve_geometry`], recording border and radius clamps and wide-width warnings.
pub fn resolve_geometry_with_warnings(
    input: &GeometryInput,
    warnings: &mut Vec<EntryWarning>,
) -> Result<ResolvedGeometry, SkipReason> {
    let GeometryInput {
        background,
        source,
        relative_width,
        relative_center,
        relative_border_width,
        relative_corner_radius,
    } = *input;

    let (relative_border_width, relative_corner_radius) = coerce_frame_fractions(
        relative_width,
        relative_border_width,
        relative_corner_radius,
        warnings,
    )?;

    if source.is_empty() {
        return Err(SkipReason::InvalidSourceDimensions {
            width: source.width,
            height: source.height,
        });
    }
    let aspect = f64::from(source.height) / f64::from(source.width);

    let bg_w = f64::from(background.width);
    let bg_h = f64::from(background.height);

    let device_width = round_i64(bg_w * relative_width).ok_or(SkipReason::MalformedNumber {
        field: "relative_width",
    })?;
    if device_width <= 0 {
        return Err(SkipReason::NonPositiveDeviceWidth(device_width));
    }
    if device_width > MAX_DEVICE_PIXELS {
        return Err(SkipReason::Oversized {
            width: device_width,
            height: 0,
        });
    }

    let dw = device_width as f64;
    let tentative_border = round_i64(dw * relative_border_width)
        .ok_or(SkipReason::MalformedNumber {
            field: "relative_border_width",
        })?
        .max(0);
    let corner_radius = round_i64(dw * relative_corner_radius)
        .ok_or(SkipReason::MalformedNumber {
            field: "relative_corner_radius",
        })?
        .max(0);

    let first_border = safe_border(tentative_border, corner_radius, device_width, None);
    let first = derive_content(device_width, first_border, aspect)?;

    let border = safe_border(
        tentative_border,
        corner_radius,
        device_width,
        Some(first.device_height),
    );
    let settled = derive_content(device_width, border, aspect)
        .map_err(|_| SkipReason::CollapsedAfterCorrection { border })?;

    let device_height = settled.device_height;
    if device_width.saturating_mul(device_height) > MAX_DEVICE_PIXELS {
        return Err(SkipReason::Oversized {
            width: device_width,
            height: device_height,
        });
    }

    let center_x = round_i64(bg_w * relative_center.0).ok_or(SkipReason::MalformedNumber {
        field: "relative_position",
    })?;
    let center_y = round_i64(bg_h * relative_center.1).ok_or(SkipReason::MalformedNumber {
        field: "relative_position",
    })?;
    let frame_origin = PixelPoint::new(
        center_x.saturating_sub(device_width.div_euclid(2)),
        center_y.saturating_sub(device_height.div_euclid(2)),
    );

    // All quantities are positive and bounded by MAX_DEVICE_PIXELS here.
    let px = |v: i64| v as u32;
    let geometry = ResolvedGeometry {
        device: PixelSize::new(px(device_width), px(device_height)),
        content: PixelSize::new(px(settled.content_width), px(settled.content_height)),
        tentative_border: px(tentative_border.min(MAX_DEVICE_PIXELS)),
        border: px(border),
        corner_radius: px(corner_radius.min(MAX_DEVICE_PIXELS)),
        content_corner_radius: px((corner_radius - border).clamp(0, MAX_DEVICE_PIXELS)),
        frame_origin,
        content_origin: frame_origin.inset(border),
    };
    tracing::debug!(?geometry, "resolved entry geometry");
    Ok(geometry)
}

/// Largest border that fits the device and stays within the corner radius.
///
/// Each side must keep at least one pixel of content, so the bound is `side / 2 - 1`.
fn safe_border(
    tentative: i64,
    corner_radius: i64,
    device_width: i64,
    device_height: Option<i64>,
) -> i64 {
    let mut b = tentative.min(device_width / 2 - 1).min(corner_radius);
    if let Some(h) = device_height {
        b = b.min(h / 2 - 1);
    }
    b.max(0)
}

fn derive_content(device_width: i64, border: i64, aspect: f64) -> Result<ContentBox, SkipReason> {
    let content_width = device_width - 2 * border;
    if content_width <= 0 {
        return Err(SkipReason::NonPositiveContentWidth {
            content_width,
            device_width,
            border,
        });
    }
    let content_height =
        round_i64(content_width as f64 * aspect).ok_or(SkipReason::Oversized {
            width: device_width,
            height: i64::MAX,
        })?;
    if content_height <= 0 {
        return Err(SkipReason::NonPositiveContentHeight(content_height));
    }
    let device_height = content_height + 2 * border;
    if device_height <= 0 {
        return Err(SkipReason::NonPositiveDeviceHeight(device_height));
    }
    Ok(ContentBox {
        content_width,
        content_height,
        device_height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
