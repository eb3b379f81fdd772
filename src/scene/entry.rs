use crate::assets::decode::ImageSource;
use crate::foundation::core::{BLACK, Rgba8};
use crate::scene::diagnostics::{EntryWarning, SkipReason};

/// Border width as a fraction of device width when none is given.
pub const DEFAULT_RELATIVE_BORDER_WIDTH: f64 = 0.02;
/// Outer corner radius as a fraction of device width when none is given.
pub const DEFAULT_RELATIVE_CORNER_RADIUS: f64 = 0.2;
/// Stacking key when none is given.
pub const DEFAULT_Z_ORDER: i64 = 0;
/// Frame fill when none is given.
pub const DEFAULT_FRAME_COLOR: Rgba8 = BLACK;
/// `relative_width` above this is reported but still honored.
pub const RELATIVE_WIDTH_SOFT_CEILING: f64 = 1.5;
/// Upper clamp for `relative_border_width`.
pub const MAX_RELATIVE_BORDER_WIDTH: f64 = 0.49;

/// One requested screenshot placement.
///
/// Every field is optional so that an incomplete entry can be reported and skipped instead of
/// failing the whole batch. Numbers may be given as JSON numbers or numeric strings.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ScreenshotEntry {
    /// Screenshot to place. Required.
    #[serde(default)]
    pub image: Option<ImageSource>,
    /// Device frame width as a fraction of the background width. Required, `> 0`.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub relative_width: Option<f64>,
    /// Frame center as fractions of the background width and height. Required.
    #[serde(default, deserialize_with = "lenient::opt_pair")]
    pub relative_position: Option<(f64, f64)>,
    /// Border on each side as a fraction of device width, clamped into `[0, 0.49]`.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub relative_border_width: Option<f64>,
    /// Outer corner radius as a fraction of device width, floored at `0`.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub relative_corner_radius: Option<f64>,
    /// Stacking key; higher paints on top, ties keep list order.
    #[serde(default)]
    pub z_order: Option<i64>,
    /// Frame fill as straight RGBA8.
    #[serde(default)]
    pub frame_color: Option<Rgba8>,
}

impl ScreenshotEntry {
    /// Entry with the three required fields set and defaults for the rest.
    pub fn new(image: impl Into<ImageSource>, relative_width: f64, center: (f64, f64)) -> Self {
        Self {
            image: Some(image.into()),
            relative_width: Some(relative_width),
            relative_position: Some(center),
            ..Self::default()
        }
    }

    /// Set the relative border width.
    pub fn with_border_width(mut self, v: f64) -> Self {
        self.relative_border_width = Some(v);
        self
    }

    /// Set the relative outer corner radius.
    pub fn with_corner_radius(mut self, v: f64) -> Self {
        self.relative_corner_radius = Some(v);
        self
    }

    /// Set the stacking key.
    pub fn with_z_order(mut self, z: i64) -> Self {
        self.z_order = Some(z);
        self
    }

    /// Set the frame fill.
    pub fn with_frame_color(mut self, rgba: Rgba8) -> Self {
        self.frame_color = Some(rgba);
        self
    }

    /// Effective stacking key.
    pub fn z(&self) -> i64 {
        self.z_order.unwrap_or(DEFAULT_Z_ORDER)
    }

    /// Check required fields and coerce optional ones into their domains.
    ///
    /// Clamps are recorded in `warnings`; anything that cannot be coerced skips the entry.
    pub fn validate(&self, warnings: &mut Vec<EntryWarning>) -> Result<ValidatedEntry, SkipReason> {
        let image = match &self.image {
            Some(img) if !img.is_blank() => img.clone(),
            _ => return Err(SkipReason::MissingImage),
        };
        let relative_width = self.relative_width.ok_or(SkipReason::MissingRelativeWidth)?;
        let (cx, cy) = self
            .relative_position
            .ok_or(SkipReason::MissingRelativePosition)?;
        let relative_border_width = self
            .relative_border_width
            .unwrap_or(DEFAULT_RELATIVE_BORDER_WIDTH);
        let relative_corner_radius = self
            .relative_corner_radius
            .unwrap_or(DEFAULT_RELATIVE_CORNER_RADIUS);

        finite("relative_position", cx)?;
        finite("relative_position", cy)?;
        let (border, radius) = coerce_frame_fractions(
            relative_width,
            relative_border_width,
            relative_corner_radius,
            warnings,
        )?;

        Ok(ValidatedEntry {
            image,
            relative_width,
            relative_center: (cx, cy),
            relative_border_width: border,
            relative_corner_radius: radius,
            frame_color: self.frame_color.unwrap_or(DEFAULT_FRAME_COLOR),
        })
    }
}

/// An entry whose fields are present, finite, and inside their domains.
#[derive(Clone, Debug)]
pub struct ValidatedEntry {
    /// Screenshot source.
    pub image: ImageSource,
    /// `> 0`.
    pub relative_width: f64,
    /// Frame center as fractions of the background.
    pub relative_center: (f64, f64),
    /// In `[0, 0.49]` or `[0, 0.5)`.
    pub relative_border_width: f64,
    /// `>= 0`.
    pub relative_corner_radius: f64,
    /// Frame fill.
    pub frame_color: Rgba8,
}

/// Bring width, border and radius fractions into their domains.
///
/// Returns the border and radius to use. Width is never altered, only reported when wide.
/// Already coerced values pass through without new warnings.
pub(crate) fn coerce_frame_fractions(
    relative_width: f64,
    relative_border_width: f64,
    relative_corner_radius: f64,
    warnings: &mut Vec<EntryWarning>,
) -> Result<(f64, f64), SkipReason> {
    finite("relative_width", relative_width)?;
    finite("relative_border_width", relative_border_width)?;
    finite("relative_corner_radius", relative_corner_radius)?;

    if relative_width <= 0.0 {
        return Err(SkipReason::NonPositiveWidth(relative_width));
    }
    if relative_width > 1.0 {
        warnings.push(EntryWarning::WiderThanBackground(relative_width));
    }
    if relative_width > RELATIVE_WIDTH_SOFT_CEILING {
        warnings.push(EntryWarning::BeyondSoftCeiling(relative_width));
    }

    let mut border = relative_border_width;
    if !(0.0..0.5).contains(&border) {
        let to = border.clamp(0.0, MAX_RELATIVE_BORDER_WIDTH);
        warnings.push(EntryWarning::BorderClamped { from: border, to });
        border = to;
    }

    let mut radius = relative_corner_radius;
    if radius < 0.0 {
        warnings.push(EntryWarning::CornerRadiusClamped { from: radius });
        radius = 0.0;
    }
    Ok((border, radius))
}

fn finite(field: &'static str, v: f64) -> Result<(), SkipReason> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SkipReason::MalformedNumber { field })
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Num {
        F(f64),
        S(String),
    }

    impl Num {
        fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
            match self {
                Num::F(v) => Ok(v),
                Num::S(s) => s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("'{s}' is not a number"))),
            }
        }
    }

    pub(super) fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Num>::deserialize(d)? {
            Some(n) => n.into_f64().map(Some),
            None => Ok(None),
        }
    }

    pub(super) fn opt_pair<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<(f64, f64)>, D::Error> {
        let Some(items) = Option::<Vec<Num>>::deserialize(d)? else {
            return Ok(None);
        };
        if items.len() != 2 {
            return Err(D::Error::custom(format!(
                "relative_position expects 2 values, got {}",
                items.len()
            )));
        }
        let mut it = items.into_iter();
        match (it.next(), it.next()) {
            (Some(x), Some(y)) => Ok(Some((x.into_f64()?, y.into_f64()?))),
            _ => Err(D::Error::custom("relative_position expects 2 values")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/entry.rs"]
mod tests;
