/// Why an entry was left out of the composite. The remaining entries still paint.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// No `image` given.
    #[error("missing 'image'")]
    MissingImage,
    /// No `relative_width` given.
    #[error("missing 'relative_width'")]
    MissingRelativeWidth,
    /// No `relative_position` given.
    #[error("missing or invalid 'relative_position', expected (rel_x, rel_y)")]
    MissingRelativePosition,
    /// A numeric field is NaN or infinite.
    #[error("'{field}' must be a finite number")]
    MalformedNumber {
        /// Config key of the offending field.
        field: &'static str,
    },
    /// An entry could not be decoded from its JSON form.
    #[error("malformed entry: {0}")]
    MalformedEntry(String),
    /// `relative_width <= 0`.
    #[error("'relative_width' ({0}) must be positive")]
    NonPositiveWidth(f64),
    /// The screenshot has a zero side.
    #[error("screenshot has invalid dimensions ({width}x{height})")]
    InvalidSourceDimensions {
        /// Native width.
        width: u32,
        /// Native height.
        height: u32,
    },
    /// Device width rounded to zero or below.
    #[error("calculated device width ({0}) is zero or negative")]
    NonPositiveDeviceWidth(i64),
    /// Border ate the whole device width.
    #[error("calculated content width ({content_width}) is zero or negative for device width ({device_width}) and border ({border})")]
    NonPositiveContentWidth {
        /// Derived content width.
        content_width: i64,
        /// Device width it was derived from.
        device_width: i64,
        /// Border used for the derivation.
        border: i64,
    },
    /// Content height rounded to zero or below.
    #[error("calculated content height ({0}) is zero or negative")]
    NonPositiveContentHeight(i64),
    /// Device height rounded to zero or below.
    #[error("calculated device height ({0}) is zero or negative")]
    NonPositiveDeviceHeight(i64),
    /// A dimension collapsed during the second border pass.
    #[error("content dimensions collapsed after border correction (border {border})")]
    CollapsedAfterCorrection {
        /// Border chosen by the second pass.
        border: i64,
    },
    /// Geometry too large to allocate or resize into.
    #[error("device {width}x{height} exceeds the pixel limit")]
    Oversized {
        /// Device width.
        width: i64,
        /// Device height.
        height: i64,
    },
    /// Screenshot file does not exist.
    #[error("screenshot image not found at '{0}'")]
    ImageNotFound(String),
    /// Screenshot could not be decoded.
    #[error("could not open screenshot image: {0}")]
    ImageDecode(String),
}

/// A non-fatal adjustment or observation made while validating an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryWarning {
    /// `relative_width > 1.0`: the device is wider than the background.
    WiderThanBackground(f64),
    /// `relative_width` above the soft ceiling. Still honored.
    BeyondSoftCeiling(f64),
    /// `relative_border_width` outside `[0, 0.5)` was clamped.
    BorderClamped {
        /// Requested value.
        from: f64,
        /// Value used.
        to: f64,
    },
    /// Negative `relative_corner_radius` was raised to zero.
    CornerRadiusClamped {
        /// Requested value.
        from: f64,
    },
}

impl std::fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WiderThanBackground(w) => write!(
                f,
                "'relative_width' ({w}) > 1.0, device will be wider than background"
            ),
            Self::BeyondSoftCeiling(w) => write!(
                f,
                "'relative_width' ({w}) is above the soft ceiling of {}",
                crate::scene::entry::RELATIVE_WIDTH_SOFT_CEILING
            ),
            Self::BorderClamped { from, to } => write!(
                f,
                "'relative_border_width' ({from}) outside [0, 0.5), clamped to {to}"
            ),
            Self::CornerRadiusClamped { from } => write!(
                f,
                "'relative_corner_radius' ({from}) cannot be negative, using 0"
            ),
        }
    }
}
