use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};

use crate::foundation::core::PixelSize;
use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Where an image comes from: a file on disk or a buffer the caller already decoded.
///
/// Deserializes from a path string; decoded buffers can only be supplied programmatically.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(from = "PathBuf")]
pub enum ImageSource {
    /// Decode from this file.
    Path(PathBuf),
    /// Use this buffer, normalized to RGBA8.
    Decoded(Arc<DynamicImage>),
}

impl From<PathBuf> for ImageSource {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}

impl From<&Path> for ImageSource {
    fn from(p: &Path) -> Self {
        Self::Path(p.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(p: &str) -> Self {
        Self::Path(PathBuf::from(p))
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(img: DynamicImage) -> Self {
        Self::Decoded(Arc::new(img))
    }
}

impl From<RgbaImage> for ImageSource {
    fn from(img: RgbaImage) -> Self {
        Self::Decoded(Arc::new(DynamicImage::ImageRgba8(img)))
    }
}

impl ImageSource {
    /// Return `true` for an empty path, which callers treat as "no image given".
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Path(p) if p.as_os_str().is_empty())
    }

    /// Rebase a relative path onto `root`. Decoded buffers and absolute paths are unchanged.
    pub fn resolve_against(self, root: &Path) -> Self {
        match self {
            Self::Path(p) if p.is_relative() && !p.as_os_str().is_empty() => {
                Self::Path(root.join(p))
            }
            other => other,
        }
    }

    /// Short human-readable label for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(p) => p.display().to_string(),
            Self::Decoded(img) => format!("<decoded {}x{}>", img.width(), img.height()),
        }
    }

    /// Load as an owned RGBA8 buffer.
    ///
    /// A missing file maps to [`ShotframeError::Io`] with [`std::io::ErrorKind::NotFound`]; every
    /// other failure to read pixels maps to [`ShotframeError::Decode`].
    pub fn load_rgba8(&self) -> ShotframeResult<RgbaImage> {
        match self {
            Self::Path(p) => decode_path(p),
            Self::Decoded(img) => Ok(img.to_rgba8()),
        }
    }
}

/// Decode an image file into RGBA8.
pub fn decode_path(path: &Path) -> ShotframeResult<RgbaImage> {
    if !path.exists() {
        return Err(ShotframeError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("image not found at '{}'", path.display()),
        )));
    }
    let dyn_img = image::open(path)
        .map_err(|e| ShotframeError::decode(format!("decode '{}': {e}", path.display())))?;
    Ok(dyn_img.to_rgba8())
}

/// Native pixel dimensions of a decoded buffer.
pub fn dimensions(img: &RgbaImage) -> PixelSize {
    let (width, height) = img.dimensions();
    PixelSize { width, height }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
