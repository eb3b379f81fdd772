use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Persist `img` to `path`, creating missing parent directories first.
///
/// The container format follows the file extension.
pub fn save_rgba8(img: &RgbaImage, path: &Path) -> ShotframeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    img.save(path)
        .map_err(|e| ShotframeError::encode(format!("write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
