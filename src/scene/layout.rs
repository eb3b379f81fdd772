use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::decode::ImageSource;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::scene::diagnostics::SkipReason;
use crate::scene::entry::ScreenshotEntry;

#[derive(Debug, serde::Deserialize)]
struct LayoutDef {
    background: PathBuf,
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    entries: Vec<serde_json::Value>,
}

/// An entry that could not be decoded from the layout file.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedEntry {
    /// Position in the file's `entries` array.
    pub index: usize,
    /// Why it was rejected.
    pub reason: SkipReason,
}

/// A JSON layout: background, optional output, and screenshot entries.
///
/// ```json
/// {
///   "background": "background.jpeg",
///   "output": "output/single.png",
///   "entries": [
///     { "image": "screenshot1.png", "relative_width": 0.83, "relative_position": [0.5, 0.57] }
///   ]
/// }
/// ```
///
/// Relative paths are resolved against `root` (the file's directory for [`Layout::from_path`]).
/// Entries are decoded one by one; a malformed entry is kept in [`Layout::rejected`] and the
/// rest of the file still loads.
#[derive(Clone, Debug)]
pub struct Layout {
    /// Background image.
    pub background: ImageSource,
    /// Output path, if the file names one.
    pub output: Option<PathBuf>,
    /// Entries that decoded, in file order.
    pub entries: Vec<ScreenshotEntry>,
    /// Entries that did not decode.
    pub rejected: Vec<RejectedEntry>,
}

impl Layout {
    /// Parse a layout from a JSON reader, resolving relative paths against `root`.
    pub fn from_reader<R: std::io::Read>(r: R, root: &Path) -> ShotframeResult<Self> {
        let def: LayoutDef = serde_json::from_reader(r)
            .map_err(|e| ShotframeError::validation(format!("parse layout JSON: {e}")))?;
        Ok(Self::from_def(def, root))
    }

    /// Parse a layout file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShotframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShotframeError::validation(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_reader(BufReader::new(f), root)
    }

    /// Position in the file's `entries` array of each decoded entry, parallel to `entries`.
    pub fn file_indices(&self) -> Vec<usize> {
        let mut rejected: Vec<usize> = self.rejected.iter().map(|r| r.index).collect();
        rejected.sort_unstable();
        (0..)
            .filter(|i| rejected.binary_search(i).is_err())
            .take(self.entries.len())
            .collect()
    }

    fn from_def(def: LayoutDef, root: &Path) -> Self {
        let mut entries = Vec::with_capacity(def.entries.len());
        let mut rejected = Vec::new();
        for (index, value) in def.entries.into_iter().enumerate() {
            match serde_json::from_value::<ScreenshotEntry>(value) {
                Ok(mut entry) => {
                    entry.image = entry.image.map(|img| img.resolve_against(root));
                    entries.push(entry);
                }
                Err(e) => {
                    let reason = SkipReason::MalformedEntry(e.to_string());
                    tracing::warn!(index, %reason, "rejecting layout entry");
                    rejected.push(RejectedEntry { index, reason });
                }
            }
        }

        Self {
            background: ImageSource::Path(def.background).resolve_against(root),
            output: def.output.map(|p| rebase(p, root)),
            entries,
            rejected,
        }
    }
}

fn rebase(p: PathBuf, root: &Path) -> PathBuf {
    if p.is_relative() { root.join(p) } else { p }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
