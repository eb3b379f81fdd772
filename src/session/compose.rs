use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::assets::decode::{ImageSource, dimensions};
use crate::assets::encode::save_rgba8;
use crate::effects::composite::paste_over;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::layout::geometry::{GeometryInput, ResolvedGeometry, resolve_geometry};
use crate::render::frame::{FrameSpec, build_device_frame};
use crate::render::mask::round_corners;
use crate::scene::diagnostics::{EntryWarning, SkipReason};
use crate::scene::entry::{DEFAULT_Z_ORDER, ScreenshotEntry};
use crate::scene::layout::Layout;

/// What happened to the composited image.
#[derive(Debug)]
pub enum Output {
    /// Written to this path; no pixels are returned.
    Saved(PathBuf),
    /// No output path was given.
    InMemory(RgbaImage),
    /// Writing failed; the image is handed back instead.
    SaveFailed {
        /// The composited image.
        image: RgbaImage,
        /// Why it could not be written.
        error: ShotframeError,
    },
}

/// Result of one entry.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryOutcome {
    /// Painted with this geometry.
    Placed(ResolvedGeometry),
    /// Left out.
    Skipped(SkipReason),
}

/// Per-entry diagnostics, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryReport {
    /// Position of the entry in the caller's list.
    pub index: usize,
    /// Effective stacking key.
    pub z_order: i64,
    /// Placed or skipped.
    pub outcome: EntryOutcome,
    /// Clamps and soft warnings raised while validating.
    pub warnings: Vec<EntryWarning>,
}

impl EntryReport {
    /// Geometry of a placed entry.
    pub fn geometry(&self) -> Option<&ResolvedGeometry> {
        match &self.outcome {
            EntryOutcome::Placed(g) => Some(g),
            EntryOutcome::Skipped(_) => None,
        }
    }

    /// Reason of a skipped entry.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.outcome {
            EntryOutcome::Placed(_) => None,
            EntryOutcome::Skipped(r) => Some(r),
        }
    }
}

/// Everything [`compose`] produced.
#[derive(Debug)]
pub struct ComposeReport {
    /// The image or where it went.
    pub output: Output,
    /// One report per input entry, in paint order. Layout entries rejected while loading come
    /// last; see [`compose_layout`].
    pub entries: Vec<EntryReport>,
}

impl ComposeReport {
    /// Number of entries painted.
    pub fn placed(&self) -> usize {
        self.entries.iter().filter(|e| e.geometry().is_some()).count()
    }

    /// Number of entries skipped.
    pub fn skipped(&self) -> usize {
        self.entries.len() - self.placed()
    }

    /// `true` when the image was written.
    pub fn is_saved(&self) -> bool {
        matches!(self.output, Output::Saved(_))
    }

    /// Report for the entry at `index` in the caller's list.
    pub fn entry(&self, index: usize) -> Option<&EntryReport> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// The composited pixels, unless they were written to disk.
    pub fn image(&self) -> Option<&RgbaImage> {
        match &self.output {
            Output::Saved(_) => None,
            Output::InMemory(image) | Output::SaveFailed { image, .. } => Some(image),
        }
    }

    /// Take the composited pixels, unless they were written to disk.
    pub fn into_image(self) -> Option<RgbaImage> {
        match self.output {
            Output::Saved(_) => None,
            Output::InMemory(image) | Output::SaveFailed { image, .. } => Some(image),
        }
    }
}

/// Composite framed screenshots onto a background.
///
/// Entries paint in ascending `z_order`; ties keep list order. Invalid entries are skipped and
/// reported. Only a background that cannot be loaded is fatal. When `output` is given the result
/// is written there, and handed back in memory if writing fails.
#[tracing::instrument(skip_all, fields(entries = entries.len()))]
pub fn compose(
    background: impl Into<ImageSource>,
    entries: &[ScreenshotEntry],
    output: Option<&Path>,
) -> ShotframeResult<ComposeReport> {
    let background = background.into();
    if background.is_blank() {
        return Err(ShotframeError::validation("background path is empty"));
    }
    let mut canvas = background.load_rgba8().inspect_err(|e| {
        tracing::error!(background = %background.describe(), error = %e, "cannot load background");
    })?;

    let reports = compose_onto(&mut canvas, entries);

    let output = match output {
        None => Output::InMemory(canvas),
        Some(path) => match save_rgba8(&canvas, path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved composite");
                Output::Saved(path.to_path_buf())
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "saving composite failed");
                Output::SaveFailed {
                    image: canvas,
                    error,
                }
            }
        },
    };

    Ok(ComposeReport {
        output,
        entries: reports,
    })
}

/// Composite a loaded [`Layout`], reporting every entry of the file by its position there.
///
/// `output` overrides the layout's own output path. Entries that failed to decode are reported
/// as skipped with [`SkipReason::MalformedEntry`] after the painted ones.
pub fn compose_layout(layout: &Layout, output: Option<&Path>) -> ShotframeResult<ComposeReport> {
    let output = output.or(layout.output.as_deref());
    let mut report = compose(layout.background.clone(), &layout.entries, output)?;

    let file_indices = layout.file_indices();
    for e in &mut report.entries {
        e.index = file_indices.get(e.index).copied().unwrap_or(e.index);
    }
    report
        .entries
        .extend(layout.rejected.iter().map(|r| EntryReport {
            index: r.index,
            z_order: DEFAULT_Z_ORDER,
            outcome: EntryOutcome::Skipped(r.reason.clone()),
            warnings: Vec::new(),
        }));
    Ok(report)
}

/// Paint `entries` onto `canvas` in stacking order and report each one.
pub fn compose_onto(canvas: &mut RgbaImage, entries: &[ScreenshotEntry]) -> Vec<EntryReport> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| entries[i].z());

    order
        .into_iter()
        .map(|index| {
            let entry = &entries[index];
            let mut warnings = Vec::new();
            let outcome = match paint_entry(canvas, entry, &mut warnings) {
                Ok(g) => EntryOutcome::Placed(g),
                Err(reason) => {
                    tracing::warn!(index, %reason, "skipping screenshot entry");
                    EntryOutcome::Skipped(reason)
                }
            };
            for w in &warnings {
                tracing::warn!(index, warning = %w, "adjusted screenshot entry");
            }
            EntryReport {
                index,
                z_order: entry.z(),
                outcome,
                warnings,
            }
        })
        .collect()
}

/// Validate, resolve, mask, frame, and paint one entry.
pub fn paint_entry(
    canvas: &mut RgbaImage,
    entry: &ScreenshotEntry,
    warnings: &mut Vec<EntryWarning>,
) -> Result<ResolvedGeometry, SkipReason> {
    let entry = entry.validate(warnings)?;

    let content = entry.image.load_rgba8().map_err(|e| match e {
        ShotframeError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            SkipReason::ImageNotFound(entry.image.describe())
        }
        other => SkipReason::ImageDecode(other.to_string()),
    })?;

    let g = resolve_geometry(&GeometryInput {
        background: dimensions(canvas),
        source: dimensions(&content),
        relative_width: entry.relative_width,
        relative_center: entry.relative_center,
        relative_border_width: entry.relative_border_width,
        relative_corner_radius: entry.relative_corner_radius,
    })?;

    let mut content = imageops::resize(
        &content,
        g.content.width,
        g.content.height,
        FilterType::Lanczos3,
    );
    round_corners(&mut content, g.content_corner_radius);

    let frame = build_device_frame(&FrameSpec {
        frame: g.device,
        content: g.content,
        border: g.border,
        corner_radius: g.corner_radius,
        color: entry.frame_color,
    });

    paste_over(canvas, &content, g.content_origin);
    paste_over(canvas, &frame, g.frame_origin);
    Ok(g)
}

#[cfg(test)]
#[path = "../../tests/unit/session/compose.rs"]
mod tests;
