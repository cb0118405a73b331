//! Font resources for the four text roles of a board.
//!
//! The preferred faces are DejaVu Sans (bold for title/name/score, regular
//! for the date caption) loaded from the usual system path. Any load failure
//! degrades every role to a built-in `font8x8` bitmap font scaled to roughly
//! the requested point size; font loading never errors.
//!
//! Loaded faces are cached process-wide and are read-only afterwards, so
//! concurrent renders on separate threads share them safely.

use std::path::Path;
use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};

use super::profile::FontSizes;

/// Where the preferred faces live on a conventional Linux host.
pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts/truetype/dejavu";

const BOLD_FILE: &str = "DejaVuSans-Bold.ttf";
const REGULAR_FILE: &str = "DejaVuSans.ttf";

/// font8x8 glyph cell edge in pixels
const BITMAP_CELL: f32 = 8.0;

/// A font fixed at one pixel size: an outline face, or the bitmap fallback
/// at an integer scale factor.
#[derive(Debug, Clone)]
pub enum FontHandle {
    Outline { font: FontArc, scale: PxScale },
    Bitmap { scale: u32 },
}

impl FontHandle {
    fn outline(font: &FontArc, px: f32) -> Self {
        Self::Outline {
            font: font.clone(),
            scale: PxScale::from(px),
        }
    }

    fn bitmap(px: f32) -> Self {
        Self::Bitmap {
            scale: ((px / BITMAP_CELL).round() as u32).max(1),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap { .. })
    }

    /// Measured (width, height) of the rendered text in pixels.
    ///
    /// Outline fonts measure the union of actual glyph bounding boxes, since
    /// proportional glyph widths vary; the bitmap fallback is honestly
    /// monospace. Right and center alignment are computed from this.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Outline { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let mut caret = 0.0f32;
                let mut min_x = f32::MAX;
                let mut max_x = f32::MIN;
                let mut prev = None;
                for ch in text.chars() {
                    let id = font.glyph_id(ch);
                    if let Some(prev_id) = prev {
                        caret += scaled.kern(prev_id, id);
                    }
                    let glyph = id.with_scale_and_position(*scale, ab_glyph::point(caret, 0.0));
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        min_x = min_x.min(bounds.min.x);
                        max_x = max_x.max(bounds.max.x);
                    }
                    caret += scaled.h_advance(id);
                    prev = Some(id);
                }
                let width = if max_x > min_x {
                    (max_x - min_x).ceil()
                } else {
                    // whitespace-only or no outlines: fall back to advances
                    caret.max(0.0).ceil()
                };
                let height = (scaled.ascent() - scaled.descent()).ceil();
                (width as u32, height as u32)
            }
            Self::Bitmap { scale } => {
                let cell = BITMAP_CELL as u32 * scale;
                (text.chars().count() as u32 * cell, cell)
            }
        }
    }
}

/// The four immutable font handles one render call draws with.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: FontHandle,
    pub caption: FontHandle,
    pub name: FontHandle,
    pub score: FontHandle,
}

impl FontSet {
    /// Build the set for the given size table from the process-wide cached
    /// faces, loading them on first use.
    pub fn load(sizes: &FontSizes) -> Self {
        Self::from_faces(cached_faces(), sizes)
    }

    /// Load faces from an explicit directory, bypassing the cache. Test seam
    /// for exercising the missing-font path.
    pub fn load_from(dir: &Path, sizes: &FontSizes) -> Self {
        Self::from_faces(&read_faces(dir), sizes)
    }

    /// Force the built-in bitmap fallback. Output is identical on every
    /// machine, which is what the golden tests rely on.
    pub fn fallback(sizes: &FontSizes) -> Self {
        Self::from_faces(&FontFaces::default(), sizes)
    }

    /// True when the degraded bitmap branch was taken.
    pub fn is_fallback(&self) -> bool {
        self.title.is_fallback()
    }

    fn from_faces(faces: &FontFaces, sizes: &FontSizes) -> Self {
        match (&faces.bold, &faces.regular) {
            (Some(bold), Some(regular)) => Self {
                title: FontHandle::outline(bold, sizes.title),
                caption: FontHandle::outline(regular, sizes.caption),
                name: FontHandle::outline(bold, sizes.name),
                score: FontHandle::outline(bold, sizes.score),
            },
            // A single missing face degrades all four roles together, so the
            // board never mixes outline and bitmap text.
            _ => Self {
                title: FontHandle::bitmap(sizes.title),
                caption: FontHandle::bitmap(sizes.caption),
                name: FontHandle::bitmap(sizes.name),
                score: FontHandle::bitmap(sizes.score),
            },
        }
    }
}

#[derive(Default)]
struct FontFaces {
    bold: Option<FontArc>,
    regular: Option<FontArc>,
}

static FACES: OnceLock<FontFaces> = OnceLock::new();

fn cached_faces() -> &'static FontFaces {
    FACES.get_or_init(|| read_faces(Path::new(DEFAULT_FONT_DIR)))
}

fn read_faces(dir: &Path) -> FontFaces {
    FontFaces {
        bold: read_face(&dir.join(BOLD_FILE)),
        regular: read_face(&dir.join(REGULAR_FILE)),
    }
}

fn read_face(path: &Path) -> Option<FontArc> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!(
                "font {} unavailable ({}), degrading to bitmap fallback",
                path.display(),
                err
            );
            return None;
        }
    };
    match FontArc::try_from_vec(data) {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!(
                "font {} unreadable ({}), degrading to bitmap fallback",
                path.display(),
                err
            );
            None
        }
    }
}
