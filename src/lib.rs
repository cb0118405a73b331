//! Scoreshot
//!
//! Renders a member leaderboard as a fixed-size 1000x1400 PNG suitable for
//! direct download. The renderer is a pure, stateless transformation: one
//! `RenderRequest` in, PNG bytes out. Authentication, persistence and HTTP
//! semantics belong to the caller; this crate only consumes the resulting
//! data contract.
//!
//! Two layout profiles share the same drawing engine: the per-event
//! scoreboard (compact rows, circular rank badges) and the overall/aggregate
//! scoreboard (tall rows, left rank labels, negative totals in red).
//!
//! Degraded conditions never fail a render: a missing system font substitutes
//! a built-in bitmap font, and an undecodable embedded photo is skipped.
//! Only encoder-level failures propagate as errors.
//!
//! # Example
//!
//! ```
//! use scoreshot::{LeaderboardRow, RenderRequest};
//!
//! let request = RenderRequest::new(
//!     "SCOREBOARD",
//!     "August 24, 2026",
//!     vec![
//!         LeaderboardRow::new(1, "Alice", 42),
//!         LeaderboardRow::new(2, "Bob", 30),
//!     ],
//!     "Generated by admin",
//! );
//! let png = scoreshot::render_event_scoreboard(&request)?;
//! assert!(!png.is_empty());
//! # Ok::<(), scoreshot::Error>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod render;

pub use render::fonts::FontSet;
pub use render::profile::{BadgeStyle, LayoutProfile};

/// Display cap: rows beyond the first 8 are silently ignored.
pub const MAX_ROWS: usize = 8;

/// One ranked participant entry to be drawn as a styled box.
///
/// Rows arrive pre-sorted descending by score; the renderer trusts the
/// supplied order and rank and performs no sorting of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based rank, as assigned by the caller
    pub rank: u32,
    /// Display name, drawn left-aligned in the row box
    pub name: String,
    /// Score, drawn right-aligned; may be negative
    pub score: i64,
}

impl LeaderboardRow {
    pub fn new(rank: u32, name: impl Into<String>, score: i64) -> Self {
        Self {
            rank,
            name: name.into(),
            score,
        }
    }

    /// Whether this row gets a medal color (gold, silver, bronze).
    pub fn is_top_three(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

/// Everything one render call needs: title, date caption, rows, an optional
/// embedded photo (raw JPEG/PNG bytes) and a footer string.
///
/// Constructed per invocation by the web layer, consumed synchronously and
/// discarded. The renderer never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    pub title: String,
    pub date_caption: String,
    pub rows: Vec<LeaderboardRow>,
    /// Raw bytes of an uploaded photo in a common raster format, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
    pub footer: String,
}

impl RenderRequest {
    pub fn new(
        title: impl Into<String>,
        date_caption: impl Into<String>,
        rows: Vec<LeaderboardRow>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date_caption: date_caption.into(),
            rows,
            photo: None,
            footer: footer.into(),
        }
    }

    /// Attach an uploaded photo to embed below the date caption.
    pub fn with_photo(mut self, bytes: Vec<u8>) -> Self {
        self.photo = Some(bytes);
        self
    }
}

/// Render a per-event scoreboard: compact 85px rows with circular rank
/// badges. Returns PNG bytes of a 1000x1400 image.
pub fn render_event_scoreboard(request: &RenderRequest) -> Result<Vec<u8>> {
    render::render(request, &LayoutProfile::per_event())
}

/// Render an overall/aggregate scoreboard: tall 160px rows, left-aligned
/// rank labels and negative totals in red. Returns PNG bytes of a 1000x1400
/// image.
pub fn render_overall_scoreboard(request: &RenderRequest) -> Result<Vec<u8>> {
    render::render(request, &LayoutProfile::overall())
}

/// Local-date caption in the board's house style, e.g. "August 24, 2026".
pub fn today_caption() -> String {
    chrono::Local::now().format("%B %d, %Y").to_string()
}
