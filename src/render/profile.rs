//! Layout profiles: the size, color and style constants that distinguish the
//! per-event scoreboard from the overall/aggregate one. Everything else in
//! the engine is shared.

use image::Rgb;

/// Output canvas is fixed for both profiles.
pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 1400;

// Palette
pub const BACKGROUND: Rgb<u8> = Rgb([26, 32, 44]);
pub const BOX_FILL: Rgb<u8> = Rgb([45, 55, 72]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const MUTED: Rgb<u8> = Rgb([100, 116, 139]);
pub const CAPTION_COLOR: Rgb<u8> = Rgb([203, 213, 225]);
pub const GOLD: Rgb<u8> = Rgb([255, 215, 0]);
pub const SILVER: Rgb<u8> = Rgb([192, 192, 192]);
pub const BRONZE: Rgb<u8> = Rgb([205, 127, 50]);
pub const NEUTRAL: Rgb<u8> = Rgb([148, 163, 184]);
pub const NEGATIVE: Rgb<u8> = Rgb([255, 60, 60]);

// Shared geometry. The vertical cursor starts at CURSOR_START and only ever
// advances.
pub const CURSOR_START: u32 = 40;
pub const DATE_ADVANCE: u32 = 60;
pub const SEPARATOR_X0: u32 = 100;
pub const SEPARATOR_X1: u32 = 900;
pub const BOX_X0: u32 = 80;
pub const BOX_X1: u32 = 920;

// Embedded photo bounding box and cursor offsets
pub const PHOTO_MAX_WIDTH: u32 = 900;
pub const PHOTO_MAX_HEIGHT: u32 = 350;
pub const PHOTO_PAD: u32 = 40;
/// Cursor advance when photo bytes were supplied but could not be decoded.
pub const PHOTO_SKIP: u32 = 20;

// Circular rank badge (per-event rows)
pub const BADGE_X0: u32 = 100;
pub const BADGE_X1: u32 = 160;
pub const BADGE_Y0: u32 = 15;
pub const BADGE_Y1: u32 = 70;

/// How a row announces its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Filled circle with the rank number inside (per-event boards)
    CircleBadge,
    /// Rank number drawn at the left edge in the rank color (overall boards)
    LeftLabel,
}

/// Point sizes for the four text roles of a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub caption: f32,
    pub name: f32,
    pub score: f32,
}

/// The constant table for one rendering variant.
///
/// Both built-in profiles share the fixed 1000x1400 canvas; the fields exist
/// so the engine has a single source for every dimension it draws with.
#[derive(Debug, Clone)]
pub struct LayoutProfile {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub fonts: FontSizes,
    /// Cursor advance after the title line
    pub title_advance: u32,
    pub separator_thickness: u32,
    /// Cursor advance after the separator bar
    pub separator_advance: u32,
    pub row_height: u32,
    /// Vertical gap between stacked row boxes
    pub row_gap: u32,
    pub outline_width: u32,
    pub badge: BadgeStyle,
    /// Left edge of the display name within a row box
    pub name_x: u32,
    /// Name top offset from the row box top
    pub name_dy: u32,
    /// Right edge the score text is aligned against
    pub score_right_x: u32,
    /// Score top offset from the row box top
    pub score_dy: u32,
    /// Overall boards render negative scores in red; per-event boards do not
    pub color_score_by_sign: bool,
    /// Footer baseline offset from the bottom of the canvas
    pub footer_offset: u32,
}

impl LayoutProfile {
    /// Per-event scoreboard: compact rows, circular rank badges, score drawn
    /// in the rank color regardless of sign.
    pub fn per_event() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            fonts: FontSizes {
                title: 60.0,
                caption: 32.0,
                name: 38.0,
                score: 42.0,
            },
            title_advance: 90,
            separator_thickness: 3,
            separator_advance: 30,
            row_height: 85,
            row_gap: 10,
            outline_width: 3,
            badge: BadgeStyle::CircleBadge,
            name_x: 190,
            name_dy: 22,
            score_right_x: 880,
            score_dy: 20,
            color_score_by_sign: false,
            footer_offset: 50,
        }
    }

    /// Overall/aggregate scoreboard: tall rows, left rank labels, white
    /// scores with negative totals in red.
    pub fn overall() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            fonts: FontSizes {
                title: 90.0,
                caption: 45.0,
                name: 60.0,
                score: 70.0,
            },
            title_advance: 100,
            separator_thickness: 4,
            separator_advance: 40,
            row_height: 160,
            row_gap: 20,
            outline_width: 5,
            badge: BadgeStyle::LeftLabel,
            name_x: 300,
            name_dy: 40,
            score_right_x: 850,
            score_dy: 30,
            color_score_by_sign: true,
            footer_offset: 60,
        }
    }

    /// Score text color under this profile's numeric-sign policy.
    pub fn score_color(&self, rank: u32, score: i64) -> Rgb<u8> {
        if self.color_score_by_sign {
            if score < 0 {
                NEGATIVE
            } else {
                WHITE
            }
        } else {
            rank_color(rank)
        }
    }

    /// Canvas y where the first row box starts when no photo is embedded.
    pub fn rows_origin_without_photo(&self) -> u32 {
        CURSOR_START + self.title_advance + DATE_ADVANCE + self.separator_advance
    }
}

/// Fixed, total rank-to-color mapping shared by both profiles.
pub fn rank_color(rank: u32) -> Rgb<u8> {
    match rank {
        1 => GOLD,
        2 => SILVER,
        3 => BRONZE,
        _ => NEUTRAL,
    }
}
