//! Single-pass scoreboard layout engine.
//!
//! One vertical cursor walks the canvas top to bottom: title, date caption,
//! optional embedded photo, separator bar, up to eight row boxes, footer.
//! Each section reserves its height and advances the cursor; nothing is ever
//! recomputed backward. The engine is shared by both layout profiles — every
//! dimension it draws with comes from the `LayoutProfile` it is handed.

pub mod canvas;
pub mod fonts;
pub mod photo;
pub mod profile;

use crate::error::Result;
use crate::{LeaderboardRow, RenderRequest, MAX_ROWS};
use canvas::Canvas;
use fonts::FontSet;
use profile::{
    rank_color, BadgeStyle, LayoutProfile, BACKGROUND, BADGE_X0, BADGE_X1, BADGE_Y0, BADGE_Y1,
    BOX_FILL, BOX_X0, BOX_X1, CAPTION_COLOR, CURSOR_START, DATE_ADVANCE, GOLD, MUTED, PHOTO_PAD,
    PHOTO_SKIP, SEPARATOR_X0, SEPARATOR_X1, WHITE,
};

/// Render a request under the given profile, loading fonts from the
/// process-wide cache. Returns PNG bytes.
pub fn render(request: &RenderRequest, profile: &LayoutProfile) -> Result<Vec<u8>> {
    let fonts = FontSet::load(&profile.fonts);
    render_with_fonts(request, profile, &fonts)
}

/// Render with an explicit font set. This is the seam deterministic tests
/// use to pin the bitmap fallback regardless of what the host has installed.
pub fn render_with_fonts(
    request: &RenderRequest,
    profile: &LayoutProfile,
    fonts: &FontSet,
) -> Result<Vec<u8>> {
    let mut canvas = Canvas::new(profile.canvas_width, profile.canvas_height, BACKGROUND)?;
    let center_x = profile.canvas_width as i32 / 2;
    let mut y = CURSOR_START;

    canvas.draw_text_centered(&fonts.title, center_x, y as i32, GOLD, &request.title);
    y += profile.title_advance;

    canvas.draw_text_centered(
        &fonts.caption,
        center_x,
        y as i32,
        CAPTION_COLOR,
        &request.date_caption,
    );
    y += DATE_ADVANCE;

    if let Some(bytes) = &request.photo {
        y += match photo::prepare(bytes) {
            Some(img) => {
                let x = (profile.canvas_width.saturating_sub(img.width())) / 2;
                canvas.overlay(&img, x as i64, y as i64);
                img.height() + PHOTO_PAD
            }
            None => PHOTO_SKIP,
        };
    }

    canvas.fill_rect(
        SEPARATOR_X0 as i32,
        y as i32,
        SEPARATOR_X1 - SEPARATOR_X0,
        profile.separator_thickness,
        MUTED,
    );
    y += profile.separator_advance;

    for (i, row) in request.rows.iter().take(MAX_ROWS).enumerate() {
        let box_y = y + i as u32 * (profile.row_height + profile.row_gap);
        draw_row(&mut canvas, profile, fonts, row, box_y);
    }

    canvas.draw_text_centered(
        &fonts.caption,
        center_x,
        (profile.canvas_height - profile.footer_offset) as i32,
        MUTED,
        &request.footer,
    );

    canvas.into_png()
}

fn draw_row(
    canvas: &mut Canvas,
    profile: &LayoutProfile,
    fonts: &FontSet,
    row: &LeaderboardRow,
    box_y: u32,
) {
    let color = rank_color(row.rank);
    let box_w = BOX_X1 - BOX_X0;

    canvas.fill_rect(BOX_X0 as i32, box_y as i32, box_w, profile.row_height, BOX_FILL);
    canvas.outline_rect(
        BOX_X0 as i32,
        box_y as i32,
        box_w,
        profile.row_height,
        profile.outline_width,
        color,
    );

    let rank_text = format!("#{}", row.rank);
    match profile.badge {
        BadgeStyle::CircleBadge => {
            canvas.fill_ellipse(
                BADGE_X0 as i32,
                (box_y + BADGE_Y0) as i32,
                BADGE_X1 as i32,
                (box_y + BADGE_Y1) as i32,
                color,
            );
            // rank number centered on the badge, in the canvas background
            // color so it reads as a cutout
            let badge_cx = (BADGE_X0 + BADGE_X1) as i32 / 2;
            let badge_cy = (box_y + (BADGE_Y0 + BADGE_Y1) / 2) as i32;
            let (_, h) = fonts.name.measure(&rank_text);
            canvas.draw_text_centered(
                &fonts.name,
                badge_cx,
                badge_cy - h as i32 / 2,
                BACKGROUND,
                &rank_text,
            );
        }
        BadgeStyle::LeftLabel => {
            let (_, h) = fonts.name.measure(&rank_text);
            let label_y = box_y + profile.row_height.saturating_sub(h) / 2;
            canvas.draw_text(&fonts.name, BADGE_X0 as i32, label_y as i32, color, &rank_text);
        }
    }

    canvas.draw_text(
        &fonts.name,
        profile.name_x as i32,
        (box_y + profile.name_dy) as i32,
        WHITE,
        &row.name,
    );

    let score_text = row.score.to_string();
    canvas.draw_text_right(
        &fonts.score,
        profile.score_right_x as i32,
        (box_y + profile.score_dy) as i32,
        profile.score_color(row.rank, row.score),
        &score_text,
    );
}
