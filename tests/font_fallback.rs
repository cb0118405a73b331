//! The font loader must never fail a render: a missing or unreadable font
//! directory degrades to the built-in bitmap font and the board still
//! encodes as a valid PNG.

use std::path::Path;

use scoreshot::render::render_with_fonts;
use scoreshot::{FontSet, LayoutProfile, LeaderboardRow, RenderRequest};

fn sample_request() -> RenderRequest {
    RenderRequest::new(
        "SCOREBOARD",
        "August 24, 2026",
        vec![
            LeaderboardRow::new(1, "Alice", 42),
            LeaderboardRow::new(2, "Bob", 30),
        ],
        "Generated by admin",
    )
}

#[test]
fn missing_font_dir_degrades_without_error() {
    let profile = LayoutProfile::per_event();
    let fonts = FontSet::load_from(Path::new("/no/such/font/dir"), &profile.fonts);
    assert!(fonts.is_fallback(), "missing fonts must take the fallback branch");

    let bytes = render_with_fonts(&sample_request(), &profile, &fonts)
        .expect("degraded fonts must not fail the render");
    let img = image::load_from_memory(&bytes).expect("output must still be valid PNG");
    assert_eq!(img.width(), 1000);
    assert_eq!(img.height(), 1400);
}

#[test]
fn fallback_text_is_actually_drawn() {
    // With the bitmap font, row text renders as solid white blocks; make
    // sure the name region is not empty.
    let profile = LayoutProfile::overall();
    let fonts = FontSet::fallback(&profile.fonts);
    let bytes = render_with_fonts(&sample_request(), &profile, &fonts).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgb8();

    let first_row = profile.rows_origin_without_photo();
    let white = image::Rgb([255u8, 255, 255]);
    let found = (first_row..first_row + profile.row_height)
        .any(|y| (profile.name_x..profile.name_x + 300).any(|x| *img.get_pixel(x, y) == white));
    assert!(found, "display name must be drawn in the fallback font");
}

#[test]
fn unreadable_font_file_degrades_without_error() {
    // A directory that exists but contains files that are not fonts
    let dir = std::env::temp_dir().join("scoreshot-bad-fonts");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("DejaVuSans-Bold.ttf"), b"not a font").unwrap();
    std::fs::write(dir.join("DejaVuSans.ttf"), b"also not a font").unwrap();

    let profile = LayoutProfile::per_event();
    let fonts = FontSet::load_from(&dir, &profile.fonts);
    assert!(fonts.is_fallback());
    assert!(render_with_fonts(&sample_request(), &profile, &fonts).is_ok());
}
