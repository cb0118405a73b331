//! Embedded photo handling: decode and bounded downscale.
//!
//! An undecodable photo is a recoverable condition — the section is skipped
//! and the render continues. Decoding tolerates any format the `image` crate
//! was built with (PNG and JPEG at minimum here).

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::profile::{PHOTO_MAX_HEIGHT, PHOTO_MAX_WIDTH};

/// Decode photo bytes and scale the result down to fit the 900x350 box,
/// preserving aspect ratio and never upscaling. Returns `None` after logging
/// when the bytes are not a decodable image.
pub fn prepare(bytes: &[u8]) -> Option<RgbImage> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            log::warn!("embedded photo skipped: {}", err);
            return None;
        }
    };
    Some(shrink_to_fit(decoded))
}

fn shrink_to_fit(img: RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    if w <= PHOTO_MAX_WIDTH && h <= PHOTO_MAX_HEIGHT {
        return img;
    }
    let ratio = (PHOTO_MAX_WIDTH as f32 / w as f32).min(PHOTO_MAX_HEIGHT as f32 / h as f32);
    let new_w = ((w as f32 * ratio).round() as u32).max(1);
    let new_h = ((h as f32 * ratio).round() as u32).max(1);
    imageops::resize(&img, new_w, new_h, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(w, h, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn garbage_bytes_are_skipped() {
        assert!(prepare(b"definitely not an image").is_none());
        assert!(prepare(&[]).is_none());
    }

    #[test]
    fn small_photo_is_never_upscaled() {
        let photo = prepare(&png_bytes(120, 80)).unwrap();
        assert_eq!(photo.dimensions(), (120, 80));
    }

    #[test]
    fn oversized_photo_fits_the_box() {
        let photo = prepare(&png_bytes(1800, 700)).unwrap();
        let (w, h) = photo.dimensions();
        assert!(w <= PHOTO_MAX_WIDTH);
        assert!(h <= PHOTO_MAX_HEIGHT);
        // aspect ratio preserved: 1800x700 -> limited by height
        assert_eq!(h, PHOTO_MAX_HEIGHT);
        assert_eq!(w, 900);
    }

    #[test]
    fn wide_photo_is_limited_by_width() {
        let photo = prepare(&png_bytes(2000, 200)).unwrap();
        let (w, h) = photo.dimensions();
        assert_eq!(w, PHOTO_MAX_WIDTH);
        assert_eq!(h, 90);
    }
}
