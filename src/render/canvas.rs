//! Minimal drawing canvas over an RGB pixel buffer.
//!
//! Everything the layout engine draws goes through here: clipped rectangle
//! fills and outlines, a filled ellipse for rank badges, photo pasting, and
//! glyph-measured text in left/center/right alignment. The canvas finishes
//! by encoding itself to in-memory PNG bytes.

use std::io::Cursor;

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{imageops, ImageFormat, Rgb, RgbImage};

use super::fonts::FontHandle;
use crate::error::{Error, Result};

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Canvas(format!("zero-area canvas {}x{}", width, height)));
        }
        Ok(Self {
            img: RgbImage::from_pixel(width, height, background),
        })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Filled axis-aligned rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: u32, h: u32, color: Rgb<u8>) {
        let x_end = (x0 + w as i32).min(self.img.width() as i32);
        let y_end = (y0 + h as i32).min(self.img.height() as i32);
        for y in y0.max(0)..y_end {
            for x in x0.max(0)..x_end {
                self.img.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Rectangle outline of the given stroke width, drawn inward.
    pub fn outline_rect(&mut self, x0: i32, y0: i32, w: u32, h: u32, stroke: u32, color: Rgb<u8>) {
        let stroke = stroke.min(w).min(h);
        self.fill_rect(x0, y0, w, stroke, color);
        self.fill_rect(x0, y0 + (h - stroke) as i32, w, stroke, color);
        self.fill_rect(x0, y0, stroke, h, color);
        self.fill_rect(x0 + (w - stroke) as i32, y0, stroke, h, color);
    }

    /// Filled ellipse inscribed in the bounding box (x0, y0)..(x1, y1).
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        let rx = (x1 - x0) as f32 / 2.0;
        let ry = (y1 - y0) as f32 / 2.0;
        let y_end = y1.min(self.img.height() as i32);
        let x_end = x1.min(self.img.width() as i32);
        for y in y0.max(0)..y_end {
            for x in x0.max(0)..x_end {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Paste an RGB image with its top-left corner at (x, y), clipped.
    pub fn overlay(&mut self, other: &RgbImage, x: i64, y: i64) {
        imageops::overlay(&mut self.img, other, x, y);
    }

    /// Draw text with its top-left corner at (x, y).
    pub fn draw_text(&mut self, font: &FontHandle, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        match font {
            FontHandle::Outline { font, scale } => {
                draw_outline_text(&mut self.img, font, *scale, x, y, color, text)
            }
            FontHandle::Bitmap { scale } => {
                draw_bitmap_text(&mut self.img, *scale, x, y, color, text)
            }
        }
    }

    /// Draw text horizontally centered around `cx`, top at `y`.
    pub fn draw_text_centered(&mut self, font: &FontHandle, cx: i32, y: i32, color: Rgb<u8>, text: &str) {
        let (w, _) = font.measure(text);
        self.draw_text(font, cx - w as i32 / 2, y, color, text);
    }

    /// Draw text with its measured right edge at `right_x`, top at `y`.
    pub fn draw_text_right(&mut self, font: &FontHandle, right_x: i32, y: i32, color: Rgb<u8>, text: &str) {
        let (w, _) = font.measure(text);
        self.draw_text(font, right_x - w as i32, y, color, text);
    }

    /// Serialize the canvas to PNG bytes.
    pub fn into_png(self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.img.get_pixel(x, y)
    }
}

fn draw_outline_text(
    img: &mut RgbImage,
    font: &FontArc,
    scale: PxScale,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    let scaled = font.as_scaled(scale);
    let mut caret = x as f32;
    let baseline = y as f32 + scaled.ascent();
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, baseline));
        caret += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounds.min.x as i32;
                let py = gy as i32 + bounds.min.y as i32;
                blend_pixel(img, px, py, color, coverage);
            });
        }
    }
}

fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        pixel.0[c] = (color.0[c] as f32 * coverage + pixel.0[c] as f32 * (1.0 - coverage)) as u8;
    }
}

fn draw_bitmap_text(img: &mut RgbImage, scale: u32, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let cell = 8 * scale as i32;
    let mut caret = x;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, byte) in glyph.iter().enumerate() {
                for col in 0..8i32 {
                    if byte & (1 << col) != 0 {
                        fill_block(
                            img,
                            caret + col * scale as i32,
                            y + row as i32 * scale as i32,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        // glyphs outside the basic set advance the caret but draw nothing
        caret += cell;
    }
}

fn fill_block(img: &mut RgbImage, x: i32, y: i32, edge: u32, color: Rgb<u8>) {
    let x_end = (x + edge as i32).min(img.width() as i32);
    let y_end = (y + edge as i32).min(img.height() as i32);
    for py in y.max(0)..y_end {
        for px in x.max(0)..x_end {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}
