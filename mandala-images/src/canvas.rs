//! Drawing helpers on top of imageproc.
//!
//! Strokes wider than one pixel are drawn as repeated one-pixel outlines
//! growing inward from the nominal edge.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

/// Image whose row `y` blends from `top` toward `bottom` by `y / height`.
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        crate::palette::blend(top, bottom, y as f32 / height as f32)
    })
}

pub fn stroke_circle(img: &mut RgbImage, center: (i32, i32), radius: i32, width: u32, color: Rgb<u8>) {
    for k in 0..width as i32 {
        if radius - k > 0 {
            draw_hollow_circle_mut(img, center, radius - k, color);
        }
    }
}

/// Square outline covering `center ± half` inclusive.
pub fn stroke_square(img: &mut RgbImage, center: (i32, i32), half: i32, width: u32, color: Rgb<u8>) {
    for k in 0..width as i32 {
        let side = 2 * (half - k) + 1;
        if side <= 0 {
            break;
        }
        let rect = Rect::at(center.0 - half + k, center.1 - half + k).of_size(side as u32, side as u32);
        draw_hollow_rect_mut(img, rect, color);
    }
}

/// Closed polygon outline; each extra pixel of width is a copy of the outline
/// with every vertex pulled one pixel toward the centroid.
pub fn stroke_polygon(img: &mut RgbImage, points: &[(f32, f32)], width: u32, color: Rgb<u8>) {
    if points.len() < 2 {
        return;
    }
    let n = points.len() as f32;
    let cx = points.iter().map(|p| p.0).sum::<f32>() / n;
    let cy = points.iter().map(|p| p.1).sum::<f32>() / n;

    for k in 0..width {
        let k = k as f32;
        let ring: Vec<(f32, f32)> = points
            .iter()
            .map(|&(x, y)| {
                let (dx, dy) = (cx - x, cy - y);
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= k {
                    (cx, cy)
                } else {
                    (x + dx / dist * k, y + dy / dist * k)
                }
            })
            .collect();

        for (i, &start) in ring.iter().enumerate() {
            draw_line_segment_mut(img, start, ring[(i + 1) % ring.len()], color);
        }
    }
}

/// Single pixel; points outside the image are ignored.
pub fn point(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// A font at a fixed pixel size.
#[derive(Clone, Copy)]
pub struct TextStyle<'a> {
    pub font: &'a FontVec,
    pub scale: PxScale,
}

impl<'a> TextStyle<'a> {
    pub fn new(font: &'a FontVec, px: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(px),
        }
    }

    /// Rendered (width, height) of `text`.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        let (w, h) = text_size(self.scale, self.font, text);
        (w as i32, h as i32)
    }

    /// X coordinate that centres `text` horizontally in `img`.
    pub fn centered_x(&self, img: &RgbImage, text: &str) -> i32 {
        (img.width() as i32 - self.measure(text).0) / 2
    }

    pub fn draw(&self, img: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        draw_text_mut(img, color, x, y, self.scale, self.font, text);
    }
}
