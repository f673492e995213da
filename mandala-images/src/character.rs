//! Character placeholder: night gradient, two lotus rings and the
//! character's name under them.

use crate::canvas::{stroke_circle, vertical_gradient, TextStyle};
use crate::fonts::FontSet;
use crate::palette::{BLACK, NIGHT, NIGHT_LIGHT, PURPLE_RING, VIOLET_RING, WHITE};
use image::RgbImage;

pub const CHARACTER_QUALITY: u8 = 85;

const NAME_PX: f32 = 20.0;
const RING_GAP: i32 = 20;

pub fn render_character(name: &str, size: (u32, u32), fonts: &FontSet) -> RgbImage {
    let (width, height) = size;
    let mut img = vertical_gradient(width, height, NIGHT, NIGHT_LIGHT);

    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = (width.min(height) / 4) as i32;

    stroke_circle(&mut img, center, radius, 3, VIOLET_RING);
    stroke_circle(&mut img, center, radius - RING_GAP, 2, PURPLE_RING);

    if let Some(font) = &fonts.bold {
        let style = TextStyle::new(font, NAME_PX);
        let x = style.centered_x(&img, name);
        let y = center.1 + radius + RING_GAP;
        style.draw(&mut img, x + 2, y + 2, name, BLACK);
        style.draw(&mut img, x, y, name, WHITE);
    }

    img
}
