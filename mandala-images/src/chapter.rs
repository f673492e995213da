//! Universal chapter placeholder: dark slate gradient, a geometric pattern
//! picked by chapter number, the number itself and a "Chapter" label.

use crate::canvas::{point, stroke_circle, stroke_polygon, stroke_square, vertical_gradient, TextStyle};
use crate::fonts::FontSet;
use crate::palette::{accent_for, BLACK, SLATE_300, SLATE_800, SLATE_900};
use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CHAPTER_QUALITY: u8 = 90;
pub const DEFAULT_CHAPTER_COUNT: u32 = 56;

const NUMBER_PX: f32 = 48.0;
const LABEL_PX: f32 = 16.0;
const LABEL: &str = "Chapter";
const TEXTURE_POINTS: usize = 50;
const STROKE: u32 = 2;

/// Geometric motif drawn behind the chapter number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Circles,
    Squares,
    Triangles,
    Diamonds,
}

impl Pattern {
    pub fn for_chapter(chapter: u32) -> Self {
        match chapter % 4 {
            0 => Pattern::Circles,
            1 => Pattern::Squares,
            2 => Pattern::Triangles,
            _ => Pattern::Diamonds,
        }
    }

    /// Radii / half-sizes of the three nested shapes.
    pub fn offsets(self) -> [i32; 3] {
        match self {
            Pattern::Circles => [60, 80, 100],
            Pattern::Squares => [50, 70, 90],
            Pattern::Triangles => [40, 60, 80],
            Pattern::Diamonds => [45, 65, 85],
        }
    }

    fn draw(self, img: &mut RgbImage, center: (i32, i32), color: Rgb<u8>) {
        let (cx, cy) = (center.0 as f32, center.1 as f32);
        for offset in self.offsets() {
            let o = offset as f32;
            match self {
                Pattern::Circles => stroke_circle(img, center, offset, STROKE, color),
                Pattern::Squares => stroke_square(img, center, offset, STROKE, color),
                Pattern::Triangles => stroke_polygon(
                    img,
                    &[(cx, cy - o), (cx - o, cy + o), (cx + o, cy + o)],
                    STROKE,
                    color,
                ),
                Pattern::Diamonds => stroke_polygon(
                    img,
                    &[(cx, cy - o), (cx + o, cy), (cx, cy + o), (cx - o, cy)],
                    STROKE,
                    color,
                ),
            }
        }
    }
}

pub fn render_chapter(chapter: u32, size: (u32, u32), fonts: &FontSet) -> RgbImage {
    let (width, height) = size;
    let mut img = vertical_gradient(width, height, SLATE_900, SLATE_800);

    let center = ((width / 2) as i32, (height / 2) as i32);
    let accent = accent_for(chapter);

    Pattern::for_chapter(chapter).draw(&mut img, center, accent);

    if let Some(bold) = &fonts.bold {
        let number = chapter.to_string();
        let style = TextStyle::new(bold, NUMBER_PX);
        let (_, text_h) = style.measure(&number);
        let x = style.centered_x(&img, &number);
        let y = center.1 - text_h / 2;

        for glow in 0..3 {
            style.draw(&mut img, x + glow, y + glow, &number, BLACK);
        }
        style.draw(&mut img, x, y, &number, accent);

        if let Some(regular) = &fonts.regular {
            let label = TextStyle::new(regular, LABEL_PX);
            let label_x = label.centered_x(&img, LABEL);
            label.draw(&mut img, label_x, y + text_h + 10, LABEL, SLATE_300);
        }
    }

    // Seeded so regenerated assets are byte-identical. The ranges include the
    // far edge, so some points land just outside the image and are dropped.
    let mut rng = StdRng::seed_from_u64(chapter as u64);
    for _ in 0..TEXTURE_POINTS {
        let x = rng.gen_range(0..=width);
        let y = rng.gen_range(0..=height);
        point(&mut img, x, y, accent);
    }

    img
}
