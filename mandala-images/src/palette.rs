//! Colours used by the placeholder themes.

use image::Rgb;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Character theme background, top row.
pub const NIGHT: Rgb<u8> = Rgb([26, 26, 46]);
/// Character theme background, bottom row (`NIGHT + (30, 30, 40)`).
pub const NIGHT_LIGHT: Rgb<u8> = Rgb([56, 56, 86]);
pub const VIOLET_RING: Rgb<u8> = Rgb([0x8b, 0x5c, 0xf6]);
pub const PURPLE_RING: Rgb<u8> = Rgb([0xa8, 0x55, 0xf7]);

pub const SLATE_900: Rgb<u8> = Rgb([15, 23, 42]);
pub const SLATE_800: Rgb<u8> = Rgb([30, 41, 59]);
pub const SLATE_300: Rgb<u8> = Rgb([203, 213, 225]);

/// Chapter accents, indexed by `chapter % ACCENTS.len()`.
pub const ACCENTS: [Rgb<u8>; 6] = [
    Rgb([139, 92, 246]), // violet-500
    Rgb([59, 130, 246]), // blue-500
    Rgb([6, 182, 212]),  // cyan-500
    Rgb([16, 185, 129]), // emerald-500
    Rgb([245, 158, 11]), // amber-500
    Rgb([244, 63, 94]),  // rose-500
];

pub fn accent_for(chapter: u32) -> Rgb<u8> {
    ACCENTS[chapter as usize % ACCENTS.len()]
}

/// Linear blend of `from` toward `to`, truncating each channel.
pub fn blend(from: Rgb<u8>, to: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f32 + alpha * (b as f32 - a as f32)) as u8;
    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}
