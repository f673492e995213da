//! mandala-images - placeholder artwork for the Buddhist Character App
//!
//! Two hardcoded themes, both 400x400 JPEGs:
//! - character: night gradient, lotus rings, character name
//! - chapter: slate gradient, geometric pattern, chapter number
//!
//! Also fetches the stock reference photographs used by the gallery.

pub mod canvas;
mod character;
mod chapter;
mod download;
mod fonts;
mod jpeg;
pub mod palette;

use std::path::Path;
use thiserror::Error;

pub use character::{render_character, CHARACTER_QUALITY};
pub use chapter::{render_chapter, Pattern, CHAPTER_QUALITY, DEFAULT_CHAPTER_COUNT};
pub use download::{default_references, download_all, DownloadOutcome, Reference};
pub use fonts::FontSet;
pub use jpeg::save_jpeg;

/// Width and height of every generated placeholder.
pub const PLACEHOLDER_SIZE: (u32, u32) = (400, 400);

/// Error types for image generation
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG quality must be 1-100, got {0}")]
    Quality(u8),

    #[error("Download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Render and save a character placeholder.
pub fn write_character(name: &str, path: &Path, fonts: &FontSet, quality: u8) -> Result<()> {
    let img = render_character(name, PLACEHOLDER_SIZE, fonts);
    save_jpeg(&img, path, quality)
}

/// Render and save a chapter placeholder.
pub fn write_chapter(chapter: u32, path: &Path, fonts: &FontSet, quality: u8) -> Result<()> {
    let img = render_chapter(chapter, PLACEHOLDER_SIZE, fonts);
    save_jpeg(&img, path, quality)
}
