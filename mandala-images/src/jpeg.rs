use crate::{Error, Result};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `img` as a JPEG at `path`, creating parent directories.
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(Error::Quality(quality));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(img)?;
    writer.flush()?;

    tracing::debug!("Created {}", path.display());
    Ok(())
}
