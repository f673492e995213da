//! Font discovery.
//!
//! Placeholders are drawn with whatever sans-serif font the machine has.
//! Explicitly configured paths win over the well-known system locations.

use ab_glyph::FontVec;
use std::path::{Path, PathBuf};

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Bold and regular faces. Either may be missing, in which case text drawn
/// with it is skipped.
#[derive(Default)]
pub struct FontSet {
    pub bold: Option<FontVec>,
    pub regular: Option<FontVec>,
}

impl FontSet {
    /// Load fonts, trying `bold`/`regular` overrides before system paths.
    pub fn discover(bold: Option<&Path>, regular: Option<&Path>) -> Self {
        let bold = load_first(bold, BOLD_CANDIDATES);
        // Fall back to the bold face rather than dropping the label entirely.
        let regular = load_first(regular, REGULAR_CANDIDATES).or_else(|| load_first(None, BOLD_CANDIDATES));

        if bold.is_none() {
            tracing::warn!("No usable bold font found; placeholder text will be skipped");
        }
        Self { bold, regular }
    }

    /// A set with no fonts; images are drawn without text.
    pub fn empty() -> Self {
        Self::default()
    }
}

fn load_first(preferred: Option<&Path>, candidates: &[&str]) -> Option<FontVec> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(candidates.iter().map(PathBuf::from))
        .find_map(|path| load(&path))
}

fn load(path: &Path) -> Option<FontVec> {
    let bytes = std::fs::read(path).ok()?;
    match FontVec::try_from_vec(bytes) {
        Ok(font) => {
            tracing::debug!("Loaded font {}", path.display());
            Some(font)
        }
        Err(e) => {
            tracing::warn!("Ignoring font {}: {}", path.display(), e);
            None
        }
    }
}
