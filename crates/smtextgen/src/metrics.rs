//! Glyph discovery: which codepoints have a bitmap on disk and how wide each one is.
use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use image::RgbaImage;
use log::{debug, warn};

use crate::error::{GenError, Result};

/// Height shared by every glyph in the font.
pub const FONT_HEIGHT: u32 = 8;
/// Advance used for `' '`. Space never consults the glyph table.
pub const SPACE_WIDTH: u32 = 4;
/// Codepoints 0..GLYPH_COUNT are scanned.
pub const GLYPH_COUNT: usize = 128;

const GLYPH_FILE_PREFIX: &str = "glyph_";
const GLYPH_FILE_EXT: &str = "png";

/// Canonical asset file name for a codepoint, e.g. `glyph_065.png` for `'A'`.
pub fn glyph_file_name(code: u8) -> String {
    format!("{GLYPH_FILE_PREFIX}{code:03}.{GLYPH_FILE_EXT}")
}

/// Width and height of the image at `path`, read from its header.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(path)?)
}

/// File names in `dir`. A directory that does not exist holds no glyphs.
fn present_files(dir: &Path) -> Result<HashSet<OsString>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("font directory {} not found, no glyphs loaded", dir.display());
            return Ok(HashSet::new());
        }
        Err(e) => return Err(GenError::io(dir, e)),
    };
    entries
        .map(|entry| {
            entry
                .map(|entry| entry.file_name())
                .map_err(|e| GenError::io(dir, e))
        })
        .collect()
}

/// Per-codepoint glyph widths for one font directory.
///
/// Built once by scanning the directory; never changes afterwards. A codepoint
/// is present iff `glyph_NNN.png` existed when the table was built.
#[derive(Clone, Debug)]
pub struct FontMetrics {
    dir: PathBuf,
    widths: Vec<Option<u32>>,
}

impl FontMetrics {
    /// Scan `dir` for glyph assets and record the width of each one found.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let present = present_files(dir)?;

        let mut widths = vec![None; GLYPH_COUNT];
        for (code, slot) in widths.iter_mut().enumerate() {
            let name = glyph_file_name(code as u8);
            if !present.contains(&OsString::from(&name)) {
                continue;
            }
            let (width, height) = image_dimensions(&dir.join(&name))?;
            if height != FONT_HEIGHT {
                warn!("{name}: glyph is {height}px tall, font height is {FONT_HEIGHT}px");
            }
            *slot = Some(width);
        }

        let metrics = Self {
            dir: dir.to_path_buf(),
            widths,
        };
        debug!(
            "loaded {} glyphs from {}",
            metrics.len(),
            metrics.dir.display()
        );
        Ok(metrics)
    }

    /// Directory the table was built from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn contains(&self, code: u8) -> bool {
        self.width(code).is_some()
    }

    /// Pixel width of the glyph; `None` when the font has no asset for `code`.
    pub fn width(&self, code: u8) -> Option<u32> {
        self.widths.get(code as usize).copied().flatten()
    }

    /// Number of glyphs found.
    pub fn len(&self) -> usize {
        self.widths.iter().filter(|w| w.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all present glyphs, yielding `(code, width)` in codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.widths
            .iter()
            .enumerate()
            .filter_map(|(code, w)| w.map(|w| (code as u8, w)))
    }

    pub fn glyph_path(&self, code: u8) -> PathBuf {
        self.dir.join(glyph_file_name(code))
    }

    /// Decode the glyph bitmap. Not cached: every draw reads the file again.
    pub fn load_glyph(&self, code: u8) -> Result<RgbaImage> {
        Ok(image::open(self.glyph_path(code))?.to_rgba8())
    }
}
