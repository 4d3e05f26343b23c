//! Test support utilities for smtextgen.
//!
//! Helpers for writing glyph directories and small images to disk so tests can
//! build a [`FontMetrics`](crate::FontMetrics) from an injected asset set.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::{metrics::glyph_file_name, Result, FONT_HEIGHT};

/// Write a solid glyph of `width` x [`FONT_HEIGHT`] for `ch` into `dir`.
///
/// Panics if `ch` is not ASCII; the font only covers codepoints 0..=127.
pub fn write_glyph(dir: &Path, ch: char, width: u32, color: Rgba<u8>) -> Result<PathBuf> {
    assert!(ch.is_ascii(), "no glyph slot for non-ASCII {ch:?}");
    let path = dir.join(glyph_file_name(ch as u8));
    RgbaImage::from_pixel(width, FONT_HEIGHT, color).save(&path)?;
    Ok(path)
}

/// Write a solid `width` x `height` image to `path`.
pub fn write_solid(path: &Path, width: u32, height: u32, color: Rgba<u8>) -> Result<()> {
    RgbaImage::from_pixel(width, height, color).save(path)?;
    Ok(())
}

/// Builder for a font directory with a handful of solid glyphs.
pub struct GlyphDir {
    dir: PathBuf,
}

impl GlyphDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn glyph(self, ch: char, width: u32, color: Rgba<u8>) -> Result<Self> {
        write_glyph(&self.dir, ch, width, color)?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}
