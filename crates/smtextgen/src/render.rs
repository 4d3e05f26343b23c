//! Executes a parsed [`Invocation`]: placements in order, background last.
use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbaImage;
use log::{debug, info};

use crate::{
    canvas::Canvas,
    command::{Command, Invocation, TextSource},
    error::{GenError, Result},
    layout::draw_for_text,
    metrics::FontMetrics,
};

/// Glyph directory used when none is configured: one level above the working directory.
pub const DEFAULT_FONT_DIR: &str = "../font";

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub font_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
        }
    }
}

/// Build the glyph table, compose every placement and write the result to
/// `invocation.output`.
pub fn render(invocation: &Invocation, config: &RenderConfig) -> Result<()> {
    let metrics = FontMetrics::load(&config.font_dir)?;
    let canvas = compose(invocation, &metrics)?;
    canvas.as_image().save(&invocation.output)?;
    info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        invocation.output.display()
    );
    Ok(())
}

/// Compose an invocation in memory.
///
/// Placements are drawn onto a transparent canvas in command order. The
/// background, when given, goes underneath everything as the very last step,
/// so no placement ever blends against it.
pub fn compose(invocation: &Invocation, metrics: &FontMetrics) -> Result<Canvas> {
    let (width, height) = invocation.dims;
    let mut canvas = Canvas::try_new(width, height)?;
    for command in &invocation.commands {
        canvas = apply(canvas, command, metrics)?;
    }

    match &invocation.background {
        Some(path) => {
            let background = load_rgba(path)?;
            debug!("compositing over background {}", path.display());
            Ok(Canvas::try_new(width, height)?
                .paste(&background, 0, 0)
                .paste(canvas.as_image(), 0, 0))
        }
        None => Ok(canvas),
    }
}

fn apply(canvas: Canvas, command: &Command, metrics: &FontMetrics) -> Result<Canvas> {
    let (x, y) = command.origin();
    let (x, y) = (x as i64, y as i64);
    match command {
        Command::PasteImage { path, .. } => {
            debug!("paste {} at ({x}, {y})", path.display());
            let src = load_rgba(path)?;
            Ok(canvas.paste(&src, x, y))
        }
        Command::DrawText { text, .. } => {
            let text = resolve_text(text)?;
            debug!("text {text:?} at ({x}, {y})");
            draw_for_text(&canvas, metrics, &text, x, y)
        }
    }
}

/// Literal text as-is, `include:` text read from disk in full.
pub fn resolve_text(source: &TextSource) -> Result<String> {
    match source {
        TextSource::Literal(text) => Ok(text.clone()),
        TextSource::Include(path) => {
            fs::read_to_string(path).map_err(|e| GenError::io(path.as_path(), e))
        }
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}
