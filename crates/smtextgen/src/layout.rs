//! Left-to-right text layout over a [`FontMetrics`] table.
use log::trace;

use crate::{
    canvas::Canvas,
    error::Result,
    metrics::{FontMetrics, FONT_HEIGHT, SPACE_WIDTH},
};

/// Cursor movement that draws nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// `' '`: move right by [`SPACE_WIDTH`].
    Space,
    /// `'\n'`: back to the origin x, down by [`FONT_HEIGHT`].
    NewLine,
}

/// What layout does with a single (already upper-cased) character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharAction {
    /// Glyph present: draw it, then advance by its width.
    Draw(u8),
    Advance(Advance),
    /// No glyph for this character: no pixels, no advance.
    Ignore,
}

impl CharAction {
    pub fn classify(metrics: &FontMetrics, ch: char) -> Self {
        match ch {
            '\n' => CharAction::Advance(Advance::NewLine),
            ' ' => CharAction::Advance(Advance::Space),
            c if c.is_ascii() && metrics.contains(c as u8) => CharAction::Draw(c as u8),
            _ => CharAction::Ignore,
        }
    }
}

/// One glyph at its final position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub code: u8,
    pub x: i64,
    pub y: i64,
}

struct Cursor {
    origin_x: i64,
    x: i64,
    y: i64,
}

impl Cursor {
    fn new(x: i64, y: i64) -> Self {
        Self { origin_x: x, x, y }
    }

    fn advance(&mut self, advance: Advance) {
        match advance {
            Advance::Space => self.x += SPACE_WIDTH as i64,
            Advance::NewLine => {
                self.x = self.origin_x;
                self.y += FONT_HEIGHT as i64;
            }
        }
    }
}

/// Walk `text` (upper-cased first; the font has no lower-case glyphs) and
/// return every glyph to draw, in drawing order.
pub fn layout(metrics: &FontMetrics, text: &str, x: i64, y: i64) -> Vec<GlyphPlacement> {
    let mut cursor = Cursor::new(x, y);
    let mut placements = Vec::new();
    for ch in text.to_uppercase().chars() {
        match CharAction::classify(metrics, ch) {
            CharAction::Draw(code) => {
                placements.push(GlyphPlacement {
                    code,
                    x: cursor.x,
                    y: cursor.y,
                });
                // present in the table, so the width is known
                cursor.x += metrics.width(code).unwrap_or(0) as i64;
            }
            CharAction::Advance(advance) => cursor.advance(advance),
            CharAction::Ignore => {}
        }
    }
    placements
}

/// Size of the box `text` occupies when laid out from the origin.
///
/// Width is the furthest the cursor reaches on any line; height is one
/// [`FONT_HEIGHT`] per line. Empty text measures `(0, 0)`.
pub fn measure(metrics: &FontMetrics, text: &str) -> (u32, u32) {
    if text.is_empty() {
        return (0, 0);
    }
    let mut cursor = Cursor::new(0, 0);
    let mut width = 0;
    for ch in text.to_uppercase().chars() {
        match CharAction::classify(metrics, ch) {
            CharAction::Draw(code) => cursor.x += metrics.width(code).unwrap_or(0) as i64,
            CharAction::Advance(advance) => cursor.advance(advance),
            CharAction::Ignore => {}
        }
        width = width.max(cursor.x);
    }
    (width as u32, cursor.y as u32 + FONT_HEIGHT)
}

/// Render `text` onto a copy of `canvas` with the first glyph at `(x, y)`.
pub fn draw_for_text(
    canvas: &Canvas,
    metrics: &FontMetrics,
    text: &str,
    x: i64,
    y: i64,
) -> Result<Canvas> {
    let mut out = canvas.clone();
    for placement in layout(metrics, text, x, y) {
        let glyph = metrics.load_glyph(placement.code)?;
        trace!(
            "glyph {} at ({}, {})",
            placement.code,
            placement.x,
            placement.y
        );
        out.paste_in_place(&glyph, placement.x, placement.y);
    }
    Ok(out)
}
