//! smtextgen: sprite font text and image compositing for HUD graphics.
//!
//! A font is a directory of per-glyph bitmaps, 8px tall and of any width. Text
//! is upper-cased and laid out left to right; placements are composited onto a
//! transparent canvas in the order they were given.

mod canvas;
pub mod command;
mod error;
pub mod kerning;
pub mod layout;
mod metrics;
pub mod render;
mod tint;

pub use canvas::{blend_over, paste_image, Canvas};
pub use command::{parse_args, Command, Invocation, TextSource};
pub use error::{GenError, Result};
pub use kerning::{KerningRule, KerningTable};
pub use layout::{draw_for_text, layout, measure, Advance, CharAction, GlyphPlacement};
pub use metrics::{
    glyph_file_name, image_dimensions, FontMetrics, FONT_HEIGHT, GLYPH_COUNT, SPACE_WIDTH,
};
pub use render::{compose, render, RenderConfig, DEFAULT_FONT_DIR};
pub use tint::tint;

// Test utilities
pub mod test_support;
