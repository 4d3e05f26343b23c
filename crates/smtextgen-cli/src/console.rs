use smtextgen::FontMetrics;

/// Printed, with exit status 0, whenever the positional arguments don't parse.
pub const USAGE: &str = concat!(
    "usage: smtextgen <filename> <WxH> [-background <path>] [<x,y> <text>]...\n",
    "  <text> is literal text, include:<path> to render a file's contents, or file:<path> to paste an image",
);

/// One line per glyph: codepoint, printable character and width.
pub fn glyph_table(metrics: &FontMetrics) -> String {
    let mut out = format!(
        "{} glyphs in {}",
        metrics.len(),
        metrics.dir().display()
    );
    for (code, width) in metrics.iter() {
        let ch = code as char;
        let shown = if ch.is_ascii_graphic() {
            format!("'{ch}'")
        } else {
            "   ".to_string()
        };
        out.push_str(&format!("\n  {code:03} {shown} {width}px"));
    }
    out
}
