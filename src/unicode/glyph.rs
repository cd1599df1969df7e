//! Glyph counting and byte/cell position mapping.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of glyphs (grapheme clusters) in a string.
#[must_use]
pub fn glyph_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of a single glyph in screen cells.
///
/// Zero-width clusters are widened to one cell so every glyph stays
/// addressable by the cell→glyph mapping.
#[must_use]
pub fn glyph_width(glyph: &str) -> usize {
    glyph.width().max(1)
}

/// Byte offset reached by advancing `glyphs` glyph boundaries from byte
/// offset `start`.
///
/// Saturates at the end of the string, both for a `start` past the end and
/// for a glyph count larger than what remains.
#[must_use]
pub fn glyph_position(s: &str, glyphs: usize, start: usize) -> usize {
    let start = start.min(s.len());
    match s[start..].grapheme_indices(true).nth(glyphs) {
        Some((offset, _)) => start + offset,
        None => s.len(),
    }
}

/// Map each screen cell of a rendered string to the glyph index occupying it.
///
/// Wide glyphs repeat their index once per cell, so the vector length is the
/// display width of the string.
#[must_use]
pub fn cell_to_glyph_index(s: &str) -> Vec<usize> {
    let mut mapping = Vec::new();
    for (index, glyph) in s.graphemes(true).enumerate() {
        for _ in 0..glyph_width(glyph) {
            mapping.push(index);
        }
    }
    mapping
}
