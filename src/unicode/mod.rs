//! Unicode-aware glyph and word-break helpers.
//!
//! A glyph is a user-perceived character unit (a grapheme cluster) and is the
//! addressing unit for every cursor position in this crate. The same
//! segmentation drives rendering, editing, and mouse hit-testing so the three
//! coordinate systems (bytes, glyphs, screen cells) stay in agreement.

pub mod glyph;
pub mod wordbreak;

pub use glyph::{cell_to_glyph_index, glyph_count, glyph_position, glyph_width};
pub use wordbreak::{WordBreakProperty, is_word_character, word_break_properties};
