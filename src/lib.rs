//! `tui-edit` - Editable text widgets for terminal UIs
//!
//! Two sibling widgets built from the same parts: a single-line [`Input`]
//! field and a multi-line [`TextArea`]. Both borrow their text buffer and
//! cursor storage from the caller, translate keyboard/mouse [`Event`]s into
//! buffer mutations and cursor movement, and render into an [`Element`] tree
//! whose layout reports back the screen geometry used to resolve the next
//! mouse click.
//!
//! Cursor positions are glyph indices (grapheme clusters), never bytes, and
//! are clamped into range on every access rather than rejected.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow InputOptions etc
#![allow(clippy::must_use_candidate)] // Not every getter needs the attribute
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening

pub mod dom;
pub mod geometry;
pub mod input;
pub mod style;
pub mod unicode;
pub mod widget;

// Re-export core types at crate root
pub use dom::{Cell, Element, Grid, column, row, text};
pub use geometry::{Rect, RectHandle};
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
pub use style::TextAttributes;
pub use unicode::{
    WordBreakProperty, cell_to_glyph_index, glyph_count, glyph_position, is_word_character,
    word_break_properties,
};
pub use widget::{Input, InputOptions, Navigation, Standalone, TextArea, TextAreaOptions};
