//! Render elements, layout, and grid painting.
//!
//! Widgets return an [`Element`] tree from `render`; laying the tree into a
//! [`Grid`] assigns every element a screen box, paints glyphs with their
//! merged attributes, and writes each reflected box back through its
//! [`crate::RectHandle`]. Mouse hit-testing reads those boxes on the next
//! event, so a render must complete before the geometry is consumed.

pub mod element;
pub mod grid;

pub use element::{Element, column, row, text};
pub use grid::{Cell, Grid};
