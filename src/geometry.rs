//! Screen rectangles and layout reflection handles.

use std::cell::Cell;
use std::rc::Rc;

/// A rectangle of screen cells.
///
/// Coordinates are signed so that offset arithmetic between a mouse position
/// and a previously recorded box cannot wrap before clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    /// Leftmost column.
    pub x: i32,
    /// Topmost row.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottommost row.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check whether the rectangle covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether a cell position lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection of two rectangles (empty when disjoint).
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0),
            height: (bottom - y).max(0),
        }
    }
}

/// A writable slot for a laid-out rectangle.
///
/// A widget clones a handle into its element tree; when the tree is laid out
/// the element's final box is written through the handle, so the widget can
/// resolve the next mouse event against the geometry of its last render.
/// Hit-testing is only valid against the most recent render: a render must
/// occur before a mouse event can be correctly resolved.
#[derive(Clone, Debug, Default)]
pub struct RectHandle(Rc<Cell<Rect>>);

impl RectHandle {
    /// Create a handle holding an empty rectangle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rectangle written by layout.
    #[must_use]
    pub fn get(&self) -> Rect {
        self.0.get()
    }

    /// Record a laid-out rectangle.
    pub fn set(&self, rect: Rect) {
        self.0.set(rect);
    }
}
