//! Element tree built by widget renders.

use crate::geometry::RectHandle;
use crate::style::TextAttributes;
use crate::unicode::glyph_width;
use unicode_segmentation::UnicodeSegmentation;

/// A node in the render tree.
#[derive(Clone, Debug)]
pub enum Element {
    /// A run of text on a single row.
    Text(String),
    /// Children composed left to right.
    Row(Vec<Element>),
    /// Children composed top to bottom.
    Column(Vec<Element>),
    /// Child with extra text attributes merged in.
    Styled {
        child: Box<Element>,
        attrs: TextAttributes,
    },
    /// Child that absorbs spare width when its row is wider than its content.
    Flex(Box<Element>),
    /// Child clipped to its assigned box.
    Frame(Box<Element>),
    /// Child whose assigned box is reported through a handle after layout.
    Reflect {
        child: Box<Element>,
        handle: RectHandle,
    },
}

/// A text element.
#[must_use]
pub fn text(content: impl Into<String>) -> Element {
    Element::Text(content.into())
}

/// A horizontal composition.
#[must_use]
pub fn row(children: Vec<Element>) -> Element {
    Element::Row(children)
}

/// A vertical composition.
#[must_use]
pub fn column(children: Vec<Element>) -> Element {
    Element::Column(children)
}

impl Element {
    /// Merge extra attributes onto this element.
    #[must_use]
    pub fn styled(self, attrs: TextAttributes) -> Element {
        Element::Styled {
            child: Box::new(self),
            attrs,
        }
    }

    /// Dimmed text.
    #[must_use]
    pub fn dim(self) -> Element {
        self.styled(TextAttributes::DIM)
    }

    /// Bold text.
    #[must_use]
    pub fn bold(self) -> Element {
        self.styled(TextAttributes::BOLD)
    }

    /// Inverted (focus/hover highlight) text.
    #[must_use]
    pub fn inverted(self) -> Element {
        self.styled(TextAttributes::INVERSE)
    }

    /// Blinking cursor highlight.
    #[must_use]
    pub fn blink(self) -> Element {
        self.styled(TextAttributes::BLINK)
    }

    /// Absorb spare width in the enclosing row.
    #[must_use]
    pub fn flex(self) -> Element {
        Element::Flex(Box::new(self))
    }

    /// Clip to the assigned box.
    #[must_use]
    pub fn frame(self) -> Element {
        Element::Frame(Box::new(self))
    }

    /// Report the assigned box through `handle` after layout.
    #[must_use]
    pub fn reflect(self, handle: &RectHandle) -> Element {
        Element::Reflect {
            child: Box::new(self),
            handle: handle.clone(),
        }
    }

    /// Natural size in cells, before flex expansion.
    #[must_use]
    pub fn measure(&self) -> (i32, i32) {
        match self {
            Element::Text(content) => {
                let width: usize = content.graphemes(true).map(glyph_width).sum();
                (width as i32, 1)
            }
            Element::Row(children) => {
                let mut width = 0;
                let mut height = 0;
                for child in children {
                    let (w, h) = child.measure();
                    width += w;
                    height = height.max(h);
                }
                (width, height)
            }
            Element::Column(children) => {
                let mut width = 0;
                let mut height = 0;
                for child in children {
                    let (w, h) = child.measure();
                    width = width.max(w);
                    height += h;
                }
                (width, height)
            }
            Element::Styled { child, .. }
            | Element::Flex(child)
            | Element::Frame(child)
            | Element::Reflect { child, .. } => child.measure(),
        }
    }

    /// Whether this subtree claims spare width (a flex node under wrappers).
    #[must_use]
    pub(crate) fn is_flex(&self) -> bool {
        match self {
            Element::Flex(_) => true,
            Element::Styled { child, .. } | Element::Frame(child) | Element::Reflect { child, .. } => {
                child.is_flex()
            }
            Element::Text(_) | Element::Row(_) | Element::Column(_) => false,
        }
    }
}
