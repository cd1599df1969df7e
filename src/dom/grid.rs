//! Character grid and element layout.

use crate::dom::element::Element;
use crate::geometry::Rect;
use crate::style::TextAttributes;
use crate::unicode::glyph_width;
use unicode_segmentation::UnicodeSegmentation;

/// One screen cell.
///
/// Wide glyphs occupy several cells: the leading cell carries the glyph, the
/// continuation cells carry an empty symbol with the same attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Glyph drawn in this cell (empty for a wide-glyph continuation).
    pub symbol: String,
    /// Merged text attributes.
    pub attrs: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            attrs: TextAttributes::empty(),
        }
    }
}

/// A fixed-size character grid that elements render into.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of blank cells.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Cell at a position, if inside the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Symbol at a position (empty string outside the grid).
    #[must_use]
    pub fn symbol(&self, x: i32, y: i32) -> &str {
        self.cell(x, y).map_or("", |c| &c.symbol)
    }

    /// Attributes at a position.
    #[must_use]
    pub fn attrs(&self, x: i32, y: i32) -> TextAttributes {
        self.cell(x, y).map_or_else(TextAttributes::empty, |c| c.attrs)
    }

    /// One row as a string, trailing blanks removed.
    #[must_use]
    pub fn row_text(&self, y: i32) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            out.push_str(self.symbol(x, y));
        }
        out.trim_end().to_string()
    }

    /// Every row as a string.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Clear the grid, lay out the element over the full grid area, paint it,
    /// and fill every reflected box.
    pub fn render(&mut self, element: &Element) {
        self.clear();
        let area = Rect::new(0, 0, self.width, self.height);
        self.paint(element, area, area, TextAttributes::empty());
    }

    fn paint(&mut self, element: &Element, area: Rect, clip: Rect, attrs: TextAttributes) {
        match element {
            Element::Text(content) => self.draw_text(content, area, clip, attrs),
            Element::Row(children) => {
                let widths = flex_widths(children, area.width);
                let mut x = area.x;
                for (child, width) in children.iter().zip(widths) {
                    let child_area = Rect::new(x, area.y, width, area.height);
                    self.paint(child, child_area, clip, attrs);
                    x += width;
                }
            }
            Element::Column(children) => {
                let mut y = area.y;
                for child in children {
                    let (_, height) = child.measure();
                    let child_area = Rect::new(area.x, y, area.width, height);
                    self.paint(child, child_area, clip, attrs);
                    y += height;
                }
            }
            Element::Styled { child, attrs: extra } => {
                self.paint(child, area, clip, attrs | *extra);
            }
            Element::Flex(child) => self.paint(child, area, clip, attrs),
            Element::Frame(child) => self.paint(child, area, clip.intersection(&area), attrs),
            Element::Reflect { child, handle } => {
                handle.set(area);
                self.paint(child, area, clip, attrs);
            }
        }
    }

    fn draw_text(&mut self, content: &str, area: Rect, clip: Rect, attrs: TextAttributes) {
        let y = area.y;
        let mut x = area.x;
        for glyph in content.graphemes(true) {
            let width = glyph_width(glyph) as i32;
            for offset in 0..width {
                let cx = x + offset;
                if clip.contains(cx, y) {
                    if let Some(index) = self.index(cx, y) {
                        self.cells[index] = Cell {
                            symbol: if offset == 0 { glyph.to_string() } else { String::new() },
                            attrs,
                        };
                    }
                }
            }
            x += width;
        }
    }
}

/// Assign each row child its measured width, then hand spare width to the
/// flex children.
fn flex_widths(children: &[Element], available: i32) -> Vec<i32> {
    let mut widths: Vec<i32> = children.iter().map(|c| c.measure().0).collect();
    let total: i32 = widths.iter().sum();
    let flex: Vec<usize> = children
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.is_flex().then_some(i))
        .collect();
    if flex.is_empty() || total >= available {
        return widths;
    }
    let extra = available - total;
    let share = extra / flex.len() as i32;
    let mut remainder = extra % flex.len() as i32;
    for i in flex {
        widths[i] += share;
        if remainder > 0 {
            widths[i] += 1;
            remainder -= 1;
        }
    }
    widths
}
