//! Multi-line editable text area.

use std::fmt;

use crate::dom::{Element, column, row, text};
use crate::geometry::{Rect, RectHandle};
use crate::input::{Event, KeyCode, KeyEvent, MouseEvent};
use crate::unicode::{
    cell_to_glyph_index, glyph_count, glyph_position, is_word_character, word_break_properties,
};
use crate::widget::Navigation;

/// Configuration and caller-owned state for a [`TextArea`].
///
/// As with the single-line field, the options object is the canonical owner
/// of the cursor; the widget clamps line and column into range on every
/// access.
pub struct TextAreaOptions {
    /// Text shown (dimmed) while the content is empty.
    pub placeholder: String,
    /// Cursor line in `[0, line_count - 1]`.
    pub cursor_line: usize,
    /// Cursor column as a glyph index in `[0, glyph_count(line)]`.
    pub cursor_column: usize,
    /// Invoked once per effective content or cursor change.
    pub on_change: Option<Box<dyn FnMut()>>,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            cursor_line: 0,
            cursor_column: 0,
            on_change: None,
        }
    }
}

impl fmt::Debug for TextAreaOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextAreaOptions")
            .field("placeholder", &self.placeholder)
            .field("cursor_line", &self.cursor_line)
            .field("cursor_column", &self.cursor_column)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl TextAreaOptions {
    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub(crate) fn notify_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }
}

/// Decompose a buffer into lines.
///
/// A buffer ending in `\n` gains an extra empty trailing line; an empty
/// buffer has no lines at all. Joining the result with `\n` reproduces the
/// buffer exactly.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content.split('\n').map(str::to_string).collect()
}

fn line_at(lines: &[String], index: usize) -> &str {
    lines.get(index).map_or("", String::as_str)
}

/// A multi-line editable text area.
#[derive(Clone, Debug, Default)]
pub struct TextArea {
    hovered: bool,
    area: RectHandle,
    cursor_area: RectHandle,
}

impl TextArea {
    /// Create a text area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was inside the widget at the last mouse event.
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Box of the whole widget at the last render.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area.get()
    }

    /// Box of the glyph under the cursor at the last render.
    #[must_use]
    pub fn cursor_area(&self) -> Rect {
        self.cursor_area.get()
    }

    /// The area always participates in keyboard focus.
    #[must_use]
    pub fn focusable(&self) -> bool {
        true
    }

    fn clamp_cursor(options: &mut TextAreaOptions, lines: &[String]) {
        options.cursor_line = options.cursor_line.min(lines.len().saturating_sub(1));
        let line = line_at(lines, options.cursor_line);
        options.cursor_column = options.cursor_column.min(glyph_count(line));
    }

    /// Render the area: recompute the line decomposition, clamp the cursor
    /// against it, and emit one row per line with the cursor line split into
    /// before/at/after spans.
    pub fn render(
        &self,
        content: &str,
        options: &mut TextAreaOptions,
        nav: &dyn Navigation,
    ) -> Element {
        let focused = nav.is_focused();

        if content.is_empty() {
            let mut element = text(options.placeholder.clone())
                .dim()
                .frame()
                .reflect(&self.area);
            if self.hovered || focused {
                element = element.inverted();
            }
            return element;
        }

        let lines = split_lines(content);
        Self::clamp_cursor(options, &lines);

        let mut rows = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            if index != options.cursor_line {
                rows.push(text(line.clone()));
                continue;
            }

            let size = glyph_count(line);
            let before = glyph_position(line, options.cursor_column, 0);
            let after = glyph_position(line, 1, before);
            let at_cursor = if options.cursor_column < size {
                &line[before..after]
            } else {
                ""
            };
            let cursor_span = if focused || self.hovered {
                text(at_cursor).inverted().blink()
            } else {
                text(at_cursor)
            };
            rows.push(
                row(vec![
                    text(&line[..before]),
                    cursor_span.reflect(&self.cursor_area),
                    text(&line[after..]),
                ])
                .flex(),
            );
        }

        column(rows).frame().reflect(&self.area)
    }

    /// Handle an event, mutating the content and cursor in place.
    ///
    /// Returns whether the event was handled; movement blocked at a buffer
    /// boundary reports `false` so an enclosing component can react instead.
    pub fn on_event(
        &mut self,
        event: &Event,
        content: &mut String,
        options: &mut TextAreaOptions,
        nav: &mut dyn Navigation,
    ) -> bool {
        let lines = split_lines(content);
        Self::clamp_cursor(options, &lines);
        let line_start: usize = lines[..options.cursor_line]
            .iter()
            .map(|line| line.len() + 1)
            .sum();

        match event {
            Event::Mouse(mouse) => self.on_mouse(mouse, &lines, options, nav),
            Event::Key(key) => Self::on_key(key, content, &lines, line_start, options),
            Event::Custom => false,
        }
    }

    fn on_key(
        key: &KeyEvent,
        content: &mut String,
        lines: &[String],
        line_start: usize,
        options: &mut TextAreaOptions,
    ) -> bool {
        let line = line_at(lines, options.cursor_line);
        let line_glyphs = glyph_count(line);
        match key.code {
            KeyCode::Backspace => {
                // At the very start there is nothing to delete.
                if options.cursor_line == 0 && options.cursor_column == 0 {
                    return false;
                }
                // At column 0, delete the separating newline and merge into
                // the previous line.
                if options.cursor_column == 0 {
                    options.cursor_line -= 1;
                    options.cursor_column = glyph_count(line_at(lines, options.cursor_line));
                    content.remove(line_start - 1);
                    options.notify_change();
                    return true;
                }
                let start = glyph_position(content, options.cursor_column - 1, line_start);
                let end = glyph_position(content, options.cursor_column, line_start);
                content.replace_range(start..end, "");
                options.cursor_column -= 1;
                options.notify_change();
                true
            }
            KeyCode::Delete => {
                // At end of line, delete the newline and merge the next line
                // upward; on the last line there is nothing to delete.
                if options.cursor_column == line_glyphs {
                    if options.cursor_line + 1 >= lines.len() {
                        return false;
                    }
                    let at = glyph_position(content, options.cursor_column, line_start);
                    content.remove(at);
                    options.notify_change();
                    return true;
                }
                let start = glyph_position(content, options.cursor_column, line_start);
                let end = glyph_position(content, options.cursor_column + 1, line_start);
                content.replace_range(start..end, "");
                options.notify_change();
                true
            }
            KeyCode::Up => {
                if options.cursor_line > 0 {
                    options.cursor_line -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Down => {
                if options.cursor_line + 1 < lines.len() {
                    options.cursor_line += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Left if key.ctrl() => Self::word_left(lines, options),
            KeyCode::Right if key.ctrl() => Self::word_right(lines, options),
            KeyCode::Left => {
                if options.cursor_column > 0 {
                    options.cursor_column -= 1;
                    true
                } else if options.cursor_line > 0 {
                    options.cursor_line -= 1;
                    options.cursor_column = glyph_count(line_at(lines, options.cursor_line));
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if options.cursor_column < line_glyphs {
                    options.cursor_column += 1;
                    true
                } else if options.cursor_line + 1 < lines.len() {
                    options.cursor_line += 1;
                    options.cursor_column = 0;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                options.cursor_column = 0;
                true
            }
            KeyCode::End => {
                options.cursor_column = line_glyphs;
                true
            }
            KeyCode::Enter => {
                let at = glyph_position(content, options.cursor_column, line_start);
                content.insert(at, '\n');
                options.cursor_line += 1;
                options.cursor_column = 0;
                options.notify_change();
                true
            }
            KeyCode::Char(_) => {
                let Some(c) = key.character() else {
                    return false;
                };
                let at = glyph_position(content, options.cursor_column, line_start);
                content.insert(at, c);
                options.cursor_column += 1;
                options.notify_change();
                true
            }
            _ => false,
        }
    }

    /// Word-wise left within the current line; at column 0 step to the end
    /// of the previous line instead.
    fn word_left(lines: &[String], options: &mut TextAreaOptions) -> bool {
        if options.cursor_column == 0 {
            if options.cursor_line == 0 {
                return false;
            }
            options.cursor_line -= 1;
            options.cursor_column = glyph_count(line_at(lines, options.cursor_line));
            return true;
        }

        let properties = word_break_properties(line_at(lines, options.cursor_line));
        let mut column = options.cursor_column.min(properties.len());
        while column > 0 && !is_word_character(properties[column - 1]) {
            column -= 1;
        }
        while column > 0 && is_word_character(properties[column - 1]) {
            column -= 1;
        }
        options.cursor_column = column;
        true
    }

    /// Word-wise right within the current line; at end of line step to the
    /// start of the next line instead.
    fn word_right(lines: &[String], options: &mut TextAreaOptions) -> bool {
        let properties = word_break_properties(line_at(lines, options.cursor_line));
        let max = properties.len();
        if options.cursor_column >= max {
            if options.cursor_line + 1 >= lines.len() {
                return false;
            }
            options.cursor_line += 1;
            options.cursor_column = 0;
            return true;
        }

        let mut column = options.cursor_column;
        while column < max && !is_word_character(properties[column]) {
            column += 1;
        }
        while column < max && is_word_character(properties[column]) {
            column += 1;
        }
        options.cursor_column = column;
        true
    }

    fn on_mouse(
        &mut self,
        mouse: &MouseEvent,
        lines: &[String],
        options: &mut TextAreaOptions,
        nav: &mut dyn Navigation,
    ) -> bool {
        self.hovered = self.area.get().contains(mouse.x, mouse.y);
        if !self.hovered {
            return false;
        }
        if !mouse.is_left_press() {
            return false;
        }

        nav.take_focus();

        let cursor_box = self.cursor_area.get();

        // Cell offset of the current cursor within its line; the clicked
        // row and column are resolved relative to it.
        let current_mapping = cell_to_glyph_index(line_at(lines, options.cursor_line));
        let original_cell = current_mapping
            .iter()
            .position(|&glyph| glyph == options.cursor_column)
            .unwrap_or(current_mapping.len());

        let target_line = (options.cursor_line as i32 + mouse.y - cursor_box.y)
            .clamp(0, lines.len().saturating_sub(1) as i32) as usize;
        let line = line_at(lines, target_line);
        let mapping = cell_to_glyph_index(line);
        let target_cell = original_cell as i32 + mouse.x - cursor_box.x;
        let target_column = if target_cell < 0 {
            0
        } else if (target_cell as usize) < mapping.len() {
            mapping[target_cell as usize]
        } else {
            glyph_count(line)
        };

        if target_line == options.cursor_line && target_column == options.cursor_column {
            return false;
        }
        options.cursor_line = target_line;
        options.cursor_column = target_column;
        options.notify_change();
        true
    }
}
