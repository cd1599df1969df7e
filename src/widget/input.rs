//! Single-line editable text field.

use std::fmt;

use crate::dom::{Element, row, text};
use crate::geometry::{Rect, RectHandle};
use crate::input::{Event, KeyCode, KeyEvent, MouseEvent};
use crate::unicode::{
    cell_to_glyph_index, glyph_count, glyph_position, is_word_character, word_break_properties,
};
use crate::widget::Navigation;

/// Mask glyph shown per character in password mode.
const PASSWORD_MASK: &str = "•";

/// Configuration and caller-owned state for an [`Input`].
///
/// The options object, not the widget, is the canonical owner of the cursor:
/// external code can observe or move it between events, and the widget clamps
/// it into range on every access.
pub struct InputOptions {
    /// Text shown (dimmed) while the content is empty.
    pub placeholder: String,
    /// Mask the displayed content; editing and navigation still operate on
    /// the real text.
    pub password: bool,
    /// Cursor position as a glyph index in `[0, glyph_count(content)]`.
    pub cursor: usize,
    /// Invoked once per effective content or cursor change.
    pub on_change: Option<Box<dyn FnMut()>>,
    /// Invoked when Return is pressed.
    pub on_submit: Option<Box<dyn FnMut()>>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            password: false,
            cursor: 0,
            on_change: None,
            on_submit: None,
        }
    }
}

impl fmt::Debug for InputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputOptions")
            .field("placeholder", &self.placeholder)
            .field("password", &self.password)
            .field("cursor", &self.cursor)
            .field("on_change", &self.on_change.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl InputOptions {
    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enable password masking.
    #[must_use]
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the submit callback.
    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub(crate) fn notify_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }

    pub(crate) fn notify_submit(&mut self) {
        if let Some(callback) = self.on_submit.as_mut() {
            callback();
        }
    }
}

/// A single-line editable text field.
///
/// The widget borrows its content and options from the caller on every call;
/// it owns nothing but hover state and the geometry of its last render.
#[derive(Clone, Debug, Default)]
pub struct Input {
    hovered: bool,
    area: RectHandle,
    cursor_area: RectHandle,
}

impl Input {
    /// Create a field.
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

    /// The field always participates in keyboard focus.
    #[must_use]
    pub fn focusable(&self) -> bool {
        true
    }

    /// Render the field, clamping the cursor and recording the geometry used
    /// to resolve the next mouse event.
    pub fn render(
        &self,
        content: &str,
        options: &mut InputOptions,
        nav: &dyn Navigation,
    ) -> Element {
        let focused = nav.is_focused();
        let masked;
        let shown: &str = if options.password {
            masked = PASSWORD_MASK.repeat(glyph_count(content));
            &masked
        } else {
            content
        };
        let size = glyph_count(shown);
        options.cursor = options.cursor.min(size);

        if size == 0 {
            let mut element = text(options.placeholder.clone())
                .dim()
                .flex()
                .frame()
                .reflect(&self.area);
            if self.hovered || focused {
                element = element.inverted();
            }
            return element;
        }

        if !focused {
            let mut element = text(shown).flex().frame().reflect(&self.area);
            if self.hovered {
                element = element.inverted();
            }
            return element;
        }

        let before = glyph_position(shown, options.cursor, 0);
        let after = glyph_position(shown, 1, before);
        // At end of text the cursor sits on a synthetic trailing space.
        let at_cursor: &str = if options.cursor < size {
            &shown[before..after]
        } else {
            " "
        };
        row(vec![
            text(&shown[..before]),
            text(at_cursor)
                .inverted()
                .blink()
                .reflect(&self.cursor_area),
            text(&shown[after..]),
        ])
        .flex()
        .frame()
        .bold()
        .reflect(&self.area)
    }

    /// Handle an event, mutating the content and cursor in place.
    ///
    /// Returns whether the event was handled; operations that cannot proceed
    /// (Backspace at the start, Ctrl+Arrow at a text boundary) report `false`
    /// so an enclosing component can react instead.
    pub fn on_event(
        &mut self,
        event: &Event,
        content: &mut String,
        options: &mut InputOptions,
        nav: &mut dyn Navigation,
    ) -> bool {
        options.cursor = options.cursor.min(glyph_count(content));
        match event {
            Event::Mouse(mouse) => self.on_mouse(mouse, content, options, nav),
            Event::Key(key) => Self::on_key(key, content, options, nav),
            Event::Custom => false,
        }
    }

    fn on_key(
        key: &KeyEvent,
        content: &mut String,
        options: &mut InputOptions,
        nav: &mut dyn Navigation,
    ) -> bool {
        let size = glyph_count(content);
        match key.code {
            KeyCode::Backspace => {
                if options.cursor == 0 {
                    return false;
                }
                let start = glyph_position(content, options.cursor - 1, 0);
                let end = glyph_position(content, options.cursor, 0);
                content.replace_range(start..end, "");
                options.cursor -= 1;
                options.notify_change();
                true
            }
            KeyCode::Delete => {
                if options.cursor == size {
                    return false;
                }
                let start = glyph_position(content, options.cursor, 0);
                let end = glyph_position(content, options.cursor + 1, 0);
                content.replace_range(start..end, "");
                options.notify_change();
                true
            }
            KeyCode::Enter => {
                nav.advance_selection();
                options.notify_submit();
                true
            }
            KeyCode::Left if key.ctrl() => Self::word_left(content, options),
            KeyCode::Right if key.ctrl() => Self::word_right(content, options),
            KeyCode::Left => {
                if options.cursor > 0 {
                    options.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if options.cursor < size {
                    options.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                options.cursor = 0;
                true
            }
            KeyCode::End => {
                options.cursor = size;
                true
            }
            KeyCode::Char(_) => {
                let Some(c) = key.character() else {
                    return false;
                };
                let at = glyph_position(content, options.cursor, 0);
                content.insert(at, c);
                options.cursor += 1;
                options.notify_change();
                true
            }
            _ => false,
        }
    }

    /// Skip left over a run of non-word glyphs, then over the word before it.
    fn word_left(content: &str, options: &mut InputOptions) -> bool {
        if options.cursor == 0 {
            return false;
        }
        let properties = word_break_properties(content);
        let mut cursor = options.cursor.min(properties.len());
        while cursor > 0 && !is_word_character(properties[cursor - 1]) {
            cursor -= 1;
        }
        while cursor > 0 && is_word_character(properties[cursor - 1]) {
            cursor -= 1;
        }
        options.cursor = cursor;
        true
    }

    /// Skip right over a run of non-word glyphs, then over the word after it.
    fn word_right(content: &str, options: &mut InputOptions) -> bool {
        let properties = word_break_properties(content);
        let max = properties.len();
        if options.cursor >= max {
            return false;
        }
        let mut cursor = options.cursor;
        while cursor < max && !is_word_character(properties[cursor]) {
            cursor += 1;
        }
        while cursor < max && is_word_character(properties[cursor]) {
            cursor += 1;
        }
        options.cursor = cursor;
        true
    }

    fn on_mouse(
        &mut self,
        mouse: &MouseEvent,
        content: &str,
        options: &mut InputOptions,
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
        if content.is_empty() {
            return true;
        }

        // Hit-testing maps the real content, even in password mode.
        let mapping = cell_to_glyph_index(content);
        let size = glyph_count(content);
        let cursor = options.cursor.min(size);
        let original_cell = mapping
            .iter()
            .position(|&glyph| glyph == cursor)
            .unwrap_or(mapping.len());
        let target_cell = original_cell as i32 + mouse.x - self.cursor_area.get().x;
        let target_glyph = if target_cell < 0 {
            0
        } else if (target_cell as usize) < mapping.len() {
            mapping[target_cell as usize]
        } else {
            size
        };
        if options.cursor != target_glyph {
            options.cursor = target_glyph;
            options.notify_change();
        }
        true
    }
}
