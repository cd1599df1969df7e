//! Mouse event types.

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
    /// No button (for move events).
    None,
}

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Mouse moved.
    Move,
    /// Scroll wheel up.
    ScrollUp,
    /// Scroll wheel down.
    ScrollDown,
}

/// A mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    /// X position (column).
    pub x: i32,
    /// Y position (row).
    pub y: i32,
    /// Button involved.
    pub button: MouseButton,
    /// Kind of event.
    pub kind: MouseEventKind,
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Alt key held.
    pub alt: bool,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub fn new(x: i32, y: i32, button: MouseButton, kind: MouseEventKind) -> Self {
        Self {
            x,
            y,
            button,
            kind,
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    /// Create a press event.
    #[must_use]
    pub fn press(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(x, y, button, MouseEventKind::Press)
    }

    /// Create a release event.
    #[must_use]
    pub fn release(x: i32, y: i32, button: MouseButton) -> Self {
        Self::new(x, y, button, MouseEventKind::Release)
    }

    /// Create a move event.
    #[must_use]
    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(x, y, MouseButton::None, MouseEventKind::Move)
    }

    /// Set modifier keys.
    #[must_use]
    pub fn with_modifiers(mut self, shift: bool, ctrl: bool, alt: bool) -> Self {
        self.shift = shift;
        self.ctrl = ctrl;
        self.alt = alt;
        self
    }

    /// Check if this is a click (press) event.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == MouseEventKind::Press
    }

    /// Check if this is a left-button press, the only gesture that moves a
    /// text cursor.
    #[must_use]
    pub fn is_left_press(&self) -> bool {
        self.button == MouseButton::Left && self.kind == MouseEventKind::Press
    }
}
