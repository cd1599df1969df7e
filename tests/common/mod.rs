//! Shared helpers for widget integration tests.

use tui_edit::{Event, KeyCode, KeyEvent, Navigation};

/// Navigation double that records focus-protocol calls.
#[derive(Debug, Default)]
pub struct RecordingNav {
    pub focused: bool,
    pub take_focus_calls: usize,
    pub advance_calls: usize,
}

impl RecordingNav {
    pub fn focused() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }
}

impl Navigation for RecordingNav {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn take_focus(&mut self) {
        self.focused = true;
        self.take_focus_calls += 1;
    }

    fn advance_selection(&mut self) {
        self.advance_calls += 1;
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::key(code))
}

pub fn ctrl(code: KeyCode) -> Event {
    Event::Key(KeyEvent::with_ctrl(code))
}
