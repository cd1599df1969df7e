//! Editable text widgets and the focus protocol they consume.
//!
//! The component tree, container layout, and keyboard navigation between
//! sibling widgets live outside this crate. Widgets only consume the
//! [`Navigation`] capability: whether they sit on the active focus path,
//! a way to claim focus, and a way to advance the selection of the nearest
//! enclosing navigable group.

pub mod input;
pub mod textarea;

pub use input::{Input, InputOptions};
pub use textarea::{TextArea, TextAreaOptions};

/// Focus protocol supplied by the enclosing component framework.
pub trait Navigation {
    /// Whether this widget lies on the active focus path.
    fn is_focused(&self) -> bool;

    /// Claim focus up the ancestor chain.
    fn take_focus(&mut self);

    /// Advance the selection of the nearest enclosing navigable group to the
    /// next focusable sibling. A no-op when there is no such group.
    fn advance_selection(&mut self);
}

/// Navigation state for a widget used outside any container: a bare focus
/// flag, with no group to advance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standalone {
    focused: bool,
}

impl Standalone {
    /// An unfocused standalone widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A focused standalone widget.
    #[must_use]
    pub fn focused() -> Self {
        Self { focused: true }
    }
}

impl Navigation for Standalone {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn take_focus(&mut self) {
        self.focused = true;
    }

    fn advance_selection(&mut self) {}
}
