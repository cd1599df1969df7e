//! Structured input events consumed by the widgets.
//!
//! The decoding layer that turns raw terminal bytes into these events lives
//! outside this crate; widgets only see the structured forms.

pub mod event;
pub mod keyboard;
pub mod mouse;

pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};
