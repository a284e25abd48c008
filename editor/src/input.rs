//! Input model: modifier keys, mouse buttons, zoom direction, and the drag state.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up. A
//! drag remembers where it started (pointer position, drawn rectangle, and the
//! box itself) because every move is computed from that start, not from the
//! previous move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Rect};
use crate::doc::SpriteBox;
use crate::hit::HitPart;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    Middle,
    Secondary,
}

/// Buttons held during a pointer move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonsHeld {
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub middle: bool,
    #[serde(default)]
    pub secondary: bool,
}

impl ButtonsHeld {
    #[must_use]
    pub fn primary() -> Self {
        Self { primary: true, ..Self::default() }
    }
}

/// A keyboard key, named as the host toolkit reports it (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete"
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    /// The undo shortcut: `Z` with the platform command modifier, without shift.
    #[must_use]
    pub fn is_undo(&self, modifiers: Modifiers) -> bool {
        self.0.eq_ignore_ascii_case("z") && modifiers.command() && !modifiers.shift
    }
}

/// Direction of one discrete zoom input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    In,
    Out,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Index of the selected box, if any.
    pub selected: Option<usize>,
}

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Image-space pointer position at pointer-down.
    pub pointer: Point,
    /// Drawn rectangle of the box at pointer-down.
    pub rect: Rect,
    /// The box at pointer-down; restored into the undo snapshot on commit.
    pub start: SpriteBox,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A box body or handle is being dragged.
    Dragging {
        /// Index of the dragged box.
        index: usize,
        /// Body (move) or one of the eight resize handles.
        part: HitPart,
        anchor: DragAnchor,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
