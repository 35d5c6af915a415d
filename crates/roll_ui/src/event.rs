//! Input events delivered to widgets by the host.

use serde::{Deserialize, Serialize};

use crate::context::WidgetId;

/// A point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: Point,
        modifiers: KeyModifiers,
    },
    /// Mouse button released (anywhere in the window).
    MouseRelease { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMove { position: Point },
    /// Mouse wheel scrolled. `delta` follows DOM conventions: negative is up.
    MouseScroll { delta: (f32, f32), position: Point },
    /// First touch point went down.
    TouchStart { position: Point },
    /// Primary touch point moved.
    TouchMove { position: Point },
    /// Primary touch point lifted.
    TouchEnd,
    /// Touch sequence was cancelled by the platform.
    TouchCancel,
    /// Pointer sequence was cancelled by the platform.
    PointerCancel,
    /// Keyboard key pressed.
    KeyPress { key: KeyCode, modifiers: KeyModifiers },
    /// A widget received keyboard focus.
    Focus { target: WidgetId },
    /// A widget lost keyboard focus.
    Blur { target: WidgetId },
    /// The window itself lost focus.
    FocusLost,
}

impl Event {
    /// Pointer position carried by this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position }
            | Event::MouseScroll { position, .. }
            | Event::TouchStart { position }
            | Event::TouchMove { position } => Some(*position),
            _ => None,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys relevant to range widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Tab,
    Enter,
    Escape,
    Space,
    Backspace,
    Delete,
    Char(char),
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
