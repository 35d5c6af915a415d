//! Widget trait and related types

use crate::context::Context;
use crate::event::Event;
use crate::layout::{Bounds, Size};

/// Outcome of delivering an event to a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResult<M> {
    /// Message for the container, if the event produced one
    pub message: Option<M>,
    /// The host must suppress the platform default action (page scroll etc.)
    pub default_prevented: bool,
}

impl<M> EventResult<M> {
    /// The event was not handled.
    pub fn ignored() -> Self {
        Self {
            message: None,
            default_prevented: false,
        }
    }

    /// The event was handled and its default action suppressed.
    pub fn consumed(message: Option<M>) -> Self {
        Self {
            message,
            default_prevented: true,
        }
    }
}

impl<M> Default for EventResult<M> {
    fn default() -> Self {
        Self::ignored()
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds, cx: &mut Context) -> EventResult<M> {
        let _ = (event, bounds, cx);
        EventResult::ignored()
    }
}
