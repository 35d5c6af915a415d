//! Drag session state machine for vertical click-drag value changes.

use crate::capture::{CaptureGuard, PointerCaptures};
use crate::context::WidgetId;
use crate::gesture::drag_steps;

/// Drag interaction state.
///
/// The `Dragging` state owns the pointer capture, so leaving it through
/// [`DragSession::end`] is the only place global listeners are detached.
#[derive(Debug, Default)]
pub enum DragSession {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging since the pointer went down at `origin_y` over `origin_value`
    Dragging {
        origin_y: f32,
        origin_value: f64,
        capture: CaptureGuard,
    },
}

impl DragSession {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Origin pointer y and origin value, if dragging
    pub fn origin(&self) -> Option<(f32, f64)> {
        match self {
            DragSession::Dragging {
                origin_y,
                origin_value,
                ..
            } => Some((*origin_y, *origin_value)),
            DragSession::Idle => None,
        }
    }

    /// `Idle -> Dragging`. Attaches global listeners for `id`.
    ///
    /// Returns false (and changes nothing) if a drag is already running.
    pub fn start(
        &mut self,
        id: &WidgetId,
        captures: &PointerCaptures,
        origin_y: f32,
        origin_value: f64,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragSession::Dragging {
            origin_y,
            origin_value,
            capture: captures.acquire(id),
        };
        log::debug!(
            "DragSession: start at y = {}, value = {}",
            origin_y,
            origin_value
        );
        true
    }

    /// Origin value and whole steps for a pointer now at `current_y`.
    pub fn steps_to(&self, current_y: f32, sensitivity: f32) -> Option<(f64, i64)> {
        self.origin().map(|(origin_y, origin_value)| {
            (origin_value, drag_steps(origin_y, current_y, sensitivity))
        })
    }

    /// `Dragging -> Idle`. Returns false if no drag was running.
    pub fn end(&mut self) -> bool {
        match std::mem::take(self) {
            DragSession::Dragging { capture, .. } => {
                drop(capture);
                log::debug!("DragSession: end");
                true
            }
            DragSession::Idle => false,
        }
    }
}
