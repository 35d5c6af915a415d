//! Global pointer capture.
//!
//! While a widget holds a `CaptureGuard`, the host delivers pointer moves and
//! releases to it even when they happen outside its bounds. Dropping the guard
//! releases the capture, so every exit path of a drag detaches exactly once.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::context::WidgetId;

/// Registry of widgets currently capturing the pointer.
#[derive(Debug, Clone, Default)]
pub struct PointerCaptures {
    active: Rc<RefCell<Vec<WidgetId>>>,
}

impl PointerCaptures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start capturing global pointer events for `id`.
    pub fn acquire(&self, id: &WidgetId) -> CaptureGuard {
        self.active.borrow_mut().push(id.clone());
        log::debug!("PointerCaptures: attached global listeners for '{}'", id);
        CaptureGuard {
            id: id.clone(),
            active: Rc::downgrade(&self.active),
        }
    }

    pub fn is_captured(&self, id: &WidgetId) -> bool {
        self.active.borrow().contains(id)
    }

    /// Number of attachments held for `id`
    pub fn count(&self, id: &WidgetId) -> usize {
        self.active.borrow().iter().filter(|held| *held == id).count()
    }

    /// All capturing widgets, in acquisition order
    pub fn captured(&self) -> Vec<WidgetId> {
        self.active.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.active.borrow().is_empty()
    }
}

/// Releases its pointer capture when dropped.
pub struct CaptureGuard {
    id: WidgetId,
    active: Weak<RefCell<Vec<WidgetId>>>,
}

impl CaptureGuard {
    pub fn id(&self) -> &WidgetId {
        &self.id
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(active) = self.active.upgrade() {
            let mut active = active.borrow_mut();
            if let Some(index) = active.iter().position(|held| *held == self.id) {
                active.remove(index);
                log::debug!("PointerCaptures: detached global listeners for '{}'", self.id);
            }
        }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").field("id", &self.id).finish()
    }
}
