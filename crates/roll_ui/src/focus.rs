//! Keyboard focus tracking

use crate::context::WidgetId;

/// Options for programmatic focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusOptions {
    /// Do not scroll the newly focused widget into view
    pub prevent_scroll: bool,
}

impl FocusOptions {
    pub fn prevent_scroll() -> Self {
        Self {
            prevent_scroll: true,
        }
    }
}

/// A recorded focus transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusChange {
    Gained(WidgetId),
    Lost(WidgetId),
}

/// Tracks which widget is the active focus target.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<WidgetId>,
    scroll_target: Option<WidgetId>,
    changes: Vec<FocusChange>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused widget.
    pub fn focused(&self) -> Option<&WidgetId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &WidgetId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    /// Programmatically focus a widget.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &WidgetId, options: FocusOptions) -> bool {
        if self.is_focused(id) {
            return false;
        }
        if let Some(previous) = self.focused.take() {
            self.changes.push(FocusChange::Lost(previous));
        }
        self.focused = Some(id.clone());
        self.changes.push(FocusChange::Gained(id.clone()));
        if !options.prevent_scroll {
            self.scroll_target = Some(id.clone());
        }
        true
    }

    /// Remove focus from `id` if it holds it.
    /// Returns true if focus changed.
    pub fn blur(&mut self, id: &WidgetId) -> bool {
        if !self.is_focused(id) {
            return false;
        }
        self.clear()
    }

    /// Clear focus entirely.
    pub fn clear(&mut self) -> bool {
        match self.focused.take() {
            Some(previous) => {
                self.changes.push(FocusChange::Lost(previous));
                true
            }
            None => false,
        }
    }

    /// Widget that should be scrolled into view, if a focus call asked for it
    pub fn take_scroll_target(&mut self) -> Option<WidgetId> {
        self.scroll_target.take()
    }

    /// Take all transitions recorded since the last drain.
    pub fn drain_changes(&mut self) -> Vec<FocusChange> {
        std::mem::take(&mut self.changes)
    }
}
