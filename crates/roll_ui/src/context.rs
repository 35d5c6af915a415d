//! Runtime context shared by all widgets of a host

use std::fmt;

use crate::capture::PointerCaptures;
use crate::event::Event;
use crate::focus::{FocusChange, FocusState};
use crate::frame::FrameScheduler;

/// Stable identity of a widget across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a widget may touch outside of itself: keyboard focus, the
/// next-frame scheduler and global pointer captures.
///
/// The host owns one `Context` and passes it to every event dispatch and
/// render. All of it is single-threaded; nothing here is `Send`.
#[derive(Debug, Default)]
pub struct Context {
    /// Keyboard focus
    pub focus: FocusState,
    /// Callbacks deferred to the next frame
    pub frames: FrameScheduler,
    /// Widgets currently receiving global pointer moves/releases
    pub captures: PointerCaptures,
    next_widget: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a unique widget id with the given prefix
    pub fn next_widget_id(&mut self, prefix: &str) -> WidgetId {
        self.next_widget += 1;
        WidgetId::new(format!("{}-{}", prefix, self.next_widget))
    }

    /// Run all callbacks that were scheduled before this frame started.
    ///
    /// Returns the number of callbacks executed.
    pub fn run_frame(&mut self) -> usize {
        self.frames.run_frame(&mut self.focus)
    }

    /// Drain recorded focus transitions as events for the host to dispatch.
    pub fn drain_focus_events(&mut self) -> Vec<Event> {
        self.focus
            .drain_changes()
            .into_iter()
            .map(|change| match change {
                FocusChange::Gained(target) => Event::Focus { target },
                FocusChange::Lost(target) => Event::Blur { target },
            })
            .collect()
    }
}
