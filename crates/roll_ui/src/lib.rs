//! roll_ui - A headless widget toolkit for controlled numeric inputs
//!
//! This crate provides the event model, runtime context and the `RollingInput`
//! stepper widget. Widgets never own the values they display: every gesture is
//! turned into a message for the container, and the container pushes the
//! confirmed value back on the next render.

mod a11y;
mod callback;
mod capture;
mod constants;
mod context;
mod drag;
mod error;
mod event;
mod focus;
mod focus_guard;
mod frame;
mod gesture;
mod layout;
mod quantize;
mod sync;
mod widget;
pub mod widgets;

pub use a11y::{AccessibilityNode, LivePoliteness, Role};
pub use callback::Callback;
pub use capture::{CaptureGuard, PointerCaptures};
pub use constants::{ANIMATION_DURATION, DEFAULT_DRAG_SENSITIVITY, DEFAULT_PAGE_STEP_MULTIPLIER};
pub use context::{Context, WidgetId};
pub use drag::DragSession;
pub use error::BoundsError;
pub use event::{Event, KeyCode, KeyModifiers, MouseButton, Point};
pub use focus::{FocusChange, FocusOptions, FocusState};
pub use focus_guard::{ChangeToken, FocusGuard, PendingChange};
pub use frame::{FrameHandle, FrameScheduler};
pub use gesture::{drag_steps, key_steps, propose, resolve_candidate, wheel_steps};
pub use layout::{Bounds, Length, Size};
pub use quantize::{quantize, StepBounds};
pub use sync::{AnimationDirection, DisplaySync, Reconciliation, RollAnimation};
pub use widget::{EventResult, Widget};
pub use widgets::{rolling_input, RollingInput, RollingInputConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{Context, WidgetId};
    pub use crate::event::{Event, KeyCode, KeyModifiers, MouseButton, Point};
    pub use crate::layout::{Bounds, Length, Size};
    pub use crate::quantize::StepBounds;
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{rolling_input, RollingInput, RollingInputConfig};
}
