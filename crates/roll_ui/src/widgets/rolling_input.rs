//! Rolling number input: a controlled stepper driven by drag, keys and wheel.
//!
//! The widget never changes the value it shows on its own. Gestures produce
//! an `on_change` message with the quantized candidate; the container applies
//! it and calls [`RollingInput::render`] with the confirmed value, which is
//! when the display moves and the roll-in animation restarts.

use std::time::Duration;

use crate::a11y::{self, AccessibilityNode, LivePoliteness, Role};
use crate::callback::Callback;
use crate::constants::{
    ANIMATION_DURATION, DEFAULT_ACCESSIBLE_LABEL, DEFAULT_DRAG_SENSITIVITY,
    DEFAULT_PAGE_STEP_MULTIPLIER, ROLLING_INPUT_HEIGHT, ROLLING_INPUT_ID_PREFIX,
    ROLLING_INPUT_WIDTH,
};
use crate::context::{Context, WidgetId};
use crate::drag::DragSession;
use crate::event::{Event, MouseButton};
use crate::focus::FocusOptions;
use crate::focus_guard::{FocusGuard, PendingChange};
use crate::gesture::{key_steps, propose, resolve_candidate, wheel_steps};
use crate::layout::{Bounds, Length, Size};
use crate::quantize::StepBounds;
use crate::sync::{DisplaySync, Reconciliation, RollAnimation};
use crate::widget::{EventResult, Widget};

/// Tuning for rolling input gestures and animation
#[derive(Debug, Clone, PartialEq)]
pub struct RollingInputConfig {
    /// Pixels of vertical drag per step
    pub drag_sensitivity: f32,
    /// Steps moved by PageUp/PageDown
    pub page_step_multiplier: u32,
    /// Roll-in animation length
    pub animation_duration: Duration,
}

impl Default for RollingInputConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            page_step_multiplier: DEFAULT_PAGE_STEP_MULTIPLIER,
            animation_duration: ANIMATION_DURATION,
        }
    }
}

/// A numeric stepper that rolls its numeral in on every confirmed change
pub struct RollingInput<M> {
    id: WidgetId,
    label: Option<String>,
    bounds: StepBounds,
    width: Length,
    height: Length,
    config: RollingInputConfig,
    display: DisplaySync,
    drag: DragSession,
    guard: FocusGuard,
    on_change: Callback<f64, M>,
}

impl<M> RollingInput<M> {
    /// Mount a rolling input showing `value`.
    pub fn new(id: WidgetId, value: f64) -> Self {
        Self {
            guard: FocusGuard::new(id.clone()),
            id,
            label: None,
            bounds: StepBounds::default(),
            width: Length::Shrink,
            height: Length::Shrink,
            config: RollingInputConfig::default(),
            display: DisplaySync::mount(value),
            drag: DragSession::default(),
            on_change: Callback::none(),
        }
    }

    /// Set the visible label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the range and step
    pub fn bounds(mut self, bounds: StepBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Set the configuration
    pub fn config(mut self, config: RollingInputConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the change handler
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64) -> M + 'static,
    {
        self.on_change = Callback::new(callback);
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The displayed value
    pub fn value(&self) -> f64 {
        self.display.displayed()
    }

    /// Numeral as rendered
    pub fn display_text(&self) -> String {
        a11y::value_text(self.display.displayed())
    }

    pub fn animation(&self) -> RollAnimation {
        self.display.animation(self.config.animation_duration)
    }

    /// The unresolved local change, if a gesture is waiting for confirmation
    pub fn pending_change(&self) -> Option<PendingChange> {
        self.guard.pending()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Re-render with the container's confirmed value.
    pub fn render(&mut self, confirmed: f64, cx: &mut Context) -> Reconciliation {
        // Locality is decided before anything else runs
        let local = self.guard.pending();
        let result = self.display.reconcile(confirmed);

        if let Reconciliation::Changed { from, to, epoch, .. } = result {
            log::debug!(
                "RollingInput '{}': display {} -> {} (epoch {}, local = {})",
                self.id,
                from,
                to,
                epoch,
                local.is_some()
            );
        }

        self.guard.after_reconcile(local, result.is_changed(), &mut cx.frames);
        result
    }

    /// Tear down: release the pointer and cancel the focus check.
    pub fn unmount(&mut self, cx: &mut Context) {
        self.drag.end();
        self.guard.unmount(&mut cx.frames);
        log::debug!("RollingInput '{}': unmounted", self.id);
    }

    /// Accessibility description for the current state
    pub fn accessibility(&self) -> AccessibilityNode {
        let labelled_by = self.label.as_ref().map(|_| a11y::label_id(&self.id));
        let min = self.bounds.min();
        let max = self.bounds.max();
        AccessibilityNode {
            id: self.id.clone(),
            role: Role::SpinButton,
            label: labelled_by
                .is_none()
                .then(|| DEFAULT_ACCESSIBLE_LABEL.to_string()),
            labelled_by,
            value_now: self.display.displayed(),
            value_min: min.is_finite().then_some(min),
            value_max: max.is_finite().then_some(max),
            value_text: self.display_text(),
            live: LivePoliteness::Polite,
            atomic: true,
            focusable: true,
        }
    }

    /// Quantize a proposal and emit it if it changes the display.
    fn request(&mut self, proposal: f64) -> Option<M> {
        let displayed = self.display.displayed();
        let Some(candidate) = resolve_candidate(proposal, displayed, &self.bounds) else {
            log::debug!(
                "RollingInput '{}': proposal {} absorbed, value stays {}",
                self.id,
                proposal,
                displayed
            );
            return None;
        };

        let message = self.on_change.call(candidate)?;
        self.guard.arm(candidate);
        log::debug!("RollingInput '{}': requested {} -> {}", self.id, displayed, candidate);
        Some(message)
    }

    fn step_by(&mut self, steps: i64) -> Option<M> {
        let proposal = propose(self.display.displayed(), steps, self.bounds.step());
        self.request(proposal)
    }

    fn drag_to(&mut self, pointer_y: f32) -> Option<M> {
        let (origin_value, steps) = self.drag.steps_to(pointer_y, self.config.drag_sensitivity)?;
        let proposal = propose(origin_value, steps, self.bounds.step());
        self.request(proposal)
    }

    fn blur(&mut self, cx: &mut Context) {
        self.drag.end();
        self.guard.on_blur(&mut cx.frames);
    }
}

impl<M> Widget<M> for RollingInput<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width, ROLLING_INPUT_WIDTH),
            self.height.resolve(available.height, ROLLING_INPUT_HEIGHT),
        )
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds, cx: &mut Context) -> EventResult<M> {
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } if bounds.contains(*position) => {
                if !cx.focus.is_focused(&self.id) {
                    cx.focus.focus(&self.id, FocusOptions::prevent_scroll());
                }
                self.drag.start(&self.id, &cx.captures, position.y, self.display.displayed());
                EventResult::consumed(None)
            }

            Event::TouchStart { position } if bounds.contains(*position) => {
                self.drag.start(&self.id, &cx.captures, position.y, self.display.displayed());
                EventResult::ignored()
            }

            Event::MouseMove { position } if self.drag.is_dragging() => EventResult {
                message: self.drag_to(position.y),
                default_prevented: false,
            },

            Event::TouchMove { position } if self.drag.is_dragging() => {
                EventResult::consumed(self.drag_to(position.y))
            }

            Event::MouseRelease { .. }
            | Event::TouchEnd
            | Event::TouchCancel
            | Event::PointerCancel => {
                self.drag.end();
                EventResult::ignored()
            }

            Event::MouseScroll { delta, position } if bounds.contains(*position) => {
                let message = self.step_by(wheel_steps(delta.1));
                EventResult::consumed(message)
            }

            Event::KeyPress { key, .. } if cx.focus.is_focused(&self.id) => {
                match key_steps(*key, self.config.page_step_multiplier) {
                    Some(steps) => EventResult::consumed(self.step_by(steps)),
                    None => EventResult::ignored(),
                }
            }

            Event::Blur { target } if *target == self.id => {
                log::debug!("RollingInput '{}': blurred", self.id);
                self.blur(cx);
                EventResult::ignored()
            }

            Event::FocusLost if cx.focus.is_focused(&self.id) => {
                log::debug!("RollingInput '{}': window lost focus", self.id);
                self.blur(cx);
                EventResult::ignored()
            }

            _ => EventResult::ignored(),
        }
    }
}

/// Mount a rolling input with a generated id
pub fn rolling_input<M>(cx: &mut Context, value: f64) -> RollingInput<M> {
    RollingInput::new(cx.next_widget_id(ROLLING_INPUT_ID_PREFIX), value)
}
