//! Accessibility description of a widget, for hosts that expose one to
//! assistive technology.

use crate::context::WidgetId;

/// Semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Bounded numeric range control
    SpinButton,
}

/// Live region politeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivePoliteness {
    Off,
    Polite,
    Assertive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityNode {
    pub id: WidgetId,
    pub role: Role,
    /// Accessible name, when no visible label references the widget
    pub label: Option<String>,
    /// Id of the visible label element
    pub labelled_by: Option<String>,
    pub value_now: f64,
    /// Absent when the range is unbounded below
    pub value_min: Option<f64>,
    /// Absent when the range is unbounded above
    pub value_max: Option<f64>,
    pub value_text: String,
    pub live: LivePoliteness,
    /// Announce the whole region on change, not just the diff
    pub atomic: bool,
    pub focusable: bool,
}

/// Id of the visible label element for widget `id`
pub fn label_id(id: &WidgetId) -> String {
    format!("{}-label-text", id)
}

/// Text shown for a value: rounded, no decimals.
pub fn value_text(value: f64) -> String {
    // -0.0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.0}", value)
}
