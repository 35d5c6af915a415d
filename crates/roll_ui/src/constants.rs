//! Centralized constants for roll_ui

use std::time::Duration;

// =============================================================================
// Rolling Input
// =============================================================================

/// Pixels of vertical pointer travel per step while dragging
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 20.0;

/// Steps moved by PageUp/PageDown
pub const DEFAULT_PAGE_STEP_MULTIPLIER: u32 = 5;

/// Length of the roll-in entrance animation
pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Default rolling input width
pub const ROLLING_INPUT_WIDTH: f32 = 64.0;

/// Default rolling input height (2.75rem at 16px)
pub const ROLLING_INPUT_HEIGHT: f32 = 44.0;

/// Id prefix for generated rolling input ids
pub const ROLLING_INPUT_ID_PREFIX: &str = "roll-input";

/// Accessible name used when no label is set
pub const DEFAULT_ACCESSIBLE_LABEL: &str = "Numeric input";
