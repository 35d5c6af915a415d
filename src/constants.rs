//! Global constants for the Stat Roller application

/// Lowest character level
pub const LEVEL_MIN: f64 = 1.0;

/// Highest character level
pub const LEVEL_MAX: f64 = 90.0;

/// Lowest weapon refinement rank
pub const REFINEMENT_MIN: f64 = 1.0;

/// Highest weapon refinement rank
pub const REFINEMENT_MAX: f64 = 5.0;

/// Width available to the stats panel
pub const PANEL_WIDTH: f32 = 240.0;

/// Height of one stat row
pub const ROW_HEIGHT: f32 = 56.0;
