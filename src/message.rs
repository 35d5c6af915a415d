//! Application message types for Stat Roller.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

/// The stats shown in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Character level
    Level,
    /// Weapon refinement rank
    Refinement,
}

impl StatKind {
    /// Get the display name for this stat.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Level => "Level",
            StatKind::Refinement => "Refinement",
        }
    }

    /// Widget id of the stat's input.
    pub fn widget_id(&self) -> &'static str {
        match self {
            StatKind::Level => "level",
            StatKind::Refinement => "refinement",
        }
    }

    /// Get all stats in display order.
    pub fn all() -> &'static [StatKind] {
        &[StatKind::Level, StatKind::Refinement]
    }
}

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A rolling input requested a new value
    StatChanged(StatKind, f64),
    /// Max button pressed
    MaxStat(StatKind),
}
