//! Error types for roll_ui.

use thiserror::Error;

/// Errors raised when validating step bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// A bound is NaN
    #[error("Bound '{name}' is not a number")]
    NotANumber {
        /// Which bound was NaN
        name: &'static str,
    },

    /// Lower bound above upper bound
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// Step below zero
    #[error("Step must not be negative, got {step}")]
    NegativeStep { step: f64 },
}
