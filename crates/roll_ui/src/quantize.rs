//! Clamping and step quantization for bounded numeric values.
//!
//! The grid is anchored at `min` when it is finite and at zero otherwise.
//! Ties snap upward (toward +inf on the grid index), so `2.5` steps becomes
//! `3` and `-2.5` becomes `-2`. A zero or non-finite step disables snapping
//! and the value is only clamped.

use crate::error::BoundsError;

/// Inclusive range plus quantization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBounds {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for StepBounds {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
        }
    }
}

impl StepBounds {
    /// Create validated bounds. Infinite `min`/`max` mean unbounded.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, BoundsError> {
        if min.is_nan() {
            return Err(BoundsError::NotANumber { name: "min" });
        }
        if max.is_nan() {
            return Err(BoundsError::NotANumber { name: "max" });
        }
        if step.is_nan() {
            return Err(BoundsError::NotANumber { name: "step" });
        }
        if min > max {
            return Err(BoundsError::InvertedRange { min, max });
        }
        if step < 0.0 {
            return Err(BoundsError::NegativeStep { step });
        }
        Ok(Self { min, max, step })
    }

    /// Unbounded range with a step of 1
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether the step grid is active
    pub fn quantizes(&self) -> bool {
        self.step.is_finite() && self.step != 0.0
    }

    /// Clamp into `[min, max]` without snapping.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Clamp and snap `value` onto the step grid.
    pub fn quantize(&self, value: f64) -> f64 {
        quantize(value, self)
    }
}

/// Map a raw proposal to a bounded, step-aligned value.
///
/// Snapping can land one step beyond the nearest bound, so the result is
/// clamped a second time.
pub fn quantize(proposal: f64, bounds: &StepBounds) -> f64 {
    let clamped = bounds.clamp(proposal);
    let snapped = if !bounds.quantizes() {
        clamped
    } else if bounds.min.is_finite() {
        bounds.min + round_half_up((clamped - bounds.min) / bounds.step) * bounds.step
    } else {
        round_half_up(clamped / bounds.step) * bounds.step
    };
    bounds.clamp(snapped)
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f64, max: f64, step: f64) -> StepBounds {
        StepBounds::new(min, max, step).unwrap()
    }

    fn samples() -> impl Iterator<Item = f64> {
        (-400..=400).map(|i| i as f64 * 0.37)
    }

    #[test]
    fn test_clamps_into_range() {
        let b = bounds(1.0, 90.0, 1.0);
        assert_eq!(quantize(120.0, &b), 90.0);
        assert_eq!(quantize(-5.0, &b), 1.0);
        assert_eq!(quantize(51.0, &b), 51.0);
    }

    #[test]
    fn test_grid_anchored_at_min() {
        let b = bounds(1.0, 100.0, 5.0);
        // grid is 1, 6, 11, ...
        assert_eq!(quantize(7.0, &b), 6.0);
        assert_eq!(quantize(9.0, &b), 11.0);
    }

    #[test]
    fn test_tie_rounds_up() {
        let b = bounds(0.0, 10.0, 2.0);
        assert_eq!(quantize(3.0, &b), 4.0);
        assert_eq!(quantize(5.0, &b), 6.0);

        let from_zero = bounds(f64::NEG_INFINITY, f64::INFINITY, 2.0);
        assert_eq!(quantize(-3.0, &from_zero), -2.0);
        assert_eq!(quantize(3.0, &from_zero), 4.0);
    }

    #[test]
    fn test_unbounded_min_anchors_at_zero() {
        let b = bounds(f64::NEG_INFINITY, 100.0, 10.0);
        assert_eq!(quantize(-26.0, &b), -30.0);
        assert_eq!(quantize(14.0, &b), 10.0);
    }

    #[test]
    fn test_snap_past_max_is_reclamped() {
        let b = bounds(0.0, 5.0, 2.0);
        // 5 is 2.5 steps from min, rounds up to 6, clamped back to 5
        assert_eq!(quantize(5.0, &b), 5.0);
        assert_eq!(quantize(100.0, &b), 5.0);
    }

    #[test]
    fn test_zero_or_infinite_step_only_clamps() {
        let zero = bounds(0.0, 10.0, 0.0);
        assert!(!zero.quantizes());
        assert_eq!(quantize(3.3, &zero), 3.3);
        assert_eq!(quantize(12.0, &zero), 10.0);

        let infinite = bounds(0.0, 10.0, f64::INFINITY);
        assert!(!infinite.quantizes());
        assert_eq!(quantize(7.25, &infinite), 7.25);
    }

    #[test]
    fn test_idempotent() {
        let cases = [
            bounds(1.0, 90.0, 1.0),
            bounds(0.0, 5.0, 2.0),
            bounds(-3.5, 17.0, 0.5),
            bounds(f64::NEG_INFINITY, f64::INFINITY, 3.0),
            bounds(f64::NEG_INFINITY, 40.0, 7.0),
            bounds(2.0, f64::INFINITY, 0.25),
            bounds(0.0, 10.0, 0.0),
        ];
        for b in &cases {
            for x in samples() {
                let once = quantize(x, b);
                assert_eq!(quantize(once, b), once, "x = {x}, bounds = {b:?}");
            }
        }
    }

    #[test]
    fn test_result_within_bounds() {
        let cases = [
            bounds(1.0, 90.0, 1.0),
            bounds(0.0, 5.0, 2.0),
            bounds(-10.0, -2.0, 3.0),
            bounds(f64::NEG_INFINITY, 40.0, 7.0),
        ];
        for b in &cases {
            for x in samples() {
                let q = quantize(x, b);
                assert!(b.min() <= q && q <= b.max(), "x = {x}, q = {q}, bounds = {b:?}");
            }
        }
    }

    #[test]
    fn test_new_rejects_invalid_bounds() {
        assert_eq!(
            StepBounds::new(5.0, 1.0, 1.0),
            Err(BoundsError::InvertedRange { min: 5.0, max: 1.0 })
        );
        assert_eq!(
            StepBounds::new(0.0, 1.0, -1.0),
            Err(BoundsError::NegativeStep { step: -1.0 })
        );
        assert!(StepBounds::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(StepBounds::new(0.0, 1.0, 0.0).is_ok());
    }
}
