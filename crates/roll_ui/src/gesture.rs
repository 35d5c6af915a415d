//! Gesture arithmetic: turns drag, key and wheel input into step counts and
//! candidate values.

use crate::event::KeyCode;
use crate::quantize::StepBounds;

/// Steps produced by a key press, or `None` for keys the widget leaves alone.
pub fn key_steps(key: KeyCode, page_multiplier: u32) -> Option<i64> {
    let page = i64::from(page_multiplier);
    match key {
        KeyCode::Up => Some(1),
        KeyCode::Down => Some(-1),
        KeyCode::PageUp => Some(page),
        KeyCode::PageDown => Some(-page),
        _ => None,
    }
}

/// One step per wheel event: scrolling up (negative delta) increments.
pub fn wheel_steps(delta_y: f32) -> i64 {
    if delta_y < 0.0 {
        1
    } else if delta_y > 0.0 {
        -1
    } else {
        0
    }
}

/// Whole steps covered by a drag from `origin_y` to `current_y`.
///
/// Moving the pointer up increments. Partial steps are truncated toward
/// zero, and the distance is always measured from the drag origin.
pub fn drag_steps(origin_y: f32, current_y: f32, sensitivity: f32) -> i64 {
    if !(sensitivity.is_finite() && sensitivity > 0.0) {
        return 0;
    }
    let delta = origin_y - current_y;
    (delta / sensitivity).trunc() as i64
}

/// Raw proposal `base + steps * step`, before clamping and snapping.
///
/// Zero steps always propose `base`, so an infinite step cannot turn a
/// no-op gesture into NaN.
pub fn propose(base: f64, steps: i64, step: f64) -> f64 {
    if steps == 0 {
        return base;
    }
    base + steps as f64 * step
}

/// Quantize `proposal` and return it only if it differs from `displayed`.
pub fn resolve_candidate(proposal: f64, displayed: f64, bounds: &StepBounds) -> Option<f64> {
    let candidate = bounds.quantize(proposal);
    if candidate != displayed {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_steps() {
        assert_eq!(key_steps(KeyCode::Up, 5), Some(1));
        assert_eq!(key_steps(KeyCode::Down, 5), Some(-1));
        assert_eq!(key_steps(KeyCode::PageUp, 5), Some(5));
        assert_eq!(key_steps(KeyCode::PageDown, 10), Some(-10));
        assert_eq!(key_steps(KeyCode::Tab, 5), None);
        assert_eq!(key_steps(KeyCode::Char('k'), 5), None);
    }

    #[test]
    fn test_wheel_steps() {
        assert_eq!(wheel_steps(-10.0), 1);
        assert_eq!(wheel_steps(120.0), -1);
        assert_eq!(wheel_steps(0.0), 0);
    }

    #[test]
    fn test_drag_steps_truncate_toward_zero() {
        assert_eq!(drag_steps(100.0, 40.0, 20.0), 3);
        assert_eq!(drag_steps(100.0, 41.0, 20.0), 2);
        assert_eq!(drag_steps(100.0, 119.0, 20.0), 0);
        assert_eq!(drag_steps(100.0, 145.0, 20.0), -2);
        assert_eq!(drag_steps(100.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_drag_of_two_sensitivities_moves_two_steps() {
        let sensitivity = 20.0;
        let steps = drag_steps(300.0, 300.0 - 2.0 * sensitivity, sensitivity);
        assert_eq!(propose(10.0, steps, 1.0), 12.0);
    }

    #[test]
    fn test_propose_with_infinite_step() {
        assert_eq!(propose(50.0, 0, f64::INFINITY), 50.0);
        assert_eq!(propose(50.0, 1, f64::INFINITY), f64::INFINITY);
        assert_eq!(propose(50.0, -5, f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_resolve_candidate() {
        let bounds = StepBounds::new(0.0, 5.0, 1.0).unwrap();
        assert_eq!(resolve_candidate(6.0, 5.0, &bounds), None);
        assert_eq!(resolve_candidate(4.0, 5.0, &bounds), Some(4.0));
        // Misaligned external value is corrected by a zero-step proposal
        assert_eq!(resolve_candidate(2.4, 2.4, &bounds), Some(2.0));
    }
}
