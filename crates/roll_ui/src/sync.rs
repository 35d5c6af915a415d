//! Display synchronization: keeps the displayed value in step with the
//! confirmed value and decides when the roll-in animation restarts.

use std::time::Duration;

use web_time::Instant;

/// Direction the new numeral rolls in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationDirection {
    /// No animation (initial mount)
    #[default]
    None,
    /// Value decreased: numeral enters from the top
    FromAbove,
    /// Value increased: numeral enters from the bottom
    FromBelow,
}

/// What a renderer needs to play the entrance animation.
///
/// `epoch` is the identity key: a renderer restarts the animation whenever it
/// sees a new epoch, even if the numeral text is one it has shown before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAnimation {
    pub epoch: u64,
    pub direction: AnimationDirection,
    pub duration: Duration,
    pub started_at: Option<Instant>,
}

impl RollAnimation {
    /// Animation progress in `0.0..=1.0`; 1.0 when nothing is playing.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started_at {
            Some(start) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}

/// Result of one reconciliation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    /// Confirmed value equals the displayed one
    Unchanged,
    /// Displayed value moved and a new epoch started
    Changed {
        from: f64,
        to: f64,
        direction: AnimationDirection,
        epoch: u64,
    },
}

impl Reconciliation {
    pub fn is_changed(&self) -> bool {
        matches!(self, Reconciliation::Changed { .. })
    }
}

/// The displayed value plus animation bookkeeping.
///
/// The displayed value is only ever written by [`DisplaySync::reconcile`].
#[derive(Debug, Clone)]
pub struct DisplaySync {
    displayed: f64,
    epoch: u64,
    direction: AnimationDirection,
    started_at: Option<Instant>,
}

impl DisplaySync {
    /// Seed the display on first mount, without animation.
    pub fn mount(confirmed: f64) -> Self {
        Self {
            displayed: confirmed,
            epoch: 0,
            direction: AnimationDirection::None,
            started_at: None,
        }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn direction(&self) -> AnimationDirection {
        self.direction
    }

    /// Bring the display in line with `confirmed`.
    pub fn reconcile(&mut self, confirmed: f64) -> Reconciliation {
        if same_value(confirmed, self.displayed) {
            return Reconciliation::Unchanged;
        }

        let from = self.displayed;
        self.direction = if confirmed > from {
            AnimationDirection::FromBelow
        } else {
            AnimationDirection::FromAbove
        };
        self.displayed = confirmed;
        self.epoch += 1;
        self.started_at = Some(Instant::now());

        Reconciliation::Changed {
            from,
            to: confirmed,
            direction: self.direction,
            epoch: self.epoch,
        }
    }

    /// Current animation description
    pub fn animation(&self, duration: Duration) -> RollAnimation {
        RollAnimation {
            epoch: self.epoch,
            direction: self.direction,
            duration,
            started_at: self.started_at,
        }
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
