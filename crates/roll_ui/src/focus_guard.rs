//! Focus retention across self-triggered re-renders.
//!
//! Every change request a widget emits is tagged with a [`ChangeToken`] and
//! remembered as the pending change. When the container confirms it, a focus
//! check is deferred to the next frame. That check refocuses the widget if it
//! lost focus to the re-render, then retires the pending change, but only if
//! the pending change still carries the token the check was scheduled for.
//!
//! Blur wins over everything: it drops the pending change and cancels the
//! scheduled check.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::context::WidgetId;
use crate::focus::{FocusOptions, FocusState};
use crate::frame::{FrameHandle, FrameScheduler};

/// Correlates an emitted change request with its confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeToken(u64);

/// A change request that left the widget and has not been resolved yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingChange {
    pub token: ChangeToken,
    pub requested: f64,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledCheck {
    handle: FrameHandle,
    token: ChangeToken,
}

/// State shared with the deferred check.
#[derive(Debug, Default)]
struct Shared {
    pending: Option<PendingChange>,
    scheduled: Option<ScheduledCheck>,
}

/// Tracks the pending local change of one widget and its focus check.
#[derive(Debug)]
pub struct FocusGuard {
    id: WidgetId,
    shared: Rc<RefCell<Shared>>,
    next_token: u64,
}

impl FocusGuard {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            shared: Rc::new(RefCell::new(Shared::default())),
            next_token: 0,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The unresolved local change, if any
    pub fn pending(&self) -> Option<PendingChange> {
        self.shared.borrow().pending
    }

    pub fn is_armed(&self) -> bool {
        self.pending().is_some()
    }

    pub fn has_scheduled_check(&self) -> bool {
        self.shared.borrow().scheduled.is_some()
    }

    /// Record an outgoing change request. A newer request supersedes the
    /// previous one.
    pub fn arm(&mut self, requested: f64) -> ChangeToken {
        self.next_token += 1;
        let token = ChangeToken(self.next_token);
        self.shared.borrow_mut().pending = Some(PendingChange { token, requested });
        log::debug!(
            "FocusGuard '{}': armed {:?} for value {}",
            self.id,
            token,
            requested
        );
        token
    }

    /// Handle a reconciliation whose locality was snapshotted as `local`
    /// before the display was touched.
    pub fn after_reconcile(
        &mut self,
        local: Option<PendingChange>,
        changed: bool,
        frames: &mut FrameScheduler,
    ) {
        let Some(local) = local else {
            return;
        };

        if changed {
            self.schedule_check(local.token, frames);
            return;
        }

        // Net-zero confirmation. A change already owned by a scheduled check
        // is retired by that check, not here.
        let mut shared = self.shared.borrow_mut();
        let owned = shared.scheduled.map(|s| s.token) == Some(local.token);
        if !owned && shared.pending.map(|p| p.token) == Some(local.token) {
            shared.pending = None;
            log::debug!(
                "FocusGuard '{}': {:?} resolved without a visible change",
                self.id,
                local.token
            );
        }
    }

    /// Defer a focus check for `token` to the next frame, replacing any
    /// check that has not run yet.
    fn schedule_check(&mut self, token: ChangeToken, frames: &mut FrameScheduler) {
        self.cancel_check(frames);

        let weak: Weak<RefCell<Shared>> = Rc::downgrade(&self.shared);
        let id = self.id.clone();
        let handle = frames.request_frame(move |focus: &mut FocusState| {
            run_check(&weak, &id, token, focus);
        });

        self.shared.borrow_mut().scheduled = Some(ScheduledCheck { handle, token });
        log::debug!("FocusGuard '{}': scheduled focus check for {:?}", self.id, token);
    }

    fn cancel_check(&mut self, frames: &mut FrameScheduler) {
        let scheduled = self.shared.borrow_mut().scheduled.take();
        if let Some(check) = scheduled {
            if frames.cancel(check.handle) {
                log::debug!(
                    "FocusGuard '{}': cancelled focus check for {:?}",
                    self.id,
                    check.token
                );
            }
        }
    }

    /// Focus left the widget: forget the pending change and stop any check.
    pub fn on_blur(&mut self, frames: &mut FrameScheduler) {
        self.cancel_check(frames);
        if self.shared.borrow_mut().pending.take().is_some() {
            log::debug!("FocusGuard '{}': blur cleared pending change", self.id);
        }
    }

    /// The widget is going away.
    pub fn unmount(&mut self, frames: &mut FrameScheduler) {
        self.cancel_check(frames);
        self.shared.borrow_mut().pending = None;
    }
}

fn run_check(shared: &Weak<RefCell<Shared>>, id: &WidgetId, token: ChangeToken, focus: &mut FocusState) {
    let Some(shared) = shared.upgrade() else {
        log::trace!("FocusGuard '{}': widget gone, skipping focus check", id);
        return;
    };

    if !focus.is_focused(id) {
        focus.focus(id, FocusOptions::prevent_scroll());
        log::debug!("FocusGuard '{}': restored focus after {:?}", id, token);
    }

    let mut shared = shared.borrow_mut();
    if shared.scheduled.map(|s| s.token) == Some(token) {
        shared.scheduled = None;
    }
    if shared.pending.map(|p| p.token) == Some(token) {
        shared.pending = None;
    }
}
