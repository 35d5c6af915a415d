//! Next-frame callback scheduling.
//!
//! This is the headless counterpart of `requestAnimationFrame`: a callback
//! requested now runs when the host runs its next frame, after the render
//! that follows the current event has been committed.

use std::fmt;

use crate::focus::FocusState;

/// Handle to a scheduled callback, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

type FrameCallback = Box<dyn FnOnce(&mut FocusState)>;

/// Queue of callbacks waiting for the next frame.
#[derive(Default)]
pub struct FrameScheduler {
    next_handle: u64,
    frame: u64,
    queued: Vec<(FrameHandle, FrameCallback)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` for the next frame.
    pub fn request_frame<F>(&mut self, callback: F) -> FrameHandle
    where
        F: FnOnce(&mut FocusState) + 'static,
    {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.queued.push((handle, Box::new(callback)));
        log::trace!("FrameScheduler: requested {:?} for frame {}", handle, self.frame + 1);
        handle
    }

    /// Cancel a scheduled callback.
    /// Returns false if it already ran or was cancelled before.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.queued.len();
        self.queued.retain(|(queued, _)| *queued != handle);
        let cancelled = self.queued.len() != before;
        if cancelled {
            log::trace!("FrameScheduler: cancelled {:?}", handle);
        }
        cancelled
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.queued.iter().any(|(queued, _)| *queued == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.queued.len()
    }

    /// Number of frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run every callback queued before this call, in request order.
    pub fn run_frame(&mut self, focus: &mut FocusState) -> usize {
        self.frame += 1;
        let due = std::mem::take(&mut self.queued);
        let count = due.len();
        for (_, callback) in due {
            callback(focus);
        }
        if count > 0 {
            log::trace!("FrameScheduler: frame {} ran {} callbacks", self.frame, count);
        }
        count
    }
}

impl fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("frame", &self.frame)
            .field("pending", &self.queued.len())
            .finish()
    }
}
