// Copyright 2025 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-coalesced scheduling of measurement passes.

bitflags::bitflags! {
    /// Reasons a measurement pass was requested.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Nodes mounted or unmounted.
        const MOUNT            = 0b0000_0001;
        /// A node was expanded or collapsed.
        const EXPANSION        = 0b0000_0010;
        /// The chart container changed size.
        const CONTAINER_RESIZE = 0b0000_0100;
        /// The window changed size.
        const WINDOW_RESIZE    = 0b0000_1000;
        /// The chart container scrolled.
        const SCROLL           = 0b0001_0000;
        /// The department selection changed.
        const FILTER           = 0b0010_0000;
    }
}

/// What the host should do after [`MeasureScheduler::request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// No frame was pending; ask the host for a frame callback.
    RequestFrame,
    /// A frame callback is already pending and will cover this trigger.
    Coalesced,
}

/// Dirty flag plus pending-frame bookkeeping for measurement.
///
/// Triggers arriving between two frames are merged so that a burst of
/// resize or scroll events costs one measurement pass. A requested frame
/// cannot be cancelled; it always delivers the triggers merged into it.
///
/// ```rust
/// use orgchart_registry::{MeasureScheduler, Schedule, Triggers};
///
/// let mut scheduler = MeasureScheduler::new();
/// assert_eq!(scheduler.request(Triggers::CONTAINER_RESIZE), Schedule::RequestFrame);
/// assert_eq!(scheduler.request(Triggers::CONTAINER_RESIZE), Schedule::Coalesced);
/// assert_eq!(scheduler.request(Triggers::SCROLL), Schedule::Coalesced);
///
/// // The frame callback runs one pass for all three events.
/// assert_eq!(
///     scheduler.take_frame(),
///     Some(Triggers::CONTAINER_RESIZE | Triggers::SCROLL)
/// );
/// assert_eq!(scheduler.take_frame(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MeasureScheduler {
    pending: Triggers,
    frame_requested: bool,
    passes: u64,
    coalesced: u64,
}

impl MeasureScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger and report whether a frame callback must be requested.
    pub fn request(&mut self, trigger: Triggers) -> Schedule {
        self.pending |= trigger;
        if self.frame_requested {
            self.coalesced += 1;
            tracing::trace!(?trigger, "coalesced measurement trigger");
            Schedule::Coalesced
        } else {
            self.frame_requested = true;
            Schedule::RequestFrame
        }
    }

    /// Consume the pending frame.
    ///
    /// Call from the frame callback. Returns the merged triggers, or `None`
    /// if no frame was pending.
    pub fn take_frame(&mut self) -> Option<Triggers> {
        if !self.frame_requested {
            return None;
        }
        self.frame_requested = false;
        self.passes += 1;
        Some(core::mem::replace(&mut self.pending, Triggers::empty()))
    }

    /// Returns `true` if a frame callback is outstanding.
    pub fn is_pending(&self) -> bool {
        self.frame_requested
    }

    /// Triggers merged into the outstanding frame.
    pub fn pending(&self) -> Triggers {
        self.pending
    }

    /// Number of frames taken so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Number of triggers absorbed into an already pending frame.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_scheduler_has_no_frame() {
        let mut scheduler = MeasureScheduler::new();
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.take_frame(), None);
        assert_eq!(scheduler.passes(), 0);
    }

    #[test]
    fn resize_burst_is_one_pass() {
        let mut scheduler = MeasureScheduler::new();
        let mut frame_requests = 0;
        for _ in 0..5 {
            if scheduler.request(Triggers::CONTAINER_RESIZE) == Schedule::RequestFrame {
                frame_requests += 1;
            }
        }
        assert_eq!(frame_requests, 1);
        assert_eq!(scheduler.coalesced(), 4);
        assert_eq!(scheduler.take_frame(), Some(Triggers::CONTAINER_RESIZE));
        assert_eq!(scheduler.take_frame(), None);
        assert_eq!(scheduler.passes(), 1);
    }

    #[test]
    fn next_trigger_after_frame_requests_again() {
        let mut scheduler = MeasureScheduler::new();
        let _ = scheduler.request(Triggers::MOUNT);
        let _ = scheduler.take_frame();
        assert_eq!(scheduler.request(Triggers::EXPANSION), Schedule::RequestFrame);
        assert_eq!(scheduler.pending(), Triggers::EXPANSION);
    }
}
