// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera-follow settling: scroll a target into view, infer when the
//! scroll stopped.
//!
//! ## Overview
//!
//! Smooth scrolling has no completion signal, so settlement is inferred:
//! the host samples the target's on-screen vertical position once per
//! display frame, and the follow is settled after more than
//! [`SETTLE_FRAMES`] consecutive identical samples. A sample of `None`
//! (the target left the document mid-scroll) settles immediately rather
//! than polling forever.
//!
//! The owning scene keeps a [`FollowHandle`]; cancelling it makes the next
//! frame report [`FollowStatus::Cancelled`], so tearing a scene down
//! mid-scroll never leaks a polling loop.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::options::ScrollIntoViewOptions;

/// Consecutive identical samples required before a follow settles.
pub const SETTLE_FRAMES: u8 = 3;

/// Seam to the host's scrolling and measurement machinery.
pub trait CameraHost {
    /// Ask the host to scroll the active target into view.
    fn scroll_into_view(&mut self, options: &ScrollIntoViewOptions);
    /// The target's current top coordinate in viewport space, or `None`
    /// once the target has left the document.
    fn sample_top(&self) -> Option<f64>;
}

/// Outcome of one follow frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FollowStatus {
    /// The scroll has not settled yet; keep sampling.
    Pending,
    /// The scroll settled (or the target vanished); the camera move is over.
    Settled,
    /// The owner cancelled the follow.
    Cancelled,
}

/// Cancellation handle for an in-flight follow.
///
/// Clone it into whatever owns the scene's lifetime; [`FollowHandle::cancel`]
/// stops the poll at the next frame.
#[derive(Clone, Debug)]
pub struct FollowHandle(Rc<Cell<bool>>);

impl FollowHandle {
    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// One camera move: a scroll request plus the settle debounce.
#[derive(Debug)]
pub struct FollowScroll {
    last: Option<f64>,
    still: u8,
    finished: Option<FollowStatus>,
    cancelled: Rc<Cell<bool>>,
}

impl FollowScroll {
    /// Issue the scroll request on `host` and arm the tracker.
    pub fn begin<H: CameraHost>(host: &mut H, options: &ScrollIntoViewOptions) -> Self {
        host.scroll_into_view(options);
        Self {
            last: None,
            still: 0,
            finished: None,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// A cancellation handle tied to this follow.
    pub fn handle(&self) -> FollowHandle {
        FollowHandle(Rc::clone(&self.cancelled))
    }

    /// Advance the debounce by one display frame.
    ///
    /// Terminal states are sticky: once `Settled` or `Cancelled` is
    /// returned, further frames return the same status.
    pub fn on_frame<H: CameraHost>(&mut self, host: &H) -> FollowStatus {
        if let Some(done) = self.finished {
            return done;
        }
        if self.cancelled.get() {
            return self.finish(FollowStatus::Cancelled);
        }
        let Some(pos) = host.sample_top() else {
            // Target left the document; resolve instead of polling forever.
            return self.finish(FollowStatus::Settled);
        };
        if self.last == Some(pos) {
            self.still += 1;
            if self.still > SETTLE_FRAMES {
                return self.finish(FollowStatus::Settled);
            }
        } else {
            self.still = 0;
            self.last = Some(pos);
        }
        FollowStatus::Pending
    }

    /// Whether the follow reached a terminal state.
    pub const fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    fn finish(&mut self, status: FollowStatus) -> FollowStatus {
        self.finished = Some(status);
        status
    }
}
