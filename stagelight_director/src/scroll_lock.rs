// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll lock: pin the page while the camera moves, restore it after.
//!
//! ## Overview
//!
//! Freezing the page is inherently global, so exactly one [`ScrollLock`]
//! should exist per page — the [`Director`](crate::director::Director)
//! owns it. Both [`ScrollLock::lock`] and [`ScrollLock::unlock`] are
//! idempotent: a second `lock` does not re-capture the offset, and
//! `unlock` without a lock is a no-op.
//!
//! A viewport resize can shift layout metrics while pinned, so hosts
//! forward resize events to [`ScrollLock::on_resize`], which releases and
//! re-pins at the fresh offset.

use kurbo::Vec2;

/// Seam to the page's scroll machinery.
///
/// `pin` is expected to freeze the page at the given offset (the DOM
/// rendition sets `position: fixed; top: -offset.y`); `release` undoes the
/// pin and restores scroll to `restore`.
pub trait ScrollHost {
    /// Current scroll offset of the page.
    fn scroll_offset(&self) -> Vec2;
    /// Freeze the page layout at `offset`.
    fn pin(&mut self, offset: Vec2);
    /// Unfreeze and scroll back to `restore`.
    fn release(&mut self, restore: Vec2);
}

/// Idempotent page scroll lock.
#[derive(Clone, Debug)]
pub struct ScrollLock {
    pinned: Option<Vec2>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollLock {
    /// Create an unlocked lock.
    pub const fn new() -> Self {
        Self { pinned: None }
    }

    /// Whether the page is currently pinned.
    pub const fn is_locked(&self) -> bool {
        self.pinned.is_some()
    }

    /// Capture the current offset and pin the page. No-op while locked.
    pub fn lock<H: ScrollHost>(&mut self, host: &mut H) {
        if self.pinned.is_some() {
            return;
        }
        let offset = host.scroll_offset();
        self.pinned = Some(offset);
        host.pin(offset);
    }

    /// Release the pin and restore the captured offset. No-op while
    /// unlocked.
    pub fn unlock<H: ScrollHost>(&mut self, host: &mut H) {
        if let Some(offset) = self.pinned.take() {
            host.release(offset);
        }
    }

    /// Drop the pin, leaving the page at its current offset. No-op while
    /// unlocked.
    ///
    /// Used when a camera follow ends: the page should stay where the
    /// scroll left it rather than snap back to the captured offset.
    pub fn release_here<H: ScrollHost>(&mut self, host: &mut H) {
        if self.pinned.take().is_some() {
            let here = host.scroll_offset();
            host.release(here);
        }
    }

    /// Move the pin to the current offset, forgetting the earlier capture.
    /// No-op while unlocked.
    ///
    /// A later [`ScrollLock::unlock`] restores the fresh offset, not the
    /// original one.
    pub fn repin_here<H: ScrollHost>(&mut self, host: &mut H) {
        if self.pinned.is_some() {
            let here = host.scroll_offset();
            self.pinned = Some(here);
            host.pin(here);
        }
    }

    /// Re-pin at the current offset after a viewport resize. No-op while
    /// unlocked.
    pub fn on_resize<H: ScrollHost>(&mut self, host: &mut H) {
        let Some(old) = self.pinned.take() else {
            return;
        };
        host.release(old);
        let fresh = host.scroll_offset();
        self.pinned = Some(fresh);
        host.pin(fresh);
    }
}
