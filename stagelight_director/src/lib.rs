// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagelight_director --heading-base-level=0

//! Stagelight Director: the coordination layer of a guided tour.
//!
//! ## Overview
//!
//! This crate sits between the pure tour state
//! ([`stagelight_act`]) and a host renderer. It owns the concerns that are
//! stateful but not visual:
//!
//! - [`options`]: layered configuration — defaults → global → per-scene,
//!   `None` keys falling through.
//! - [`scroll_lock`]: the page-wide pin that freezes scrolling during a
//!   camera move and restores the captured offset afterwards.
//! - [`follow`]: the settle debounce for "scroll the target into view",
//!   with an explicit cancellation handle so a torn-down scene never leaks
//!   a polling loop.
//! - [`director`]: [`Director`](crate::director::Director), which wires
//!   store, lock, follow, and lifecycle hooks together; and
//!   [`TourHooks`](crate::director::TourHooks), the seam for
//!   `on_before_cut` / `on_after_cut` / `on_activated` / `on_deactivated`
//!   callbacks.
//!
//! The host is abstracted behind two small traits:
//! [`ScrollHost`](crate::scroll_lock::ScrollHost) (read offset, pin,
//! release) and [`CameraHost`](crate::follow::CameraHost) (issue a scroll
//! request, sample the target's position). A DOM backend, a test fake, or
//! a native toolkit all fit behind them.
//!
//! ## Example
//!
//! ```
//! use kurbo::Vec2;
//! use stagelight_director::director::{Director, NoHooks};
//! use stagelight_director::follow::{CameraHost, FollowStatus};
//! use stagelight_director::options::{SceneOptions, ScrollIntoViewOptions};
//! use stagelight_director::scroll_lock::ScrollHost;
//!
//! // A stand-in page: scroll state plus a target that is already in view.
//! #[derive(Default)]
//! struct Page {
//!     offset: Vec2,
//!     pinned: bool,
//! }
//!
//! impl ScrollHost for Page {
//!     fn scroll_offset(&self) -> Vec2 { self.offset }
//!     fn pin(&mut self, _offset: Vec2) { self.pinned = true; }
//!     fn release(&mut self, restore: Vec2) { self.pinned = false; self.offset = restore; }
//! }
//!
//! impl CameraHost for Page {
//!     fn scroll_into_view(&mut self, _options: &ScrollIntoViewOptions) {}
//!     fn sample_top(&self) -> Option<f64> { Some(24.0) }
//! }
//!
//! let mut director: Director<u32> = Director::new();
//! director.register_scene("intro", 0, 7).unwrap();
//! director.start("intro", None).unwrap();
//!
//! let mut page = Page::default();
//! let mut hooks = NoHooks;
//! director.begin_scene(&mut page, &mut hooks, &SceneOptions::default());
//! while director.scene_frame(&mut page, &mut hooks) == Some(FollowStatus::Pending) {}
//!
//! // Settled: the page is pinned again (camera_fix_after_follow default).
//! assert!(director.is_scroll_locked());
//! director.cut(&mut page, &mut hooks);
//! assert!(!director.is_scroll_locked());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod director;
pub mod follow;
pub mod options;
pub mod scroll_lock;
