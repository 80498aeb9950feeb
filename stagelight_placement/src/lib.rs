// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagelight_placement --heading-base-level=0

//! Stagelight Placement: viewport-aware callout placement.
//!
//! ## Overview
//!
//! Given the highlighted target's bounds, the callout box's size, and the
//! viewport size, [`resolve_placement`] picks which of the four sides the
//! callout should sit on. The caller's preferred side goes first; sides
//! whose callout would overflow the viewport are eliminated; the first
//! survivor wins, and when everything is eliminated the preferred side is
//! returned anyway (there is always *a* placement).
//!
//! The function is pure and has no memory. Bounds change every frame while
//! the page scrolls or the window resizes, so call it fresh each time —
//! it is not a state machine.
//!
//! [`anchor::callout_anchor`] complements the resolver with a static table
//! of per-edge offsets for every (side, align) pair, and
//! [`anchor::callout_origin`] turns one of those entries into a concrete
//! top-left point for hosts that position in absolute coordinates.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use stagelight_placement::resolve::resolve_placement;
//! use stagelight_placement::types::Side;
//!
//! let viewport = Size::new(1280.0, 720.0);
//! let callout = Size::new(300.0, 160.0);
//!
//! // Room below: the preferred side is kept.
//! let target = Rect::new(100.0, 100.0, 300.0, 200.0);
//! assert_eq!(
//!     resolve_placement(Side::Bottom, target, callout, viewport),
//!     Side::Bottom,
//! );
//!
//! // Target pinned to the bottom edge: fall back to the next candidate.
//! let pinned = Rect::new(100.0, 620.0, 300.0, 720.0);
//! assert_eq!(
//!     resolve_placement(Side::Bottom, pinned, callout, viewport),
//!     Side::Top,
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod anchor;
pub mod resolve;
pub mod types;
