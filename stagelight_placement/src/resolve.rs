// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution.
//!
//! ## Overview
//!
//! Walks the preferred side's fallback order and returns the first side
//! whose callout fits the viewport. Two classes of elimination apply:
//!
//! - Per-side overflow: the callout itself would cross a viewport edge on
//!   that side.
//! - Off-screen target: a target that is vertically out of the viewport
//!   eliminates `Left`/`Right` entirely (a callout beside an invisible
//!   target is meaningless), and a horizontally out-of-bounds target
//!   eliminates `Top`/`Bottom` symmetrically.
//!
//! When every candidate is eliminated the preferred side is returned; the
//! resolver never reports "no placement".

use kurbo::{Rect, Size};

use crate::types::Side;

/// Pick the side of `target` to place a callout of size `callout` on.
///
/// Pure and memory-free; re-evaluate whenever `target` or `viewport`
/// change. `target` is in viewport coordinates (the viewport spans
/// `(0, 0)` to `(viewport.width, viewport.height)`).
pub fn resolve_placement(preferred: Side, target: Rect, callout: Size, viewport: Size) -> Side {
    let overflows = |side: Side| match side {
        Side::Bottom => target.y1 + callout.height > viewport.height,
        Side::Top => target.y0 - callout.height < 0.0,
        Side::Left => target.x0 - callout.width < 0.0,
        Side::Right => target.x1 + callout.width > viewport.width,
    };
    let target_off_vertical = target.y0 < 0.0 || target.y1 > viewport.height;
    let target_off_horizontal = target.x0 < 0.0 || target.x1 > viewport.width;

    let eliminated = |side: Side| {
        overflows(side)
            || if side.is_horizontal() {
                target_off_vertical
            } else {
                target_off_horizontal
            }
    };

    preferred
        .fallback_order()
        .into_iter()
        .find(|side| !eliminated(*side))
        .unwrap_or(preferred)
}
