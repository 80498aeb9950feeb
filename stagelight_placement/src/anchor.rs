// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static anchor offsets for every (side, align) pair.
//!
//! ## Overview
//!
//! Once a side is resolved, positioning the callout is a fixed lookup, not
//! a computation. [`callout_anchor`] returns the per-edge insets (expressed
//! as fractions of the target box, CSS-percentage style) plus a fractional
//! self-translation, and [`callout_origin`] applies the same data to
//! produce an absolute top-left point.

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{Align, Side};

/// Anchor description for one (side, align) pair.
///
/// Edge fields are fractions of the target box measured from the matching
/// target edge (`1.0` reads as the CSS `100%`); `None` leaves that edge
/// unconstrained. `translate` shifts the callout by fractions of its own
/// size, the way `transform: translate(-50%, 0)` does.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CalloutAnchor {
    /// Inset from the target's top edge.
    pub top: Option<f64>,
    /// Inset from the target's bottom edge.
    pub bottom: Option<f64>,
    /// Inset from the target's left edge.
    pub left: Option<f64>,
    /// Inset from the target's right edge.
    pub right: Option<f64>,
    /// Self-relative translation applied after edge placement.
    pub translate: Vec2,
}

/// Look up the anchor description for `side` and `align`.
///
/// This mapping is static data; it never depends on runtime bounds.
pub const fn callout_anchor(side: Side, align: Align) -> CalloutAnchor {
    let none = CalloutAnchor {
        top: None,
        bottom: None,
        left: None,
        right: None,
        translate: Vec2::new(0.0, 0.0),
    };
    match side {
        Side::Top => {
            let base = CalloutAnchor {
                bottom: Some(1.0),
                ..none
            };
            match align {
                Align::Start => CalloutAnchor {
                    left: Some(0.0),
                    ..base
                },
                Align::Center => CalloutAnchor {
                    left: Some(0.5),
                    translate: Vec2::new(-0.5, 0.0),
                    ..base
                },
                Align::End => CalloutAnchor {
                    right: Some(0.0),
                    ..base
                },
            }
        }
        Side::Bottom => {
            let base = CalloutAnchor {
                top: Some(1.0),
                ..none
            };
            match align {
                Align::Start => CalloutAnchor {
                    left: Some(0.0),
                    ..base
                },
                Align::Center => CalloutAnchor {
                    left: Some(0.5),
                    translate: Vec2::new(-0.5, 0.0),
                    ..base
                },
                Align::End => CalloutAnchor {
                    right: Some(0.0),
                    ..base
                },
            }
        }
        Side::Left => {
            let base = CalloutAnchor {
                right: Some(1.0),
                ..none
            };
            match align {
                Align::Start => CalloutAnchor {
                    top: Some(0.0),
                    ..base
                },
                Align::Center => CalloutAnchor {
                    top: Some(0.5),
                    translate: Vec2::new(0.0, -0.5),
                    ..base
                },
                Align::End => CalloutAnchor {
                    bottom: Some(0.0),
                    ..base
                },
            }
        }
        Side::Right => {
            let base = CalloutAnchor {
                left: Some(1.0),
                ..none
            };
            match align {
                Align::Start => CalloutAnchor {
                    top: Some(0.0),
                    ..base
                },
                Align::Center => CalloutAnchor {
                    top: Some(0.5),
                    translate: Vec2::new(0.0, -0.5),
                    ..base
                },
                Align::End => CalloutAnchor {
                    bottom: Some(0.0),
                    ..base
                },
            }
        }
    }
}

/// Compute the absolute top-left corner of a callout.
///
/// Applies the same placement the anchor table describes, with `gap`
/// separating the callout from the target box. Convenient for hosts that
/// position overlays in absolute coordinates instead of edge insets.
pub fn callout_origin(side: Side, align: Align, target: Rect, callout: Size, gap: f64) -> Point {
    let along_x = match align {
        Align::Start => target.x0,
        Align::Center => target.x0 + (target.width() - callout.width) / 2.0,
        Align::End => target.x1 - callout.width,
    };
    let along_y = match align {
        Align::Start => target.y0,
        Align::Center => target.y0 + (target.height() - callout.height) / 2.0,
        Align::End => target.y1 - callout.height,
    };
    match side {
        Side::Top => Point::new(along_x, target.y0 - gap - callout.height),
        Side::Bottom => Point::new(along_x, target.y1 + gap),
        Side::Left => Point::new(target.x0 - gap - callout.width, along_y),
        Side::Right => Point::new(target.x1 + gap, along_y),
    }
}
