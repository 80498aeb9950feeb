// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement fallback near viewport edges.
//!
//! Shows how the resolver walks the fallback order as the target nears the
//! edges of the viewport, and where the callout's top-left corner lands.
//!
//! Run:
//! - `cargo run -p stagelight_demos --example placement_fallback`

use kurbo::{Rect, Size};
use stagelight_placement::anchor::callout_origin;
use stagelight_placement::resolve::resolve_placement;
use stagelight_placement::types::{Align, Side};

fn main() {
    let viewport = Size::new(1280.0, 720.0);
    let callout = Size::new(300.0, 160.0);

    let cases = [
        ("center of the page", Rect::new(490.0, 280.0, 790.0, 440.0)),
        ("pinned to the bottom", Rect::new(490.0, 620.0, 790.0, 720.0)),
        ("pinned to the top", Rect::new(490.0, 0.0, 790.0, 100.0)),
        ("top-left corner", Rect::new(10.0, 10.0, 210.0, 110.0)),
        ("half below the fold", Rect::new(490.0, 600.0, 790.0, 800.0)),
        ("wider than the viewport", Rect::new(-10.0, 280.0, 1290.0, 440.0)),
    ];

    for (label, target) in cases {
        println!("-- {label} --");
        for preferred in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let got = resolve_placement(preferred, target, callout, viewport);
            let origin = callout_origin(got, Align::Center, target, callout, 10.0);
            let note = if got == preferred { "" } else { "  (fallback)" };
            println!("  prefer {preferred:?}: place {got:?} at ({:.0}, {:.0}){note}", origin.x, origin.y);
        }
    }
}
