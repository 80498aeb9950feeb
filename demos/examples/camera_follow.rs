// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera follow with a simulated page.
//!
//! Drives a full scene activation: the director pins the page, issues the
//! scroll request, pumps frames until the smooth scroll settles, then
//! re-pins (fix-after-follow) and fires `on_activated`.
//!
//! Run:
//! - `cargo run -p stagelight_demos --example camera_follow`

use kurbo::Vec2;
use stagelight_act::types::SceneView;
use stagelight_director::director::{Director, TourHooks};
use stagelight_director::follow::{CameraHost, FollowStatus};
use stagelight_director::options::{SceneOptions, ScrollIntoViewOptions};
use stagelight_director::scroll_lock::ScrollHost;

/// A pretend page: one target at a fixed document position, a scroll
/// offset that eases toward it once a scroll is requested.
struct Page {
    scroll_y: f64,
    goal_y: f64,
    animating: bool,
    target_document_top: f64,
}

impl Page {
    fn tick(&mut self) {
        if !self.animating {
            return;
        }
        let delta = self.goal_y - self.scroll_y;
        if delta.abs() < 1.0 {
            self.scroll_y = self.goal_y;
            self.animating = false;
        } else {
            // Ease out, the way smooth scrolling behaves.
            self.scroll_y += delta * 0.3;
        }
    }
}

impl ScrollHost for Page {
    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.scroll_y)
    }
    fn pin(&mut self, offset: Vec2) {
        println!("page: pinned at y={:.0}", offset.y);
    }
    fn release(&mut self, restore: Vec2) {
        println!("page: released, back to y={:.0}", restore.y);
        self.scroll_y = restore.y;
    }
}

impl CameraHost for Page {
    fn scroll_into_view(&mut self, options: &ScrollIntoViewOptions) {
        println!("page: scroll request ({:?})", options.behavior);
        self.goal_y = self.target_document_top - 24.0;
        self.animating = true;
    }
    fn sample_top(&self) -> Option<f64> {
        Some((self.target_document_top - self.scroll_y).round())
    }
}

struct PrintHooks;

impl TourHooks for PrintHooks {
    fn on_activated(&mut self, view: &SceneView) {
        println!(
            "hook: activated scene {:?} of {:?}",
            view.scene, view.act_name
        );
    }
}

fn main() {
    let mut director: Director<&'static str> = Director::new();
    director.register_scene("checkout", 1, "#pay-button").unwrap();
    director.start("checkout", None).unwrap();

    let mut page = Page {
        scroll_y: 0.0,
        goal_y: 0.0,
        animating: false,
        target_document_top: 1800.0,
    };
    let mut hooks = PrintHooks;

    let handle = director.begin_scene(&mut page, &mut hooks, &SceneOptions::default());
    assert!(handle.is_some(), "camera follow is on by default");

    let mut frames = 0;
    loop {
        page.tick();
        match director.scene_frame(&mut page, &mut hooks) {
            Some(FollowStatus::Pending) => frames += 1,
            Some(status) => {
                println!("follow finished after {frames} frames: {status:?}");
                break;
            }
            None => break,
        }
    }

    println!("scroll locked after follow: {}", director.is_scroll_locked());
    director.cut(&mut page, &mut PrintHooks);
    println!("scroll locked after cut: {}", director.is_scroll_locked());
}
