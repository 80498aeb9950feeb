// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour store basics.
//!
//! Registers a sparse act, starts it, and walks the scenes while printing
//! the derived view a callout would render from.
//!
//! Run:
//! - `cargo run -p stagelight_demos --example tour_basics`

use stagelight_act::store::TourStore;

fn print_view(store: &TourStore<&'static str>) {
    let v = store.view();
    match (v.act_name.as_deref(), v.scene, v.rank) {
        (Some(act), Some(scene), Some(rank)) => {
            println!(
                "act {act:?} scene {scene} ({}/{}) target={:?} prev={} next={}",
                rank + 1,
                v.total,
                store.current_target(),
                v.has_prev,
                v.has_next,
            );
        }
        _ => println!("idle"),
    }
}

fn main() {
    let mut store: TourStore<&'static str> = TourStore::new();

    // Scene ids are caller-chosen and sparse on purpose.
    store.register_scene("onboarding", 0, "#search-box").unwrap();
    store.register_scene("onboarding", 2, "#filters").unwrap();
    store.register_scene("onboarding", 5, "#profile-menu").unwrap();

    println!("== start (defaults to the smallest id) ==");
    store.start("onboarding", None).unwrap();
    print_view(&store);

    println!("== next / next ==");
    store.next().unwrap();
    print_view(&store);
    store.next().unwrap();
    print_view(&store);

    println!("== next past the edge ==");
    match store.next() {
        Ok(id) => println!("unexpected: moved to {id}"),
        Err(e) => println!("rejected: {e}"),
    }
    print_view(&store);

    println!("== jump back to scene 0 ==");
    store.jump_to(0).unwrap();
    print_view(&store);

    println!("== end ==");
    store.end();
    print_view(&store);
}
