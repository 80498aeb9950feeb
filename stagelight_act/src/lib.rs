// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stagelight_act --heading-base-level=0

//! Stagelight Act: the tour state machine.
//!
//! ## Overview
//!
//! This crate tracks which guided tour ("act") is running and which step
//! ("scene") is current. It owns no rendering and touches no platform APIs:
//! scenes register an opaque target handle `T` (a DOM node id, a widget key,
//! whatever the host picks), and the store answers derived queries that a
//! renderer consumes.
//!
//! - Acts are named; scenes are sparse, caller-chosen non-negative ids.
//! - Navigation moves by *rank* — the position within the ascending list of
//!   registered ids — so ids `{1, 5, 9}` step `1 → 5 → 9`, never `5 → 6`.
//! - Exactly one act can run at a time; starting a second fails with
//!   [`TourError::AlreadyInTour`].
//! - Every failure is a typed [`TourError`]; no operation silently no-ops
//!   when its preconditions do not hold.
//!
//! ## Focus
//!
//! While the highlight travels between targets, the cursor carries
//! [`Focus::Settling`]; once the renderer reports the visual transition done
//! via [`TourStore::transition_complete`], it rests at [`Focus::Anchored`].
//! Every navigation re-enters `Settling`.
//!
//! ## Example
//!
//! ```
//! use stagelight_act::store::TourStore;
//! use stagelight_act::types::TourError;
//!
//! // Targets are host handles; plain integers work fine for tests.
//! let mut store: TourStore<u32> = TourStore::new();
//! store.register_scene("intro", 0, 100).unwrap();
//! store.register_scene("intro", 2, 102).unwrap();
//! store.register_scene("intro", 5, 105).unwrap();
//!
//! // Default entry point is the smallest registered id.
//! assert_eq!(store.start("intro", None), Ok(0));
//! assert_eq!(store.next(), Ok(2));
//! assert_eq!(store.next(), Ok(5));
//! assert_eq!(store.next(), Err(TourError::NoAdjacentScene));
//! assert_eq!(store.current_scene(), Some(5));
//!
//! store.end();
//! assert!(store.current_act_name().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod store;
pub mod types;
