// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the act store: errors, focus sub-state, and view snapshots.

use alloc::string::String;
use alloc::vec::Vec;

/// Failure of a single tour operation.
///
/// All variants are local, recoverable conditions surfaced to the caller;
/// nothing here is fatal to the host. Returned by the operations on
/// [`TourStore`](crate::store::TourStore).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TourError {
    /// A negative scene id was supplied to a registration.
    InvalidSceneId,
    /// `start` was called while an act is already running.
    AlreadyInTour,
    /// `start` was called on an act with no registered scenes.
    NoScenesInAct,
    /// The requested scene id is not registered in the active (or named) act.
    SceneNotFound,
    /// A navigation operation was called while no act is running.
    NotInTour,
    /// `next`/`prev` has no registered neighbor in that direction.
    NoAdjacentScene,
    /// The scene being unregistered is the currently active one.
    CannotRemoveActiveScene,
}

impl core::fmt::Display for TourError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidSceneId => "scene id must be non-negative",
            Self::AlreadyInTour => "an act is already in tour",
            Self::NoScenesInAct => "no scenes registered in act",
            Self::SceneNotFound => "no such scene in act",
            Self::NotInTour => "no act in tour",
            Self::NoAdjacentScene => "no adjacent scene",
            Self::CannotRemoveActiveScene => "cannot remove the active scene",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for TourError {}

/// Whether the highlight visually rests on the active target.
///
/// `Settling` is entered by every cursor move (`start`, `next`, `prev`,
/// `jump_to`); the renderer reports the end of its transition through
/// [`TourStore::transition_complete`](crate::store::TourStore::transition_complete),
/// which moves the cursor to `Anchored`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    /// The highlight is mid-transition toward the new target.
    #[default]
    Settling,
    /// The highlight rests on the active target.
    Anchored,
}

/// Snapshot of the derived view of the store at one instant.
///
/// This is what lifecycle hooks receive: everything a callout needs to
/// render its "3 / 7" footer and enable/disable its navigation buttons.
/// Computed by [`TourStore::view`](crate::store::TourStore::view); never
/// stored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SceneView {
    /// Name of the running act, if any.
    pub act_name: Option<String>,
    /// Active scene id, if any.
    pub scene: Option<i32>,
    /// Registered scene ids of the active act, ascending.
    pub scene_ids: Vec<i32>,
    /// Position of the active scene among `scene_ids`, or `None` when idle.
    pub rank: Option<usize>,
    /// Number of registered scenes in the active act.
    pub total: usize,
    /// Whether a scene exists at a lower rank.
    pub has_prev: bool,
    /// Whether a scene exists at a higher rank.
    pub has_next: bool,
}
