// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store implementation.
//!
//! ## Overview
//!
//! [`TourStore`] owns the registration table (act name → sparse scene map)
//! and the cursor (active act + active scene + focus). All operations are
//! synchronous and atomic; derived quantities (rank, totals, neighbor
//! availability) are computed on demand and never stored.
//!
//! ## Cursor consistency
//!
//! The cursor is either wholly absent or references a registered slot in a
//! registered act. Operations that would break that — unregistering the
//! active slot, navigating past either edge — fail with a typed
//! [`TourError`] and leave the store untouched.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Bound;

use crate::types::{Focus, SceneView, TourError};

/// The active cursor: one act, one scene, plus visual focus.
#[derive(Clone, Debug)]
struct Cursor {
    act: String,
    scene: i32,
    focus: Focus,
}

/// Shared tour state: registration table plus the single active cursor.
///
/// `T` is the host's target handle for a scene (a node id, an element key).
/// The store treats it as opaque; it is handed back through
/// [`TourStore::current_target`] so the renderer can find the element to
/// highlight.
///
/// ## Usage
///
/// - Renderers call [`TourStore::register_scene`] /
///   [`TourStore::unregister_scene`] as scene UI mounts and unmounts.
/// - Host code drives [`TourStore::start`], [`TourStore::next`],
///   [`TourStore::prev`], [`TourStore::jump_to`], and [`TourStore::end`].
/// - Navigation moves by rank within the ascending registered-id list; ids
///   may be sparse and non-contiguous.
#[derive(Clone, Debug)]
pub struct TourStore<T> {
    acts: BTreeMap<String, BTreeMap<i32, T>>,
    cursor: Option<Cursor>,
}

impl<T> Default for TourStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TourStore<T> {
    /// Create an empty store with no acts and no cursor.
    pub const fn new() -> Self {
        Self {
            acts: BTreeMap::new(),
            cursor: None,
        }
    }

    /// Register (or overwrite) the scene slot `id` of `act`.
    ///
    /// Creates the act's table on first use. Last registration wins. The
    /// cursor is never affected, even when the active slot is overwritten.
    ///
    /// Fails with [`TourError::InvalidSceneId`] when `id` is negative.
    pub fn register_scene(&mut self, act: &str, id: i32, target: T) -> Result<(), TourError> {
        if id < 0 {
            return Err(TourError::InvalidSceneId);
        }
        self.acts.entry(act.to_string()).or_default().insert(id, target);
        Ok(())
    }

    /// Clear the scene slot `id` of `act`, keeping all other ids intact.
    ///
    /// Unknown acts and empty slots are an `Ok` no-op, so unmount order
    /// does not matter. Fails with [`TourError::CannotRemoveActiveScene`]
    /// when `(act, id)` is the active scene; callers must `end` or navigate
    /// away first.
    pub fn unregister_scene(&mut self, act: &str, id: i32) -> Result<(), TourError> {
        if let Some(cursor) = &self.cursor
            && cursor.act == act
            && cursor.scene == id
        {
            return Err(TourError::CannotRemoveActiveScene);
        }
        if let Some(table) = self.acts.get_mut(act) {
            table.remove(&id);
        }
        Ok(())
    }

    /// Start the act `act`, optionally at an explicit scene id.
    ///
    /// Without an explicit id the smallest registered id is chosen. On
    /// success the cursor is set with [`Focus::Settling`] and the chosen id
    /// is returned.
    ///
    /// Fails with [`TourError::AlreadyInTour`] when any act is running,
    /// [`TourError::NoScenesInAct`] when `act` has no registered slots, and
    /// [`TourError::SceneNotFound`] when the explicit id is unregistered.
    pub fn start(&mut self, act: &str, scene: Option<i32>) -> Result<i32, TourError> {
        if self.cursor.is_some() {
            return Err(TourError::AlreadyInTour);
        }
        let table = self
            .acts
            .get(act)
            .filter(|t| !t.is_empty())
            .ok_or(TourError::NoScenesInAct)?;
        let id = match scene {
            Some(id) => {
                if !table.contains_key(&id) {
                    return Err(TourError::SceneNotFound);
                }
                id
            }
            None => table.keys().next().copied().ok_or(TourError::NoScenesInAct)?,
        };
        self.cursor = Some(Cursor {
            act: act.to_string(),
            scene: id,
            focus: Focus::Settling,
        });
        Ok(id)
    }

    /// Clear the cursor. Idempotent; registrations are untouched.
    pub fn end(&mut self) {
        self.cursor = None;
    }

    /// Advance to the registered id one rank above the current one.
    ///
    /// Fails with [`TourError::NotInTour`] when idle and
    /// [`TourError::NoAdjacentScene`] at the top edge; the cursor is
    /// unchanged on failure.
    pub fn next(&mut self) -> Result<i32, TourError> {
        let id = {
            let (table, cursor) = self.active_parts()?;
            table
                .range((Bound::Excluded(cursor.scene), Bound::Unbounded))
                .next()
                .map(|(id, _)| *id)
                .ok_or(TourError::NoAdjacentScene)?
        };
        self.move_cursor(id);
        Ok(id)
    }

    /// Step back to the registered id one rank below the current one.
    ///
    /// Symmetric to [`TourStore::next`].
    pub fn prev(&mut self) -> Result<i32, TourError> {
        let id = {
            let (table, cursor) = self.active_parts()?;
            table
                .range((Bound::Unbounded, Bound::Excluded(cursor.scene)))
                .next_back()
                .map(|(id, _)| *id)
                .ok_or(TourError::NoAdjacentScene)?
        };
        self.move_cursor(id);
        Ok(id)
    }

    /// Set the cursor directly to a registered id of the active act.
    ///
    /// Fails with [`TourError::NotInTour`] when idle and
    /// [`TourError::SceneNotFound`] when `id` is unregistered.
    pub fn jump_to(&mut self, id: i32) -> Result<(), TourError> {
        {
            let (table, _) = self.active_parts()?;
            if !table.contains_key(&id) {
                return Err(TourError::SceneNotFound);
            }
        }
        self.move_cursor(id);
        Ok(())
    }

    /// Renderer-reported event: the highlight finished its visual
    /// transition. Moves focus from [`Focus::Settling`] to
    /// [`Focus::Anchored`]; a no-op when idle or already anchored.
    pub fn transition_complete(&mut self) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.focus = Focus::Anchored;
        }
    }

    /// Name of the running act, if any.
    pub fn current_act_name(&self) -> Option<&str> {
        self.cursor.as_ref().map(|c| c.act.as_str())
    }

    /// Active scene id, if any.
    pub fn current_scene(&self) -> Option<i32> {
        self.cursor.as_ref().map(|c| c.scene)
    }

    /// Target handle of the active scene, if any.
    pub fn current_target(&self) -> Option<&T> {
        let cursor = self.cursor.as_ref()?;
        self.acts.get(&cursor.act)?.get(&cursor.scene)
    }

    /// Visual focus of the cursor, or `None` when idle.
    pub fn focus(&self) -> Option<Focus> {
        self.cursor.as_ref().map(|c| c.focus)
    }

    /// Whether any act is running.
    pub fn is_in_tour(&self) -> bool {
        self.cursor.is_some()
    }

    /// Registered scene ids of the active act, ascending. Empty when idle.
    pub fn scene_ids(&self) -> Vec<i32> {
        match self.active_parts() {
            Ok((table, _)) => table.keys().copied().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Rank of the active scene within [`TourStore::scene_ids`], or `None`
    /// when idle.
    pub fn current_rank(&self) -> Option<usize> {
        let (table, cursor) = self.active_parts().ok()?;
        table.keys().position(|id| *id == cursor.scene)
    }

    /// Number of registered scenes in the active act. Zero when idle.
    pub fn total_count(&self) -> usize {
        self.active_parts().map_or(0, |(table, _)| table.len())
    }

    /// Whether a scene exists at a lower rank than the active one.
    pub fn has_prev(&self) -> bool {
        self.current_rank().is_some_and(|rank| rank >= 1)
    }

    /// Whether a scene exists at a higher rank than the active one.
    pub fn has_next(&self) -> bool {
        self.current_rank()
            .is_some_and(|rank| rank + 1 < self.total_count())
    }

    /// Snapshot the derived view for hooks and callout footers.
    pub fn view(&self) -> SceneView {
        SceneView {
            act_name: self.current_act_name().map(ToString::to_string),
            scene: self.current_scene(),
            scene_ids: self.scene_ids(),
            rank: self.current_rank(),
            total: self.total_count(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    /// Number of registered scenes in `act`, whether or not it is running.
    pub fn registered_count(&self, act: &str) -> usize {
        self.acts.get(act).map_or(0, BTreeMap::len)
    }

    /// Whether `(act, id)` currently holds a registration.
    pub fn is_registered(&self, act: &str, id: i32) -> bool {
        self.acts.get(act).is_some_and(|t| t.contains_key(&id))
    }

    // The active act's table plus the cursor, or NotInTour. The table is
    // present whenever the cursor is: acts are created on registration and
    // never removed, and the cursor only ever points at a registered slot.
    fn active_parts(&self) -> Result<(&BTreeMap<i32, T>, &Cursor), TourError> {
        let cursor = self.cursor.as_ref().ok_or(TourError::NotInTour)?;
        let table = self.acts.get(&cursor.act).ok_or(TourError::NotInTour)?;
        Ok((table, cursor))
    }

    fn move_cursor(&mut self, id: i32) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.scene = id;
            cursor.focus = Focus::Settling;
        }
    }
}
