// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Director implementation.
//!
//! ## Overview
//!
//! [`Director`] ties the pieces together for a host renderer: it owns the
//! [`TourStore`], the page-wide [`ScrollLock`], the global option layer,
//! and the in-flight camera follow. Hosts drive it from their event loop:
//!
//! 1. Register scenes as their UI mounts, [`Director::start`] an act.
//! 2. When the active scene's spotlight mounts, call
//!    [`Director::begin_scene`] with the scene's local options; while it
//!    returns a follow, pump [`Director::scene_frame`] once per display
//!    frame.
//! 3. Ask [`Director::placement`] where the callout goes whenever bounds
//!    change, and forward viewport resizes to [`Director::on_resize`].
//! 4. End the tour through [`Director::cut`], which runs the cut hooks
//!    around clearing the cursor and releases the scroll lock.
//!
//! Lifecycle hooks run synchronously and in order: `on_before_cut`
//! completes before the cursor clears, and `on_after_cut` completes before
//! `cut` returns.

use kurbo::{Rect, Size};

use stagelight_act::store::TourStore;
use stagelight_act::types::{SceneView, TourError};
use stagelight_placement::resolve::resolve_placement;
use stagelight_placement::types::Side;

use crate::follow::{CameraHost, FollowHandle, FollowScroll, FollowStatus};
use crate::options::{ResolvedOptions, SceneOptions};
use crate::scroll_lock::{ScrollHost, ScrollLock};

/// Tour lifecycle hooks.
///
/// All methods default to no-ops; implement the ones you need. Each hook
/// receives a [`SceneView`] snapshot taken at the instant it fires.
pub trait TourHooks {
    /// Fires before `cut` clears the cursor; the view still shows the tour.
    fn on_before_cut(&mut self, view: &SceneView) {
        let _ = view;
    }
    /// Fires after `cut` cleared the cursor and released the scroll lock.
    fn on_after_cut(&mut self, view: &SceneView) {
        let _ = view;
    }
    /// Fires once a scene's camera move is over and the scene is in place.
    fn on_activated(&mut self, view: &SceneView) {
        let _ = view;
    }
    /// Fires when the active scene's spotlight leaves the stage.
    fn on_deactivated(&mut self, view: &SceneView) {
        let _ = view;
    }
}

/// Hooks that do nothing; the default for hosts without callbacks.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHooks;

impl TourHooks for NoHooks {}

/// The coordination layer between the tour store and a host renderer.
///
/// Create exactly one per page at application start and share it with
/// every consumer; the scroll lock it owns is meaningful only as a
/// singleton.
#[derive(Debug)]
pub struct Director<T> {
    store: TourStore<T>,
    lock: ScrollLock,
    global: SceneOptions,
    active: ResolvedOptions,
    follow: Option<FollowScroll>,
}

impl<T> Default for Director<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Director<T> {
    /// Create a director with no global option overrides.
    pub fn new() -> Self {
        Self::with_global(SceneOptions::default())
    }

    /// Create a director with a global option layer applied to every scene.
    pub fn with_global(global: SceneOptions) -> Self {
        Self {
            store: TourStore::new(),
            lock: ScrollLock::new(),
            global,
            active: ResolvedOptions::default(),
            follow: None,
        }
    }

    /// Read access to the underlying store for derived queries.
    pub fn store(&self) -> &TourStore<T> {
        &self.store
    }

    /// The options the active scene runs with (defaults when idle).
    pub fn active_options(&self) -> &ResolvedOptions {
        &self.active
    }

    /// Whether the page scroll is currently pinned.
    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Resolve `local` over the global layer and the defaults.
    pub fn resolve_options(&self, local: &SceneOptions) -> ResolvedOptions {
        ResolvedOptions::layered(&[&self.global, local])
    }

    /// Register (or overwrite) a scene slot. See
    /// [`TourStore::register_scene`].
    pub fn register_scene(&mut self, act: &str, id: i32, target: T) -> Result<(), TourError> {
        self.store.register_scene(act, id, target)
    }

    /// Clear a scene slot. See [`TourStore::unregister_scene`].
    pub fn unregister_scene(&mut self, act: &str, id: i32) -> Result<(), TourError> {
        self.store.unregister_scene(act, id)
    }

    /// Start an act. See [`TourStore::start`].
    pub fn start(&mut self, act: &str, scene: Option<i32>) -> Result<i32, TourError> {
        self.store.start(act, scene)
    }

    /// Advance one rank. Abandons any in-flight camera follow.
    pub fn next(&mut self) -> Result<i32, TourError> {
        let id = self.store.next()?;
        self.follow = None;
        Ok(id)
    }

    /// Step back one rank. Abandons any in-flight camera follow.
    pub fn prev(&mut self) -> Result<i32, TourError> {
        let id = self.store.prev()?;
        self.follow = None;
        Ok(id)
    }

    /// Jump to a registered scene id. Abandons any in-flight camera follow.
    pub fn jump_to(&mut self, id: i32) -> Result<(), TourError> {
        self.store.jump_to(id)?;
        self.follow = None;
        Ok(())
    }

    /// Renderer-reported event: the highlight transition finished.
    pub fn transition_complete(&mut self) {
        self.store.transition_complete();
    }

    /// End the tour, running the cut hooks around the cursor clear.
    ///
    /// `on_before_cut` sees the still-running view; the cursor then clears,
    /// the scroll lock releases, and `on_after_cut` sees the idle view.
    /// Idempotent like [`TourStore::end`].
    pub fn cut<H: ScrollHost, K: TourHooks>(&mut self, host: &mut H, hooks: &mut K) {
        let before = self.store.view();
        hooks.on_before_cut(&before);
        self.store.end();
        self.follow = None;
        self.lock.unlock(host);
        let after = self.store.view();
        hooks.on_after_cut(&after);
    }

    /// Activate the current scene's camera behavior.
    ///
    /// Called by the renderer when the active scene's spotlight mounts.
    /// Releases any lock left over from the previous scene, resolves
    /// `local` options, and — when camera follow is enabled — pins the
    /// page and starts the follow, returning its cancellation handle for
    /// the scene to keep. Without a follow the scene activates at once.
    pub fn begin_scene<H, K>(
        &mut self,
        host: &mut H,
        hooks: &mut K,
        local: &SceneOptions,
    ) -> Option<FollowHandle>
    where
        H: ScrollHost + CameraHost,
        K: TourHooks,
    {
        self.lock.unlock(host);
        self.active = self.resolve_options(local);
        if self.active.camera_follow {
            self.lock.lock(host);
            let follow = FollowScroll::begin(host, &self.active.camera_follow_options);
            let handle = follow.handle();
            self.follow = Some(follow);
            Some(handle)
        } else {
            if self.active.camera_fix_after_follow {
                self.lock.lock(host);
            }
            hooks.on_activated(&self.store.view());
            None
        }
    }

    /// Pump the in-flight camera follow by one display frame.
    ///
    /// Returns `None` when no follow is running. On settlement the lock is
    /// released, optionally re-pinned (`camera_fix_after_follow`), and
    /// `on_activated` fires. A cancelled follow just releases the lock.
    pub fn scene_frame<H, K>(&mut self, host: &mut H, hooks: &mut K) -> Option<FollowStatus>
    where
        H: ScrollHost + CameraHost,
        K: TourHooks,
    {
        let follow = self.follow.as_mut()?;
        let status = follow.on_frame(host);
        match status {
            FollowStatus::Pending => {}
            FollowStatus::Settled => {
                self.follow = None;
                if self.active.camera_fix_after_follow {
                    // Keep the page where the scroll left it; a later cut
                    // restores this offset, not the pre-follow one.
                    self.lock.repin_here(host);
                } else {
                    self.lock.release_here(host);
                }
                hooks.on_activated(&self.store.view());
            }
            FollowStatus::Cancelled => {
                self.follow = None;
                self.lock.release_here(host);
            }
        }
        Some(status)
    }

    /// Tear down the active scene's visuals.
    ///
    /// Abandons any in-flight follow and fires `on_deactivated`.
    pub fn deactivate<K: TourHooks>(&mut self, hooks: &mut K) {
        self.follow = None;
        hooks.on_deactivated(&self.store.view());
    }

    /// Forward a viewport resize; re-pins the scroll lock while locked.
    pub fn on_resize<H: ScrollHost>(&mut self, host: &mut H) {
        self.lock.on_resize(host);
    }

    /// Pick the callout side for the current bounds.
    ///
    /// Honors `voice_over_auto_placement`: when off, the preferred side is
    /// returned unresolved. Re-call whenever bounds change; the resolver
    /// has no memory.
    pub fn placement(&self, target: Rect, callout: Size, viewport: Size) -> Side {
        let preferred = self.active.voice_over_placement;
        if !self.active.voice_over_auto_placement {
            return preferred;
        }
        resolve_placement(preferred, target, callout, viewport)
    }

    /// The spotlight cutout for a target: its bounds grown by the padding.
    pub fn spotlight_rect(&self, target: Rect) -> Rect {
        let pad = self.active.spotlight_padding;
        target.inflate(pad, pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ScrollIntoViewOptions;
    use alloc::string::String;
    use alloc::vec::Vec;
    use kurbo::Vec2;

    #[derive(Debug, Default)]
    struct FakeStage {
        offset: Vec2,
        pins: Vec<Vec2>,
        releases: Vec<Vec2>,
        scroll_requests: usize,
        top: Option<f64>,
    }

    impl ScrollHost for FakeStage {
        fn scroll_offset(&self) -> Vec2 {
            self.offset
        }
        fn pin(&mut self, offset: Vec2) {
            self.pins.push(offset);
        }
        fn release(&mut self, restore: Vec2) {
            self.releases.push(restore);
            self.offset = restore;
        }
    }

    impl CameraHost for FakeStage {
        fn scroll_into_view(&mut self, _options: &ScrollIntoViewOptions) {
            self.scroll_requests += 1;
        }
        fn sample_top(&self) -> Option<f64> {
            self.top
        }
    }

    #[derive(Debug, Default)]
    struct Log {
        events: Vec<String>,
    }

    impl TourHooks for Log {
        fn on_before_cut(&mut self, view: &SceneView) {
            assert!(view.act_name.is_some(), "before-cut sees the running tour");
            self.events.push(String::from("before_cut"));
        }
        fn on_after_cut(&mut self, view: &SceneView) {
            assert!(view.act_name.is_none(), "after-cut sees the idle store");
            self.events.push(String::from("after_cut"));
        }
        fn on_activated(&mut self, _view: &SceneView) {
            self.events.push(String::from("activated"));
        }
        fn on_deactivated(&mut self, _view: &SceneView) {
            self.events.push(String::from("deactivated"));
        }
    }

    fn running_director() -> Director<u32> {
        let mut d: Director<u32> = Director::new();
        d.register_scene("intro", 0, 10).unwrap();
        d.register_scene("intro", 2, 12).unwrap();
        d.start("intro", None).unwrap();
        d
    }

    fn settle(d: &mut Director<u32>, stage: &mut FakeStage, hooks: &mut Log) {
        while d.scene_frame(stage, hooks) == Some(FollowStatus::Pending) {}
    }

    #[test]
    fn follow_locks_then_unlocks_and_activates() {
        let mut d = running_director();
        let mut stage = FakeStage {
            offset: Vec2::new(0.0, 300.0),
            top: Some(500.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();

        let local = SceneOptions {
            camera_fix_after_follow: Some(false),
            ..SceneOptions::default()
        };
        let handle = d.begin_scene(&mut stage, &mut hooks, &local);
        assert!(handle.is_some());
        assert!(d.is_scroll_locked());
        assert_eq!(stage.scroll_requests, 1);

        stage.top = Some(24.0);
        settle(&mut d, &mut stage, &mut hooks);
        assert!(!d.is_scroll_locked());
        assert_eq!(hooks.events, ["activated"]);
    }

    #[test]
    fn fix_after_follow_repins_at_settled_offset() {
        let mut d = running_director();
        let mut stage = FakeStage {
            offset: Vec2::new(0.0, 300.0),
            top: Some(24.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();

        d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        // Simulate the follow having moved the page before it settles.
        stage.offset = Vec2::new(0.0, 620.0);
        settle(&mut d, &mut stage, &mut hooks);

        assert!(d.is_scroll_locked());
        // The pin moved to the settled offset without a release in between.
        assert_eq!(stage.pins.last(), Some(&Vec2::new(0.0, 620.0)));
        assert!(stage.releases.is_empty());
        assert_eq!(hooks.events, ["activated"]);

        // A later cut restores the settled offset.
        d.cut(&mut stage, &mut hooks);
        assert_eq!(stage.releases, [Vec2::new(0.0, 620.0)]);
    }

    #[test]
    fn no_follow_activates_immediately() {
        let mut d = running_director();
        let mut stage = FakeStage::default();
        let mut hooks = Log::default();
        let local = SceneOptions {
            camera_follow: Some(false),
            camera_fix_after_follow: Some(false),
            ..SceneOptions::default()
        };
        let handle = d.begin_scene(&mut stage, &mut hooks, &local);
        assert!(handle.is_none());
        assert_eq!(stage.scroll_requests, 0);
        assert!(!d.is_scroll_locked());
        assert_eq!(hooks.events, ["activated"]);
        assert!(d.scene_frame(&mut stage, &mut hooks).is_none());
    }

    #[test]
    fn cancelled_follow_releases_lock_without_activation() {
        let mut d = running_director();
        let mut stage = FakeStage {
            top: Some(100.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();
        let handle = d
            .begin_scene(&mut stage, &mut hooks, &SceneOptions::default())
            .expect("follow expected");
        assert_eq!(
            d.scene_frame(&mut stage, &mut hooks),
            Some(FollowStatus::Pending)
        );
        handle.cancel();
        assert_eq!(
            d.scene_frame(&mut stage, &mut hooks),
            Some(FollowStatus::Cancelled)
        );
        assert!(!d.is_scroll_locked());
        assert!(hooks.events.is_empty());
        assert!(d.scene_frame(&mut stage, &mut hooks).is_none());
    }

    #[test]
    fn cut_runs_hooks_in_order_and_unlocks() {
        let mut d = running_director();
        let mut stage = FakeStage {
            top: Some(10.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();
        d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        assert!(d.is_scroll_locked());

        d.cut(&mut stage, &mut hooks);
        assert!(!d.is_scroll_locked());
        assert!(!d.store().is_in_tour());
        assert_eq!(hooks.events, ["before_cut", "after_cut"]);

        // Idempotent; hooks fire again but nothing breaks. The second
        // before-cut would see an idle view, so use fresh hooks.
        let mut second = NoHooks;
        d.cut(&mut stage, &mut second);
        assert!(!d.store().is_in_tour());
    }

    #[test]
    fn navigation_abandons_inflight_follow() {
        let mut d = running_director();
        let mut stage = FakeStage {
            top: Some(100.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();
        d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        assert_eq!(d.next(), Ok(2));
        assert!(d.scene_frame(&mut stage, &mut hooks).is_none());
    }

    #[test]
    fn placement_honors_auto_toggle() {
        let mut d = running_director();
        let mut stage = FakeStage::default();
        let mut hooks = Log::default();
        let viewport = Size::new(1280.0, 720.0);
        let callout = Size::new(300.0, 160.0);
        // Target pinned to the bottom edge: auto placement flips to Top.
        let target = Rect::new(490.0, 620.0, 790.0, 720.0);

        let local = SceneOptions {
            camera_follow: Some(false),
            camera_fix_after_follow: Some(false),
            ..SceneOptions::default()
        };
        d.begin_scene(&mut stage, &mut hooks, &local);
        assert_eq!(d.placement(target, callout, viewport), Side::Top);

        let fixed = SceneOptions {
            voice_over_auto_placement: Some(false),
            camera_follow: Some(false),
            camera_fix_after_follow: Some(false),
            ..SceneOptions::default()
        };
        d.begin_scene(&mut stage, &mut hooks, &fixed);
        assert_eq!(d.placement(target, callout, viewport), Side::Bottom);
    }

    #[test]
    fn spotlight_rect_grows_by_padding() {
        let d: Director<u32> = Director::new();
        let r = d.spotlight_rect(Rect::new(100.0, 100.0, 200.0, 150.0));
        assert_eq!(r, Rect::new(90.0, 90.0, 210.0, 160.0));
    }

    #[test]
    fn deactivate_fires_hook_and_drops_follow() {
        let mut d = running_director();
        let mut stage = FakeStage {
            top: Some(100.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();
        d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        d.deactivate(&mut hooks);
        assert_eq!(hooks.events, ["deactivated"]);
        assert!(d.scene_frame(&mut stage, &mut hooks).is_none());
    }

    #[test]
    fn resize_forwards_to_lock() {
        let mut d = running_director();
        let mut stage = FakeStage {
            offset: Vec2::new(0.0, 50.0),
            top: Some(100.0),
            ..FakeStage::default()
        };
        let mut hooks = Log::default();
        d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        stage.offset = Vec2::new(0.0, 80.0);
        d.on_resize(&mut stage);
        assert_eq!(stage.pins.last(), Some(&Vec2::new(0.0, 80.0)));
    }

    #[test]
    fn global_layer_applies_to_every_scene() {
        let global = SceneOptions {
            camera_follow: Some(false),
            camera_fix_after_follow: Some(false),
            spotlight_padding: Some(2.0),
            ..SceneOptions::default()
        };
        let mut d: Director<u32> = Director::with_global(global);
        d.register_scene("a", 0, 1).unwrap();
        d.start("a", None).unwrap();
        let mut stage = FakeStage::default();
        let mut hooks = Log::default();
        let handle = d.begin_scene(&mut stage, &mut hooks, &SceneOptions::default());
        assert!(handle.is_none(), "global layer disabled the follow");
        assert_eq!(d.active_options().spotlight_padding, 2.0);
    }
}
