// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered tour options.
//!
//! ## Overview
//!
//! Options come in two shapes: [`SceneOptions`] is an all-optional partial
//! that callers fill in sparsely, and [`ResolvedOptions`] is the concrete
//! set a scene actually runs with. Resolution is an ordered override —
//! defaults, then global options, then per-scene locals — where only keys
//! that are present (`Some`) win; omitted keys fall through to the layer
//! below.

use alloc::string::{String, ToString};

use bitflags::bitflags;
use stagelight_placement::types::{Align, Side};

/// An RGBA color for the dark zone around the spotlight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel, `0..=255`.
    pub r: u8,
    /// Green channel, `0..=255`.
    pub g: u8,
    /// Blue channel, `0..=255`.
    pub b: u8,
    /// Alpha, `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    /// Construct a color from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Scroll animation style requested from the host.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ScrollBehavior {
    /// Host-defined, usually instant.
    Auto,
    /// Animated scroll of indeterminate duration.
    #[default]
    Smooth,
}

/// Where the target should end up along one scroll axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollAlignment {
    /// Leading edge of the scrollport.
    Start,
    /// Centered in the scrollport.
    Center,
    /// Trailing edge of the scrollport.
    End,
    /// Whichever edge requires the least motion.
    Nearest,
}

/// The behavior/block/inline triple handed to the host's scroll request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollIntoViewOptions {
    /// Animation style.
    pub behavior: ScrollBehavior,
    /// Vertical alignment of the target.
    pub block: ScrollAlignment,
    /// Horizontal alignment of the target.
    pub inline: ScrollAlignment,
}

impl Default for ScrollIntoViewOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlignment::Start,
            inline: ScrollAlignment::Nearest,
        }
    }
}

bitflags! {
    /// Per-scene interaction behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SceneFlags: u8 {
        /// The highlighted target keeps receiving pointer input.
        const ALLOW_INTERACT = 0b0000_0001;
        /// Clicking outside the callout ends the tour.
        const ALLOW_LEAVE    = 0b0000_0010;
    }
}

impl Default for SceneFlags {
    fn default() -> Self {
        Self::ALLOW_LEAVE
    }
}

/// A sparse option layer. Every key is optional; `None` defers to the
/// layer below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneOptions {
    /// Padding between the target and the spotlight cutout, in pixels.
    pub spotlight_padding: Option<f64>,
    /// Corner radius of the spotlight cutout, in pixels.
    pub spotlight_border_radius: Option<f64>,
    /// Color of the dimmed page around the spotlight.
    pub spotlight_dark_zone_color: Option<Rgba>,
    /// Whether the target stays interactive while highlighted.
    pub allow_interact: Option<bool>,
    /// Whether an outside click ends the tour.
    pub allow_leave: Option<bool>,
    /// Whether the camera follows the target into view.
    pub camera_follow: Option<bool>,
    /// Scroll margin around the followed target, in pixels.
    pub camera_follow_offset: Option<f64>,
    /// Scroll request options for the follow.
    pub camera_follow_options: Option<ScrollIntoViewOptions>,
    /// Whether the page is pinned again once the follow settles.
    pub camera_fix_after_follow: Option<bool>,
    /// Preferred callout side.
    pub voice_over_placement: Option<Side>,
    /// Whether the resolver may override the preferred side.
    pub voice_over_auto_placement: Option<bool>,
    /// Callout alignment along the chosen side.
    pub voice_over_align: Option<Align>,
    /// Callout width, in pixels.
    pub voice_over_width: Option<f64>,
    /// Default callout title.
    pub voice_over_title: Option<String>,
    /// Default callout body text.
    pub voice_over_content: Option<String>,
    /// Label of the "previous" button.
    pub voice_over_prev_button_text: Option<String>,
    /// Label of the "next" button.
    pub voice_over_next_button_text: Option<String>,
    /// Label of the "done" button.
    pub voice_over_done_button_text: Option<String>,
}

/// The concrete options a scene runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// Padding between the target and the spotlight cutout, in pixels.
    pub spotlight_padding: f64,
    /// Corner radius of the spotlight cutout, in pixels.
    pub spotlight_border_radius: f64,
    /// Color of the dimmed page around the spotlight.
    pub spotlight_dark_zone_color: Rgba,
    /// Interaction behavior flags.
    pub flags: SceneFlags,
    /// Whether the camera follows the target into view.
    pub camera_follow: bool,
    /// Scroll margin around the followed target, in pixels.
    pub camera_follow_offset: f64,
    /// Scroll request options for the follow.
    pub camera_follow_options: ScrollIntoViewOptions,
    /// Whether the page is pinned again once the follow settles.
    pub camera_fix_after_follow: bool,
    /// Preferred callout side.
    pub voice_over_placement: Side,
    /// Whether the resolver may override the preferred side.
    pub voice_over_auto_placement: bool,
    /// Callout alignment along the chosen side.
    pub voice_over_align: Align,
    /// Callout width, in pixels.
    pub voice_over_width: f64,
    /// Default callout title.
    pub voice_over_title: String,
    /// Default callout body text.
    pub voice_over_content: String,
    /// Label of the "previous" button.
    pub voice_over_prev_button_text: String,
    /// Label of the "next" button.
    pub voice_over_next_button_text: String,
    /// Label of the "done" button.
    pub voice_over_done_button_text: String,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            spotlight_padding: 10.0,
            spotlight_border_radius: 10.0,
            spotlight_dark_zone_color: Rgba::new(66, 66, 66, 0.5),
            flags: SceneFlags::default(),
            camera_follow: true,
            camera_follow_offset: 24.0,
            camera_follow_options: ScrollIntoViewOptions::default(),
            camera_fix_after_follow: true,
            voice_over_placement: Side::Bottom,
            voice_over_auto_placement: true,
            voice_over_align: Align::Center,
            voice_over_width: 300.0,
            voice_over_title: "Act 3 Scene 2".to_string(),
            voice_over_content: "To be, or not to be; that's the question.".to_string(),
            voice_over_prev_button_text: "Back".to_string(),
            voice_over_next_button_text: "Next".to_string(),
            voice_over_done_button_text: "Done".to_string(),
        }
    }
}

impl ResolvedOptions {
    /// Overlay one sparse layer on top of this resolved set.
    pub fn apply(&mut self, layer: &SceneOptions) {
        if let Some(v) = layer.spotlight_padding {
            self.spotlight_padding = v;
        }
        if let Some(v) = layer.spotlight_border_radius {
            self.spotlight_border_radius = v;
        }
        if let Some(v) = layer.spotlight_dark_zone_color {
            self.spotlight_dark_zone_color = v;
        }
        if let Some(v) = layer.allow_interact {
            self.flags.set(SceneFlags::ALLOW_INTERACT, v);
        }
        if let Some(v) = layer.allow_leave {
            self.flags.set(SceneFlags::ALLOW_LEAVE, v);
        }
        if let Some(v) = layer.camera_follow {
            self.camera_follow = v;
        }
        if let Some(v) = layer.camera_follow_offset {
            self.camera_follow_offset = v;
        }
        if let Some(v) = layer.camera_follow_options {
            self.camera_follow_options = v;
        }
        if let Some(v) = layer.camera_fix_after_follow {
            self.camera_fix_after_follow = v;
        }
        if let Some(v) = layer.voice_over_placement {
            self.voice_over_placement = v;
        }
        if let Some(v) = layer.voice_over_auto_placement {
            self.voice_over_auto_placement = v;
        }
        if let Some(v) = layer.voice_over_align {
            self.voice_over_align = v;
        }
        if let Some(v) = layer.voice_over_width {
            self.voice_over_width = v;
        }
        if let Some(v) = &layer.voice_over_title {
            self.voice_over_title = v.clone();
        }
        if let Some(v) = &layer.voice_over_content {
            self.voice_over_content = v.clone();
        }
        if let Some(v) = &layer.voice_over_prev_button_text {
            self.voice_over_prev_button_text = v.clone();
        }
        if let Some(v) = &layer.voice_over_next_button_text {
            self.voice_over_next_button_text = v.clone();
        }
        if let Some(v) = &layer.voice_over_done_button_text {
            self.voice_over_done_button_text = v.clone();
        }
    }

    /// Resolve a stack of layers over the defaults, first layer lowest.
    pub fn layered(layers: &[&SceneOptions]) -> Self {
        let mut out = Self::default();
        for layer in layers {
            out.apply(layer);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let opts = ResolvedOptions::default();
        assert_eq!(opts.spotlight_padding, 10.0);
        assert_eq!(opts.spotlight_border_radius, 10.0);
        assert!(opts.camera_follow);
        assert_eq!(opts.camera_follow_offset, 24.0);
        assert!(opts.camera_fix_after_follow);
        assert_eq!(opts.voice_over_placement, Side::Bottom);
        assert!(opts.voice_over_auto_placement);
        assert_eq!(opts.voice_over_align, Align::Center);
        assert_eq!(opts.voice_over_width, 300.0);
        assert!(!opts.flags.contains(SceneFlags::ALLOW_INTERACT));
        assert!(opts.flags.contains(SceneFlags::ALLOW_LEAVE));
        assert_eq!(
            opts.camera_follow_options.behavior,
            ScrollBehavior::Smooth
        );
        assert_eq!(opts.camera_follow_options.block, ScrollAlignment::Start);
        assert_eq!(opts.camera_follow_options.inline, ScrollAlignment::Nearest);
    }

    #[test]
    fn later_layers_win() {
        let global = SceneOptions {
            spotlight_padding: Some(4.0),
            voice_over_title: Some("global".to_string()),
            ..SceneOptions::default()
        };
        let local = SceneOptions {
            spotlight_padding: Some(16.0),
            ..SceneOptions::default()
        };
        let opts = ResolvedOptions::layered(&[&global, &local]);
        assert_eq!(opts.spotlight_padding, 16.0);
        // Local omitted the title; the global layer shows through.
        assert_eq!(opts.voice_over_title, "global");
    }

    #[test]
    fn omitted_keys_fall_through_to_defaults() {
        let local = SceneOptions {
            camera_follow: Some(false),
            ..SceneOptions::default()
        };
        let opts = ResolvedOptions::layered(&[&local]);
        assert!(!opts.camera_follow);
        assert_eq!(opts.voice_over_next_button_text, "Next");
        assert_eq!(opts.voice_over_width, 300.0);
    }

    #[test]
    fn interaction_booleans_map_to_flags() {
        let layer = SceneOptions {
            allow_interact: Some(true),
            allow_leave: Some(false),
            ..SceneOptions::default()
        };
        let opts = ResolvedOptions::layered(&[&layer]);
        assert!(opts.flags.contains(SceneFlags::ALLOW_INTERACT));
        assert!(!opts.flags.contains(SceneFlags::ALLOW_LEAVE));
    }

    #[test]
    fn empty_layer_changes_nothing() {
        let opts = ResolvedOptions::layered(&[&SceneOptions::default()]);
        assert_eq!(opts, ResolvedOptions::default());
    }
}
