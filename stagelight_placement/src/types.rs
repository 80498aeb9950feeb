// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, alignment, and fallback orders.

/// Side of the target the callout sits on.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the target.
    Top,
    /// Below the target.
    #[default]
    Bottom,
    /// To the target's left.
    Left,
    /// To the target's right.
    Right,
}

impl Side {
    /// Candidate order tried by the resolver, most preferred first.
    ///
    /// Each preferred side has a fixed fallback sequence; the preferred
    /// side itself is always the head.
    pub const fn fallback_order(self) -> [Self; 4] {
        match self {
            Self::Top => [Self::Top, Self::Bottom, Self::Left, Self::Right],
            Self::Bottom => [Self::Bottom, Self::Top, Self::Left, Self::Right],
            Self::Left => [Self::Left, Self::Top, Self::Bottom, Self::Right],
            Self::Right => [Self::Right, Self::Top, Self::Bottom, Self::Left],
        }
    }

    /// Whether the callout sits beside the target rather than above/below.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Alignment of the callout along the chosen side.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Align {
    /// Flush with the target's leading edge.
    Start,
    /// Centered on the target.
    #[default]
    Center,
    /// Flush with the target's trailing edge.
    End,
}
