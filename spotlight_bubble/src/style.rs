// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble styling parameters and positioning modes.

use kurbo::Insets;

/// Where the callout sits relative to its target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TooltipPosition {
    /// Centered over the target, no arrow.
    #[default]
    Center,
    /// Above the target; the arrow is on the bottom edge and points down.
    Top,
    /// Below the target; the arrow is on the top edge and points up.
    Bottom,
}

impl TooltipPosition {
    /// Returns `true` for positions that draw an arrow.
    pub const fn has_arrow(self) -> bool {
        !matches!(self, Self::Center)
    }

    /// Edge of the bubble that carries the arrow.
    pub const fn arrow_side(self) -> Option<ArrowSide> {
        match self {
            Self::Center => None,
            Self::Top => Some(ArrowSide::Bottom),
            Self::Bottom => Some(ArrowSide::Top),
        }
    }
}

/// Bubble edge carrying the arrow notch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowSide {
    /// Arrow on the top edge, pointing up.
    Top,
    /// Arrow on the bottom edge, pointing down.
    Bottom,
}

/// Dimensions of a callout bubble.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BubbleStyle {
    /// Space between the bubble body edge and the content.
    pub padding: Insets,
    /// Width of the arrow base.
    pub arrow_width: f64,
    /// Distance from the body edge to the arrow tip.
    pub arrow_height: f64,
    /// Radius of the rounded arrow tip. Clamped to `arrow_height / 2`.
    pub arrow_corner_radius: f64,
    /// Corner radius of the bubble body.
    pub bubble_corner_radius: f64,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            padding: Insets::new(16.0, 4.0, 16.0, 4.0),
            arrow_width: 42.0,
            arrow_height: 24.0,
            arrow_corner_radius: 8.0,
            bubble_corner_radius: 4.0,
        }
    }
}

impl BubbleStyle {
    /// Minimum gap between the arrow base and a body edge.
    pub fn min_spacing(&self) -> f64 {
        self.arrow_width / 4.0
    }

    /// Clearance the body keeps on each side of the arrow target.
    pub fn arrow_clearance(&self) -> f64 {
        self.min_spacing() + self.arrow_width / 2.0
    }

    /// Arrow tip radius after clamping to half the arrow height.
    pub fn effective_arrow_radius(&self) -> f64 {
        self.arrow_corner_radius.min(self.arrow_height / 2.0).max(0.0)
    }
}
