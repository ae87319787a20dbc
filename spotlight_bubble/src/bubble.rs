// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stock callout and the arrow-anchoring capability.

use kurbo::{BezPath, Rect, Size};

use crate::layout::{CalloutGeometry, layout};
use crate::outline::outline;
use crate::style::{BubbleStyle, TooltipPosition};

/// Capability of callouts that can point an arrow at a target.
///
/// Overlay code queries for this capability instead of checking the concrete
/// callout type. Callouts that do not implement it are laid out without an arrow.
pub trait ArrowAnchor {
    /// Point the arrow at `x` (in the same space as the layout bounds) and set the
    /// position of the callout relative to its target.
    fn set_arrow_target(&mut self, x: f64, position: TooltipPosition);
}

/// A rounded callout bubble with an optional arrow.
///
/// `Bubble` only stores its style and arrow target. Every call to
/// [`Bubble::layout`] recomputes the geometry from the measured content size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bubble {
    style: BubbleStyle,
    position: TooltipPosition,
    arrow_target_x: Option<f64>,
}

impl Bubble {
    /// A centered bubble with the given style and no arrow target.
    pub fn new(style: BubbleStyle) -> Self {
        Self {
            style,
            position: TooltipPosition::Center,
            arrow_target_x: None,
        }
    }

    /// Current style.
    pub fn style(&self) -> &BubbleStyle {
        &self.style
    }

    /// Current position mode.
    pub fn position(&self) -> TooltipPosition {
        self.position
    }

    /// Arrow target, `None` until one is set.
    pub fn arrow_target_x(&self) -> Option<f64> {
        self.arrow_target_x
    }

    /// Set the arrow height, keeping the tip radius within half of it.
    pub fn set_arrow_height(&mut self, height: f64) {
        self.style.arrow_height = height;
        self.style.arrow_corner_radius = self.style.arrow_corner_radius.min(height / 2.0);
    }

    /// Set the arrow base width.
    pub fn set_arrow_width(&mut self, width: f64) {
        self.style.arrow_width = width;
    }

    /// Set the arrow tip radius, clamped to half the arrow height.
    pub fn set_arrow_radius(&mut self, radius: f64) {
        self.style.arrow_corner_radius = radius.min(self.style.arrow_height / 2.0);
    }

    /// Set the body corner radius.
    pub fn set_bubble_radius(&mut self, radius: f64) {
        self.style.bubble_corner_radius = radius;
    }

    /// Lay out the bubble for `content` inside `bounds`.
    pub fn layout(&self, content: Size, bounds: Rect) -> CalloutGeometry {
        layout(
            self.position,
            content,
            self.arrow_target_x,
            bounds,
            &self.style,
        )
    }

    /// Outline for a geometry produced by [`Bubble::layout`].
    pub fn outline(&self, geometry: &CalloutGeometry) -> BezPath {
        outline(geometry, &self.style)
    }
}

impl ArrowAnchor for Bubble {
    fn set_arrow_target(&mut self, x: f64, position: TooltipPosition) {
        self.arrow_target_x = Some(x);
        self.position = position;
    }
}
