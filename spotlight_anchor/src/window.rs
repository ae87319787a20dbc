// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor window resolution and surface-space conversion.

use kurbo::{Point, Rect, Vec2};

use crate::barrier::BarrierRects;

/// The resolved hole in the scrim, in surface space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorWindow(Rect);

impl AnchorWindow {
    /// Wrap an already resolved rectangle.
    pub const fn from_rect(rect: Rect) -> Self {
        Self(rect)
    }

    /// The window rectangle.
    pub const fn rect(&self) -> Rect {
        self.0
    }

    /// Returns `true` if the point lies inside the window.
    pub fn contains(&self, pt: Point) -> bool {
        self.0.contains(pt)
    }

    /// Returns `true` if barriers crossed over (`x0 > x1` or `y0 > y1`).
    ///
    /// Resolution never fixes this up; the hole is simply empty or inverted.
    pub fn is_degenerate(&self) -> bool {
        self.0.x0 > self.0.x1 || self.0.y0 > self.0.y1
    }
}

/// Conversion between screen space and the modal surface's space.
///
/// The surface starts at the top of the visible frame; x coordinates are shared.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceSpace {
    origin_y: f64,
}

impl SurfaceSpace {
    /// Surface space for a modal surface placed over `frame`.
    pub const fn for_frame(frame: Rect) -> Self {
        Self { origin_y: frame.y0 }
    }

    fn offset(&self) -> Vec2 {
        Vec2::new(0.0, self.origin_y)
    }

    /// Screen-space rectangle to surface space.
    pub fn rect_from_screen(&self, rect: Rect) -> Rect {
        rect - self.offset()
    }

    /// Surface-space rectangle to screen space.
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        rect + self.offset()
    }

    /// Screen-space point to surface space.
    pub fn point_from_screen(&self, pt: Point) -> Point {
        pt - self.offset()
    }

    /// Surface-space point to screen space.
    pub fn point_to_screen(&self, pt: Point) -> Point {
        pt + self.offset()
    }
}

/// Resolve the anchor window from the visible frame and sampled barriers.
///
/// - Left: the left barrier's right edge, else `frame.x0`.
/// - Right: the right barrier's left edge, else `frame.x1`.
/// - Top: the top barrier's bottom edge minus `frame.y0`, else `0`.
/// - Bottom: the bottom barrier's top edge minus `frame.y0`, else `frame.height()`.
pub fn resolve(frame: Rect, barriers: &BarrierRects) -> AnchorWindow {
    let x0 = barriers.left.map_or(frame.x0, |b| b.x1);
    let x1 = barriers.right.map_or(frame.x1, |b| b.x0);
    let y0 = barriers.top.map_or(0.0, |b| b.y1 - frame.y0);
    let y1 = barriers.bottom.map_or(frame.height(), |b| b.y0 - frame.y0);
    // `Rect::new` keeps the coordinates as given, so crossed barriers stay crossed.
    AnchorWindow(Rect::new(x0, y0, x1, y1))
}
