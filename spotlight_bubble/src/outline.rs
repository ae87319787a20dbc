// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble outline generation.

use kurbo::{BezPath, Point, RoundedRect, Shape};

use crate::layout::CalloutGeometry;
use crate::style::{ArrowSide, BubbleStyle};

/// Flattening tolerance used when converting the rounded body to path elements.
const PATH_TOLERANCE: f64 = 0.1;

/// Build the closed outline of a callout.
///
/// The body is a rounded rectangle over [`CalloutGeometry::body_rect`]. When the
/// geometry has an arrow side, a second closed subpath draws the notch: two line
/// segments from the base (`arrow_width` wide, clipped to the body) that converge
/// through a quadratic curve at the tip. With `k = arrow_width / radius`, the curve
/// starts `arrow_height / k` short of the tip at `target ± radius / 2`. A zero
/// radius gives a sharp tip.
///
/// Fill the result with the non-zero rule; the two subpaths overlap along the body
/// edge.
pub fn outline(geometry: &CalloutGeometry, style: &BubbleStyle) -> BezPath {
    let body = RoundedRect::from_rect(geometry.body_rect, style.bubble_corner_radius);
    let mut path = body.to_path(PATH_TOLERANCE);

    let Some(side) = geometry.arrow_side else {
        return path;
    };
    if style.arrow_width <= 0.0 || style.arrow_height <= 0.0 {
        return path;
    }

    let body_rect = geometry.body_rect;
    let target = geometry.arrow_target_x;
    // `toward` is the direction from the base to the tip.
    let (base_y, tip_y, toward) = match side {
        ArrowSide::Bottom => (body_rect.y1, geometry.placement_rect.y1, 1.0),
        ArrowSide::Top => (body_rect.y0, geometry.placement_rect.y0, -1.0),
    };

    let half = style.arrow_width / 2.0;
    let base_left = (target - half).max(body_rect.x0);
    let base_right = (target + half).min(body_rect.x1);

    path.move_to(Point::new(base_left, base_y));
    let radius = style.effective_arrow_radius();
    if radius > 0.0 {
        let k = style.arrow_width / radius;
        let h = style.arrow_height / k;
        let curve_y = tip_y - toward * h;
        path.line_to(Point::new(target - radius / 2.0, curve_y));
        path.quad_to(
            Point::new(target, tip_y),
            Point::new(target + radius / 2.0, curve_y),
        );
    } else {
        path.line_to(Point::new(target, tip_y));
    }
    path.line_to(Point::new(base_right, base_y));
    path.close_path();
    path
}
