// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout placement.

use kurbo::{Rect, Size};

use crate::style::{ArrowSide, BubbleStyle, TooltipPosition};

/// Resolved placement of a callout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalloutGeometry {
    /// Full callout rectangle, including the arrow band.
    pub placement_rect: Rect,
    /// Rounded body rectangle (the placement minus the arrow band).
    pub body_rect: Rect,
    /// Content rectangle: the body inset by the padding, clamped to the bounds.
    pub content_rect: Rect,
    /// X coordinate of the arrow tip.
    pub arrow_target_x: f64,
    /// Edge carrying the arrow, `None` for [`TooltipPosition::Center`].
    pub arrow_side: Option<ArrowSide>,
}

impl CalloutGeometry {
    /// Tip of the arrow, if the callout has one.
    pub fn arrow_tip(&self) -> Option<kurbo::Point> {
        self.arrow_side.map(|side| {
            let y = match side {
                ArrowSide::Top => self.placement_rect.y0,
                ArrowSide::Bottom => self.placement_rect.y1,
            };
            kurbo::Point::new(self.arrow_target_x, y)
        })
    }
}

/// Lay out a callout of `content` size inside `bounds`.
///
/// Horizontally the bubble is centered on the arrow target when possible. When that
/// would cross an edge of `bounds` it is pushed back inside, and when it is wider
/// than `bounds` it fills them edge to edge. Bubbles with an arrow are at least
/// `2 * style.arrow_clearance()` wide so the notch keeps its distance from the
/// rounded corners. The arrow tip itself always stays on the target.
///
/// Vertically, [`TooltipPosition::Top`] puts the arrow tip on `bounds.y1`,
/// [`TooltipPosition::Bottom`] puts it on `bounds.y0`, and
/// [`TooltipPosition::Center`] centers the bubble in `bounds`.
///
/// A missing or negative `arrow_target_x` means "unset" and falls back to the
/// horizontal midpoint of `bounds`.
pub fn layout(
    position: TooltipPosition,
    content: Size,
    arrow_target_x: Option<f64>,
    bounds: Rect,
    style: &BubbleStyle,
) -> CalloutGeometry {
    let pad = style.padding;
    let arrow_band = if position.has_arrow() {
        style.arrow_height
    } else {
        0.0
    };
    let target = match arrow_target_x {
        Some(x) if x >= 0.0 => x,
        _ => bounds.center().x,
    };

    let mut width = content.width + pad.x0 + pad.x1;
    if position.has_arrow() {
        width = width.max(2.0 * style.arrow_clearance());
    }
    let width = width.min(bounds.width()).max(0.0);

    let mut x0 = target - width / 2.0;
    if x0 + width > bounds.x1 {
        x0 = bounds.x1 - width;
    }
    if x0 < bounds.x0 {
        x0 = bounds.x0;
    }
    let x1 = x0 + width;

    let height = content.height + pad.y0 + pad.y1 + arrow_band;
    let (y0, y1) = match position {
        TooltipPosition::Top => (bounds.y1 - height, bounds.y1),
        TooltipPosition::Bottom => (bounds.y0, bounds.y0 + height),
        TooltipPosition::Center => {
            let cy = bounds.center().y;
            (cy - height / 2.0, cy + height / 2.0)
        }
    };

    let placement_rect = Rect::new(x0, y0, x1, y1);
    let body_rect = match position {
        TooltipPosition::Top => Rect::new(x0, y0, x1, y1 - arrow_band),
        TooltipPosition::Bottom => Rect::new(x0, y0 + arrow_band, x1, y1),
        TooltipPosition::Center => placement_rect,
    };
    let cx0 = body_rect.x0 + pad.x0;
    let cy0 = body_rect.y0 + pad.y0;
    let content_rect = Rect::new(
        cx0,
        cy0,
        (body_rect.x1 - pad.x1).max(cx0),
        (body_rect.y1 - pad.y1).max(cy0),
    );

    CalloutGeometry {
        placement_rect,
        body_rect,
        content_rect,
        arrow_target_x: target,
        arrow_side: position.arrow_side(),
    }
}
