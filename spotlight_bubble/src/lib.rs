// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Bubble: layout and outline of a callout bubble with a directional arrow.
//!
//! A callout is a rounded rectangle holding some content. When it is shown above or
//! below a target, a small arrow notch is cut into the edge facing the target and
//! its tip tracks an arbitrary x coordinate, while the bubble body itself stays
//! clamped inside the available bounds.
//!
//! The crate is split in two pure steps:
//!
//! - [`layout`] turns a [`TooltipPosition`], the measured content [`Size`](kurbo::Size),
//!   the arrow target and the available bounds into a [`CalloutGeometry`].
//! - [`outline`] turns that geometry into a closed [`BezPath`](kurbo::BezPath) for rendering.
//!
//! Geometry is never cached: whenever the content is remeasured or the arrow target
//! moves, run [`layout`] again.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use spotlight_bubble::{BubbleStyle, TooltipPosition, layout, outline};
//!
//! let style = BubbleStyle::default();
//! // The band above an anchor whose top edge sits at y = 300.
//! let bounds = Rect::new(0.0, 0.0, 360.0, 300.0);
//! let geometry = layout(TooltipPosition::Top, Size::new(120.0, 40.0), Some(340.0), bounds, &style);
//!
//! // The body is clamped to the right edge, the arrow tip stays on the target.
//! assert_eq!(geometry.placement_rect.x1, 360.0);
//! assert_eq!(geometry.arrow_target_x, 340.0);
//! assert_eq!(geometry.placement_rect.y1, 300.0);
//!
//! let path = outline(&geometry, &style);
//! assert!(!path.elements().is_empty());
//! ```
//!
//! Callouts that can point an arrow at a target opt into the [`ArrowAnchor`]
//! capability; [`Bubble`] is the stock implementation.
//!
//! This crate is `no_std`.

#![no_std]

mod bubble;
mod layout;
mod outline;
mod style;

pub use bubble::{ArrowAnchor, Bubble};
pub use layout::{CalloutGeometry, layout};
pub use outline::outline;
pub use style::{ArrowSide, BubbleStyle, TooltipPosition};
