// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators provided by the host toolkit.
//!
//! The session never draws or schedules anything itself. It talks to the host
//! through three small traits:
//!
//! - [`Compositor`] measures elements, owns the modal surface and receives
//!   forwarded events.
//! - [`Animator`] runs the fade-in.
//! - [`EventLoop`] supplies the clock and wakeups for the delayed dismissal.
//!
//! [`OverlayHost`] is implemented for anything that provides all three.
//!
//! Element rectangles are reported in screen space. Everything the session hands
//! back (the [`Scrim`], forwarded events) is in surface space; use
//! [`Scrim::surface`] to convert.

use kurbo::{BezPath, Rect, Size};
use spotlight_anchor::{AnchorWindow, SurfaceSpace};
use spotlight_bubble::CalloutGeometry;
use spotlight_router::types::PointerEvent;

use crate::config::ScrimColor;

/// Description of the modal surface for the host to render.
#[derive(Clone, Debug)]
pub struct Scrim {
    /// Visible frame in screen space; the surface covers it.
    pub frame: Rect,
    /// Conversion between screen space and the surface.
    pub surface: SurfaceSpace,
    /// Scrim color.
    pub color: ScrimColor,
    /// The scrim lets events through outside the callout.
    pub transparent: bool,
    /// The hole in the scrim.
    pub anchor_window: AnchorWindow,
    /// Anchor bounds, where its snapshot is drawn through the hole.
    pub anchor: Option<Rect>,
    /// Callout placement and arrow.
    pub callout: CalloutGeometry,
    /// Closed outline of the callout bubble.
    pub callout_outline: BezPath,
}

/// Element measurement, the modal surface, and event forwarding.
pub trait Compositor<K> {
    /// The part of the screen not covered by system decorations, in screen space.
    fn visible_frame(&self) -> Rect;

    /// Screen-space bounds of `element`, or `None` if it is not laid out yet.
    fn element_rect(&self, element: &K) -> Option<Rect>;

    /// Preferred size of `element` within `available`, or `None` if it cannot be
    /// measured yet.
    fn measure(&self, element: &K, available: Size) -> Option<Size>;

    /// Capture a bitmap of `element` to draw through the hole.
    fn capture_snapshot(&mut self, element: &K);

    /// Put the modal surface on screen.
    fn install_modal(&mut self, scrim: &Scrim);

    /// Update the modal surface after a recompute.
    fn update_modal(&mut self, scrim: &Scrim);

    /// Take the modal surface off screen.
    fn remove_modal(&mut self);

    /// Deliver `event` to the UI underneath the overlay.
    fn forward(&mut self, event: &PointerEvent);
}

/// Opacity animation.
pub trait Animator {
    /// Fade the modal surface in over `duration_ms`. Fire and forget.
    fn fade_in(&mut self, duration_ms: u64);
}

/// Clock and wakeups.
pub trait EventLoop {
    /// Current time in milliseconds, on the same clock as event timestamps.
    fn now(&self) -> u64;

    /// Call [`OverlaySession::poll_timers`](crate::OverlaySession::poll_timers) at
    /// or after `deadline`. Replaces any earlier request.
    fn request_wakeup(&mut self, deadline: u64);

    /// Drop the pending wakeup request, if any.
    fn cancel_wakeup(&mut self);
}

/// Everything a session needs from its host.
pub trait OverlayHost<K>: Compositor<K> + Animator + EventLoop {}

impl<K, T> OverlayHost<K> for T where T: Compositor<K> + Animator + EventLoop {}
