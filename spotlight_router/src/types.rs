// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for touch routing: events, regions, policy, and decisions.

use kurbo::{Point, Rect};
use spotlight_event_state::tap::DEFAULT_TAP_TOLERANCE;

/// Delay of the self-dismiss requested by a drag over a transparent overlay.
pub const DRAG_DISMISS_DELAY_MS: u64 = 200;

/// Pointer action, single pointer only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Pointer went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer went up.
    Up,
    /// The gesture was taken away (for example by the system).
    Cancel,
}

/// A pointer event in surface space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Where it happened.
    pub position: Point,
    /// When it happened, in milliseconds. Events arrive in timestamp order.
    pub time: u64,
}

impl PointerEvent {
    /// Create an event.
    pub const fn new(action: PointerAction, position: Point, time: u64) -> Self {
        Self {
            action,
            position,
            time,
        }
    }
}

/// The rectangles an event is classified against, all in surface space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Regions {
    /// Bounding rectangle of the anchor, if the overlay has one.
    pub anchor: Option<Rect>,
    /// The hole in the scrim.
    pub anchor_window: Rect,
    /// Placement rectangle of the callout.
    pub callout: Rect,
}

/// Which layer an event struck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The anchor, drawn through the hole.
    Anchor,
    /// The anchor window outside of the anchor (including the callout).
    Overlay,
    /// Outside the anchor window.
    Outside,
}

/// Per-event classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Region hit, by layering priority.
    pub region: HitRegion,
    /// Whether the point is also over the callout.
    pub within_callout: bool,
}

bitflags::bitflags! {
    /// Regions whose taps dismiss the overlay.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct DismissOn: u8 {
        /// A tap on the anchor dismisses.
        const ANCHOR  = 0b0000_0001;
        /// A tap inside the anchor window (but off the anchor) dismisses.
        const OVERLAY = 0b0000_0010;
        /// A tap outside the anchor window dismisses.
        const OUTSIDE = 0b0000_0100;
    }
}

impl Default for DismissOn {
    fn default() -> Self {
        Self::all()
    }
}

impl DismissOn {
    /// Flag matching a hit region.
    pub const fn for_region(region: HitRegion) -> Self {
        match region {
            HitRegion::Anchor => Self::ANCHOR,
            HitRegion::Overlay => Self::OVERLAY,
            HitRegion::Outside => Self::OUTSIDE,
        }
    }
}

/// Routing policy, fixed for the lifetime of an overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPolicy {
    /// Regions whose taps dismiss the overlay.
    pub dismiss_on: DismissOn,
    /// The anchor stays interactive through the hole.
    pub anchor_clickable: bool,
    /// The scrim lets events through everywhere except on the callout.
    pub overlay_transparent: bool,
    /// Per-axis tap tolerance.
    pub tap_tolerance: f64,
    /// Delay of the self-dismiss armed by drags over a transparent overlay.
    pub drag_dismiss_delay_ms: u64,
}

impl Default for TouchPolicy {
    fn default() -> Self {
        Self {
            dismiss_on: DismissOn::default(),
            anchor_clickable: true,
            overlay_transparent: false,
            tap_tolerance: DEFAULT_TAP_TOLERANCE,
            drag_dismiss_delay_ms: DRAG_DISMISS_DELAY_MS,
        }
    }
}

/// When, if at all, the overlay should go away.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dismiss {
    /// Stay open.
    #[default]
    Keep,
    /// Dismiss now.
    Now,
    /// Dismiss after the given delay in milliseconds, unless already armed.
    After(u64),
}

/// What to do with one pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    /// Where the event landed.
    pub classification: Classification,
    /// The event completed a tap.
    pub tap: bool,
    /// Dismissal requested by this event.
    pub dismiss: Dismiss,
    /// Forward the event to the UI underneath.
    pub forward: bool,
    /// Forward before dismissing (otherwise dismiss first).
    pub forward_first: bool,
    /// The overlay swallows the event.
    pub consumed: bool,
}

impl Decision {
    pub(crate) const fn swallow(classification: Classification, tap: bool) -> Self {
        Self {
            classification,
            tap,
            dismiss: Dismiss::Keep,
            forward: false,
            forward_first: false,
            consumed: true,
        }
    }

    pub(crate) const fn pass(classification: Classification, tap: bool) -> Self {
        Self {
            classification,
            tap,
            dismiss: Dismiss::Keep,
            forward: true,
            forward_first: false,
            consumed: false,
        }
    }

    /// Returns `true` if the decision has no effect besides swallowing or ignoring.
    pub fn is_inert(&self) -> bool {
        !self.forward && self.dismiss == Dismiss::Keep
    }
}
