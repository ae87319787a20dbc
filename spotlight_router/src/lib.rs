// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Router: a deterministic, `no_std` touch router for spotlight overlays.
//!
//! ## Overview
//!
//! While a spotlight overlay is open it receives every pointer event before the
//! rest of the UI. For each event this crate decides three things:
//!
//! - whether the overlay should be dismissed (now, after a delay, or not at all),
//! - whether the event should be forwarded to the UI underneath,
//! - whether the overlay consumes it.
//!
//! It does not own any surface and performs no side effects. Feed it the current
//! [`Regions`](types::Regions) and each [`PointerEvent`](types::PointerEvent) and
//! execute the returned [`Decision`](types::Decision) yourself.
//!
//! ## Classification
//!
//! [`classify`](classify::classify) maps a point onto a
//! [`HitRegion`](types::HitRegion), checking in this order:
//!
//! 1. the anchor rectangle (drawn through the hole),
//! 2. the anchor window (the hole itself, which also holds the callout),
//! 3. everything else.
//!
//! The order matches visual layering and is what keeps dismiss decisions stable
//! when the anchor lies inside the window.
//!
//! ## Taps and drags
//!
//! Only a *tap* (pointer-up close to its pointer-down, see
//! [`spotlight_event_state::tap`]) can dismiss through the decision table.
//! Everything else is pass-through: forwarded or swallowed, never dismissed, except
//! that a drag over a transparent overlay requests a short delayed dismissal so the
//! overlay still closes when no clean tap-up ever arrives.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use spotlight_router::router::TouchRouter;
//! use spotlight_router::types::{
//!     Dismiss, HitRegion, PointerAction, PointerEvent, Regions, TouchPolicy,
//! };
//!
//! let regions = Regions {
//!     anchor: Some(Rect::new(100.0, 100.0, 200.0, 140.0)),
//!     anchor_window: Rect::new(0.0, 50.0, 400.0, 700.0),
//!     callout: Rect::new(80.0, 150.0, 260.0, 220.0),
//! };
//! let mut router = TouchRouter::new(TouchPolicy::default());
//!
//! let down = PointerEvent::new(PointerAction::Down, Point::new(150.0, 120.0), 0);
//! let up = PointerEvent::new(PointerAction::Up, Point::new(152.0, 121.0), 80);
//! router.route(&down, &regions);
//! let decision = router.route(&up, &regions);
//!
//! assert_eq!(decision.classification.region, HitRegion::Anchor);
//! assert_eq!(decision.dismiss, Dismiss::Now);
//! assert!(decision.forward);
//! assert!(!decision.consumed);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod classify;
pub mod router;
pub mod types;
