// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Tracks the tap state of the single active pointer and turns each event into a
//! [`Decision`].
//!
//! ## Tap-up decision table
//!
//! Evaluated in priority order:
//!
//! 1. **Anchor**: dismiss if [`DismissOn::ANCHOR`]; forward when the anchor is
//!    clickable; consumed exactly when it is not.
//! 2. **Overlay**: dismiss if [`DismissOn::OVERLAY`]; on a transparent overlay a tap
//!    off the callout is forwarded and not consumed, otherwise it is consumed.
//! 3. **Outside**: with [`DismissOn::OUTSIDE`] the event is forwarded first and the
//!    overlay dismissed after; without it the event is neither forwarded nor consumed.
//!
//! ## Pass-through
//!
//! Downs, moves, cancels and drag releases never dismiss through the table.
//!
//! - Transparent overlay, pointer off the callout: always forwarded. Non-up events
//!   also request a delayed dismissal, once per router.
//! - Otherwise: forwarded when outside the anchor window, or on a clickable anchor
//!   for anything but a move. Whatever is not forwarded is consumed.

use spotlight_event_state::tap::{TapResult, TapState};

use crate::classify::classify;
use crate::types::{
    Classification, Decision, Dismiss, DismissOn, HitRegion, PointerAction, PointerEvent,
    Regions, TouchPolicy,
};

/// Stateful touch router for one overlay.
///
/// ## Usage
///
/// - Construct with [`TouchRouter::new`] from the overlay's [`TouchPolicy`].
/// - Call [`TouchRouter::route`] for every pointer event, in order.
/// - Execute the returned [`Decision`]: forward, dismiss (respecting
///   [`Decision::forward_first`]), and report [`Decision::consumed`] to the host.
#[derive(Clone, Debug)]
pub struct TouchRouter {
    policy: TouchPolicy,
    taps: TapState,
    drag_dismiss_armed: bool,
}

impl TouchRouter {
    /// Create a router for `policy`.
    pub fn new(policy: TouchPolicy) -> Self {
        Self {
            policy,
            taps: TapState::with_tolerance(policy.tap_tolerance),
            drag_dismiss_armed: false,
        }
    }

    /// The routing policy.
    pub fn policy(&self) -> &TouchPolicy {
        &self.policy
    }

    /// Returns `true` once a drag has requested the delayed dismissal.
    pub fn is_drag_dismiss_armed(&self) -> bool {
        self.drag_dismiss_armed
    }

    /// Forget the active press and the drag-dismiss request.
    pub fn reset(&mut self) {
        self.taps.cancel();
        self.drag_dismiss_armed = false;
    }

    /// Route one event.
    pub fn route(&mut self, event: &PointerEvent, regions: &Regions) -> Decision {
        let classification = classify(event.position, regions);
        match event.action {
            PointerAction::Down => {
                self.taps.on_down(event.position, event.time);
                self.pass_through(event.action, classification)
            }
            PointerAction::Move => {
                self.taps.on_move(event.position);
                self.pass_through(event.action, classification)
            }
            PointerAction::Cancel => {
                self.taps.cancel();
                self.pass_through(event.action, classification)
            }
            PointerAction::Up => match self.taps.on_up(event.position, event.time) {
                TapResult::Tap(_) => self.tap(classification),
                TapResult::Drag(_) | TapResult::Unpressed => {
                    self.pass_through(event.action, classification)
                }
            },
        }
    }

    fn dismiss_for(&self, region: HitRegion) -> Dismiss {
        if self.policy.dismiss_on.contains(DismissOn::for_region(region)) {
            Dismiss::Now
        } else {
            Dismiss::Keep
        }
    }

    fn tap(&self, classification: Classification) -> Decision {
        let dismiss = self.dismiss_for(classification.region);
        match classification.region {
            HitRegion::Anchor => {
                let clickable = self.policy.anchor_clickable;
                Decision {
                    dismiss,
                    forward: clickable,
                    consumed: !clickable,
                    ..Decision::swallow(classification, true)
                }
            }
            HitRegion::Overlay => {
                if self.policy.overlay_transparent && !classification.within_callout {
                    Decision {
                        dismiss,
                        ..Decision::pass(classification, true)
                    }
                } else {
                    Decision {
                        dismiss,
                        ..Decision::swallow(classification, true)
                    }
                }
            }
            HitRegion::Outside => {
                if dismiss == Dismiss::Now {
                    Decision {
                        dismiss,
                        forward_first: true,
                        ..Decision::pass(classification, true)
                    }
                } else {
                    Decision {
                        consumed: false,
                        ..Decision::swallow(classification, true)
                    }
                }
            }
        }
    }

    fn pass_through(&mut self, action: PointerAction, classification: Classification) -> Decision {
        if self.policy.overlay_transparent && !classification.within_callout {
            let mut decision = Decision::pass(classification, false);
            if action != PointerAction::Up && !self.drag_dismiss_armed {
                self.drag_dismiss_armed = true;
                decision.dismiss = Dismiss::After(self.policy.drag_dismiss_delay_ms);
            }
            return decision;
        }

        let forward = match classification.region {
            HitRegion::Outside => true,
            HitRegion::Anchor => self.policy.anchor_clickable && action != PointerAction::Move,
            HitRegion::Overlay => false,
        };
        if forward {
            Decision::pass(classification, false)
        } else {
            Decision::swallow(classification, false)
        }
    }
}
