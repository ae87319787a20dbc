// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap versus drag disambiguation for a single pointer.
//!
//! Overlays that react to taps must not react to scrolls or drags that merely
//! started or ended over them. [`TapState`] records where the pointer went down
//! and, on release, compares the up position against a per-axis tolerance.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use spotlight_event_state::tap::{TapResult, TapState};
//!
//! let mut state = TapState::new();
//!
//! state.on_down(Point::new(100.0, 100.0), 0);
//! // 20 units to the right: still a tap.
//! assert!(matches!(
//!     state.on_up(Point::new(120.0, 100.0), 90),
//!     TapResult::Tap(_)
//! ));
//!
//! state.on_down(Point::new(100.0, 100.0), 200);
//! // 45 units to the right: a drag.
//! assert!(matches!(
//!     state.on_up(Point::new(145.0, 100.0), 320),
//!     TapResult::Drag(_)
//! ));
//! ```
//!
//! ## Rules
//!
//! 1. **Tolerance is per axis**: the release is a tap when both `|dx|` and `|dy|`
//!    are at most [`TapState::tolerance`]. The boundary value counts as a tap.
//! 2. **Only the endpoints matter**: wandering away during the press and coming
//!    back still yields a tap. [`TapState::on_move`] reports when the pointer first
//!    leaves the tolerance box, which callers may use for feedback.
//! 3. **No press, no tap**: a release without a recorded press is reported as
//!    [`TapResult::Unpressed`].
//! 4. **A new press replaces the old one**; [`TapState::cancel`] forgets it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Default per-axis tolerance between pointer-down and pointer-up.
pub const DEFAULT_TAP_TOLERANCE: f64 = 30.0;

/// State for an active press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Press {
    /// Pointer position at press time.
    pub down_position: Point,
    /// Timestamp of the press in milliseconds.
    pub down_time: u64,
    /// True once a move has left the tolerance box.
    pub left_tolerance: bool,
}

/// Outcome of a pointer release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapResult {
    /// The release completes a tap started by this press.
    Tap(Press),
    /// The pointer travelled too far; this press ended a drag.
    Drag(Press),
    /// There was no active press.
    Unpressed,
}

impl TapResult {
    /// Returns `true` for [`TapResult::Tap`].
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Tap(_))
    }
}

/// Single-pointer tap tracker.
#[derive(Clone, Debug)]
pub struct TapState {
    press: Option<Press>,
    /// Maximum per-axis displacement for a release to count as a tap.
    pub tolerance: f64,
}

impl TapState {
    /// Create a tracker with [`DEFAULT_TAP_TOLERANCE`].
    pub const fn new() -> Self {
        Self::with_tolerance(DEFAULT_TAP_TOLERANCE)
    }

    /// Create a tracker with a custom per-axis tolerance.
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self {
            press: None,
            tolerance,
        }
    }

    fn within(&self, delta: Vec2) -> bool {
        delta.x.abs() <= self.tolerance && delta.y.abs() <= self.tolerance
    }

    /// Record a pointer down event.
    pub fn on_down(&mut self, position: Point, timestamp: u64) {
        self.press = Some(Press {
            down_position: position,
            down_time: timestamp,
            left_tolerance: false,
        });
    }

    /// Track a move during a press.
    ///
    /// Returns `true` only for the move that first leaves the tolerance box.
    pub fn on_move(&mut self, position: Point) -> bool {
        let tolerance = self.tolerance;
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        if press.left_tolerance {
            return false;
        }
        let delta = position - press.down_position;
        if delta.x.abs() > tolerance || delta.y.abs() > tolerance {
            press.left_tolerance = true;
            return true;
        }
        false
    }

    /// Process a pointer release and end the press.
    pub fn on_up(&mut self, position: Point, _timestamp: u64) -> TapResult {
        let Some(press) = self.press.take() else {
            return TapResult::Unpressed;
        };
        if self.within(position - press.down_position) {
            TapResult::Tap(press)
        } else {
            TapResult::Drag(press)
        }
    }

    /// Forget the active press. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Returns `true` while a press is active.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The active press, if any.
    pub fn press(&self) -> Option<&Press> {
        self.press.as_ref()
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}
