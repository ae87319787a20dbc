// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Anchor: resolve the unmasked "anchor window" of a spotlight overlay.
//!
//! A spotlight overlay dims the whole screen except for a rectangular hole, the
//! anchor window. By default the hole covers the full visible frame. Up to four
//! optional *barriers* (for example a toolbar or a bottom navigation bar) pull one
//! edge of the hole in so that the scrim never covers them.
//!
//! This crate does not talk to any windowing system. Callers sample the barrier
//! rectangles themselves (see [`BarrierSet::sample`]) and hand them to [`resolve`].
//!
//! ## Coordinate spaces
//!
//! - Barrier and anchor rectangles are given in *screen space*.
//! - The resolved window is in *surface space*: the modal surface spans the display
//!   width and starts at the top of the visible frame, so its origin is
//!   `(0, frame.y0)`. Only vertical coordinates are shifted, which compensates for
//!   system chrome such as a status bar. [`SurfaceSpace`] performs the conversion
//!   for other rectangles and points.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use spotlight_anchor::{BarrierRects, resolve};
//!
//! // Visible frame below a 24px status bar.
//! let frame = Rect::new(0.0, 24.0, 400.0, 800.0);
//! let barriers = BarrierRects {
//!     top: Some(Rect::new(0.0, 24.0, 400.0, 80.0)),
//!     bottom: Some(Rect::new(0.0, 740.0, 400.0, 800.0)),
//!     ..BarrierRects::default()
//! };
//!
//! let window = resolve(frame, &barriers);
//! assert_eq!(window.rect(), Rect::new(0.0, 56.0, 400.0, 716.0));
//! ```
//!
//! Degenerate results (a left barrier to the right of the right barrier, and so on)
//! are not corrected. Supplying correctly ordered barriers is the caller's job; see
//! [`AnchorWindow::is_degenerate`] if you want to detect it.
//!
//! This crate is `no_std`.

#![no_std]

mod barrier;
mod window;

pub use barrier::{BarrierRects, BarrierSet, Side};
pub use window::{AnchorWindow, SurfaceSpace, resolve};
