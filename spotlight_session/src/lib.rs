// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight Session: anchored spotlight overlays for guided tours and onboarding.
//!
//! ## Overview
//!
//! An overlay dims the screen, leaves a rectangular hole (the *anchor window*) around
//! a point of interest, draws the anchor through the hole and shows a callout bubble
//! next to it. While it is on screen it sees every pointer event first and decides
//! whether to forward it, swallow it, or go away.
//!
//! [`OverlaySession`] ties the pieces together:
//!
//! - [`spotlight_anchor`] resolves the anchor window from optional barrier elements.
//! - [`spotlight_bubble`] lays out the callout and its arrow inside the window.
//! - [`spotlight_router`] classifies each event and decides forward/dismiss/consume.
//!
//! The session owns no surface, clock or animation. The host provides those through
//! the traits in [`host`], which keeps the whole state machine deterministic and
//! testable without a windowing system.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending --show--> Showing --dismiss / tap / timer--> Dismissing --> Dismissed
//!    |                                                                  ^
//!    +-------------------------------dismiss----------------------------+
//! ```
//!
//! - [`OverlaySession::show`] validates the configuration and installs the modal
//!   surface, or defers until [`OverlaySession::on_layout`] if the anchor is not laid
//!   out yet.
//! - [`OverlaySession::handle_pointer`] routes events while showing.
//! - [`OverlaySession::dismiss`] is idempotent and runs the dismissal callback once.
//! - [`OverlaySession::dismiss_after`] arms a single-shot deadline; the host calls
//!   [`OverlaySession::poll_timers`] when the requested wakeup arrives.
//!
//! ## Coordinates
//!
//! Element rectangles from the host are in screen space. The modal surface starts at
//! the top of the visible frame, so pointer events, the anchor window and the callout
//! are in *surface space*, shifted up by the frame's `y0`.
//!
//! ## Logging
//!
//! Lifecycle transitions are logged with [`tracing`] at `debug` level, per-event
//! routing decisions at `trace` level, and degenerate anchor windows at `warn` level.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`config::OverlayOptions`] and the types it
//!   contains, so options can be loaded from configuration files.

pub mod callout;
pub mod config;
pub mod error;
pub mod host;
mod session;
mod timer;

pub use session::{EventDisposition, OverlaySession, SessionState, ShowStatus, callout_bounds};
pub use timer::DismissTimer;

pub use spotlight_anchor::{AnchorWindow, SurfaceSpace};
pub use spotlight_bubble::{BubbleStyle, CalloutGeometry, TooltipPosition};
pub use spotlight_router::types::{DismissOn, PointerAction, PointerEvent};
