// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A three-step guided tour driven against a headless host.
//!
//! 1. A bubble below the menu button, loaded from RON options, closed by a tap
//!    outside the anchor window.
//! 2. A bubble above the send button with a non-clickable anchor, closed by tapping
//!    the anchor.
//! 3. A transparent overlay that closes itself after the user starts scrolling.
//!
//! Run:
//! - `cargo run -p spotlight_demos --example guided_tour`
//! - `RUST_LOG=trace cargo run -p spotlight_demos --example guided_tour` to see every
//!   routing decision.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use spotlight_demos::logging::init_logging;
use spotlight_demos::sim::{ElementId, SimulatedHost};
use spotlight_session::callout::{BubbleCallout, Callout, PlainCallout};
use spotlight_session::config::{OverlayConfig, OverlayOptions};
use spotlight_session::host::EventLoop;
use spotlight_session::{
    BubbleStyle, OverlaySession, PointerAction, PointerEvent, SessionState, ShowStatus,
    TooltipPosition,
};
use tracing::{info, warn};

const STEP_ONE: &str = r#"(
    overlay_color: 0xB0101020,
    fade_duration_ms: 180,
    position: Bottom,
    bubble: (arrow_width: 36.0, arrow_height: 18.0),
)"#;

fn screen() -> SimulatedHost {
    let mut host = SimulatedHost::new(Rect::new(0.0, 24.0, 360.0, 740.0));
    host.place("toolbar", Rect::new(0.0, 24.0, 360.0, 80.0));
    host.place("menu", Rect::new(300.0, 30.0, 350.0, 74.0));
    host.place("composer", Rect::new(0.0, 680.0, 360.0, 740.0));
    host.place("send", Rect::new(300.0, 690.0, 350.0, 730.0));
    host.set_content_size("menu_tip", Size::new(200.0, 40.0));
    host.set_content_size("send_tip", Size::new(160.0, 40.0));
    host.set_content_size("feed_tip", Size::new(240.0, 60.0));
    host
}

fn tap<C: Callout<ElementId>>(
    session: &mut OverlaySession<ElementId, C>,
    host: &mut SimulatedHost,
    at: Point,
) {
    let t = host.now();
    session.handle_pointer(&PointerEvent::new(PointerAction::Down, at, t), host);
    host.advance(60);
    let disposition =
        session.handle_pointer(&PointerEvent::new(PointerAction::Up, at, t + 60), host);
    info!(?at, ?disposition, state = ?session.state(), "tap");
}

fn main() {
    init_logging();
    let mut host = screen();
    let finished = Rc::new(Cell::new(0_u32));

    // Step 1: options from RON, bubble below the menu button.
    let options: OverlayOptions = match ron::from_str(STEP_ONE) {
        Ok(options) => options,
        Err(err) => {
            warn!(%err, "invalid step options, using defaults");
            OverlayOptions {
                position: TooltipPosition::Bottom,
                ..OverlayOptions::default()
            }
        }
    };
    let style = options.bubble;
    let mut step = OverlaySession::new(
        OverlayConfig::new(BubbleCallout::new("menu_tip", style))
            .with_options(options)
            .with_anchor("menu")
            .with_bottom_barrier("composer"),
    );
    let done = Rc::clone(&finished);
    step.set_on_dismiss(move || done.set(done.get() + 1));
    if let Ok(ShowStatus::Shown) = step.show(&mut host) {
        // Below the composer's top edge, so outside the anchor window.
        tap(&mut step, &mut host, Point::new(20.0, 690.0));
    }
    assert_eq!(step.state(), SessionState::Dismissed);

    let forwarded = host.forwarded().len();

    // Step 2: bubble above the send button; only a tap on the button moves on.
    let mut step = OverlaySession::new(
        OverlayConfig::new(BubbleCallout::new("send_tip", BubbleStyle::default()))
            .with_anchor("send")
            .with_top_barrier("toolbar")
            .with_tooltip_position(TooltipPosition::Top)
            .with_dismiss_on_touch_overlay(false)
            .with_dismiss_on_touch_outside(false)
            .with_anchor_clickable(false),
    );
    let done = Rc::clone(&finished);
    step.set_on_dismiss(move || done.set(done.get() + 1));
    match step.show(&mut host) {
        Ok(status) => info!(?status, "step two"),
        Err(err) => warn!(%err, "step two failed"),
    }
    tap(&mut step, &mut host, Point::new(40.0, 300.0));
    assert!(step.is_showing());
    // Send button at surface y 666..706.
    tap(&mut step, &mut host, Point::new(325.0, 686.0));
    assert_eq!(step.state(), SessionState::Dismissed);
    assert_eq!(
        host.forwarded().len(),
        forwarded,
        "the send button is not clickable during the tour"
    );

    // Step 3: transparent overlay over the feed, closed by scrolling.
    let mut step = OverlaySession::new(
        OverlayConfig::new(PlainCallout::new("feed_tip"))
            .with_overlay_transparent(true)
            .with_top_barrier("toolbar")
            .with_bottom_barrier("composer"),
    );
    let done = Rc::clone(&finished);
    step.set_on_dismiss(move || done.set(done.get() + 1));
    if let Err(err) = step.show(&mut host) {
        warn!(%err, "step three failed");
    }
    let mut y = 500.0;
    let t = host.now();
    step.handle_pointer(
        &PointerEvent::new(PointerAction::Down, Point::new(60.0, y), t),
        &mut host,
    );
    for frame in 1..=20_u64 {
        y -= 12.0;
        let due = host.advance(16);
        step.handle_pointer(
            &PointerEvent::new(PointerAction::Move, Point::new(60.0, y), t + frame * 16),
            &mut host,
        );
        if due && step.poll_timers(&mut host) {
            info!(frame, "overlay closed itself while scrolling");
            break;
        }
    }
    assert_eq!(step.state(), SessionState::Dismissed);

    info!(steps = finished.get(), forwarded = host.forwarded().len(), "tour finished");
}
