// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless host: named elements on a fixed screen, a manual clock, and a log of
//! what the overlay asked for.

use std::collections::HashMap;

use kurbo::{Rect, Size};
use spotlight_session::PointerEvent;
use spotlight_session::host::{Animator, Compositor, EventLoop, Scrim};
use tracing::info;

/// Element handle used by the demos.
pub type ElementId = &'static str;

/// Simulated screen with named elements.
#[derive(Clone, Debug)]
pub struct SimulatedHost {
    frame: Rect,
    elements: HashMap<ElementId, Rect>,
    content: HashMap<ElementId, Size>,
    now: u64,
    wakeup: Option<u64>,
    modal: bool,
    forwarded: Vec<PointerEvent>,
}

impl SimulatedHost {
    /// A host whose visible frame is `frame`.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            elements: HashMap::new(),
            content: HashMap::new(),
            now: 0,
            wakeup: None,
            modal: false,
            forwarded: Vec::new(),
        }
    }

    /// Place an element on screen.
    pub fn place(&mut self, id: ElementId, rect: Rect) {
        self.elements.insert(id, rect);
    }

    /// Give a callout element its preferred size.
    pub fn set_content_size(&mut self, id: ElementId, size: Size) {
        self.content.insert(id, size);
    }

    /// Advance the clock. Returns `true` if a requested wakeup is now due.
    pub fn advance(&mut self, ms: u64) -> bool {
        self.now += ms;
        self.wakeup.is_some_and(|deadline| self.now >= deadline)
    }

    /// Whether a modal surface is on screen.
    pub fn has_modal(&self) -> bool {
        self.modal
    }

    /// Events delivered to the UI underneath.
    pub fn forwarded(&self) -> &[PointerEvent] {
        &self.forwarded
    }
}

impl Compositor<ElementId> for SimulatedHost {
    fn visible_frame(&self) -> Rect {
        self.frame
    }

    fn element_rect(&self, element: &ElementId) -> Option<Rect> {
        self.elements.get(element).copied()
    }

    fn measure(&self, element: &ElementId, available: Size) -> Option<Size> {
        let size = self.content.get(element)?;
        Some(Size::new(
            size.width.min(available.width),
            size.height.min(available.height),
        ))
    }

    fn capture_snapshot(&mut self, element: &ElementId) {
        info!(element, "snapshot captured");
    }

    fn install_modal(&mut self, scrim: &Scrim) {
        self.modal = true;
        info!(
            window = ?scrim.anchor_window.rect(),
            callout = ?scrim.callout.placement_rect,
            arrow = ?scrim.callout.arrow_tip(),
            "modal installed"
        );
    }

    fn update_modal(&mut self, scrim: &Scrim) {
        info!(callout = ?scrim.callout.placement_rect, "modal updated");
    }

    fn remove_modal(&mut self) {
        self.modal = false;
        info!("modal removed");
    }

    fn forward(&mut self, event: &PointerEvent) {
        info!(action = ?event.action, position = ?event.position, "event forwarded");
        self.forwarded.push(*event);
    }
}

impl Animator for SimulatedHost {
    fn fade_in(&mut self, duration_ms: u64) {
        info!(duration_ms, "fade in");
    }
}

impl EventLoop for SimulatedHost {
    fn now(&self) -> u64 {
        self.now
    }

    fn request_wakeup(&mut self, deadline: u64) {
        self.wakeup = Some(deadline);
    }

    fn cancel_wakeup(&mut self) {
        self.wakeup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use spotlight_session::callout::BubbleCallout;
    use spotlight_session::config::OverlayConfig;
    use spotlight_session::{
        BubbleStyle, OverlaySession, PointerAction, SessionState, ShowStatus, TooltipPosition,
    };

    fn host() -> SimulatedHost {
        let mut host = SimulatedHost::new(Rect::new(0.0, 24.0, 360.0, 740.0));
        host.place("menu", Rect::new(300.0, 30.0, 350.0, 70.0));
        host.set_content_size("tip", Size::new(180.0, 36.0));
        host
    }

    #[test]
    fn wakeups_drive_the_delayed_dismissal() {
        let mut host = host();
        let config = OverlayConfig::new(BubbleCallout::new("tip", BubbleStyle::default()))
            .with_anchor("menu")
            .with_tooltip_position(TooltipPosition::Bottom)
            .with_overlay_transparent(true);
        let mut session = OverlaySession::new(config);
        assert_eq!(session.show(&mut host), Ok(ShowStatus::Shown));
        assert!(host.has_modal());

        let down = PointerEvent::new(PointerAction::Down, Point::new(20.0, 500.0), 0);
        session.handle_pointer(&down, &mut host);
        assert!(!host.advance(100));
        assert!(host.advance(100));
        assert!(session.poll_timers(&mut host));
        assert_eq!(session.state(), SessionState::Dismissed);
        assert!(!host.has_modal());
        assert_eq!(host.forwarded().len(), 1);
    }

    #[test]
    fn measure_respects_available_space() {
        let host = host();
        assert_eq!(
            host.measure(&"tip", Size::new(100.0, 100.0)),
            Some(Size::new(100.0, 36.0))
        );
        assert_eq!(host.measure(&"menu", Size::new(100.0, 100.0)), None);
    }
}
