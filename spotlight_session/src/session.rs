// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay session state machine.

use std::fmt;

use kurbo::{Rect, Size};
use spotlight_anchor::{AnchorWindow, SurfaceSpace, resolve};
use spotlight_bubble::{CalloutGeometry, TooltipPosition, layout, outline};
use spotlight_router::router::TouchRouter;
use spotlight_router::types::{Dismiss, PointerEvent, Regions};
use tracing::{debug, trace, warn};

use crate::callout::Callout;
use crate::config::OverlayConfig;
use crate::error::{ConfigError, ShowError, ShowResult};
use crate::host::{OverlayHost, Scrim};
use crate::timer::DismissTimer;

/// Lifecycle of an overlay session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Not shown yet, possibly waiting for the anchor to be laid out.
    Pending,
    /// On screen and routing events.
    Showing,
    /// Tearing down.
    Dismissing,
    /// Gone for good.
    Dismissed,
}

/// Outcome of a successful show request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShowStatus {
    /// The overlay is on screen.
    Shown,
    /// The anchor or content could not be measured yet; call
    /// [`OverlaySession::on_layout`] after the next layout pass.
    Deferred,
}

/// What the host should do with an event after the session has seen it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventDisposition {
    /// The overlay swallowed the event.
    Consumed,
    /// The overlay did not consume the event.
    Passed,
}

impl EventDisposition {
    /// Returns `true` for [`EventDisposition::Consumed`].
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Vertical band the callout is laid out in, in surface space.
///
/// The band always spans the anchor window horizontally. [`TooltipPosition::Top`]
/// uses the space between the window top and the anchor, [`TooltipPosition::Bottom`]
/// the space between the anchor and the window bottom, and
/// [`TooltipPosition::Center`] the largest band centered on the anchor (or on the
/// window without an anchor) that fits in the window.
pub fn callout_bounds(position: TooltipPosition, window: Rect, anchor: Option<Rect>) -> Rect {
    match (position, anchor) {
        (TooltipPosition::Top, Some(a)) => {
            Rect::new(window.x0, window.y0, window.x1, a.y0.max(window.y0))
        }
        (TooltipPosition::Bottom, Some(a)) => {
            Rect::new(window.x0, a.y1.min(window.y1), window.x1, window.y1)
        }
        (TooltipPosition::Center, _) | (_, None) => {
            let cy = anchor.map_or(window.center().y, |a| a.center().y);
            let half = (cy - window.y0).min(window.y1 - cy).max(0.0);
            Rect::new(window.x0, cy - half, window.x1, cy + half)
        }
    }
}

/// One spotlight overlay, from show to dismissal.
///
/// A session is single use: once dismissed, it stays dismissed and every operation
/// is a no-op. All side effects go through the [`OverlayHost`] passed to each call.
pub struct OverlaySession<K, C> {
    config: OverlayConfig<K, C>,
    state: SessionState,
    deferred: bool,
    modal_installed: bool,
    router: TouchRouter,
    timer: DismissTimer,
    scrim: Option<Scrim>,
    on_dismiss: Option<Box<dyn FnOnce()>>,
}

impl<K: fmt::Debug, C: fmt::Debug> fmt::Debug for OverlaySession<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlaySession")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("deferred", &self.deferred)
            .field("modal_installed", &self.modal_installed)
            .field("router", &self.router)
            .field("timer", &self.timer)
            .field("scrim", &self.scrim)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

impl<K, C: Callout<K>> OverlaySession<K, C> {
    /// Create a pending session for `config`.
    pub fn new(config: OverlayConfig<K, C>) -> Self {
        let router = TouchRouter::new(config.options().touch_policy());
        Self {
            config,
            state: SessionState::Pending,
            deferred: false,
            modal_installed: false,
            router,
            timer: DismissTimer::new(),
            scrim: None,
            on_dismiss: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` while the overlay is on screen.
    pub fn is_showing(&self) -> bool {
        self.state == SessionState::Showing
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &OverlayConfig<K, C> {
        &self.config
    }

    /// The current modal surface description, once shown.
    pub fn scrim(&self) -> Option<&Scrim> {
        self.scrim.as_ref()
    }

    /// The resolved anchor window, once shown.
    pub fn anchor_window(&self) -> Option<AnchorWindow> {
        self.scrim.as_ref().map(|s| s.anchor_window)
    }

    /// The callout geometry, once shown.
    pub fn callout(&self) -> Option<&CalloutGeometry> {
        self.scrim.as_ref().map(|s| &s.callout)
    }

    /// Deadline of the pending delayed dismissal.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Register the dismissal callback, replacing any earlier one.
    ///
    /// It runs exactly once, when the session becomes [`SessionState::Dismissed`].
    /// A callback registered after that point never runs.
    pub fn set_on_dismiss(&mut self, listener: impl FnOnce() + 'static) {
        self.on_dismiss = Some(Box::new(listener));
    }

    /// Put the overlay on screen.
    ///
    /// Fails if the session is already showing or was dismissed, or if an arrow
    /// position is requested without an anchor. When the anchor or the callout
    /// cannot be measured yet the show is deferred until [`Self::on_layout`].
    pub fn show<H: OverlayHost<K>>(&mut self, host: &mut H) -> ShowResult<ShowStatus> {
        match self.state {
            SessionState::Pending => {}
            SessionState::Showing => return Err(ShowError::AlreadyShown),
            SessionState::Dismissing | SessionState::Dismissed => {
                return Err(ShowError::Dismissed);
            }
        }
        let position = self.config.options().position;
        if position.has_arrow() && self.config.anchor().is_none() {
            return Err(ConfigError::MissingAnchor { position }.into());
        }
        Ok(self.try_show(host))
    }

    /// Complete a deferred show after a layout pass.
    ///
    /// Returns `None` when no show is waiting.
    pub fn on_layout<H: OverlayHost<K>>(&mut self, host: &mut H) -> Option<ShowStatus> {
        if self.state != SessionState::Pending || !self.deferred {
            return None;
        }
        Some(self.try_show(host))
    }

    fn try_show<H: OverlayHost<K>>(&mut self, host: &mut H) -> ShowStatus {
        let Some(scrim) = self.compute_scrim(host) else {
            debug!("anchor or callout not laid out yet, deferring show");
            self.deferred = true;
            return ShowStatus::Deferred;
        };
        self.deferred = false;

        host.install_modal(&scrim);
        self.modal_installed = true;
        let fade = self.config.options().fade_duration_ms;
        if fade > 0 {
            host.fade_in(fade);
        }
        self.router.reset();
        self.state = SessionState::Showing;
        debug!(
            window = ?scrim.anchor_window.rect(),
            callout = ?scrim.callout.placement_rect,
            "overlay shown"
        );
        self.scrim = Some(scrim);
        ShowStatus::Shown
    }

    /// Resolve the anchor window and lay out the callout against the current
    /// element positions. Returns `None` while something is not laid out.
    fn compute_scrim<H: OverlayHost<K>>(&mut self, host: &mut H) -> Option<Scrim> {
        let frame = host.visible_frame();
        let surface = SurfaceSpace::for_frame(frame);
        let anchor = match self.config.anchor() {
            Some(element) => Some(surface.rect_from_screen(host.element_rect(element)?)),
            None => None,
        };

        let barriers = self
            .config
            .barriers()
            .sample(|element| host.element_rect(element));
        let anchor_window = resolve(frame, &barriers);
        if anchor_window.is_degenerate() {
            warn!(window = ?anchor_window.rect(), "barriers overlap, anchor window is empty");
        }

        let options = *self.config.options();
        let style = &options.bubble;
        let bounds = callout_bounds(options.position, anchor_window.rect(), anchor);
        let arrow_band = if options.position.has_arrow() {
            style.arrow_height
        } else {
            0.0
        };
        let available = Size::new(
            (bounds.width() - style.padding.x0 - style.padding.x1).max(0.0),
            (bounds.height() - style.padding.y0 - style.padding.y1 - arrow_band).max(0.0),
        );
        let content = host.measure(self.config.content().element(), available)?;

        let target = anchor.map(|a| a.center().x);
        let shape = match (target, self.config.content_mut().arrow_anchor()) {
            (Some(x), Some(arrow)) => {
                arrow.set_arrow_target(x, options.position);
                options.position
            }
            _ => TooltipPosition::Center,
        };
        let callout = layout(shape, content, target, bounds, style);
        let callout_outline = outline(&callout, style);

        if let Some(element) = self.config.anchor() {
            host.capture_snapshot(element);
        }

        Some(Scrim {
            frame,
            surface,
            color: options.overlay_color,
            transparent: options.overlay_transparent,
            anchor_window,
            anchor,
            callout,
            callout_outline,
        })
    }

    /// Re-resolve barriers, anchor and callout while showing.
    ///
    /// Barriers are otherwise sampled only once, at show time. Returns `true` if the
    /// modal surface was updated; when something is no longer laid out the previous
    /// layout is kept.
    pub fn recompute<H: OverlayHost<K>>(&mut self, host: &mut H) -> bool {
        if self.state != SessionState::Showing {
            return false;
        }
        let Some(scrim) = self.compute_scrim(host) else {
            debug!("recompute skipped, elements not laid out");
            return false;
        };
        host.update_modal(&scrim);
        self.scrim = Some(scrim);
        true
    }

    /// Route one pointer event (in surface space).
    ///
    /// Forwarding and dismissal are executed on `host`. Events that arrive while
    /// the overlay is not showing are passed without any effect.
    pub fn handle_pointer<H: OverlayHost<K>>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) -> EventDisposition {
        if self.state != SessionState::Showing {
            return EventDisposition::Passed;
        }
        let Some(scrim) = self.scrim.as_ref() else {
            return EventDisposition::Passed;
        };
        let regions = Regions {
            anchor: scrim.anchor,
            anchor_window: scrim.anchor_window.rect(),
            callout: scrim.callout.placement_rect,
        };
        let decision = self.router.route(event, &regions);
        trace!(
            action = ?event.action,
            region = ?decision.classification.region,
            tap = decision.tap,
            dismiss = ?decision.dismiss,
            forward = decision.forward,
            consumed = decision.consumed,
            "pointer routed"
        );

        match decision.dismiss {
            Dismiss::Now if decision.forward_first => {
                if decision.forward {
                    host.forward(event);
                }
                self.dismiss(host);
            }
            Dismiss::Now => {
                self.dismiss(host);
                if decision.forward {
                    host.forward(event);
                }
            }
            Dismiss::After(delay) => {
                if decision.forward {
                    host.forward(event);
                }
                self.dismiss_after(delay, host);
            }
            Dismiss::Keep => {
                if decision.forward {
                    host.forward(event);
                }
            }
        }

        if decision.consumed {
            EventDisposition::Consumed
        } else {
            EventDisposition::Passed
        }
    }

    /// Dismiss the overlay. Idempotent.
    ///
    /// Cancels the pending delayed dismissal, removes the modal surface if it was
    /// installed, and runs the dismissal callback. Dismissing a pending session
    /// abandons a deferred show.
    pub fn dismiss<H: OverlayHost<K>>(&mut self, host: &mut H) {
        let from = self.state;
        if matches!(from, SessionState::Dismissing | SessionState::Dismissed) {
            return;
        }
        self.state = SessionState::Dismissing;

        if self.timer.cancel() {
            host.cancel_wakeup();
        }
        if self.modal_installed {
            host.remove_modal();
            self.modal_installed = false;
        }
        self.deferred = false;
        self.router.reset();

        self.state = SessionState::Dismissed;
        debug!(from = ?from, "overlay dismissed");
        if let Some(listener) = self.on_dismiss.take() {
            listener();
        }
    }

    /// Dismiss `delay_ms` from now, replacing any pending delayed dismissal.
    ///
    /// Only has an effect while showing.
    pub fn dismiss_after<H: OverlayHost<K>>(&mut self, delay_ms: u64, host: &mut H) {
        if self.state != SessionState::Showing {
            return;
        }
        let deadline = self.timer.arm(host.now(), delay_ms);
        host.request_wakeup(deadline);
        debug!(deadline, "delayed dismissal armed");
    }

    /// Fire the delayed dismissal if it is due. Returns `true` if it dismissed.
    ///
    /// Spurious or stale wakeups are ignored.
    pub fn poll_timers<H: OverlayHost<K>>(&mut self, host: &mut H) -> bool {
        if !self.timer.take_due(host.now()) {
            return false;
        }
        if self.state != SessionState::Showing {
            trace!(state = ?self.state, "stale dismissal timer ignored");
            return false;
        }
        self.dismiss(host);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use kurbo::Point;
    use spotlight_router::types::PointerAction;

    use crate::callout::{BubbleCallout, PlainCallout};
    use crate::host::{Animator, Compositor, EventLoop};
    use spotlight_bubble::BubbleStyle;

    const FRAME: Rect = Rect::new(0.0, 40.0, 400.0, 840.0);

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Snapshot(&'static str),
        Install,
        Update,
        Remove,
        Forward(PointerAction, Point),
        FadeIn(u64),
        Wakeup(u64),
        CancelWakeup,
    }

    #[derive(Debug, Default)]
    struct FakeHost {
        rects: HashMap<&'static str, Rect>,
        sizes: HashMap<&'static str, Size>,
        now: u64,
        calls: Vec<Call>,
    }

    impl FakeHost {
        fn new() -> Self {
            let mut host = Self::default();
            // Anchor at screen y 140..190, surface y 100..150.
            host.rects
                .insert("anchor", Rect::new(100.0, 140.0, 200.0, 190.0));
            host.rects.insert("toolbar", Rect::new(0.0, 40.0, 400.0, 90.0));
            host.sizes.insert("hint", Size::new(120.0, 40.0));
            host
        }

        fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }

        fn forwarded(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Forward(..)))
                .count()
        }
    }

    impl Compositor<&'static str> for FakeHost {
        fn visible_frame(&self) -> Rect {
            FRAME
        }

        fn element_rect(&self, element: &&'static str) -> Option<Rect> {
            self.rects.get(element).copied()
        }

        fn measure(&self, element: &&'static str, _available: Size) -> Option<Size> {
            self.sizes.get(element).copied()
        }

        fn capture_snapshot(&mut self, element: &&'static str) {
            self.calls.push(Call::Snapshot(*element));
        }

        fn install_modal(&mut self, _scrim: &Scrim) {
            self.calls.push(Call::Install);
        }

        fn update_modal(&mut self, _scrim: &Scrim) {
            self.calls.push(Call::Update);
        }

        fn remove_modal(&mut self) {
            self.calls.push(Call::Remove);
        }

        fn forward(&mut self, event: &PointerEvent) {
            self.calls.push(Call::Forward(event.action, event.position));
        }
    }

    impl Animator for FakeHost {
        fn fade_in(&mut self, duration_ms: u64) {
            self.calls.push(Call::FadeIn(duration_ms));
        }
    }

    impl EventLoop for FakeHost {
        fn now(&self) -> u64 {
            self.now
        }

        fn request_wakeup(&mut self, deadline: u64) {
            self.calls.push(Call::Wakeup(deadline));
        }

        fn cancel_wakeup(&mut self) {
            self.calls.push(Call::CancelWakeup);
        }
    }

    type Config = OverlayConfig<&'static str, BubbleCallout<&'static str>>;
    type Session = OverlaySession<&'static str, BubbleCallout<&'static str>>;

    fn config() -> Config {
        OverlayConfig::new(BubbleCallout::new("hint", BubbleStyle::default()))
            .with_anchor("anchor")
            .with_tooltip_position(TooltipPosition::Bottom)
    }

    fn shown(config: Config, host: &mut FakeHost) -> Session {
        let mut session = OverlaySession::new(config);
        assert_eq!(session.show(host), Ok(ShowStatus::Shown));
        session
    }

    fn counter(session: &mut Session) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        session.set_on_dismiss(move || seen.set(seen.get() + 1));
        count
    }

    fn tap(session: &mut Session, host: &mut FakeHost, pt: Point) -> EventDisposition {
        session.handle_pointer(&PointerEvent::new(PointerAction::Down, pt, host.now), host);
        session.handle_pointer(&PointerEvent::new(PointerAction::Up, pt, host.now + 50), host)
    }

    #[test]
    fn show_resolves_window_and_places_callout_below_anchor() {
        let mut host = FakeHost::new();
        let session = shown(config().with_top_barrier("toolbar"), &mut host);
        assert!(session.is_showing());

        let window = session.anchor_window().expect("shown").rect();
        assert_eq!(window, Rect::new(0.0, 50.0, 400.0, 800.0));

        let scrim = session.scrim().expect("shown");
        assert_eq!(scrim.anchor, Some(Rect::new(100.0, 100.0, 200.0, 150.0)));
        let callout = session.callout().expect("shown");
        assert_eq!(callout.arrow_target_x, 150.0);
        assert_eq!(callout.placement_rect.y0, 150.0);
        assert_eq!(
            session.config().content().bubble().arrow_target_x(),
            Some(150.0)
        );
        assert_eq!(host.calls, vec![Call::Snapshot("anchor"), Call::Install]);
    }

    #[test]
    fn fade_in_only_with_duration() {
        let mut host = FakeHost::new();
        shown(config().with_fade_duration_ms(250), &mut host);
        assert_eq!(host.count(&Call::FadeIn(250)), 1);
    }

    #[test]
    fn plain_callout_is_laid_out_without_arrow() {
        let mut host = FakeHost::new();
        let config = OverlayConfig::new(PlainCallout::new("hint"))
            .with_anchor("anchor")
            .with_tooltip_position(TooltipPosition::Top);
        let mut session = OverlaySession::new(config);
        assert_eq!(session.show(&mut host), Ok(ShowStatus::Shown));
        let callout = session.callout().expect("shown");
        assert!(callout.arrow_side.is_none());
        // Centered in the band between the window top and the anchor.
        assert!(callout.placement_rect.y1 <= 100.0);
    }

    #[test]
    fn arrow_position_without_anchor_is_rejected() {
        let mut host = FakeHost::new();
        let config: Config = OverlayConfig::new(BubbleCallout::new("hint", BubbleStyle::default()))
            .with_tooltip_position(TooltipPosition::Top);
        let mut session = OverlaySession::new(config);
        assert_eq!(
            session.show(&mut host),
            Err(ShowError::Config(ConfigError::MissingAnchor {
                position: TooltipPosition::Top
            }))
        );
        assert_eq!(session.state(), SessionState::Pending);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn show_twice_and_after_dismiss_fail() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        assert_eq!(session.show(&mut host), Err(ShowError::AlreadyShown));
        session.dismiss(&mut host);
        assert_eq!(session.show(&mut host), Err(ShowError::Dismissed));
    }

    #[test]
    fn show_is_deferred_until_anchor_is_laid_out() {
        let mut host = FakeHost::new();
        let anchor = host.rects.remove("anchor").expect("anchor rect");
        let mut session = OverlaySession::new(config());
        assert_eq!(session.show(&mut host), Ok(ShowStatus::Deferred));
        assert_eq!(session.state(), SessionState::Pending);
        assert_eq!(session.on_layout(&mut host), Some(ShowStatus::Deferred));

        host.rects.insert("anchor", anchor);
        assert_eq!(session.on_layout(&mut host), Some(ShowStatus::Shown));
        assert!(session.is_showing());
        assert_eq!(session.on_layout(&mut host), None);
        assert_eq!(host.count(&Call::Install), 1);
    }

    #[test]
    fn dismissing_a_deferred_show_abandons_it() {
        let mut host = FakeHost::new();
        host.sizes.clear();
        let mut session = OverlaySession::new(config());
        assert_eq!(session.show(&mut host), Ok(ShowStatus::Deferred));
        session.dismiss(&mut host);
        host.sizes.insert("hint", Size::new(10.0, 10.0));
        assert_eq!(session.on_layout(&mut host), None);
        assert_eq!(host.count(&Call::Install), 0);
        assert_eq!(host.count(&Call::Remove), 0);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        let count = counter(&mut session);
        session.dismiss(&mut host);
        session.dismiss(&mut host);
        assert_eq!(count.get(), 1);
        assert_eq!(session.state(), SessionState::Dismissed);
        assert_eq!(host.count(&Call::Remove), 1);
    }

    #[test]
    fn outside_tap_forwards_then_dismisses() {
        let mut host = FakeHost::new();
        let mut session = shown(config().with_top_barrier("toolbar"), &mut host);
        let count = counter(&mut session);

        // Above the window, which starts at surface y 50.
        let disposition = tap(&mut session, &mut host, Point::new(200.0, 20.0));
        assert_eq!(disposition, EventDisposition::Passed);
        assert_eq!(count.get(), 1);
        assert_eq!(session.state(), SessionState::Dismissed);

        let up = host
            .calls
            .iter()
            .position(|c| *c == Call::Forward(PointerAction::Up, Point::new(200.0, 20.0)))
            .expect("up forwarded");
        let remove = host
            .calls
            .iter()
            .position(|c| *c == Call::Remove)
            .expect("modal removed");
        assert!(up < remove);
    }

    #[test]
    fn unclickable_anchor_tap_is_consumed_and_dismisses() {
        let mut host = FakeHost::new();
        let mut session = shown(
            config()
                .with_anchor_clickable(false)
                .with_dismiss_on_touch_anchor(true),
            &mut host,
        );
        let disposition = tap(&mut session, &mut host, Point::new(150.0, 120.0));
        assert!(disposition.is_consumed());
        assert_eq!(session.state(), SessionState::Dismissed);
        assert_eq!(host.forwarded(), 0);
    }

    #[test]
    fn clickable_anchor_tap_dismisses_then_forwards() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        let disposition = tap(&mut session, &mut host, Point::new(150.0, 120.0));
        assert_eq!(disposition, EventDisposition::Passed);
        let remove = host.calls.iter().position(|c| *c == Call::Remove);
        let up = host
            .calls
            .iter()
            .position(|c| matches!(c, Call::Forward(PointerAction::Up, _)));
        assert!(remove < up);
    }

    #[test]
    fn drag_over_opaque_overlay_keeps_it_open() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        let start = Point::new(100.0, 500.0);
        session.handle_pointer(&PointerEvent::new(PointerAction::Down, start, 0), &mut host);
        session.handle_pointer(
            &PointerEvent::new(PointerAction::Up, Point::new(145.0, 500.0), 80),
            &mut host,
        );
        assert!(session.is_showing());
        assert_eq!(host.forwarded(), 0);
    }

    #[test]
    fn transparent_drag_dismisses_after_delay() {
        let mut host = FakeHost::new();
        let mut session = shown(config().with_overlay_transparent(true), &mut host);
        let count = counter(&mut session);

        host.now = 1_000;
        let down = PointerEvent::new(PointerAction::Down, Point::new(40.0, 600.0), 1_000);
        assert_eq!(
            session.handle_pointer(&down, &mut host),
            EventDisposition::Passed
        );
        assert_eq!(session.next_deadline(), Some(1_200));
        assert_eq!(host.count(&Call::Wakeup(1_200)), 1);

        host.now = 1_100;
        let mv = PointerEvent::new(PointerAction::Move, Point::new(40.0, 650.0), 1_100);
        session.handle_pointer(&mv, &mut host);
        assert_eq!(session.next_deadline(), Some(1_200));
        assert!(!session.poll_timers(&mut host));
        assert!(session.is_showing());

        host.now = 1_201;
        assert!(session.poll_timers(&mut host));
        assert_eq!(session.state(), SessionState::Dismissed);
        assert_eq!(count.get(), 1);
        assert_eq!(host.forwarded(), 2);
    }

    #[test]
    fn manual_dismiss_cancels_pending_timer() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        session.dismiss_after(500, &mut host);
        assert_eq!(session.next_deadline(), Some(500));
        session.dismiss(&mut host);
        assert_eq!(host.count(&Call::CancelWakeup), 1);
        assert_eq!(session.next_deadline(), None);

        host.now = 10_000;
        assert!(!session.poll_timers(&mut host));
        assert_eq!(host.count(&Call::Remove), 1);
    }

    #[test]
    fn dismiss_after_is_ignored_unless_showing() {
        let mut host = FakeHost::new();
        let mut session = OverlaySession::new(config());
        session.dismiss_after(100, &mut host);
        assert_eq!(session.next_deadline(), None);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn events_after_dismissal_are_ignored() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        session.dismiss(&mut host);
        let calls = host.calls.len();
        let disposition = tap(&mut session, &mut host, Point::new(10.0, 10.0));
        assert_eq!(disposition, EventDisposition::Passed);
        assert_eq!(host.calls.len(), calls);
    }

    #[test]
    fn recompute_follows_moved_anchor() {
        let mut host = FakeHost::new();
        let mut session = shown(config(), &mut host);
        host.rects
            .insert("anchor", Rect::new(250.0, 340.0, 350.0, 390.0));
        assert!(session.recompute(&mut host));
        assert_eq!(host.count(&Call::Update), 1);
        let callout = session.callout().expect("shown");
        assert_eq!(callout.arrow_target_x, 300.0);
        assert_eq!(callout.placement_rect.y0, 350.0);

        host.rects.remove("anchor");
        assert!(!session.recompute(&mut host));
        assert_eq!(session.callout().map(|c| c.arrow_target_x), Some(300.0));
    }

    #[test]
    fn callout_bands() {
        let window = Rect::new(0.0, 50.0, 400.0, 800.0);
        let anchor = Rect::new(100.0, 100.0, 200.0, 150.0);
        assert_eq!(
            callout_bounds(TooltipPosition::Top, window, Some(anchor)),
            Rect::new(0.0, 50.0, 400.0, 100.0)
        );
        assert_eq!(
            callout_bounds(TooltipPosition::Bottom, window, Some(anchor)),
            Rect::new(0.0, 150.0, 400.0, 800.0)
        );
        assert_eq!(
            callout_bounds(TooltipPosition::Center, window, Some(anchor)),
            Rect::new(0.0, 50.0, 400.0, 200.0)
        );
        assert_eq!(
            callout_bounds(TooltipPosition::Center, window, None),
            window
        );
    }
}
