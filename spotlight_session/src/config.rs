// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration.
//!
//! [`OverlayOptions`] is plain data and can be loaded from a file with the `serde`
//! feature. [`OverlayConfig`] adds the element handles that only exist at runtime:
//! the anchor, the barriers and the callout content.

use spotlight_anchor::{BarrierSet, Side};
use spotlight_bubble::{BubbleStyle, TooltipPosition};
use spotlight_router::types::{DismissOn, TouchPolicy};

/// Scrim color as packed `0xAARRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScrimColor(pub u32);

impl ScrimColor {
    /// Half-transparent black.
    pub const DEFAULT: Self = Self(0x7F00_0000);

    /// Build a color from its components.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Alpha component.
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Components as `[a, r, g, b]`.
    pub const fn to_argb(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl Default for ScrimColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Data-only part of an overlay configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayOptions {
    /// Color of the scrim.
    pub overlay_color: ScrimColor,
    /// The scrim lets events through everywhere except on the callout.
    pub overlay_transparent: bool,
    /// Fade-in duration; `0` shows the overlay without animation.
    pub fade_duration_ms: u64,
    /// Regions whose taps dismiss the overlay.
    pub dismiss_on: DismissOn,
    /// The anchor stays interactive through the hole.
    pub anchor_clickable: bool,
    /// Callout placement relative to the anchor.
    pub position: TooltipPosition,
    /// Callout bubble dimensions.
    pub bubble: BubbleStyle,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            overlay_color: ScrimColor::DEFAULT,
            overlay_transparent: false,
            fade_duration_ms: 0,
            dismiss_on: DismissOn::default(),
            anchor_clickable: true,
            position: TooltipPosition::Center,
            bubble: BubbleStyle::default(),
        }
    }
}

impl OverlayOptions {
    /// Touch policy for these options.
    pub fn touch_policy(&self) -> TouchPolicy {
        TouchPolicy {
            dismiss_on: self.dismiss_on,
            anchor_clickable: self.anchor_clickable,
            overlay_transparent: self.overlay_transparent,
            ..TouchPolicy::default()
        }
    }
}

/// Configuration snapshot of one overlay.
///
/// `K` is the host's element handle, `C` the callout (see
/// [`Callout`](crate::callout::Callout)).
///
/// ```
/// use spotlight_session::callout::PlainCallout;
/// use spotlight_session::config::OverlayConfig;
/// use spotlight_session::TooltipPosition;
///
/// let config = OverlayConfig::new(PlainCallout::new("hint"))
///     .with_anchor("save_button")
///     .with_top_barrier("toolbar")
///     .with_tooltip_position(TooltipPosition::Bottom)
///     .with_dismiss_on_touch_overlay(false)
///     .with_anchor_clickable(false);
///
/// assert_eq!(config.anchor(), Some(&"save_button"));
/// assert!(!config.options().anchor_clickable);
/// ```
#[derive(Clone, Debug)]
pub struct OverlayConfig<K, C> {
    options: OverlayOptions,
    barriers: BarrierSet<K>,
    anchor: Option<K>,
    content: C,
}

impl<K, C> OverlayConfig<K, C> {
    /// Default options around `content`, without anchor or barriers.
    pub fn new(content: C) -> Self {
        Self {
            options: OverlayOptions::default(),
            barriers: BarrierSet::new(),
            anchor: None,
            content,
        }
    }

    /// Replace all data options at once, for example with loaded ones.
    pub fn with_options(mut self, options: OverlayOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the scrim color.
    pub fn with_overlay_color(mut self, color: ScrimColor) -> Self {
        self.options.overlay_color = color;
        self
    }

    /// Make the scrim transparent to events outside the callout.
    pub fn with_overlay_transparent(mut self, transparent: bool) -> Self {
        self.options.overlay_transparent = transparent;
        self
    }

    /// Set the fade-in duration.
    pub fn with_fade_duration_ms(mut self, duration: u64) -> Self {
        self.options.fade_duration_ms = duration;
        self
    }

    /// Dismiss on taps outside the anchor window.
    pub fn with_dismiss_on_touch_outside(self, dismiss: bool) -> Self {
        self.with_dismiss_flag(DismissOn::OUTSIDE, dismiss)
    }

    /// Dismiss on taps on the scrim hole.
    pub fn with_dismiss_on_touch_overlay(self, dismiss: bool) -> Self {
        self.with_dismiss_flag(DismissOn::OVERLAY, dismiss)
    }

    /// Dismiss on taps on the anchor.
    pub fn with_dismiss_on_touch_anchor(self, dismiss: bool) -> Self {
        self.with_dismiss_flag(DismissOn::ANCHOR, dismiss)
    }

    fn with_dismiss_flag(mut self, flag: DismissOn, on: bool) -> Self {
        self.options.dismiss_on.set(flag, on);
        self
    }

    /// Keep the anchor interactive through the hole.
    pub fn with_anchor_clickable(mut self, clickable: bool) -> Self {
        self.options.anchor_clickable = clickable;
        self
    }

    /// Set the callout placement.
    pub fn with_tooltip_position(mut self, position: TooltipPosition) -> Self {
        self.options.position = position;
        self
    }

    /// Set the callout bubble dimensions.
    pub fn with_bubble_style(mut self, style: BubbleStyle) -> Self {
        self.options.bubble = style;
        self
    }

    /// Set the anchor element.
    pub fn with_anchor(mut self, anchor: K) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Constrain one side of the anchor window.
    pub fn with_barrier(mut self, side: Side, element: K) -> Self {
        self.barriers.set(side, Some(element));
        self
    }

    /// Constrain the left edge of the anchor window.
    pub fn with_left_barrier(self, element: K) -> Self {
        self.with_barrier(Side::Left, element)
    }

    /// Constrain the right edge of the anchor window.
    pub fn with_right_barrier(self, element: K) -> Self {
        self.with_barrier(Side::Right, element)
    }

    /// Constrain the top edge of the anchor window.
    pub fn with_top_barrier(self, element: K) -> Self {
        self.with_barrier(Side::Top, element)
    }

    /// Constrain the bottom edge of the anchor window.
    pub fn with_bottom_barrier(self, element: K) -> Self {
        self.with_barrier(Side::Bottom, element)
    }

    /// Data options.
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Barrier elements.
    pub fn barriers(&self) -> &BarrierSet<K> {
        &self.barriers
    }

    /// Anchor element, if any.
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    /// Callout content.
    pub fn content(&self) -> &C {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = OverlayOptions::default();
        assert_eq!(options.overlay_color, ScrimColor(0x7F00_0000));
        assert!(!options.overlay_transparent);
        assert_eq!(options.fade_duration_ms, 0);
        assert_eq!(options.dismiss_on, DismissOn::all());
        assert!(options.anchor_clickable);
        assert_eq!(options.position, TooltipPosition::Center);
    }

    #[test]
    fn dismiss_builders_toggle_single_flags() {
        let config = OverlayConfig::<u32, ()>::new(())
            .with_dismiss_on_touch_outside(false)
            .with_dismiss_on_touch_anchor(false);
        assert_eq!(config.options().dismiss_on, DismissOn::OVERLAY);

        let config = config.with_dismiss_on_touch_anchor(true);
        assert_eq!(
            config.options().dismiss_on,
            DismissOn::OVERLAY | DismissOn::ANCHOR
        );
    }

    #[test]
    fn barriers_are_recorded_per_side() {
        let config = OverlayConfig::<u32, ()>::new(())
            .with_left_barrier(1)
            .with_bottom_barrier(4);
        assert_eq!(config.barriers().get(Side::Left), Some(&1));
        assert_eq!(config.barriers().get(Side::Right), None);
        assert_eq!(config.barriers().get(Side::Bottom), Some(&4));
        assert!(config.anchor().is_none());
    }

    #[test]
    fn touch_policy_follows_options() {
        let options = OverlayOptions {
            overlay_transparent: true,
            anchor_clickable: false,
            dismiss_on: DismissOn::OUTSIDE,
            ..OverlayOptions::default()
        };
        let policy = options.touch_policy();
        assert!(policy.overlay_transparent);
        assert!(!policy.anchor_clickable);
        assert_eq!(policy.dismiss_on, DismissOn::OUTSIDE);
        assert_eq!(policy.tap_tolerance, 30.0);
        assert_eq!(policy.drag_dismiss_delay_ms, 200);
    }

    #[test]
    fn scrim_color_components() {
        let color = ScrimColor::from_argb(0x7F, 0x10, 0x20, 0x30);
        assert_eq!(color, ScrimColor(0x7F10_2030));
        assert_eq!(color.alpha(), 0x7F);
        assert_eq!(color.to_argb(), [0x7F, 0x10, 0x20, 0x30]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_load_from_ron() {
        let text = r#"(
            overlay_transparent: true,
            fade_duration_ms: 150,
            position: Bottom,
            dismiss_on: "OUTSIDE",
        )"#;
        let options: OverlayOptions = ron::from_str(text).expect("valid options");
        assert!(options.overlay_transparent);
        assert_eq!(options.fade_duration_ms, 150);
        assert_eq!(options.position, TooltipPosition::Bottom);
        assert_eq!(options.dismiss_on, DismissOn::OUTSIDE);
        assert_eq!(options.overlay_color, ScrimColor::DEFAULT);
        assert_eq!(options.bubble, BubbleStyle::default());
    }
}
