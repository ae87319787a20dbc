// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout content and its optional arrow capability.

use spotlight_bubble::{ArrowAnchor, Bubble, BubbleStyle};

/// Content shown in the callout.
///
/// The compositor measures [`Callout::element`]. Callouts that can point an arrow at
/// the anchor expose that through [`Callout::arrow_anchor`]; the others are laid
/// out as a plain bubble, still above or below the anchor.
pub trait Callout<K> {
    /// The element the compositor measures and draws.
    fn element(&self) -> &K;

    /// The arrow capability, if this callout has one.
    fn arrow_anchor(&mut self) -> Option<&mut dyn ArrowAnchor> {
        None
    }
}

/// A callout without an arrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainCallout<K> {
    element: K,
}

impl<K> PlainCallout<K> {
    /// Wrap `element`.
    pub fn new(element: K) -> Self {
        Self { element }
    }
}

impl<K> Callout<K> for PlainCallout<K> {
    fn element(&self) -> &K {
        &self.element
    }
}

/// A callout drawn as a [`Bubble`] that follows the anchor with its arrow.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleCallout<K> {
    element: K,
    bubble: Bubble,
}

impl<K> BubbleCallout<K> {
    /// Wrap `element` in a bubble with `style`.
    pub fn new(element: K, style: BubbleStyle) -> Self {
        Self {
            element,
            bubble: Bubble::new(style),
        }
    }

    /// The bubble, carrying the arrow target set by the session.
    pub fn bubble(&self) -> &Bubble {
        &self.bubble
    }

    /// Mutable access, for example to restyle the arrow.
    pub fn bubble_mut(&mut self) -> &mut Bubble {
        &mut self.bubble
    }
}

impl<K> Callout<K> for BubbleCallout<K> {
    fn element(&self) -> &K {
        &self.element
    }

    fn arrow_anchor(&mut self) -> Option<&mut dyn ArrowAnchor> {
        Some(&mut self.bubble)
    }
}
