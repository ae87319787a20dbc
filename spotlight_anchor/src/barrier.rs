// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barrier handles and their sampled rectangles.

use kurbo::Rect;

/// One edge of the anchor window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Side {
    /// All sides in resolution order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];
}

/// Optional handles to up to four barrier elements.
///
/// `K` is whatever the host uses to identify an element. The set is owned by the
/// caller; the engine only reads it when a window is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarrierSet<K> {
    /// Element whose right edge bounds the window on the left.
    pub left: Option<K>,
    /// Element whose left edge bounds the window on the right.
    pub right: Option<K>,
    /// Element whose bottom edge bounds the window at the top.
    pub top: Option<K>,
    /// Element whose top edge bounds the window at the bottom.
    pub bottom: Option<K>,
}

impl<K> Default for BarrierSet<K> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }
}

impl<K> BarrierSet<K> {
    /// An empty set: the window covers the whole visible frame.
    pub const fn new() -> Self {
        Self {
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// Handle configured for `side`, if any.
    pub fn get(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Top => self.top.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
        }
    }

    /// Set or clear the handle for `side`.
    pub fn set(&mut self, side: Side, element: Option<K>) {
        match side {
            Side::Left => self.left = element,
            Side::Right => self.right = element,
            Side::Top => self.top = element,
            Side::Bottom => self.bottom = element,
        }
    }

    /// Returns `true` if no barrier is configured.
    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|s| self.get(*s).is_none())
    }

    /// Read the screen-space rectangle of every configured barrier.
    ///
    /// `lookup` returns `None` for elements that are not laid out; those sides are
    /// treated as unconstrained.
    pub fn sample(&self, mut lookup: impl FnMut(&K) -> Option<Rect>) -> BarrierRects {
        let mut rects = BarrierRects::default();
        for side in Side::ALL {
            let rect = self.get(side).and_then(&mut lookup);
            rects.set(side, rect);
        }
        rects
    }
}

/// Screen-space rectangles of the barriers, sampled once at show time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BarrierRects {
    /// Left barrier rectangle.
    pub left: Option<Rect>,
    /// Right barrier rectangle.
    pub right: Option<Rect>,
    /// Top barrier rectangle.
    pub top: Option<Rect>,
    /// Bottom barrier rectangle.
    pub bottom: Option<Rect>,
}

impl BarrierRects {
    /// Rectangle sampled for `side`, if any.
    pub fn get(&self, side: Side) -> Option<Rect> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Set or clear the rectangle for `side`.
    pub fn set(&mut self, side: Side, rect: Option<Rect>) {
        match side {
            Side::Left => self.left = rect,
            Side::Right => self.right = rect,
            Side::Top => self.top = rect,
            Side::Bottom => self.bottom = rect,
        }
    }
}
