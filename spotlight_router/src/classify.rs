// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit classification by layering priority.

use kurbo::Point;

use crate::types::{Classification, HitRegion, Regions};

/// Classify `pt` against `regions`.
///
/// The anchor wins over the anchor window, which wins over the outside,
/// independent of how the rectangles overlap. The anchor test uses the anchor's
/// bounding rectangle.
///
/// ```
/// use kurbo::{Point, Rect};
/// use spotlight_router::classify::classify;
/// use spotlight_router::types::{HitRegion, Regions};
///
/// let regions = Regions {
///     anchor: Some(Rect::new(10.0, 10.0, 20.0, 20.0)),
///     anchor_window: Rect::new(0.0, 0.0, 100.0, 100.0),
///     callout: Rect::new(30.0, 30.0, 60.0, 50.0),
/// };
/// assert_eq!(classify(Point::new(15.0, 15.0), &regions).region, HitRegion::Anchor);
/// assert_eq!(classify(Point::new(50.0, 90.0), &regions).region, HitRegion::Overlay);
/// assert_eq!(classify(Point::new(150.0, 15.0), &regions).region, HitRegion::Outside);
/// ```
pub fn classify(pt: Point, regions: &Regions) -> Classification {
    let region = if regions.anchor.is_some_and(|a| a.contains(pt)) {
        HitRegion::Anchor
    } else if regions.anchor_window.contains(pt) {
        HitRegion::Overlay
    } else {
        HitRegion::Outside
    };
    Classification {
        region,
        within_callout: regions.callout.contains(pt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn regions() -> Regions {
        Regions {
            anchor: Some(Rect::new(100.0, 100.0, 200.0, 150.0)),
            anchor_window: Rect::new(0.0, 50.0, 400.0, 600.0),
            callout: Rect::new(80.0, 160.0, 300.0, 240.0),
        }
    }

    #[test]
    fn anchor_inside_window_classifies_as_anchor() {
        let c = classify(Point::new(150.0, 120.0), &regions());
        assert_eq!(c.region, HitRegion::Anchor);
        assert!(!c.within_callout);
    }

    #[test]
    fn anchor_wins_even_when_it_sticks_out_of_the_window() {
        let r = Regions {
            anchor: Some(Rect::new(-20.0, 20.0, 40.0, 80.0)),
            ..regions()
        };
        assert_eq!(
            classify(Point::new(-10.0, 30.0), &r).region,
            HitRegion::Anchor
        );
    }

    #[test]
    fn callout_is_part_of_the_overlay() {
        let c = classify(Point::new(200.0, 200.0), &regions());
        assert_eq!(c.region, HitRegion::Overlay);
        assert!(c.within_callout);
    }

    #[test]
    fn outside_the_window() {
        let c = classify(Point::new(10.0, 10.0), &regions());
        assert_eq!(c.region, HitRegion::Outside);
        assert!(!c.within_callout);
    }

    #[test]
    fn no_anchor_never_classifies_as_anchor() {
        let r = Regions {
            anchor: None,
            ..regions()
        };
        assert_eq!(
            classify(Point::new(150.0, 120.0), &r).region,
            HitRegion::Overlay
        );
    }
}
