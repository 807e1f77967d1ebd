// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial predicates for selection rectangles and small vector helpers.
//!
//! A selection is described by the two corners the pointer produced: where the
//! gesture started and where it is now. The user may drag in any of the four
//! directions, so every predicate first normalizes the corners per axis.
//!
//! ```
//! use kurbo::Point;
//! use understory_box_world::geom::{contains, overlaps};
//! use understory_box_world::Bounds;
//!
//! let bounds = Bounds { left: 5.0, right: 15.0, top: 5.0, bottom: 15.0 };
//! // Partial cover counts.
//! assert!(overlaps(bounds, Point::new(20.0, 20.0), Point::new(10.0, 10.0)));
//! // Containment is inclusive on the boundary.
//! let (a, b) = (Some(Point::new(0.0, 0.0)), Some(Point::new(20.0, 20.0)));
//! assert!(contains(Point::new(20.0, 0.0), a, b));
//! assert!(!contains(Point::new(20.0, 0.0), a, None));
//! ```

use kurbo::{Point, Rect, Vec2};

use crate::types::Bounds;

/// Normalize two selection corners into a rectangle with `x0 <= x1`, `y0 <= y1`.
pub fn selection_rect(start: Point, end: Point) -> Rect {
    Rect::new(
        start.x.min(end.x),
        start.y.min(end.y),
        start.x.max(end.x),
        start.y.max(end.y),
    )
}

/// Rectangle/box intersection test against a selection given by two corners.
///
/// This is an intersection test, not containment: a box partially covered by
/// the selection counts. Touching edges count as covered.
pub fn overlaps(bounds: Bounds, start: Point, end: Point) -> bool {
    overlaps_rect(bounds, selection_rect(start, end))
}

/// Box intersection test against an already normalized rectangle.
///
/// Sides are compared raw: an inverted axis (`right < left`) only passes when
/// the rectangle spans the whole inverted extent.
pub fn overlaps_rect(bounds: Bounds, rect: Rect) -> bool {
    if bounds.right < rect.x0 || bounds.left > rect.x1 {
        return false;
    }
    if bounds.bottom < rect.y0 || bounds.top > rect.y1 {
        return false;
    }
    true
}

/// Whether the area a box paints intersects `rect`, edges included.
///
/// Unlike [`overlaps_rect`] this looks at pixel coverage, so an inverted box is
/// treated as the rectangle it actually covers. Use it to decide which boxes a
/// repaint of `rect` destroyed.
pub fn paints_into(bounds: Bounds, rect: Rect) -> bool {
    let covered = bounds.to_rect();
    covered.x1 >= rect.x0
        && covered.x0 <= rect.x1
        && covered.y1 >= rect.y0
        && covered.y0 <= rect.y1
}

/// Inclusive point containment in a selection given by two optional corners.
///
/// Returns `false` if either corner is missing (no active selection).
pub fn contains(point: Point, start: Option<Point>, end: Option<Point>) -> bool {
    let (Some(start), Some(end)) = (start, end) else {
        return false;
    };
    contains_rect(point, selection_rect(start, end))
}

/// Inclusive point containment in a normalized rectangle.
pub fn contains_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Whether a box touches the band of width `2 * half_width` centered on the
/// outline of `rect`.
///
/// Boxes lying strictly inside the inner edge of the band, or entirely outside
/// its outer edge, are not touched.
pub fn touches_outline(bounds: Bounds, rect: Rect, half_width: f64) -> bool {
    let half_width = half_width.max(0.0);
    if !paints_into(bounds, rect.inflate(half_width, half_width)) {
        return false;
    }
    let inner = rect.inflate(-half_width, -half_width);
    if inner.width() <= 0.0 || inner.height() <= 0.0 {
        return true;
    }
    let covered = bounds.to_rect();
    !(covered.x0 > inner.x0
        && covered.x1 < inner.x1
        && covered.y0 > inner.y0
        && covered.y1 < inner.y1)
}

/// Displacement from `b` to `a` (`a - b`).
pub fn displacement(a: Point, b: Point) -> Vec2 {
    a - b
}

/// Translate a point by a vector (`a + b`).
pub fn sum(a: Point, b: Vec2) -> Point {
    a + b
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    displacement(a, b).hypot()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::from_origin_dimensions(Point::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlap_is_symmetric_in_selection_direction() {
        let b = bounds(10.0, 10.0, 10.0, 10.0);
        let corners = [
            (Point::new(0.0, 0.0), Point::new(12.0, 12.0)),
            (Point::new(25.0, 0.0), Point::new(15.0, 30.0)),
            (Point::new(30.0, 30.0), Point::new(21.0, 21.0)),
            (Point::new(0.0, 15.0), Point::new(9.0, 40.0)),
            (Point::new(20.0, 20.0), Point::new(20.0, 20.0)),
        ];
        for (a, c) in corners {
            assert_eq!(
                overlaps(b, a, c),
                overlaps(b, c, a),
                "direction must not matter for {a:?} {c:?}"
            );
        }
    }

    #[test]
    fn partial_cover_counts() {
        let b = bounds(10.0, 10.0, 10.0, 10.0);
        assert!(overlaps(b, Point::new(0.0, 0.0), Point::new(12.0, 12.0)));
        assert!(overlaps(b, Point::new(15.0, 0.0), Point::new(16.0, 100.0)));
        assert!(!overlaps(b, Point::new(0.0, 0.0), Point::new(9.0, 100.0)));
        assert!(!overlaps(b, Point::new(0.0, 21.0), Point::new(100.0, 30.0)));
    }

    #[test]
    fn touching_edges_count() {
        let b = bounds(10.0, 10.0, 10.0, 10.0);
        assert!(overlaps(b, Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        assert!(overlaps(b, Point::new(20.0, 20.0), Point::new(30.0, 30.0)));
    }

    #[test]
    fn inverted_box_needs_full_span() {
        // Spans x in [5, 10] inverted.
        let b = bounds(10.0, 0.0, -5.0, 10.0);
        assert!(!overlaps(b, Point::new(7.0, 0.0), Point::new(20.0, 10.0)));
        assert!(overlaps(b, Point::new(4.0, 0.0), Point::new(11.0, 10.0)));
    }

    #[test]
    fn inverted_box_paints_where_it_covers() {
        let b = bounds(10.0, 0.0, -5.0, 10.0);
        let rect = Rect::new(7.0, 0.0, 20.0, 10.0);
        assert!(!overlaps_rect(b, rect));
        assert!(paints_into(b, rect));
        assert!(!paints_into(b, Rect::new(11.0, 0.0, 20.0, 10.0)));
        assert!(touches_outline(b, Rect::new(8.0, -20.0, 40.0, 40.0), 1.0));
    }

    #[test]
    fn contains_is_inclusive_and_needs_both_corners() {
        let a = Some(Point::new(40.0, 40.0));
        let b = Some(Point::new(10.0, 10.0));
        assert!(contains(Point::new(10.0, 40.0), a, b));
        assert!(contains(Point::new(25.0, 25.0), a, b));
        assert!(!contains(Point::new(41.0, 25.0), a, b));
        assert!(!contains(Point::new(25.0, 25.0), None, b));
        assert!(!contains(Point::new(25.0, 25.0), a, None));
    }

    #[test]
    fn outline_band() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // On the edge.
        assert!(touches_outline(bounds(98.0, 50.0, 4.0, 4.0), rect, 1.0));
        // Deep inside.
        assert!(!touches_outline(bounds(40.0, 40.0, 5.0, 5.0), rect, 1.0));
        // Far outside.
        assert!(!touches_outline(bounds(200.0, 200.0, 5.0, 5.0), rect, 1.0));
        // Degenerate rect: every overlap touches the band.
        let thin = Rect::new(10.0, 10.0, 11.0, 50.0);
        assert!(touches_outline(bounds(10.0, 20.0, 1.0, 1.0), thin, 1.0));
    }

    #[test]
    fn vector_helpers() {
        let a = Point::new(4.0, 6.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(displacement(a, b), Vec2::new(3.0, 4.0));
        assert_eq!(sum(b, Vec2::new(3.0, 4.0)), a);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
    }
}
