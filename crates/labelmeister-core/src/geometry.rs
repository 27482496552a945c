//! Axis-aligned rectangle primitives shared by the grid, region and
//! placement modules.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - X grows to the right, Y grows downwards
//! - Rectangles are half-open in spirit: two rectangles that only share an
//!   edge do not overlap

use serde::{Deserialize, Serialize};

/// Slack used when comparing edge positions (one canvas unit).
pub const EDGE_TOLERANCE: f64 = 1.0;

/// Slack used when comparing areas.
pub const AREA_TOLERANCE: f64 = 0.1;

/// A point in canvas or surface space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area shared by two rectangles, zero when they are disjoint or only
    /// touch along an edge.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let overlap_x = (self.right().min(other.right()) - self.x.max(other.x)).max(0.0);
        let overlap_y = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0.0);
        overlap_x * overlap_y
    }

    /// Whether the point lies inside the rectangle, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the two rectangles share part of an edge.
    ///
    /// One edge pair must be closer than `tolerance` and the rectangles must
    /// overlap along the other axis by more than a single point, so corner
    /// contact does not count.
    pub fn shares_edge(&self, other: &Rect, tolerance: f64) -> bool {
        let vertical_overlap = spans_overlap(self.y, self.bottom(), other.y, other.bottom());
        let horizontal_overlap = spans_overlap(self.x, self.right(), other.x, other.right());

        ((other.right() - self.x).abs() < tolerance && vertical_overlap)
            || ((self.right() - other.x).abs() < tolerance && vertical_overlap)
            || ((other.bottom() - self.y).abs() < tolerance && horizontal_overlap)
            || ((self.bottom() - other.y).abs() < tolerance && horizontal_overlap)
    }

    /// Smallest rectangle enclosing every input, `None` for an empty input.
    pub fn bounding_box<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut iter = rects.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.right(), first.bottom());

        for rect in iter {
            min_x = min_x.min(rect.x);
            min_y = min_y.min(rect.y);
            max_x = max_x.max(rect.right());
            max_y = max_y.max(rect.bottom());
        }

        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

/// Open-interval overlap of `[a0, a1]` and `[b0, b1]`.
#[inline]
fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    !(a1 <= b0 || a0 >= b1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.area(), 1200.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&b), 25.0);

        // Touching along an edge is not overlap
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&c), 0.0);

        let far = Rect::new(100.0, 100.0, 1.0, 1.0);
        assert_eq!(a.intersection_area(&far), 0.0);
    }

    #[test]
    fn test_contains_includes_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_shares_edge_each_side() {
        let center = Rect::new(10.0, 10.0, 10.0, 10.0);
        let right = Rect::new(20.0, 10.0, 10.0, 10.0);
        let left = Rect::new(0.0, 10.0, 10.0, 10.0);
        let top = Rect::new(10.0, 0.0, 10.0, 10.0);
        let bottom = Rect::new(10.0, 20.0, 10.0, 10.0);

        for other in [right, left, top, bottom] {
            assert!(center.shares_edge(&other, EDGE_TOLERANCE));
        }
    }

    #[test]
    fn test_corner_contact_is_not_an_edge() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let diagonal = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.shares_edge(&diagonal, EDGE_TOLERANCE));
    }

    #[test]
    fn test_shares_edge_within_tolerance() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.5, 0.0, 10.0, 10.0);
        assert!(a.shares_edge(&b, EDGE_TOLERANCE));

        let c = Rect::new(11.5, 0.0, 10.0, 10.0);
        assert!(!a.shares_edge(&c, EDGE_TOLERANCE));
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(Rect::bounding_box(Vec::new()), None);

        let bbox = Rect::bounding_box([
            Rect::new(-10.0, -20.0, 50.0, 60.0),
            Rect::new(30.0, 40.0, 20.0, 30.0),
        ]);
        assert_eq!(bbox, Some(Rect::new(-10.0, -20.0, 60.0, 90.0)));
    }
}
