//! Axis-aligned bounding boxes for selection and transform overlays.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box over world coordinates.
///
/// [`Bounds::EMPTY`] is the identity element for [`Bounds::merge`]: folding
/// any collection of boxes starting from it yields the same envelope in any
/// order. Selection sets are unordered and built incrementally (shift-click,
/// marquee drag), so the accumulated rectangle must not depend on insertion
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The "no box accumulated yet" value.
    ///
    /// All four fields are infinite; only `min_x` is inspected when testing
    /// for emptiness, matching [`Bounds::is_empty`].
    pub const EMPTY: Bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Create a bounding box from its edges.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box from two opposite corners in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Whether this is the empty accumulator value.
    pub fn is_empty(&self) -> bool {
        self.min_x == f64::INFINITY
    }

    /// Merge another box into this accumulator.
    ///
    /// An empty accumulator yields `next` verbatim (first box wins, no merge
    /// arithmetic); otherwise the result is the componentwise envelope. The
    /// operation is associative and commutative, with [`Bounds::EMPTY`] as
    /// identity on either side.
    pub fn merge(self, next: Bounds) -> Bounds {
        if self.is_empty() {
            return next;
        }
        Bounds {
            min_x: self.min_x.min(next.min_x),
            min_y: self.min_y.min(next.min_y),
            max_x: self.max_x.max(next.max_x),
            max_y: self.max_y.max(next.max_y),
        }
    }

    /// Fold [`Bounds::merge`] over a collection, starting from the empty
    /// accumulator.
    pub fn merge_all<I>(boxes: I) -> Bounds
    where
        I: IntoIterator<Item = Bounds>,
    {
        boxes.into_iter().fold(Bounds::EMPTY, Bounds::merge)
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the box contains a point (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Whether two boxes overlap (edge contact counts).
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Shift the box by a delta.
    pub fn translate(self, delta: Vec2) -> Bounds {
        Bounds {
            min_x: self.min_x + delta.x,
            min_y: self.min_y + delta.y,
            max_x: self.max_x + delta.x,
            max_y: self.max_y + delta.y,
        }
    }

    /// Grow the box outward on all sides (used for overlay padding).
    pub fn inflate(self, amount: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect::new(bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_identity() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Bounds::EMPTY.merge(b), b);
        assert_eq!(b.merge(Bounds::EMPTY), b);
    }

    #[test]
    fn test_first_box_wins_verbatim() {
        let b = Bounds::new(-3.5, 2.0, 7.25, 9.0);
        let merged = Bounds::EMPTY.merge(b);
        assert_eq!(merged.min_x, -3.5);
        assert_eq!(merged.min_y, 2.0);
        assert_eq!(merged.max_x, 7.25);
        assert_eq!(merged.max_y, 9.0);
    }

    #[test]
    fn test_merge_envelope() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 20.0, 20.0);
        assert_eq!(a.merge(b), Bounds::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_merge_contained_box_is_absorbed() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(2.0, 2.0, 3.0, 3.0);
        assert_eq!(a.merge(b), a);
    }

    #[test]
    fn test_fold_is_order_independent() {
        let boxes = [
            Bounds::new(0.0, 0.0, 5.0, 5.0),
            Bounds::new(10.0, 10.0, 15.0, 15.0),
            Bounds::new(2.0, 2.0, 3.0, 3.0),
        ];
        let expected = Bounds::new(0.0, 0.0, 15.0, 15.0);

        // All six permutations of three boxes.
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let folded = Bounds::merge_all(order.iter().map(|&i| boxes[i]));
            assert_eq!(folded, expected);
        }
    }

    #[test]
    fn test_merge_all_of_nothing_is_empty() {
        assert!(Bounds::merge_all([]).is_empty());
    }

    #[test]
    fn test_from_points_normalizes_corners() {
        let b = Bounds::from_points(Point::new(10.0, 2.0), Point::new(-4.0, 8.0));
        assert_eq!(b, Bounds::new(-4.0, 2.0, 10.0, 8.0));
    }

    #[test]
    fn test_contains_and_intersects() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Point::new(5.0, 5.0)));
        assert!(b.contains(Point::new(0.0, 10.0)));
        assert!(!b.contains(Point::new(10.1, 5.0)));

        assert!(b.intersects(&Bounds::new(9.0, 9.0, 20.0, 20.0)));
        assert!(b.intersects(&Bounds::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!b.intersects(&Bounds::new(11.0, 11.0, 20.0, 20.0)));
    }

    #[test]
    fn test_translate_and_inflate() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            b.translate(Vec2::new(5.0, -2.0)),
            Bounds::new(5.0, -2.0, 15.0, 8.0)
        );
        assert_eq!(b.inflate(2.0), Bounds::new(-2.0, -2.0, 12.0, 12.0));
    }

    #[test]
    fn test_rect_roundtrip() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0);
        let rect: Rect = b.into();
        assert_eq!(Bounds::from(rect), b);
    }
}
