//! Brute-force reference point set.
//!
//! Stores points in an ordered set and answers range and nearest queries by
//! scanning every point. Used as a correctness oracle for [`KdTree`] and as
//! the baseline in benchmarks.
//!
//! [`KdTree`]: crate::KdTree

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::iter::Copied;

use crate::draw::Canvas;
use crate::point::Point;
use crate::rect::Rect;

/// A set of distinct points with linear-scan queries.
///
/// # Examples
/// ```
/// use kdtree2d::{Point, PointSet, Rect};
///
/// let mut set = PointSet::new();
/// set.insert(Point::new(0.2, 0.3));
/// set.insert(Point::new(0.9, 0.1));
///
/// assert_eq!(set.range(&Rect::new(0.0, 0.0, 0.5, 0.5)), vec![Point::new(0.2, 0.3)]);
/// assert_eq!(set.nearest(&Point::new(1.0, 0.0)), Some(Point::new(0.9, 0.1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self { points: BTreeSet::new() }
    }

    /// Returns the number of distinct points stored
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds `point`, returning `false` if it was already present.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    /// Tests whether an equal point is stored.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Iterates in natural point order (by y, then x).
    pub fn iter(&self) -> Copied<btree_set::Iter<'_, Point>> {
        self.points.iter().copied()
    }

    /// Returns all points inside `rect` (edges inclusive), in natural order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.query_range(rect, &mut results);
        results
    }

    /// Appends all points inside `rect` to `results`.
    pub fn query_range(&self, rect: &Rect, results: &mut Vec<Point>) {
        results.extend(self.points.iter().filter(|p| rect.contains(p)));
    }

    /// Returns a point closest to `query`, or `None` when empty.
    ///
    /// Ties go to the first point in natural order.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Like [`nearest`](Self::nearest), also returning the Euclidean distance.
    pub fn nearest_with_distance(&self, query: &Point) -> Option<(Point, f64)> {
        let mut best: Option<(Point, f64)> = None;
        for point in &self.points {
            let distance_squared = query.distance_squared_to(point);
            match best {
                Some((_, best_distance)) if distance_squared >= best_distance => {}
                _ => best = Some((*point, distance_squared)),
            }
        }
        best.map(|(point, distance_squared)| (point, distance_squared.sqrt()))
    }

    /// Plots every point.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for point in &self.points {
            canvas.point(*point);
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Point;
    type IntoIter = Copied<btree_set::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
