//! Immutable 2D point.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::GeometryError;

/// A point in the plane with finite coordinates.
///
/// Points are plain values: `Copy`, compared by exact coordinate equality.
/// The natural order ([`Ord`]) sorts by y, then by x.
///
/// # Examples
/// ```
/// use kdtree2d::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(0.3, 0.4);
/// assert_eq!(a.distance_squared_to(&b), 0.25);
/// assert_eq!(a.distance_to(&b), 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    ///
    /// # Panics
    /// Panics if either coordinate is NaN or infinite. Use [`Point::try_new`]
    /// to handle that case without panicking.
    pub fn new(x: f64, y: f64) -> Self {
        match Self::try_new(x, y) {
            Ok(point) => point,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a point, rejecting non-finite coordinates.
    ///
    /// # Errors
    /// [`GeometryError::NonFinite`] if either coordinate is NaN or infinite.
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFinite { x, y });
        }
        // -0.0 + 0.0 == +0.0, so equality, hashing and ordering agree
        Ok(Self { x: x + 0.0, y: y + 0.0 })
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Compares by x coordinate only.
    #[inline]
    pub fn cmp_x(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x)
    }

    /// Compares by y coordinate only.
    #[inline]
    pub fn cmp_y(&self, other: &Point) -> Ordering {
        self.y.total_cmp(&other.y)
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_y(other).then_with(|| self.cmp_x(other))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Panics on non-finite coordinates, like [`Point::new`].
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(0.25, 0.75);
        assert_eq!(p.x(), 0.25);
        assert_eq!(p.y(), 0.75);
    }

    #[test]
    fn test_point_rejects_non_finite() {
        assert!(Point::try_new(f64::NAN, 0.0).is_err());
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
        assert_eq!(
            Point::try_new(f64::NEG_INFINITY, 1.0),
            Err(GeometryError::NonFinite { x: f64::NEG_INFINITY, y: 1.0 })
        );
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn test_point_new_panics_on_nan() {
        let _ = Point::new(f64::NAN, 0.5);
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let a = Point::new(-0.0, 0.0);
        let b = Point::new(0.0, -0.0);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let set: HashSet<Point> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_axis_orders() {
        let a = Point::new(0.2, 0.9);
        let b = Point::new(0.4, 0.1);
        assert_eq!(a.cmp_x(&b), Ordering::Less);
        assert_eq!(a.cmp_y(&b), Ordering::Greater);

        // Single-axis comparison ignores the other coordinate
        let c = Point::new(0.2, 0.0);
        assert_eq!(a.cmp_x(&c), Ordering::Equal);
    }

    #[test]
    fn test_natural_order_is_y_then_x() {
        let mut points = vec![
            Point::new(0.9, 0.5),
            Point::new(0.1, 0.5),
            Point::new(0.5, 0.1),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(0.5, 0.1), Point::new(0.1, 0.5), Point::new(0.9, 0.5)]
        );
    }

    #[test]
    fn test_distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.2, 0.3);
        assert!((a.distance_squared_to(&b) - 0.13).abs() < 1e-12);
        assert_eq!(a.distance_squared_to(&a), 0.0);
        assert_eq!(Point::new(3.0, 4.0).distance_to(&a), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(0.5, 1.0).to_string(), "(0.5, 1)");
    }
}
