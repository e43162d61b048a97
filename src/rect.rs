//! Axis-aligned rectangle.

use std::fmt;

use crate::error::GeometryError;
use crate::kdtree::Orientation;
use crate::point::Point;

/// Axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// Bounds are never NaN and always ordered (`xmin <= xmax`, `ymin <= ymax`).
/// Infinite bounds are allowed, so `Rect::new(f64::NEG_INFINITY, ..)` can
/// describe half-planes or the whole plane.
///
/// # Examples
/// ```
/// use kdtree2d::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 0.5, 1.0);
/// assert!(rect.contains(&Point::new(0.5, 1.0))); // edges are inclusive
/// assert_eq!(rect.distance_squared_to(&Point::new(0.25, 0.5)), 0.0);
/// assert_eq!(rect.distance_squared_to(&Point::new(1.5, 0.5)), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Self = Self { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 };

    /// Creates a rectangle from its bounds.
    ///
    /// # Panics
    /// Panics if a bound is NaN or a minimum exceeds its maximum. Use
    /// [`Rect::try_new`] to handle that case without panicking.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        match Self::try_new(xmin, ymin, xmax, ymax) {
            Ok(rect) => rect,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a rectangle, rejecting NaN and inverted bounds.
    ///
    /// # Errors
    /// [`GeometryError::NotANumber`] if a bound is NaN,
    /// [`GeometryError::InvertedRect`] if a minimum exceeds its maximum.
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, GeometryError> {
        if xmin.is_nan() || ymin.is_nan() || xmax.is_nan() || ymax.is_nan() {
            return Err(GeometryError::NotANumber);
        }
        if xmin > xmax || ymin > ymax {
            return Err(GeometryError::InvertedRect { xmin, ymin, xmax, ymax });
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Left edge.
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom edge.
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right edge.
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top edge.
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Lower bound along the axis an orientation compares on.
    #[inline]
    pub fn min_along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::SplitOnX => self.xmin,
            Orientation::SplitOnY => self.ymin,
        }
    }

    /// Upper bound along the axis an orientation compares on.
    #[inline]
    pub fn max_along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::SplitOnX => self.xmax,
            Orientation::SplitOnY => self.ymax,
        }
    }

    /// Tests whether `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.xmin <= point.x()
            && point.x() <= self.xmax
            && self.ymin <= point.y()
            && point.y() <= self.ymax
    }

    /// Tests whether two rectangles share at least one point (edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Squared distance from `point` to the closest point of the rectangle.
    ///
    /// Zero exactly when the rectangle contains `point`.
    #[inline]
    pub fn distance_squared_to(&self, point: &Point) -> f64 {
        let dx = point.x() - point.x().clamp(self.xmin, self.xmax);
        let dy = point.y() - point.y().clamp(self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Distance from `point` to the closest point of the rectangle.
    pub fn distance_to(&self, point: &Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Smallest rectangle covering both `self` and `point`.
    #[must_use]
    pub fn expanded_to(&self, point: &Point) -> Self {
        Self {
            xmin: self.xmin.min(point.x()),
            ymin: self.ymin.min(point.y()),
            xmax: self.xmax.max(point.x()),
            ymax: self.ymax.max(point.y()),
        }
    }

    /// Splits along the line through `point` given by `orientation`.
    ///
    /// Returns the left/bottom half and the right/top half. Both halves
    /// share the dividing line. The dividing coordinate is clamped into the
    /// rectangle, so the halves are valid even for a point outside it.
    pub fn split_at(&self, point: &Point, orientation: Orientation) -> (Self, Self) {
        match orientation {
            Orientation::SplitOnX => {
                let x = point.x().clamp(self.xmin, self.xmax);
                (Self { xmax: x, ..*self }, Self { xmin: x, ..*self })
            }
            Orientation::SplitOnY => {
                let y = point.y().clamp(self.ymin, self.ymax);
                (Self { ymax: y, ..*self }, Self { ymin: y, ..*self })
            }
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}
