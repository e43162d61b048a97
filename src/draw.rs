//! Rendering seam for visualising a point index.
//!
//! The crate does not render anything itself. Callers implement [`Canvas`]
//! for their drawing surface (SVG writer, GUI, terminal) and hand it to
//! [`KdTree::draw`](crate::KdTree::draw) or
//! [`PointSet::draw`](crate::PointSet::draw).

use crate::kdtree::Orientation;
use crate::point::Point;

/// A drawing surface that can plot points and splitting segments.
pub trait Canvas {
    /// Plots a stored point.
    fn point(&mut self, point: Point);

    /// Draws a splitting segment from `from` to `to`.
    ///
    /// `orientation` is [`Orientation::SplitOnX`] for vertical dividers and
    /// [`Orientation::SplitOnY`] for horizontal ones.
    fn segment(&mut self, from: Point, to: Point, orientation: Orientation);
}

/// One splitting line of a 2D-tree, clipped to its node's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partition {
    /// The node point the line passes through.
    pub point: Point,
    /// Vertical ([`Orientation::SplitOnX`]) or horizontal line.
    pub orientation: Orientation,
    /// Bottom end (vertical) or left end (horizontal).
    pub from: Point,
    /// Top end (vertical) or right end (horizontal).
    pub to: Point,
}

/// Collects everything drawn into plain vectors.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) points: Vec<Point>,
    pub(crate) partitions: Vec<Partition>,
}

impl Canvas for Recorder {
    fn point(&mut self, point: Point) {
        self.points.push(point);
    }

    fn segment(&mut self, from: Point, to: Point, orientation: Orientation) {
        // Partitions are recorded right after their node point
        let point = self.points.last().copied().unwrap_or(from);
        self.partitions.push(Partition { point, orientation, from, to });
    }
}
