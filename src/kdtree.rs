//! 2D-tree point index.
//!
//! Every node stores one point and divides its cell by a line through that
//! point: vertical at even depths (compare by x), horizontal at odd depths
//! (compare by y). Points strictly below the node on its axis go to the
//! left/bottom child, everything else (axis ties included) to the right/top
//! child.
//!
//! Queries carry the node's *cell* down the recursion: the tree bounds cut
//! successively by the splitting lines above the node. The cell contains
//! every point of the subtree, which is what makes the nearest-neighbor
//! prune sound.
//!
//! No rebalancing is done, so the shape depends on insertion order.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::draw::{Canvas, Partition, Recorder};
use crate::error::GeometryError;
use crate::point::Point;
use crate::rect::Rect;

/// Axis a node divides its cell along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "a plane has exactly two axes")]
pub enum Orientation {
    /// Vertical dividing line, points compared by x.
    SplitOnX,
    /// Horizontal dividing line, points compared by y.
    SplitOnY,
}

impl Orientation {
    /// The orientation used one level deeper.
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::SplitOnX => Self::SplitOnY,
            Self::SplitOnY => Self::SplitOnX,
        }
    }

    /// The coordinate of `point` along this axis.
    #[inline]
    pub fn coord(self, point: &Point) -> f64 {
        match self {
            Self::SplitOnX => point.x(),
            Self::SplitOnY => point.y(),
        }
    }

    /// Compares two points along this axis only.
    #[inline]
    pub fn compare(self, a: &Point, b: &Point) -> Ordering {
        match self {
            Self::SplitOnX => a.cmp_x(b),
            Self::SplitOnY => a.cmp_y(b),
        }
    }
}

/// Tree node. Children are exclusively owned.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) orientation: Orientation,
    /// Left/bottom subtree: compares `Less` than `point`.
    pub(crate) left: Option<Box<Node>>,
    /// Right/top subtree: compares `Equal` or `Greater`.
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    fn boxed(point: Point, orientation: Orientation) -> Box<Self> {
        Box::new(Self { point, orientation, left: None, right: None })
    }

    /// Child on the side of the dividing line where `point` belongs.
    #[inline]
    fn goes_left(&self, point: &Point) -> bool {
        self.orientation.compare(point, &self.point) == Ordering::Less
    }

    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }
}

/// Hook called for every node a query visits.
///
/// `best` is the squared distance of the nearest-neighbor candidate at the
/// time of the visit (always `None` for range queries).
pub(crate) trait Trace {
    fn visit(&mut self, point: &Point, cell: &Rect, best: Option<f64>);
}

/// Counts visited nodes for query logging.
#[derive(Debug, Default)]
pub(crate) struct VisitCount(pub(crate) usize);

impl Trace for VisitCount {
    #[inline]
    fn visit(&mut self, _point: &Point, _cell: &Rect, _best: Option<f64>) {
        self.0 += 1;
    }
}

/// Current nearest-neighbor candidate.
#[derive(Clone, Copy, Debug)]
struct Best {
    point: Point,
    distance_squared: f64,
}

/// A set of points organised as a 2D-tree.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.2, 0.3));
/// tree.insert(Point::new(0.4, 0.7));
/// tree.insert(Point::new(0.9, 0.1));
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&Point::new(0.4, 0.7)));
///
/// let found = tree.range(&Rect::new(0.0, 0.0, 0.5, 1.0));
/// assert_eq!(found.len(), 2);
///
/// assert_eq!(tree.nearest(&Point::new(0.0, 0.0)), Some(Point::new(0.2, 0.3)));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
    /// Covers every stored point; root cell of all queries
    bounds: Rect,
}

impl KdTree {
    /// Creates an empty tree over the unit square.
    pub fn new() -> Self {
        Self { root: None, len: 0, bounds: Rect::UNIT }
    }

    /// Creates an empty tree whose cells start from `bounds`.
    ///
    /// Points outside `bounds` may still be inserted; the bounds grow to
    /// cover them.
    ///
    /// # Errors
    /// [`GeometryError::Unbounded`] if a side of `bounds` is infinite.
    pub fn with_bounds(bounds: Rect) -> Result<Self, GeometryError> {
        let finite = [bounds.xmin(), bounds.ymin(), bounds.xmax(), bounds.ymax()]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GeometryError::Unbounded(bounds));
        }
        Ok(Self { root: None, len: 0, bounds })
    }

    /// Returns the number of distinct points stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The rectangle the root cell covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Adds `point` to the set.
    ///
    /// Returns `false` and leaves the tree untouched if an equal point is
    /// already stored.
    pub fn insert(&mut self, point: Point) -> bool {
        let mut slot = &mut self.root;
        let mut orientation = Orientation::SplitOnX;

        while let Some(node) = slot {
            if node.point == point {
                trace!(%point, "duplicate insert ignored");
                return false;
            }
            orientation = node.orientation.flip();
            slot = if node.goes_left(&point) { &mut node.left } else { &mut node.right };
        }
        *slot = Some(Node::boxed(point, orientation));
        self.len += 1;

        if !self.bounds.contains(&point) {
            self.bounds = self.bounds.expanded_to(&point);
            debug!(%point, bounds = %self.bounds, "bounds grown to cover point");
        }
        true
    }

    /// Tests whether an equal point is stored.
    pub fn contains(&self, point: &Point) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.point == *point {
                return true;
            }
            current = if node.goes_left(point) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Returns all stored points inside `rect` (edges inclusive).
    ///
    /// Order is unspecified.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.query_range(rect, &mut results);
        results
    }

    /// Appends all stored points inside `rect` to `results`.
    ///
    /// `results` is not cleared, so one buffer can be reused across queries.
    pub fn query_range(&self, rect: &Rect, results: &mut Vec<Point>) {
        let mut visits = VisitCount::default();
        let before = results.len();
        self.range_traced(rect, results, &mut visits);
        trace!(%rect, visited = visits.0, found = results.len() - before, "range query");
    }

    pub(crate) fn range_traced<T: Trace>(&self, rect: &Rect, results: &mut Vec<Point>, trace: &mut T) {
        if let Some(root) = self.root.as_deref() {
            range_at(root, self.bounds, rect, results, trace);
        }
    }

    /// Returns a stored point closest to `query`, or `None` when empty.
    ///
    /// Among equally close points the first one reached wins, which is
    /// deterministic for a given tree.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// Like [`nearest`](Self::nearest), also returning the Euclidean distance.
    pub fn nearest_with_distance(&self, query: &Point) -> Option<(Point, f64)> {
        let mut visits = VisitCount::default();
        let best = self.nearest_traced(query, &mut visits)?;
        trace!(%query, visited = visits.0, nearest = %best.point, "nearest query");
        Some((best.point, best.distance_squared.sqrt()))
    }

    fn nearest_traced<T: Trace>(&self, query: &Point, trace: &mut T) -> Option<Best> {
        let root = self.root.as_deref()?;
        let mut best = Best {
            point: root.point,
            distance_squared: root.point.distance_squared_to(query),
        };
        nearest_at(root, self.bounds, query, &mut best, trace);
        Some(best)
    }

    #[cfg(test)]
    pub(crate) fn nearest_point_traced<T: Trace>(&self, query: &Point, trace: &mut T) -> Option<Point> {
        self.nearest_traced(query, trace).map(|best| best.point)
    }

    /// Draws every point and its splitting segment, clipped to its cell.
    ///
    /// Nodes are drawn in pre-order: a point, then its segment, then the
    /// left/bottom subtree, then the right/top subtree.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(root) = self.root.as_deref() {
            draw_at(root, self.bounds, canvas);
        }
    }

    /// Splitting segments of all nodes, in the order [`draw`](Self::draw)
    /// emits them.
    pub fn partitions(&self) -> Vec<Partition> {
        let mut recorder = Recorder::default();
        self.draw(&mut recorder);
        recorder.partitions
    }

    /// Iterates over stored points in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: self.root.as_deref().into_iter().collect() }
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            let _inserted = self.insert(point);
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node.point)
    }
}

fn range_at<T: Trace>(node: &Node, cell: Rect, rect: &Rect, results: &mut Vec<Point>, trace: &mut T) {
    trace.visit(&node.point, &cell, None);
    if rect.contains(&node.point) {
        results.push(node.point);
    }

    // Subtrees lie wholly on one side of the line; skip a side the query never reaches
    let split = node.orientation.coord(&node.point);
    let (low, high) = cell.split_at(&node.point, node.orientation);
    if let Some(left) = node.left.as_deref() {
        if rect.min_along(node.orientation) < split {
            range_at(left, low, rect, results, trace);
        }
    }
    if let Some(right) = node.right.as_deref() {
        if rect.max_along(node.orientation) >= split {
            range_at(right, high, rect, results, trace);
        }
    }
}

fn nearest_at<T: Trace>(node: &Node, cell: Rect, query: &Point, best: &mut Best, trace: &mut T) {
    trace.visit(&node.point, &cell, Some(best.distance_squared));

    let distance_squared = node.point.distance_squared_to(query);
    if distance_squared < best.distance_squared {
        *best = Best { point: node.point, distance_squared };
    }

    let (low, high) = cell.split_at(&node.point, node.orientation);
    let ((near, near_cell), (far, far_cell)) = if node.goes_left(query) {
        ((node.left.as_deref(), low), (node.right.as_deref(), high))
    } else {
        ((node.right.as_deref(), high), (node.left.as_deref(), low))
    };

    if let Some(child) = near {
        nearest_at(child, near_cell, query, best, trace);
    }
    if let Some(child) = far {
        // A cell farther away than the champion cannot hold anything closer
        if far_cell.distance_squared_to(query) < best.distance_squared {
            nearest_at(child, far_cell, query, best, trace);
        }
    }
}

fn draw_at<C: Canvas + ?Sized>(node: &Node, cell: Rect, canvas: &mut C) {
    canvas.point(node.point);

    let (from, to) = match node.orientation {
        Orientation::SplitOnX => {
            let x = node.point.x();
            (Point::new(x, cell.ymin()), Point::new(x, cell.ymax()))
        }
        Orientation::SplitOnY => {
            let y = node.point.y();
            (Point::new(cell.xmin(), y), Point::new(cell.xmax(), y))
        }
    };
    canvas.segment(from, to, node.orientation);

    let (low, high) = cell.split_at(&node.point, node.orientation);
    if let Some(left) = node.left.as_deref() {
        draw_at(left, low, canvas);
    }
    if let Some(right) = node.right.as_deref() {
        draw_at(right, high, canvas);
    }
}
