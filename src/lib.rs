//! # kdtree2d - 2D-tree Point Index
//!
//! A Rust library providing a 2D-tree (a two-dimensional k-d tree) over points,
//! conventionally in the unit square, with membership, range and
//! nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental Insertion**: Points are added one at a time; duplicates are ignored
//! - **Range Queries**: All points inside an axis-aligned rectangle (edges inclusive)
//! - **Nearest Neighbor**: Closest stored point to a query, with cell-distance pruning
//! - **Reference Set**: A brute-force [`PointSet`] with the same API for cross-checking
//! - **Drawing Seam**: Plot points and splitting lines through your own [`Canvas`]
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.2, 0.3));
//! tree.insert(Point::new(0.4, 0.7));
//! tree.insert(Point::new(0.9, 0.1));
//!
//! // Points in the left half of the unit square
//! let mut results = Vec::new();
//! tree.query_range(&Rect::new(0.0, 0.0, 0.5, 1.0), &mut results);
//! assert_eq!(results.len(), 2);
//!
//! // Closest point to the origin
//! assert_eq!(tree.nearest(&Point::new(0.0, 0.0)), Some(Point::new(0.2, 0.3)));
//! ```
//!
//! ## How It Works
//!
//! Each node holds one point and splits its region with a vertical line
//! (even depths) or a horizontal line (odd depths) through that point.
//! Range queries skip a side of the line the query rectangle never reaches.
//! Nearest-neighbor queries descend toward the query first and visit the
//! other side only if its region is closer than the best point found so far.
//!
//! The tree is not rebalanced: insertion order decides its shape.

pub mod draw;
pub mod error;
pub mod kdtree;
pub mod point;
pub mod point_set;
pub mod prelude;
pub mod rect;

pub use draw::{Canvas, Partition};
pub use error::GeometryError;
pub use kdtree::{KdTree, Orientation};
pub use point::Point;
pub use point_set::PointSet;
pub use rect::Rect;

#[cfg(test)]
mod comparison_tests;
