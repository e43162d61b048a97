//! Error types for geometric value construction.

use thiserror::Error;

/// Errors reported when a [`Point`](crate::Point) or [`Rect`](crate::Rect)
/// would be built from invalid coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// A point coordinate is NaN or infinite.
    #[error("point coordinates must be finite, got ({x}, {y})")]
    NonFinite {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },

    /// A rectangle bound is NaN.
    #[error("rectangle bounds must not be NaN")]
    NotANumber,

    /// A bookkeeping rectangle has an infinite bound.
    #[error("index bounds must be finite, got {0}")]
    Unbounded(crate::Rect),

    /// A rectangle minimum exceeds its maximum.
    #[error("inverted rectangle [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
    InvertedRect {
        /// Requested left edge.
        xmin: f64,
        /// Requested bottom edge.
        ymin: f64,
        /// Requested right edge.
        xmax: f64,
        /// Requested top edge.
        ymax: f64,
    },
}
