//! Measurement cluster backing a hypothesis.

use nalgebra::Point2;

/// The segmented point cluster a box model was fitted to, together with the
/// precise acquisition timestamp of the scan it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCluster {
    points: Vec<Point2<f64>>,
    timestamp: f64,
}

impl PointCluster {
    /// Create a cluster from measured points and their scan timestamp.
    pub fn new(points: Vec<Point2<f64>>, timestamp: f64) -> Self {
        Self { points, timestamp }
    }

    /// Scan timestamp (seconds).
    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Measured points.
    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of measured points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster carries no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
