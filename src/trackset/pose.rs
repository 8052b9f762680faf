//! Planar object pose.

use nalgebra::Point2;
use std::f64::consts::PI;

/// Normalize an angle to the interval [-pi, pi).
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }
    theta - 2.0 * PI * ((theta + PI) / (2.0 * PI)).floor()
}

/// Fitted box pose: planar position plus heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position x (m)
    pub x: f64,
    /// Position y (m)
    pub y: f64,
    /// Heading (rad)
    pub theta: f64,
}

impl Pose {
    /// Create a new pose.
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Position as a point.
    #[inline]
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Planar distance to another pose.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        nalgebra::distance(&self.position(), &other.position())
    }

    /// Normalized heading change from `from` to this pose.
    pub fn heading_delta(&self, from: &Pose) -> f64 {
        normalize_angle(self.theta - from.theta)
    }
}
