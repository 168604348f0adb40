//! 2D points

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::approx_eq;

/// A point in 2D space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Coordinate-wise equality within the shared epsilon
    pub fn approx_eq(&self, other: Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
