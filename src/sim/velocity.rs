//! Per-step displacement vectors

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Displacement applied to a ball center once per animation step.
///
/// Components are mutable in place: wall reflection flips the sign of one
/// component without touching the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from a direction and magnitude.
    ///
    /// The angle is in degrees, measured clockwise from straight up, so 0
    /// moves toward the top of the frame and 90 moves right. A speed of
    /// zero yields the zero vector.
    pub fn from_angle_and_speed(degrees: f64, speed: f64) -> Self {
        let rad = degrees.to_radians();
        Self {
            dx: speed * rad.sin(),
            dy: -speed * rad.cos(),
        }
    }

    /// Translate a point by one step
    pub fn apply_to(&self, p: Point) -> Point {
        Point::new(p.x + self.dx, p.y + self.dy)
    }

    /// Magnitude of the displacement
    pub fn speed(&self) -> f64 {
        DVec2::new(self.dx, self.dy).length()
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn set_dx(&mut self, dx: f64) {
        self.dx = dx;
    }

    pub fn set_dy(&mut self, dy: f64) {
        self.dy = dy;
    }

    /// Negate the horizontal component (vertical-wall reflection)
    pub fn flip_x(&mut self) {
        self.dx = -self.dx;
    }

    /// Negate the vertical component (horizontal-wall reflection)
    pub fn flip_y(&mut self) {
        self.dy = -self.dy;
    }
}
