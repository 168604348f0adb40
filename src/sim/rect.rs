//! Axis-aligned rectangles

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::surface::{Canvas, Color};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// The color is cosmetic; none of the geometry depends on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    min: Point,
    width: f64,
    height: f64,
    color: Color,
}

impl Rect {
    pub fn new(min: Point, width: f64, height: f64, color: Color) -> Self {
        Self {
            min,
            width,
            height,
            color,
        }
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(Point::new(x, y), width, height, color)
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// x coordinate of the right edge
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.min.x + self.width
    }

    /// y coordinate of the bottom edge
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.min.y + self.height
    }

    /// Corner points in clockwise order starting at `min`
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max_x(), self.min.y),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min.x, self.max_y()),
        ]
    }

    /// Issue one filled-rectangle draw call in this rectangle's color
    pub fn draw(&self, surface: &mut impl Canvas) {
        surface.set_color(self.color);
        surface.fill_rectangle(
            self.min.x as i32,
            self.min.y as i32,
            self.width as i32,
            self.height as i32,
        );
    }
}
