//! Line segments and segment intersection
//!
//! Segments normalize their endpoint order at construction and classify
//! their supporting line once, so every intersection query is a plain match
//! on the two forms with no recomputation.

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::approx_eq;

/// Classification of a segment's supporting line, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineForm {
    /// x is constant along the segment
    Vertical { x: f64 },
    /// y = slope * x + intercept
    Sloped { slope: f64, intercept: f64 },
}

/// A line segment between two points.
///
/// `start` holds the endpoint with the smaller x coordinate; for vertical
/// segments the smaller y breaks the tie. The object is immutable once
/// built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    start: Point,
    end: Point,
    form: LineForm,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        let (mut start, mut end) = (a, b);
        if start.x == end.x && start.y > end.y {
            std::mem::swap(&mut start, &mut end);
        }
        if end.x < start.x {
            std::mem::swap(&mut start, &mut end);
        }
        let form = if approx_eq(start.x, end.x) {
            LineForm::Vertical { x: start.x }
        } else {
            let slope = (end.y - start.y) / (end.x - start.x);
            LineForm::Sloped {
                slope,
                intercept: start.y - start.x * slope,
            }
        };
        Self { start, end, form }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn form(&self) -> LineForm {
        self.form
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.form, LineForm::Vertical { .. })
    }

    /// Slope of the supporting line; `None` for vertical segments
    pub fn slope(&self) -> Option<f64> {
        match self.form {
            LineForm::Vertical { .. } => None,
            LineForm::Sloped { slope, .. } => Some(slope),
        }
    }

    /// y-intercept of the supporting line; `None` for vertical segments
    pub fn intercept(&self) -> Option<f64> {
        match self.form {
            LineForm::Vertical { .. } => None,
            LineForm::Sloped { intercept, .. } => Some(intercept),
        }
    }

    /// Endpoint-set equality, independent of construction order
    pub fn approx_eq(&self, other: &Line) -> bool {
        (self.start.approx_eq(other.start) && self.end.approx_eq(other.end))
            || (self.start.approx_eq(other.end) && self.end.approx_eq(other.start))
    }

    /// Whether this segment shares at least one point with `other`
    pub fn intersects(&self, other: &Line) -> bool {
        use LineForm::*;
        match (self.form, other.form) {
            (Sloped { slope: s1, intercept: c1 }, Sloped { slope: s2, intercept: c2 }) => {
                if approx_eq(s1, s2) {
                    // Parallel: only collinear segments with overlapping
                    // x-ranges touch
                    approx_eq(c1, c2)
                        && ranges_overlap(self.start.x, self.end.x, other.start.x, other.end.x)
                } else {
                    let x = (c2 - c1) / (s1 - s2);
                    in_range(x, self.start.x, self.end.x)
                        && in_range(x, other.start.x, other.end.x)
                }
            }
            (Vertical { x }, Sloped { slope, intercept }) => {
                let y = slope * x + intercept;
                in_range(x, other.start.x, other.end.x) && in_range(y, self.start.y, self.end.y)
            }
            (Sloped { slope, intercept }, Vertical { x }) => {
                let y = slope * x + intercept;
                in_range(x, self.start.x, self.end.x) && in_range(y, other.start.y, other.end.y)
            }
            (Vertical { x: x1 }, Vertical { x: x2 }) => {
                approx_eq(x1, x2)
                    && ranges_overlap(self.start.y, self.end.y, other.start.y, other.end.y)
            }
        }
    }

    /// Whether this segment intersects both others
    pub fn intersects_both(&self, a: &Line, b: &Line) -> bool {
        self.intersects(a) && self.intersects(b)
    }

    /// The unique intersection point, if one exists.
    ///
    /// Identical segments and collinear segments sharing more than a single
    /// point are ambiguous and yield `None`. Collinear segments touching at
    /// exactly one endpoint resolve to that endpoint.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        if self.approx_eq(other) || !self.intersects(other) {
            return None;
        }
        use LineForm::*;
        match (self.form, other.form) {
            (Vertical { .. }, Vertical { .. }) => {
                // Same supporting line (intersects() checked the x); only an
                // exact end-to-end touch is a single point
                if approx_eq(self.start.y, other.end.y) {
                    Some(self.start)
                } else if approx_eq(self.end.y, other.start.y) {
                    Some(self.end)
                } else {
                    None
                }
            }
            (Vertical { x }, Sloped { slope, intercept })
            | (Sloped { slope, intercept }, Vertical { x }) => {
                Some(Point::new(x, slope * x + intercept))
            }
            (Sloped { slope: s1, intercept: c1 }, Sloped { slope: s2, intercept: c2 }) => {
                if approx_eq(s1, s2) && approx_eq(c1, c2) {
                    // Collinear: endpoints are ordered, so the only possible
                    // single-point contacts are start-to-end
                    if self.start.approx_eq(other.end) {
                        Some(self.start)
                    } else if self.end.approx_eq(other.start) {
                        Some(self.end)
                    } else {
                        None
                    }
                } else {
                    let x = (c2 - c1) / (s1 - s2);
                    Some(Point::new(x, s1 * x + c1))
                }
            }
        }
    }
}

#[inline]
fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    lo <= v && v <= hi
}

#[inline]
fn ranges_overlap(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> bool {
    a_lo <= b_hi && b_lo <= a_hi
}
