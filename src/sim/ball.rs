//! Ball state and movement
//!
//! The central moving object: a circle with a velocity that bounces off the
//! walls of a rectangular frame and can be kept out of an inner obstacle
//! rectangle. Position corrections mirror the overshoot back across the
//! wall, so a bounce never loses distance traveled.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rect;
use super::velocity::Velocity;
use crate::consts::{
    FALLBACK_RADIUS, FALLBACK_X, FALLBACK_Y, FRAME_HEIGHT, FRAME_WIDTH, MAX_SPAWN_RADIUS,
    OBSTACLE_REFLECT_SLACK,
};
use crate::surface::{Canvas, Color};

/// A circle with a per-step velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    center: Point,
    radius: u32,
    color: Color,
    velocity: Velocity,
}

impl Ball {
    /// A stationary ball
    pub fn new(center: Point, radius: u32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            velocity: Velocity::new(0.0, 0.0),
        }
    }

    pub fn with_velocity(center: Point, radius: u32, color: Color, velocity: Velocity) -> Self {
        Self {
            center,
            radius,
            color,
            velocity,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    #[inline]
    fn radius_f(&self) -> f64 {
        f64::from(self.radius)
    }

    /// One step inside the standard 800x600 frame
    pub fn step_default_frame(&mut self) {
        let frame = Rect::from_coords(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT, Color::WHITE);
        self.step_in_box(&frame);
    }

    /// Advance by one velocity step, bouncing off the frame walls
    pub fn step_in_box(&mut self, frame: &Rect) {
        self.center = self.velocity.apply_to(self.center);
        self.bounce_off_walls(frame);
    }

    /// Reflect the ball back inside `frame` wherever its edge has crossed or
    /// touched a wall, flipping the matching velocity component.
    ///
    /// All four wall distances are measured before any correction, so a
    /// corner overshoot corrects both axes in the same call.
    pub fn bounce_off_walls(&mut self, frame: &Rect) {
        let r = self.radius_f();
        let right = frame.max_x() - (self.center.x + r);
        let left = self.center.x - r - frame.min().x;
        let top = self.center.y - r - frame.min().y;
        let bottom = frame.max_y() - (self.center.y + r);

        if right <= 0.0 {
            self.center.x += 2.0 * right;
            self.velocity.flip_x();
        }
        if left <= 0.0 {
            self.center.x -= 2.0 * left;
            self.velocity.flip_x();
        }
        if top <= 0.0 {
            self.center.y -= 2.0 * top;
            self.velocity.flip_y();
        }
        if bottom <= 0.0 {
            self.center.y += 2.0 * bottom;
            self.velocity.flip_y();
        }
    }

    /// Like [`Ball::step_in_box`], but also keeps the ball out of an inner
    /// obstacle rectangle, reflecting off its sides and corners.
    ///
    /// Resolution pushes the ball out along the axis of minimal penetration
    /// and repeats until the ball is clear. A corner hit can flip both
    /// velocity components in the same pass. The loop stops once the
    /// minimal overlap is no longer positive, which also guards against
    /// degenerate geometry that cannot be separated.
    pub fn step_with_obstacle(&mut self, outer: &Rect, obstacle: &Rect) {
        self.step_in_box(outer);
        if !self.intersects(obstacle) {
            return;
        }
        while self.intersects(obstacle) {
            let r = self.radius_f();
            let left = obstacle.max_x() - (self.center.x - r);
            let right = (self.center.x + r) - obstacle.min().x;
            let top = obstacle.max_y() - (self.center.y - r);
            let bottom = (self.center.y + r) - obstacle.min().y;

            let overlap_x = left.min(right);
            let overlap_y = top.min(bottom);

            // Push out along the axis of minimal penetration, through the
            // nearer side of that axis
            if overlap_x < overlap_y {
                if left < right {
                    self.center.x += left;
                } else {
                    self.center.x -= right;
                }
            } else if top < bottom {
                self.center.y += top;
            } else {
                self.center.y -= bottom;
            }

            // Reflect only on genuine contact: penetration from both sides
            // of the axis, within one step of travel plus slack
            let slack = self.velocity.speed() + OBSTACLE_REFLECT_SLACK;
            if left > 0.0 && right > 0.0 && overlap_x <= slack {
                self.velocity.flip_x();
            }
            if top > 0.0 && bottom > 0.0 && overlap_y <= slack {
                self.velocity.flip_y();
            }

            self.bounce_off_walls(outer);

            if overlap_x.min(overlap_y) <= 0.0 {
                break;
            }
        }
    }

    /// Circle-vs-rectangle intersection over closed bounds: touching counts.
    pub fn intersects(&self, rect: &Rect) -> bool {
        let center = self.center.to_vec();
        let closest = center.clamp(
            rect.min().to_vec(),
            DVec2::new(rect.max_x(), rect.max_y()),
        );
        let r = self.radius_f();
        center.distance_squared(closest) <= r * r
    }

    /// Clamp a freshly constructed ball into the visible area.
    ///
    /// Wraps the center around the surface dimensions, then falls back to a
    /// known-good position and radius if the ball still pokes outside the
    /// 800x600 playfield or is too large to fit at all.
    pub fn validate_spawn(&mut self, surface: &impl Canvas) {
        self.center = self.wrapped_position(surface);
        let r = self.radius_f();
        if self.center.x - r < 0.0
            || self.center.x + r > FRAME_WIDTH
            || self.center.y - r < 0.0
            || self.center.y + r > FRAME_HEIGHT
        {
            self.center = Point::new(FALLBACK_X, FALLBACK_Y);
            self.radius = FALLBACK_RADIUS;
        }
        if self.radius >= MAX_SPAWN_RADIUS {
            self.radius = FALLBACK_RADIUS;
        }
    }

    /// Wrap the center around the surface until the ball's extent falls
    /// within [0, dimension] on each axis. Does not mutate the ball.
    fn wrapped_position(&self, surface: &impl Canvas) -> Point {
        let w = f64::from(surface.width());
        let h = f64::from(surface.height());
        let r = self.radius_f();
        let mut x = self.center.x;
        let mut y = self.center.y;
        while x - r > w {
            x -= w;
        }
        while x + r < 0.0 {
            x += w;
        }
        while y - r > h {
            y -= h;
        }
        while y + r < 0.0 {
            y += h;
        }
        Point::new(x, y)
    }

    /// Draw as one filled circle in this ball's color
    pub fn draw(&self, surface: &mut impl Canvas) {
        surface.set_color(self.color);
        surface.fill_circle(
            self.center.x as i32,
            self.center.y as i32,
            self.radius as i32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SoftCanvas;

    fn frame() -> Rect {
        Rect::from_coords(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT, Color::WHITE)
    }

    #[test]
    fn test_left_wall_bounce_to_contact() {
        let mut ball = Ball::with_velocity(
            Point::new(15.0, 300.0),
            10,
            Color::BLACK,
            Velocity::new(-5.0, 0.0),
        );
        ball.step_in_box(&frame());
        assert!(ball.center().approx_eq(Point::new(10.0, 300.0)));
        assert_eq!(ball.velocity().dx(), 5.0);
        assert_eq!(ball.velocity().dy(), 0.0);
    }

    #[test]
    fn test_left_wall_overshoot_mirrors_back() {
        // Starting already partly past the wall: the correction mirrors the
        // overshoot, twice the penetration
        let mut ball = Ball::with_velocity(
            Point::new(5.0, 300.0),
            10,
            Color::BLACK,
            Velocity::new(-5.0, 0.0),
        );
        ball.step_in_box(&frame());
        assert!(ball.center().approx_eq(Point::new(20.0, 300.0)));
        assert_eq!(ball.velocity().dx(), 5.0);
    }

    #[test]
    fn test_corner_bounce_flips_both_components() {
        let mut ball = Ball::with_velocity(
            Point::new(15.0, 15.0),
            10,
            Color::BLACK,
            Velocity::new(-10.0, -10.0),
        );
        ball.step_in_box(&frame());
        assert!(ball.center().approx_eq(Point::new(15.0, 15.0)));
        assert_eq!(ball.velocity().dx(), 10.0);
        assert_eq!(ball.velocity().dy(), 10.0);
    }

    #[test]
    fn test_free_flight_is_unchanged() {
        let mut ball = Ball::with_velocity(
            Point::new(400.0, 300.0),
            10,
            Color::BLACK,
            Velocity::new(3.0, -4.0),
        );
        ball.step_default_frame();
        assert!(ball.center().approx_eq(Point::new(403.0, 296.0)));
        assert_eq!(ball.velocity().dx(), 3.0);
        assert_eq!(ball.velocity().dy(), -4.0);
    }

    #[test]
    fn test_obstacle_side_hit_reflects_and_separates() {
        let obstacle = Rect::from_coords(300.0, 200.0, 100.0, 100.0, Color::GRAY);
        let mut ball = Ball::with_velocity(
            Point::new(280.0, 250.0),
            10,
            Color::BLACK,
            Velocity::new(15.0, 0.0),
        );
        ball.step_with_obstacle(&frame(), &obstacle);
        // Pushed back to contact with the left face, moving away
        assert!(ball.center().approx_eq(Point::new(290.0, 250.0)));
        assert_eq!(ball.velocity().dx(), -15.0);
        assert_eq!(ball.velocity().dy(), 0.0);
    }

    #[test]
    fn test_obstacle_miss_is_a_plain_step() {
        let obstacle = Rect::from_coords(300.0, 200.0, 100.0, 100.0, Color::GRAY);
        let mut ball = Ball::with_velocity(
            Point::new(100.0, 100.0),
            10,
            Color::BLACK,
            Velocity::new(5.0, 5.0),
        );
        ball.step_with_obstacle(&frame(), &obstacle);
        assert!(ball.center().approx_eq(Point::new(105.0, 105.0)));
        assert_eq!(ball.velocity().dx(), 5.0);
    }

    #[test]
    fn test_obstacle_resolution_never_ends_inside() {
        let obstacle = Rect::from_coords(300.0, 200.0, 100.0, 100.0, Color::GRAY);
        let outer = frame();
        let mut ball = Ball::with_velocity(
            Point::new(250.0, 250.0),
            20,
            Color::BLACK,
            Velocity::new(40.0, 7.0),
        );
        for _ in 0..50 {
            ball.step_with_obstacle(&outer, &obstacle);
            let c = ball.center();
            let closest_x = c.x.clamp(300.0, 400.0);
            let closest_y = c.y.clamp(200.0, 300.0);
            let dist = Point::new(closest_x, closest_y).distance(c);
            assert!(dist >= f64::from(ball.radius()) - 1e-6);
        }
    }

    #[test]
    fn test_intersects_closed_bounds() {
        let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0, Color::GRAY);

        // Zero-radius circle exactly on a corner
        let on_corner = Ball::new(Point::new(10.0, 10.0), 0, Color::BLACK);
        assert!(on_corner.intersects(&rect));

        // Touching from outside counts
        let touching = Ball::new(Point::new(15.0, 5.0), 5, Color::BLACK);
        assert!(touching.intersects(&rect));

        // Fully contained counts
        let inside = Ball::new(Point::new(5.0, 5.0), 2, Color::BLACK);
        assert!(inside.intersects(&rect));

        let outside = Ball::new(Point::new(20.0, 20.0), 5, Color::BLACK);
        assert!(!outside.intersects(&rect));
    }

    #[test]
    fn test_validate_spawn_wraps_back_on_screen() {
        let canvas = SoftCanvas::new(800, 600);
        let mut ball = Ball::new(Point::new(900.0, 300.0), 30, Color::BLACK);
        ball.validate_spawn(&canvas);
        assert!(ball.center().approx_eq(Point::new(100.0, 300.0)));
        assert_eq!(ball.radius(), 30);
    }

    #[test]
    fn test_validate_spawn_falls_back_when_still_outside() {
        let canvas = SoftCanvas::new(800, 600);
        // Wraps once to (790, 300), which still pokes past the right edge
        let mut ball = Ball::new(Point::new(1590.0, 300.0), 30, Color::BLACK);
        ball.validate_spawn(&canvas);
        assert!(ball.center().approx_eq(Point::new(100.0, 100.0)));
        assert_eq!(ball.radius(), 30);
    }

    #[test]
    fn test_validate_spawn_rejects_huge_radius() {
        let canvas = SoftCanvas::new(800, 600);
        let mut ball = Ball::new(Point::new(400.0, 300.0), 400, Color::BLACK);
        ball.validate_spawn(&canvas);
        assert_eq!(ball.radius(), 30);
    }

    #[test]
    fn test_draw_paints_center_pixel() {
        let mut canvas = SoftCanvas::new(100, 100);
        let ball = Ball::new(Point::new(50.0, 50.0), 10, Color::BLACK);
        ball.draw(&mut canvas);
        assert_eq!(canvas.pixel(50, 50), Some(Color::BLACK.to_rgba()));
        assert_eq!(canvas.pixel(80, 80), Some(Color::WHITE.to_rgba()));
    }
}
