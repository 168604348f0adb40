//! Randomized ball construction for the driver programs
//!
//! Spawning is the only place the simulation touches randomness; everything
//! draws from a caller-provided `Pcg32` so a run can be replayed from its
//! seed.

use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::point::Point;
use super::velocity::Velocity;
use crate::consts::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::surface::{Canvas, Color};

/// Largest size that still fits the playfield
const MAX_FIT: f64 = 299.0;
/// Sizes below this move faster than the crawl speed
const SMALL_SIZE: f64 = 50.0;

/// Speed-by-size rule shared by the drivers: everything gets a uniform
/// random direction, big balls crawl at speed 1, small balls speed up as
/// `25 - size / 2`.
fn sized_velocity(rng: &mut Pcg32, size: f64) -> Velocity {
    let mut velocity = Velocity::from_angle_and_speed(rng.random_range(0.0..360.0), 1.0);
    if size < SMALL_SIZE {
        velocity = Velocity::from_angle_and_speed(rng.random_range(0.0..360.0), 25.0 - size / 2.0);
    }
    velocity
}

fn random_color(rng: &mut Pcg32) -> Color {
    Color::rgb(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
}

/// Build one ball per size, randomly placed and colored anywhere on the
/// playfield.
///
/// Sizes too big for the playfield are kept in the list but suppressed to
/// radius 0 with a console warning. Every ball is spawn-validated against
/// the surface.
pub fn balls_from_sizes(sizes: &[f64], rng: &mut Pcg32, surface: &impl Canvas) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(sizes.len());
    for &input in sizes {
        let mut size = input.abs();
        if size > MAX_FIT {
            log::warn!(
                "ball of size {input} is too big for the area on screen and will not be shown"
            );
            size = 0.0;
        }
        let velocity = sized_velocity(rng, size);
        let x = rng.random_range(size..(FRAME_WIDTH - size));
        let y = rng.random_range(size..(FRAME_HEIGHT - size));
        let mut ball =
            Ball::with_velocity(Point::new(x, y), size as u32, random_color(rng), velocity);
        ball.validate_spawn(surface);
        balls.push(ball);
    }
    balls
}

/// Ball placement for the two-region animation: the first half of the sizes
/// spawn inside the gray box, the rest spawn outside it.
///
/// Outside balls are rejection-sampled until they clear the box by half a
/// velocity component on each axis, so the first step cannot land them
/// inside it.
pub fn framed_balls_from_sizes(sizes: &[f64], rng: &mut Pcg32) -> Vec<Ball> {
    let mid = sizes.len() / 2;
    let mut balls = Vec::with_capacity(sizes.len());
    for (i, &input) in sizes.iter().enumerate() {
        let mut size = input;
        let color = random_color(rng);
        let velocity = sized_velocity(rng, input.abs().min(MAX_FIT));

        let (x, y) = if i < mid {
            // Inside the gray box
            if size >= 225.0 {
                log::warn!(
                    "ball of size {input} is too big for the area on screen and will not be shown"
                );
                size = 0.0;
            }
            (
                rng.random_range((50.0 + size)..(500.0 - size)),
                rng.random_range((50.0 + size)..(500.0 - size)),
            )
        } else {
            // Outside the gray box
            if size >= 75.0 {
                log::warn!(
                    "ball of size {input} is too big for the area on screen and will not be shown"
                );
                size = 0.0;
            }
            loop {
                let x = if size >= SMALL_SIZE {
                    rng.random_range((size + 450.0)..(FRAME_WIDTH - size))
                } else {
                    rng.random_range(size..(FRAME_WIDTH - size))
                };
                let y = rng.random_range(size..(FRAME_HEIGHT - size));
                let clear = x + size + velocity.dx().abs() / 2.0 < 50.0
                    || x - size - velocity.dx().abs() / 2.0 > 500.0
                    || y + size + velocity.dy().abs() / 2.0 < 50.0
                    || y - size - velocity.dy().abs() / 2.0 > 500.0;
                if clear {
                    break (x, y);
                }
            }
        };

        balls.push(Ball::with_velocity(
            Point::new(x, y),
            size.abs() as u32,
            color,
            velocity,
        ));
    }
    balls
}
