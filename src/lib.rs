//! Bounce Box - a bouncing-balls animation toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, ball state)
//! - `surface`: Drawing-surface abstraction and software rasterizer
//! - `config`: Runtime configuration
//! - `input`: Command-line argument parsing

pub mod config;
pub mod input;
pub mod sim;
pub mod surface;

pub use config::Config;
pub use surface::{Canvas, Color, SoftCanvas, Sleeper, Window};

/// Shared simulation constants
pub mod consts {
    /// Tolerance for floating-point equality across the geometry core
    pub const EPSILON: f64 = 1e-7;

    /// Standard playfield the drivers animate in
    pub const FRAME_WIDTH: f64 = 800.0;
    pub const FRAME_HEIGHT: f64 = 600.0;

    /// Spawn-validation fallback position and radius
    pub const FALLBACK_X: f64 = 100.0;
    pub const FALLBACK_Y: f64 = 100.0;
    pub const FALLBACK_RADIUS: u32 = 30;
    /// Radii at or above this are rejected at spawn
    pub const MAX_SPAWN_RADIUS: u32 = 300;

    /// Extra slack added to the ball's speed when deciding whether an
    /// obstacle overlap is a real side/corner contact
    pub const OBSTACLE_REFLECT_SLACK: f64 = 0.1;
}

/// Scalar equality within [`consts::EPSILON`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < consts::EPSILON
}
