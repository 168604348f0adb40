//! Deterministic simulation module
//!
//! All geometry and ball behavior lives here. This module must stay pure:
//! - No rendering or platform dependencies (drawing goes through the
//!   `Canvas` trait only)
//! - Seeded RNG only (spawning draws from a caller-provided generator)

pub mod ball;
pub mod line;
pub mod point;
pub mod rect;
pub mod spawn;
pub mod velocity;

pub use ball::Ball;
pub use line::{Line, LineForm};
pub use point::Point;
pub use rect::Rect;
pub use spawn::{balls_from_sizes, framed_balls_from_sizes};
pub use velocity::Velocity;
