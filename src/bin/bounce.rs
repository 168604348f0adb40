//! Single bouncing ball
//!
//! Usage: `bounce [x y dx dy]`. Without arguments a default ball is
//! animated instead.

use bounce_box::input::{self, ParseError};
use bounce_box::sim::{Ball, Point, Velocity};
use bounce_box::{Color, Config, Sleeper, Window};

const FRAME_DELAY_MS: u64 = 50;
const BALL_RADIUS: u32 = 30;

fn run(window: &mut Window, start: Point, dx: f64, dy: f64, delay_ms: u64) {
    let sleeper = Sleeper::new();
    let mut ball = Ball::new(start, BALL_RADIUS, Color::BLACK);
    ball.set_velocity(Velocity::new(dx, dy));
    ball.validate_spawn(window.surface());

    loop {
        ball.step_default_frame();
        let surface = window.frame();
        ball.draw(surface);
        window.show();
        sleeper.sleep_for(delay_ms);
    }
}

fn main() -> Result<(), ParseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::load();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (start, dx, dy) = match input::parse_start(&args)? {
        Some(start) => start,
        None => {
            println!("expected 4 arguments (x y dx dy); here is a ball anyway");
            (Point::new(100.0, 100.0), -5.0, -5.0)
        }
    };

    let mut window = Window::new("DVD WannaBe", config.width, config.height);
    run(&mut window, start, dx, dy, config.frame_delay(FRAME_DELAY_MS));
    Ok(())
}
