//! Multiple bouncing balls
//!
//! Usage: `bounce-multi [sizes...]`. Each size becomes one randomly placed,
//! randomly colored ball; small balls move faster.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use bounce_box::input::{self, ParseError};
use bounce_box::sim::{Ball, balls_from_sizes};
use bounce_box::{Config, Sleeper, Window};

const FRAME_DELAY_MS: u64 = 25;

fn run(window: &mut Window, mut balls: Vec<Ball>, delay_ms: u64) {
    let sleeper = Sleeper::new();
    loop {
        let surface = window.frame();
        for ball in &mut balls {
            ball.step_default_frame();
            ball.draw(surface);
        }
        window.show();
        sleeper.sleep_for(delay_ms);
    }
}

fn main() -> Result<(), ParseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sizes = input::parse_sizes(&args)?;

    let mut window = Window::new("Balls Bonanza", config.width, config.height);
    let mut rng = Pcg32::seed_from_u64(config.rng_seed());
    let balls = balls_from_sizes(&sizes, &mut rng, window.surface());
    run(&mut window, balls, config.frame_delay(FRAME_DELAY_MS));
    Ok(())
}
