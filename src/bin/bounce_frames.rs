//! Two-region animation: balls inside a gray box and balls outside it
//!
//! Usage: `bounce-frames [sizes...]`. The first half of the balls bounce
//! inside the gray box; the rest bounce in the outer frame and off the
//! box. Without sizes a default set is animated.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use bounce_box::consts::{FRAME_HEIGHT, FRAME_WIDTH};
use bounce_box::input::{self, ParseError};
use bounce_box::sim::{Ball, Rect, framed_balls_from_sizes};
use bounce_box::{Color, Config, Sleeper, Window};

const FRAME_DELAY_MS: u64 = 40;
const DEFAULT_SIZES: [f64; 5] = [20.0, 12.0, 23.0, 14.0, 29.0];

fn run(window: &mut Window, mut balls: Vec<Ball>, delay_ms: u64) {
    let sleeper = Sleeper::new();
    let frame = Rect::from_coords(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT, Color::WHITE);
    let gray_box = Rect::from_coords(50.0, 50.0, 450.0, 450.0, Color::GRAY);
    let yellow_box = Rect::from_coords(450.0, 450.0, 150.0, 150.0, Color::YELLOW);
    let mid = balls.len() / 2;

    loop {
        let surface = window.frame();
        gray_box.draw(surface);
        for (i, ball) in balls.iter_mut().enumerate() {
            if i < mid {
                ball.step_in_box(&gray_box);
            } else {
                ball.step_with_obstacle(&frame, &gray_box);
            }
            ball.draw(surface);
        }
        yellow_box.draw(surface);
        window.show();
        sleeper.sleep_for(delay_ms);
    }
}

/// An empty argument list, a single blank token, or a literal `${args}`
/// placeholder from an unexpanded run configuration all mean "no sizes"
fn no_sizes_given(args: &[String]) -> bool {
    args.is_empty()
        || (args.len() == 1
            && (args[0].trim().is_empty() || args[0].eq_ignore_ascii_case("${args}")))
}

fn main() -> Result<(), ParseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::load();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let sizes = if no_sizes_given(&args) {
        println!("no sizes given; bouncing the default set to show respect o7");
        DEFAULT_SIZES.to_vec()
    } else {
        input::parse_sizes(&args)?
    };

    let mut window = Window::new("Balls Bonanza - fancy edition", config.width, config.height);
    let mut rng = Pcg32::seed_from_u64(config.rng_seed());
    let balls = framed_balls_from_sizes(&sizes, &mut rng);
    run(&mut window, balls, config.frame_delay(FRAME_DELAY_MS));
    Ok(())
}
