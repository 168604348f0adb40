//! Property tests over the geometry core

use proptest::prelude::*;

use bounce_box::consts::{FRAME_HEIGHT, FRAME_WIDTH};
use bounce_box::sim::{Ball, Line, Point, Rect, Velocity};
use bounce_box::Color;

proptest! {
    #[test]
    fn distance_is_symmetric(
        x1 in -1e3..1e3, y1 in -1e3..1e3,
        x2 in -1e3..1e3, y2 in -1e3..1e3,
    ) {
        let p = Point::new(x1, y1);
        let q = Point::new(x2, y2);
        prop_assert!((p.distance(q) - q.distance(p)).abs() < 1e-9);
    }

    #[test]
    fn distance_to_self_is_zero(x in -1e3..1e3, y in -1e3..1e3) {
        let p = Point::new(x, y);
        prop_assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn speed_matches_angle_construction(angle in 0.0..360.0, speed in 0.0..100.0) {
        let v = Velocity::from_angle_and_speed(angle, speed);
        prop_assert!((v.speed() - speed).abs() < 1e-9);
    }

    #[test]
    fn apply_translates_by_components(
        x in -1e3..1e3, y in -1e3..1e3,
        dx in -1e2..1e2, dy in -1e2..1e2,
    ) {
        let moved = Velocity::new(dx, dy).apply_to(Point::new(x, y));
        prop_assert_eq!(moved.x, x + dx);
        prop_assert_eq!(moved.y, y + dy);
    }

    #[test]
    fn line_construction_is_order_invariant(
        x1 in -100.0..100.0, y1 in -100.0..100.0,
        x2 in -100.0..100.0, y2 in -100.0..100.0,
    ) {
        let a = Point::new(x1, y1);
        let b = Point::new(x2, y2);
        let forward = Line::new(a, b);
        let backward = Line::new(b, a);
        prop_assert!(forward.approx_eq(&backward));
        prop_assert_eq!(forward.is_vertical(), backward.is_vertical());
        prop_assert_eq!(forward.form(), backward.form());
    }

    #[test]
    fn middle_is_equidistant(
        x1 in -100.0..100.0, y1 in -100.0..100.0,
        x2 in -100.0..100.0, y2 in -100.0..100.0,
    ) {
        let line = Line::new(Point::new(x1, y1), Point::new(x2, y2));
        let mid = line.middle();
        prop_assert!((mid.distance(line.start()) - mid.distance(line.end())).abs() < 1e-7);
    }

    #[test]
    fn ball_stays_inside_frame(
        radius in 5u32..40,
        fx in 0.0f64..1.0, fy in 0.0f64..1.0,
        dx in -50.0f64..50.0, dy in -50.0f64..50.0,
    ) {
        let r = f64::from(radius);
        let start = Point::new(
            r + fx * (FRAME_WIDTH - 2.0 * r),
            r + fy * (FRAME_HEIGHT - 2.0 * r),
        );
        let frame = Rect::from_coords(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT, Color::WHITE);
        let mut ball = Ball::with_velocity(start, radius, Color::BLACK, Velocity::new(dx, dy));
        for _ in 0..200 {
            ball.step_in_box(&frame);
            let c = ball.center();
            prop_assert!(c.x >= r - 1e-6 && c.x <= FRAME_WIDTH - r + 1e-6);
            prop_assert!(c.y >= r - 1e-6 && c.y <= FRAME_HEIGHT - r + 1e-6);
        }
    }

    #[test]
    fn obstacle_resolution_ends_at_most_touching(
        radius in 5u32..25,
        fx in 0.0f64..1.0, fy in 0.0f64..1.0,
        dx in -30.0f64..30.0, dy in -30.0f64..30.0,
    ) {
        let frame = Rect::from_coords(0.0, 0.0, FRAME_WIDTH, FRAME_HEIGHT, Color::WHITE);
        let obstacle = Rect::from_coords(300.0, 200.0, 200.0, 150.0, Color::GRAY);
        let r = f64::from(radius);
        let start = Point::new(
            r + fx * (FRAME_WIDTH - 2.0 * r),
            r + fy * (FRAME_HEIGHT - 2.0 * r),
        );
        let mut ball = Ball::with_velocity(start, radius, Color::BLACK, Velocity::new(dx, dy));
        prop_assume!(!ball.intersects(&obstacle));

        for _ in 0..100 {
            ball.step_with_obstacle(&frame, &obstacle);
            let c = ball.center();
            let closest = Point::new(c.x.clamp(300.0, 500.0), c.y.clamp(200.0, 350.0));
            prop_assert!(closest.distance(c) >= r - 1e-6);
        }
    }
}
