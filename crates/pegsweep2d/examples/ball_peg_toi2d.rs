extern crate nalgebra as na;

use na::{Point2, Vector2};
use pegsweep2d::query;
use pegsweep2d::shape::{Ball, Peg};

fn main() {
    let ball = Ball::new(15.0);
    let square = Peg::axis_aligned(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0));
    let diamond = Peg::new(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0), 45.0);

    let ball_pos = Point2::new(310.0, 50.0);
    let ball_pos_far = Point2::new(600.0, 50.0);
    let ball_vel = Vector2::new(0.0, 784.0);
    let dt = 0.1;

    let toi_square = query::time_of_impact_ball_peg(&ball_pos, &ball_vel, &ball, &square, dt);
    let toi_diamond = query::time_of_impact_ball_peg(&ball_pos, &ball_vel, &ball, &diamond, dt);
    let toi_wont_touch =
        query::time_of_impact_ball_peg(&ball_pos_far, &ball_vel, &ball, &square, dt);

    println!("Time of impact on a square peg: {:?}", toi_square);
    println!("Time of impact on a diamond peg: {:?}", toi_diamond);
    println!("Time of impact when the ball misses: {:?}", toi_wont_touch);

    assert!(toi_square.is_some());
    assert!(toi_diamond.is_some());
    assert_eq!(toi_wont_touch, None);
}
