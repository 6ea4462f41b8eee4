use approx::assert_relative_eq;
use pegsweep2d::math::Real;
use pegsweep2d::na::{Isometry2, Point2, UnitComplex, Vector2};
use pegsweep2d::query::{self, TOIStatus};
use pegsweep2d::shape::{Ball, FeatureId, Peg};

fn random_in(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

#[test]
fn ball_falling_on_the_top_face() {
    let ball = Ball::new(15.0);
    let peg = Peg::axis_aligned(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0));

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(310.0, 50.0),
        &Vector2::new(0.0, 784.0),
        &ball,
        &peg,
        0.1,
    )
    .unwrap();

    assert_relative_eq!(hit.toi, 75.0 / 78.4, epsilon = 1.0e-5);
    assert_relative_eq!(hit.point, Point2::new(310.0, 125.0), epsilon = 1.0e-3);
    assert_relative_eq!(*hit.normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-6);
    assert_eq!(hit.feature, FeatureId::Face(3));
    assert_eq!(hit.status, TOIStatus::Converged);
}

#[test]
fn ball_falling_on_the_top_corner_of_a_diamond() {
    let ball = Ball::new(15.0);
    let peg = Peg::new(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0), 45.0);

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(310.0, 50.0),
        &Vector2::new(0.0, 784.0),
        &ball,
        &peg,
        0.1,
    )
    .unwrap();

    // The top vertex of the diamond lies half a diagonal above its center.
    let contact_y = 150.0 - (200.0 as Real).sqrt() - 15.0;
    assert_relative_eq!(hit.toi, (contact_y - 50.0) / 78.4, epsilon = 1.0e-4);
    assert_relative_eq!(hit.point, Point2::new(310.0, contact_y), epsilon = 1.0e-3);
    assert_relative_eq!(*hit.normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-4);
    assert!(hit.feature.is_vertex());
}

#[test]
fn ball_passing_close_to_a_corner() {
    let ball = Ball::new(5.0);
    let peg = Peg::axis_aligned(Point2::new(100.0, 100.0), Vector2::new(10.0, 10.0));

    // Enters the box expanded by the radius beyond the span of its left face.
    let hit = query::time_of_impact_ball_peg(
        &Point2::new(70.0, 87.0),
        &Vector2::new(60.0, 0.0),
        &ball,
        &peg,
        1.0,
    )
    .unwrap();

    assert_relative_eq!(hit.toi, 16.0 / 60.0, epsilon = 1.0e-5);
    assert_relative_eq!(*hit.normal, Vector2::new(-0.8, -0.6), epsilon = 1.0e-4);
    // The bottom-left corner, at (90, 90).
    assert_eq!(hit.feature.unwrap_vertex(), 3);
}

#[test]
fn ball_missing_a_corner() {
    let ball = Ball::new(5.0);
    let peg = Peg::axis_aligned(Point2::new(100.0, 100.0), Vector2::new(10.0, 10.0));

    // Enters the box expanded by the radius, but passes 6.36 away from the corner at (90, 110).
    let hit = query::time_of_impact_ball_peg(
        &Point2::new(75.0, 104.0),
        &Vector2::new(20.0, 20.0),
        &ball,
        &peg,
        1.0,
    );

    assert!(hit.is_none());
}

#[test]
fn ball_stopping_short_of_the_peg() {
    let ball = Ball::new(15.0);
    let peg = Peg::axis_aligned(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0));

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(310.0, 50.0),
        &Vector2::new(0.0, 784.0),
        &ball,
        &peg,
        0.05,
    );

    assert!(hit.is_none());
}

#[test]
fn ball_moving_away_from_the_peg() {
    let ball = Ball::new(15.0);
    let peg = Peg::new(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0), 30.0);

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(310.0, 100.0),
        &Vector2::new(0.0, -500.0),
        &ball,
        &peg,
        0.1,
    );

    assert!(hit.is_none());
}

#[test]
fn ball_starting_in_contact() {
    let ball = Ball::new(15.0);
    let peg = Peg::axis_aligned(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0));

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(310.0, 125.0),
        &Vector2::new(0.0, 100.0),
        &ball,
        &peg,
        0.1,
    )
    .unwrap();

    assert_eq!(hit.toi, 0.0);
    assert_eq!(hit.point, Point2::new(310.0, 125.0));
    assert_relative_eq!(*hit.normal, Vector2::new(0.0, -1.0));
    assert!(hit.is_penetrating());
}

#[test]
fn ball_starting_inside_a_rotated_peg() {
    let ball = Ball::new(2.0);
    let peg = Peg::new(Point2::new(0.0, 0.0), Vector2::new(10.0, 10.0), 20.0);

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(1.0, 1.0),
        &Vector2::new(5.0, 0.0),
        &ball,
        &peg,
        0.1,
    )
    .unwrap();

    assert_eq!(hit.toi, 0.0);
    assert_eq!(hit.status, TOIStatus::Penetrating);
    assert_relative_eq!(hit.normal.norm(), 1.0, epsilon = 1.0e-6);
}

#[test]
fn zero_time_step_only_reports_overlaps() {
    let ball = Ball::new(5.0);
    let peg = Peg::axis_aligned(Point2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
    let vel = Vector2::new(100.0, 100.0);

    let apart = query::time_of_impact_ball_peg(&Point2::new(-20.0, 0.0), &vel, &ball, &peg, 0.0);
    assert!(apart.is_none());

    // Overlaps the rounded corner only.
    let overlapping =
        query::time_of_impact_ball_peg(&Point2::new(-13.0, -13.0), &vel, &ball, &peg, 0.0)
            .unwrap();
    assert_eq!(overlapping.toi, 0.0);
    assert!(overlapping.feature.is_vertex());
    assert!(overlapping.is_penetrating());

    // Within the corner region of the expanded box, but out of the rounded corner.
    let corner_gap =
        query::time_of_impact_ball_peg(&Point2::new(-14.5, -14.5), &vel, &ball, &peg, 0.0);
    assert!(corner_gap.is_none());
}

#[test]
fn zero_radius_is_a_segment_against_the_box() {
    let ball = Ball::new(0.0);
    let peg = Peg::axis_aligned(Point2::new(0.0, 0.0), Vector2::new(10.0, 5.0));

    let hit = query::time_of_impact_ball_peg(
        &Point2::new(-30.0, 4.0),
        &Vector2::new(40.0, 0.0),
        &ball,
        &peg,
        1.0,
    )
    .unwrap();

    assert_relative_eq!(hit.toi, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(*hit.normal, Vector2::new(-1.0, 0.0));
    assert_eq!(hit.feature.unwrap_face(), 2);
}

#[test]
fn axis_aligned_motion_matches_the_expanded_box() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let center = Point2::new(random_in(&mut rng, -100.0, 100.0), random_in(&mut rng, -100.0, 100.0));
        let half_extents = Vector2::new(random_in(&mut rng, 1.0, 20.0), random_in(&mut rng, 1.0, 20.0));
        let radius = random_in(&mut rng, 0.0, 10.0);
        let peg = Peg::axis_aligned(center, half_extents);
        let ball = Ball::new(radius);

        // Moving right, within the span of the left face.
        let gap = random_in(&mut rng, 1.0, 50.0);
        let start = Point2::new(
            center.x - half_extents.x - radius - gap,
            center.y + random_in(&mut rng, -0.9, 0.9) * half_extents.y,
        );
        let vel = Vector2::new(gap + random_in(&mut rng, 1.0, 50.0), 0.0);

        let hit = query::time_of_impact_ball_peg(&start, &vel, &ball, &peg, 1.0).unwrap();
        assert_relative_eq!(hit.toi, gap / vel.x, epsilon = 1.0e-4);
        assert_relative_eq!(*hit.normal, Vector2::new(-1.0, 0.0));
        assert_eq!(hit.feature, FeatureId::Face(2));

        // Moving up, within the span of the bottom face.
        let start = Point2::new(
            center.x + random_in(&mut rng, -0.9, 0.9) * half_extents.x,
            center.y - half_extents.y - radius - gap,
        );
        let vel = Vector2::new(0.0, gap * 2.0);

        let hit = query::time_of_impact_ball_peg(&start, &vel, &ball, &peg, 1.0).unwrap();
        assert_relative_eq!(hit.toi, 0.5, epsilon = 1.0e-4);
        assert_relative_eq!(*hit.normal, Vector2::new(0.0, -1.0));
        assert_eq!(hit.feature, FeatureId::Face(3));
    }
}

#[test]
fn rotating_the_scene_rotates_the_hit() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..200 {
        let center = Point2::new(random_in(&mut rng, -100.0, 100.0), random_in(&mut rng, -100.0, 100.0));
        let half_extents = Vector2::new(random_in(&mut rng, 1.0, 20.0), random_in(&mut rng, 1.0, 20.0));
        let ball = Ball::new(random_in(&mut rng, 0.0, 10.0));
        let angle_deg = random_in(&mut rng, 1.0, 359.0);

        // Aim at the peg center from far enough to start outside of it.
        let direction = UnitComplex::new(random_in(&mut rng, 0.0, 6.28)) * Vector2::x();
        let start = center + direction * random_in(&mut rng, 60.0, 120.0);
        let vel = (center - start) * random_in(&mut rng, 1.0, 2.0);

        let aligned = Peg::axis_aligned(center, half_extents);
        let rotated = Peg::new(center, half_extents, angle_deg);
        let rotation = UnitComplex::new(angle_deg.to_radians());
        let around_center = Isometry2::rotation_wrt_point(rotation, center);

        let expected = query::time_of_impact_ball_peg(&start, &vel, &ball, &aligned, 1.0).unwrap();
        let hit = query::time_of_impact_ball_peg(
            &(around_center * start),
            &(rotation * vel),
            &ball,
            &rotated,
            1.0,
        )
        .unwrap();

        assert_relative_eq!(hit.toi, expected.toi, epsilon = 1.0e-4);
        assert_relative_eq!(hit.point, around_center * expected.point, epsilon = 1.0e-2);
        assert_relative_eq!(*hit.normal, rotation * *expected.normal, epsilon = 1.0e-3);
    }
}
