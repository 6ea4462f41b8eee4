use pegsweep2d::math::Real;
use pegsweep2d::na::{Point2, UnitComplex};
use pegsweep2d::shape::Peg;
use pegsweep2d::simulation::{
    LayoutError, PegBoard, PegBoardConfig, Simulation, SimulationConfig, SimulationError,
    StepEvent,
};

/// Distance between `point` and the closest point of `peg`, zero if inside.
fn distance_to_peg(peg: &Peg, point: &Point2<Real>) -> Real {
    let local = UnitComplex::new(-peg.rotation_rad()) * (point - peg.center);
    let outside = local.abs() - peg.half_extents;
    outside.sup(&pegsweep2d::na::Vector2::zeros()).norm()
}

fn drop_ball(rotated: bool, steps: usize) -> (usize, usize) {
    let board = PegBoard::new(PegBoardConfig {
        rotated,
        ..PegBoardConfig::default()
    })
    .unwrap();
    let mut sim = Simulation::new(board, SimulationConfig::default()).unwrap();
    let radius = sim.ball().radius;
    let mut num_bounces = 0;
    let mut num_resets = 0;

    for _ in 0..steps {
        match sim.step(1.0 / 60.0) {
            StepEvent::Bounced(_) => num_bounces += 1,
            StepEvent::Reset => num_resets += 1,
            StepEvent::Moved => {}
        }

        let pos = sim.position();
        assert!(pos.x.is_finite() && pos.y.is_finite());

        for (i, peg) in sim.board().pegs().iter().enumerate() {
            let dist = distance_to_peg(peg, &pos);
            assert!(
                dist >= radius - 0.05,
                "the ball at {:?} sank {} into peg {}",
                pos,
                radius - dist,
                i
            );
        }
    }

    (num_bounces, num_resets)
}

#[test]
fn ball_never_goes_through_square_pegs() {
    let (num_bounces, _) = drop_ball(false, 3000);
    assert!(num_bounces > 0);
}

#[test]
fn ball_never_goes_through_rotated_pegs() {
    let (num_bounces, _) = drop_ball(true, 3000);
    assert!(num_bounces > 0);
}

#[test]
fn rotated_toggle_only_rotates_the_rows() {
    let square = PegBoard::new(PegBoardConfig::default()).unwrap();
    let rotated = PegBoard::new(PegBoardConfig {
        rotated: true,
        ..PegBoardConfig::default()
    })
    .unwrap();

    assert_eq!(square.pegs().len(), rotated.pegs().len());

    for (a, b) in square.pegs().iter().zip(rotated.pegs()) {
        assert_eq!(a.center, b.center);
        assert_eq!(a.half_extents, b.half_extents);
    }

    assert!(square.pegs().iter().all(|peg| peg.is_axis_aligned()));
    assert_eq!(
        rotated.pegs().iter().filter(|peg| !peg.is_axis_aligned()).count(),
        120
    );
}

#[test]
fn custom_board() {
    let board = PegBoard::new(PegBoardConfig {
        width: 300.0,
        height: 400.0,
        rows: 3,
        pegs_per_row: 2,
        ..PegBoardConfig::default()
    })
    .unwrap();

    assert_eq!(board.pegs().len(), 7);
    assert_eq!(board.pegs()[0].center, Point2::new(100.0, 150.0));
    assert_eq!(board.pegs()[3].center, Point2::new(250.0, 210.0));
    assert_eq!(board.floor().center, Point2::new(150.0, 370.0));
    assert_eq!(board.score_at(150.0), Some(10));
}

#[test]
fn layout_errors_are_displayed() {
    let err = PegBoard::new(PegBoardConfig {
        width: -1.0,
        ..PegBoardConfig::default()
    })
    .unwrap_err();

    assert_eq!(
        err,
        LayoutError::NonPositiveBoardSize {
            width: -1.0,
            height: 900.0
        }
    );
    assert_eq!(err.to_string(), "the board size -1x900 is not positive.");
}

#[test]
fn explicit_reset() {
    let board = PegBoard::new(PegBoardConfig::default()).unwrap();
    let config = SimulationConfig {
        spawn: Point2::new(100.0, 20.0),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(board, config).unwrap();

    for _ in 0..10 {
        let _ = sim.step(1.0 / 60.0);
    }

    assert!(sim.position().y > 20.0);
    sim.reset();
    assert_eq!(sim.position(), Point2::new(100.0, 20.0));
    assert_eq!(sim.velocity().norm(), 0.0);
}

#[test]
fn negative_time_step_bound_is_rejected() {
    let board = PegBoard::new(PegBoardConfig::default()).unwrap();
    let config = SimulationConfig {
        max_dt: -1.0,
        ..SimulationConfig::default()
    };
    let err = Simulation::new(board, config).unwrap_err();

    assert_eq!(err, SimulationError::InvalidMaxDt(-1.0));
    assert_eq!(
        err.to_string(),
        "the maximum time step -1 is not a finite non-negative number."
    );
}

#[test]
fn negative_ball_radius_is_rejected() {
    let board = PegBoard::new(PegBoardConfig::default()).unwrap();
    let config = SimulationConfig {
        ball_radius: -1.0,
        ..SimulationConfig::default()
    };

    assert_eq!(
        Simulation::new(board, config).unwrap_err(),
        SimulationError::InvalidBallRadius(-1.0)
    );
}
