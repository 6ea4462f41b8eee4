use crate::math::{Point, Real, Vector};
use crate::pipeline::{self, PegImpact};
use crate::shape::Ball;
use crate::simulation::PegBoard;

/// Error raised when a [`SimulationConfig`] cannot drive a simulation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The largest time step must be finite and non-negative.
    #[error("the maximum time step {0} is not a finite non-negative number.")]
    InvalidMaxDt(Real),
    /// The ball radius must be finite and non-negative.
    #[error("the ball radius {0} is not a finite non-negative number.")]
    InvalidBallRadius(Real),
    /// Every other parameter must be finite.
    #[error("the simulation parameter `{0}` is not finite.")]
    NonFiniteParameter(&'static str),
}

/// Parameters of a [`Simulation`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Where the ball starts, and restarts after a reset.
    pub spawn: Point<Real>,
    /// The radius of the ball.
    pub ball_radius: Real,
    /// The constant acceleration applied to the ball.
    pub gravity: Vector<Real>,
    /// The fraction of the velocity kept after a bounce.
    pub restitution: Real,
    /// Distance the ball is pushed along the contact normal after a bounce.
    pub contact_nudge: Real,
    /// The largest time step actually simulated by [`Simulation::step`].
    pub max_dt: Real,
    /// The ball is reset once its center falls this far below the board.
    pub reset_margin: Real,
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), SimulationError> {
        if !(self.max_dt >= 0.0 && self.max_dt.is_finite()) {
            return Err(SimulationError::InvalidMaxDt(self.max_dt));
        }

        if !(self.ball_radius >= 0.0 && self.ball_radius.is_finite()) {
            return Err(SimulationError::InvalidBallRadius(self.ball_radius));
        }

        let finite_parameters = [
            ("spawn", self.spawn.coords.iter().all(|x| x.is_finite())),
            ("gravity", self.gravity.iter().all(|x| x.is_finite())),
            ("restitution", self.restitution.is_finite()),
            ("contact_nudge", self.contact_nudge.is_finite()),
            ("reset_margin", self.reset_margin.is_finite()),
        ];

        match finite_parameters.iter().find(|(_, finite)| !finite) {
            Some((name, _)) => Err(SimulationError::NonFiniteParameter(*name)),
            None => Ok(()),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spawn: Point::new(310.0, 50.0),
            ball_radius: 15.0,
            gravity: Vector::new(0.0, 980.0),
            restitution: 0.85,
            contact_nudge: 0.01,
            max_dt: 1.0 / 30.0,
            reset_margin: 50.0,
        }
    }
}

/// What happened to the ball during one [`Simulation::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepEvent {
    /// The ball moved freely for the whole step.
    Moved,
    /// The ball hit a peg and bounced off it.
    Bounced(PegImpact),
    /// The ball left the board and was moved back to its spawn point.
    Reset,
}

/// A single ball falling through a [`PegBoard`].
#[derive(Clone, Debug)]
pub struct Simulation {
    board: PegBoard,
    config: SimulationConfig,
    ball: Ball,
    position: Point<Real>,
    velocity: Vector<Real>,
}

impl Simulation {
    /// Creates a simulation with the ball at rest on its spawn point.
    ///
    /// Fails if `config` has a negative or non-finite time step or ball radius,
    /// or any other non-finite parameter.
    pub fn new(board: PegBoard, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self {
            board,
            config,
            ball: Ball::new(config.ball_radius),
            position: config.spawn,
            velocity: Vector::zeros(),
        })
    }

    /// The board the ball falls through.
    #[inline]
    pub fn board(&self) -> &PegBoard {
        &self.board
    }

    /// The parameters of this simulation.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The simulated ball.
    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// The current position of the ball center.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// The current velocity of the ball.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        self.velocity
    }

    /// Moves the ball to `position` with the given `velocity`.
    pub fn set_ball(&mut self, position: Point<Real>, velocity: Vector<Real>) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Puts the ball back at rest on its spawn point.
    pub fn reset(&mut self) {
        log::debug!(
            "resetting the ball from {:?} to {:?}",
            self.position,
            self.config.spawn
        );
        self.position = self.config.spawn;
        self.velocity = Vector::zeros();
    }

    /// Advances the simulation by `dt` seconds, clamped to `[0, max_dt]`.
    ///
    /// Gravity is integrated first, then the ball moves until the earliest peg it
    /// touches, if any, where its velocity is reflected and damped by the
    /// restitution. A ball that fell below the board is reset instead of being moved.
    pub fn step(&mut self, dt: Real) -> StepEvent {
        if self.position.y > self.board.height() + self.config.reset_margin {
            self.reset();
            return StepEvent::Reset;
        }

        let dt = dt.clamp(0.0, self.config.max_dt);
        self.velocity += self.config.gravity * dt;

        let impact = pipeline::earliest_collision(
            &self.position,
            &self.velocity,
            &self.ball,
            self.board.pegs(),
            dt,
        );

        match impact {
            Some(impact) => {
                let normal = impact.toi.normal;
                self.position += self.velocity * (impact.toi.toi * dt);
                // A ball already leaving an overlapped peg keeps its velocity.
                if self.velocity.dot(&normal) < 0.0 {
                    self.velocity = reflect(&self.velocity, &normal) * self.config.restitution;
                }
                self.position += *normal * self.config.contact_nudge;

                log::trace!(
                    "bounce on peg {}, new velocity: {:?}",
                    impact.peg,
                    self.velocity
                );

                StepEvent::Bounced(impact)
            }
            None => {
                self.position += self.velocity * dt;
                StepEvent::Moved
            }
        }
    }
}

/// Mirrors `v` with respect to the line orthogonal to `normal`.
#[inline]
fn reflect(v: &Vector<Real>, normal: &Vector<Real>) -> Vector<Real> {
    v - normal * (2.0 * v.dot(normal))
}
