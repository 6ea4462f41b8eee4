use na::Unit;
use num::Zero;

use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, TOIStatus, TOI};
use crate::shape::{Ball, Peg, RoundCuboid};

/// Time Of Impact of a ball under translational movement with a static peg.
///
/// The ball starts at `pos` and moves along `vel` during `dt`. The returned time of
/// impact is normalized to the step: the ball center at the time of impact is
/// `pos + vel * dt * toi`, with `toi ∈ [0, 1]`. Returns `None` if the ball doesn't
/// touch the peg during the step.
///
/// Rotated pegs are handled by expressing the motion in the local frame of the peg,
/// where it is an axis-aligned box, and mapping the normal back to world-space.
///
/// # Example
///
/// ```rust
/// use pegsweep2d::na::{Point2, Vector2};
/// use pegsweep2d::query;
/// use pegsweep2d::shape::{Ball, Peg};
///
/// let ball = Ball::new(15.0);
/// let peg = Peg::axis_aligned(Point2::new(310.0, 150.0), Vector2::new(10.0, 10.0));
///
/// let hit = query::time_of_impact_ball_peg(
///     &Point2::new(310.0, 50.0),
///     &Vector2::new(0.0, 784.0),
///     &ball,
///     &peg,
///     0.1,
/// )
/// .unwrap();
///
/// assert!((hit.point.y - 125.0).abs() < 1.0e-3);
/// assert!((hit.normal.y + 1.0).abs() < 1.0e-6);
/// ```
pub fn time_of_impact_ball_peg(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    peg: &Peg,
    dt: Real,
) -> Option<TOI> {
    let ray = Ray::new(*pos, vel * dt);
    let shape = RoundCuboid::new(peg.cuboid(), ball.radius);

    let inter = if peg.is_axis_aligned() {
        // Pure translation, the normal doesn't need to be transformed back.
        shape.cast_local_ray_and_get_normal(&ray.translate_by(-peg.center.coords), 1.0)?
    } else {
        shape.cast_ray_and_get_normal(&peg.position(), &ray, 1.0)?
    };

    let status = if inter.time_of_impact.is_zero() {
        TOIStatus::Penetrating
    } else {
        TOIStatus::Converged
    };

    Some(TOI {
        toi: inter.time_of_impact,
        point: ray.point_at(inter.time_of_impact),
        normal: Unit::new_unchecked(inter.normal),
        feature: inter.feature,
        status,
    })
}
