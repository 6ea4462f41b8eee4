use ordered_float::OrderedFloat;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::math::{Point, Real, Vector};
use crate::pipeline::collision_candidates;
use crate::query::{self, TOI};
use crate::shape::{Ball, Peg};

/// The earliest hit of a ball against a set of pegs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PegImpact {
    /// Index of the peg hit, in the slice given to [`earliest_collision`].
    pub peg: usize,
    /// Time of impact, contact point and normal of the hit.
    pub toi: TOI,
}

/// Computes the first peg touched by `ball` moving from `pos` along `vel` during `dt`.
///
/// This runs the broad phase ([`collision_candidates`]) then the exact
/// [`query::time_of_impact_ball_peg`] test on every candidate, and returns the hit
/// with the smallest time of impact. If the ball already touches some pegs at the
/// start of the step, one of them is returned with a time of impact of zero.
///
/// If several pegs are hit at exactly the same time, the one with the smallest
/// index is returned.
///
/// `dt` and the ball radius must be non-negative. With `dt = 0` the ball doesn't
/// move and only pegs it already touches are reported.
pub fn earliest_collision(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    pegs: &[Peg],
    dt: Real,
) -> Option<PegImpact> {
    debug_assert!(dt >= 0.0, "The time step must not be negative.");
    debug_assert!(ball.radius >= 0.0, "The ball radius must not be negative.");

    let candidates = collision_candidates(pos, vel, ball, pegs, dt);
    let impact = closest_impact(pos, vel, ball, pegs, &candidates, dt);

    if let Some(impact) = &impact {
        log::trace!(
            "ball hits peg {} at t = {} ({:?})",
            impact.peg,
            impact.toi.toi,
            impact.toi.feature
        );
    }

    impact
}

#[inline]
fn peg_impact(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    pegs: &[Peg],
    peg: usize,
    dt: Real,
) -> Option<PegImpact> {
    query::time_of_impact_ball_peg(pos, vel, ball, &pegs[peg], dt).map(|toi| PegImpact { peg, toi })
}

#[cfg(not(feature = "parallel"))]
fn closest_impact(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    pegs: &[Peg],
    candidates: &[usize],
    dt: Real,
) -> Option<PegImpact> {
    candidates
        .iter()
        .filter_map(|&peg| peg_impact(pos, vel, ball, pegs, peg, dt))
        .min_by_key(|impact| (OrderedFloat(impact.toi.toi), impact.peg))
}

#[cfg(feature = "parallel")]
fn closest_impact(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    pegs: &[Peg],
    candidates: &[usize],
    dt: Real,
) -> Option<PegImpact> {
    candidates
        .par_iter()
        .filter_map(|&peg| peg_impact(pos, vel, ball, pegs, peg, dt))
        .min_by_key(|impact| (OrderedFloat(impact.toi.toi), impact.peg))
}
