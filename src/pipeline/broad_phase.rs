use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use crate::shape::{Ball, Peg};

/// Indices of the pegs that might be hit by `ball` moving from `pos` along `vel`
/// during `dt`.
///
/// A peg is a candidate if its AABB intersects the AABB swept by the ball during
/// the step. This is conservative: every peg the ball actually touches is a
/// candidate, but some candidates may not be touched at all. The indices are
/// sorted in increasing order.
pub fn collision_candidates(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    ball: &Ball,
    pegs: &[Peg],
    dt: Real,
) -> Vec<usize> {
    let swept_aabb = ball.swept_aabb(pos, vel, dt);
    let candidates: Vec<_> = pegs
        .iter()
        .enumerate()
        .filter(|(_, peg)| swept_aabb.intersects(&peg.aabb()))
        .map(|(i, _)| i)
        .collect();

    log::trace!(
        "broad phase kept {} of {} pegs",
        candidates.len(),
        pegs.len()
    );

    candidates
}
