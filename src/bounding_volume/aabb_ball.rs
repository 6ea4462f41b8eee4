use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball centered at `center`.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

/// Computes the Axis-Aligned Bounding Box of a ball swept from `center` along
/// `vel` during `dt`.
///
/// This is the union of the ball's AABB at the start and at the end of the motion.
/// Because the motion is linear, every intermediate position of the ball is
/// contained in it as well.
#[inline]
pub fn swept_ball_aabb(center: &Point<Real>, vel: &Vector<Real>, radius: Real, dt: Real) -> Aabb {
    let end = center + vel * dt;
    ball_aabb(center, radius).merged(&ball_aabb(&end, radius))
}

impl Ball {
    /// Computes the world-space AABB of this ball centered at `center`.
    #[inline]
    pub fn aabb(&self, center: &Point<Real>) -> Aabb {
        ball_aabb(center, self.radius)
    }

    /// Computes the world-space AABB enclosing this ball during its motion from
    /// `center` along `vel` for a duration `dt`.
    #[inline]
    pub fn swept_aabb(&self, center: &Point<Real>, vel: &Vector<Real>, dt: Real) -> Aabb {
        swept_ball_aabb(center, vel, self.radius, dt)
    }
}
