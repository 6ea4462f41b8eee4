use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Ball, FeatureId};

/// Ray cast against a ball.
///
/// A ball has a single smooth face: every hit reports `FeatureId::Face(0)`.
/// Shapes built from circles, like the corners of a
/// [`RoundCuboid`](crate::shape::RoundCuboid), replace it with their own feature.
impl RayCast for Ball {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        ray_toi_with_ball(&Point::origin(), self.radius, ray)
            .1
            .filter(|toi| *toi <= max_time_of_impact)
    }

    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        ray_toi_and_normal_with_ball(&Point::origin(), self.radius, ray)
            .1
            .filter(|inter| inter.time_of_impact <= max_time_of_impact)
    }
}

/// Computes the time of impact of a ray on a ball.
///
/// The first result element is `true` if the ray started inside of, or exactly on,
/// the ball, in which case the time of impact is zero. A ray with a near-zero
/// direction starting outside of the ball never hits it.
///
/// The returned time of impact is never negative but isn't bounded from above:
/// filter it against the length of the cast.
#[inline]
pub fn ray_toi_with_ball(center: &Point<Real>, radius: Real, ray: &Ray) -> (bool, Option<Real>) {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    if c <= 0.0 {
        return (true, Some(0.0));
    }

    if a < DEFAULT_EPSILON || b > 0.0 {
        // Not moving, or moving away from the ball.
        return (false, None);
    }

    // The discriminant suffers from cancellation for grazing rays; evaluate it
    // with extra precision.
    let delta = f64::from(b) * f64::from(b) - f64::from(a) * f64::from(c);

    if delta < 0.0 {
        // no solution
        (false, None)
    } else {
        let t = (-f64::from(b) - delta.sqrt()) / f64::from(a);
        (false, Some(t.max(0.0) as Real))
    }
}

/// Computes the time of impact and contact normal of a ray on a ball.
///
/// The normal points from the ball center toward the contact point. If the ray
/// starts at the exact center of the ball, the normal falls back to the reversed
/// ray direction, or to the x axis if the ray doesn't move.
#[inline]
pub fn ray_toi_and_normal_with_ball(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
) -> (bool, Option<RayIntersection>) {
    let (inside, inter) = ray_toi_with_ball(center, radius, ray);

    (
        inside,
        inter.map(|toi| {
            let pos = ray.point_at(toi) - center;
            let normal = pos
                .try_normalize(0.0)
                .or_else(|| (-ray.dir).try_normalize(0.0))
                .unwrap_or_else(Vector::x);

            RayIntersection::new(toi, normal, FeatureId::Face(0))
        }),
    )
}
