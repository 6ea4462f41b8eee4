//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::FeatureId;

/// A ray for ray-casting queries.
///
/// A ray starts at `origin` and extends in the direction `dir`. Points along the
/// ray are `origin + dir * t`. The direction does not need to be normalized: a
/// segment from `a` to `b` is the ray `Ray::new(a, b - a)` restricted to
/// `t ∈ [0, 1]`, which is how swept balls are cast.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates the ray following the segment from `start` to `end`.
    ///
    /// The segment is covered by the time of impact range `[0, 1]`.
    pub fn from_segment(start: Point<Real>, end: Point<Real>) -> Ray {
        Ray::new(start, end - start)
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This expresses the ray in the local frame of an object positioned by `m`.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Translates this ray by the given vector. Its direction is left unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is the same as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Structure containing the result of a successful ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact of the ray with the object. The exact contact point can be computed
    /// with: `ray.point_at(time_of_impact)` or equivalently `origin + dir * time_of_impact`
    /// where `origin` is the origin of the ray; `dir` is its direction and `time_of_impact` is
    /// the value of this field.
    pub time_of_impact: Real,

    /// The unit normal at the intersection point, pointing out of the shape.
    ///
    /// If the ray starts inside of the shape, this is the normal of the boundary
    /// closest to the ray origin.
    pub normal: Vector<Real>,

    /// Feature at the intersection point.
    pub feature: FeatureId,
}

impl RayIntersection {
    #[inline]
    /// Creates a new `RayIntersection`.
    pub fn new(time_of_impact: Real, normal: Vector<Real>, feature: FeatureId) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            feature,
        }
    }

    /// Transforms the normal of this intersection by `transform`.
    ///
    /// The time of impact is frame-independent and is left unchanged.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        RayIntersection {
            time_of_impact: self.time_of_impact,
            normal: transform * self.normal,
            feature: self.feature,
        }
    }
}

/// Traits of objects which can be transformed and tested for intersection with a ray.
///
/// All the casts are solid: a ray starting inside of the shape hits it with a time
/// of impact of zero.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.cast_local_ray_and_get_normal(ray, max_time_of_impact)
            .map(|inter| inter.time_of_impact)
    }

    /// Computes the time of impact, and normal between this shape and a ray.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection>;

    /// Computes the time of impact, and normal between this transformed shape and a ray.
    ///
    /// The ray is expressed in the local frame of the shape, cast there, and the
    /// resulting normal is mapped back to the frame of `ray`.
    fn cast_ray_and_get_normal(
        &self,
        m: &Isometry<Real>,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray_and_get_normal(&ls_ray, max_time_of_impact)
            .map(|inter| inter.transform_by(m))
    }
}
