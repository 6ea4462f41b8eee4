use std::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::FeatureId;

impl RayCast for Aabb {
    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        ray_aabb(self, ray, max_time_of_impact).map(|(t, side)| {
            RayIntersection::new(t, side_normal(side), side_feature(side))
        })
    }
}

/// The outward normal of the face identified by `side`.
///
/// `side` is `i + 1` for the face with normal `+axis_i`, and `-(i + 1)` for
/// the face with normal `-axis_i`.
fn side_normal(side: isize) -> Vector<Real> {
    let mut normal = Vector::zeros();

    if side < 0 {
        normal[(-side) as usize - 1] = -1.0;
    } else {
        normal[side as usize - 1] = 1.0;
    }

    normal
}

fn side_feature(side: isize) -> FeatureId {
    if side < 0 {
        FeatureId::Face((-side) as u32 - 1 + DIM as u32)
    } else {
        FeatureId::Face(side as u32 - 1)
    }
}

/// Slab test of a ray against an AABB.
///
/// Returns the time of impact and the side of the AABB the ray enters through.
fn ray_aabb(aabb: &Aabb, ray: &Ray, max_time_of_impact: Real) -> Option<(Real, isize)> {
    let mut tmin = -Real::MAX;
    let mut tmax = Real::MAX;
    let mut near_side = 0;

    for i in 0usize..DIM {
        if ray.dir[i].abs() <= DEFAULT_EPSILON {
            // No motion along this axis: the origin must already lie inside the slab.
            if ray.origin[i] < aabb.mins[i] || ray.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let mut inter_with_near_halfspace = (aabb.mins[i] - ray.origin[i]) * denom;
            let mut inter_with_far_halfspace = (aabb.maxs[i] - ray.origin[i]) * denom;
            let side = if ray.dir[i] > 0.0 {
                -(i as isize + 1)
            } else {
                i as isize + 1
            };

            if inter_with_near_halfspace > inter_with_far_halfspace {
                mem::swap(
                    &mut inter_with_near_halfspace,
                    &mut inter_with_far_halfspace,
                )
            }

            if inter_with_near_halfspace > tmin {
                tmin = inter_with_near_halfspace;
                near_side = side;
            }

            tmax = tmax.min(inter_with_far_halfspace);

            if tmin > tmax {
                return None;
            }
        }
    }

    if tmax < 0.0 || tmin > max_time_of_impact {
        // The AABB is either behind the ray origin, or out of reach.
        return None;
    }

    if near_side == 0 || tmin < 0.0 {
        // The origin is inside of the AABB.
        Some((0.0, closest_side(aabb, ray)))
    } else {
        Some((tmin, near_side))
    }
}

/// The side of `aabb` closest to the origin of `ray`, assuming the origin lies inside.
fn closest_side(aabb: &Aabb, ray: &Ray) -> isize {
    let mut best_side = 0;
    let mut best_depth = Real::MAX;

    for i in 0usize..DIM {
        let depth_to_max = aabb.maxs[i] - ray.origin[i];
        let depth_to_min = ray.origin[i] - aabb.mins[i];

        if depth_to_max < best_depth {
            best_depth = depth_to_max;
            best_side = i as isize + 1;
        }

        if depth_to_min < best_depth {
            best_depth = depth_to_min;
            best_side = -(i as isize + 1);
        }
    }

    best_side
}
