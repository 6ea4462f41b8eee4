use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::details::ray_toi_and_normal_with_ball;
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{FeatureId, RoundCuboid};

/// Ray cast against a cuboid rounded by `border_radius`.
///
/// The rounded cuboid is split into its flat faces, the cuboid's AABB loosened by
/// the border radius, and its four rounded corners, circles of radius
/// `border_radius` centered at the cuboid's vertices. A hit on the loosened AABB
/// only counts if it lands on the flat part of a face; anything beyond a face's
/// span belongs to a corner circle.
impl RayCast for RoundCuboid {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        let radius = self.border_radius;
        let inner_aabb = self.inner_shape.local_aabb();
        let mut best = None;

        if let Some(face_hit) = inner_aabb
            .loosened(radius)
            .cast_local_ray_and_get_normal(ray, max_time_of_impact)
        {
            let contact = ray.point_at(face_hit.time_of_impact);

            if lies_on_flat_face(&inner_aabb, &contact, &face_hit.normal) {
                best = Some(face_hit);
            }
        }

        for (i, vertex) in self.inner_shape.vertices().iter().enumerate() {
            if let (_, Some(corner_hit)) = ray_toi_and_normal_with_ball(vertex, radius, ray) {
                let is_better = match &best {
                    Some(hit) => corner_hit.time_of_impact < hit.time_of_impact,
                    None => true,
                };

                if corner_hit.time_of_impact <= max_time_of_impact && is_better {
                    best = Some(RayIntersection::new(
                        corner_hit.time_of_impact,
                        corner_hit.normal,
                        FeatureId::Vertex(i as u32),
                    ));
                }
            }
        }

        best
    }
}

/// Does `contact`, a point on the loosened `inner_aabb` with outward `normal`,
/// lie within the span of the face of `inner_aabb` with the same normal?
fn lies_on_flat_face(inner_aabb: &Aabb, contact: &Point<Real>, normal: &Vector<Real>) -> bool {
    // The span is measured along the axis orthogonal to the normal.
    let axis = if normal.x.abs() > 0.5 { 1 } else { 0 };

    contact[axis] >= inner_aabb.mins[axis] - DEFAULT_EPSILON
        && contact[axis] <= inner_aabb.maxs[axis] + DEFAULT_EPSILON
}
