//! Axis-aligned box shape.

use crate::math::{Point, Real, Vector};

/// Shape of a box.
///
/// A cuboid is centered at the origin of its local frame and aligned with its
/// local axes. Rotated boxes are obtained by placing a cuboid with an isometry.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid feature id:
//
// FeatureId::Vertex(id): the i-th bit of `id` is set to 1 iff. the i-th component of the vertex is negative.
// FeatureId::Face(id): if `id` lies in [0,1] indicates the axis (x, y) corresponding to the face normal.
//                      If `id` is greater than 1, then the negative axis (-x, -y) is given by `id - 2`.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be non-negative.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The four corners of this cuboid, in local-space.
    ///
    /// The i-th corner is identified by `FeatureId::Vertex(i)`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        let he = self.half_extents;
        [
            Point::new(he.x, he.y),
            Point::new(-he.x, he.y),
            Point::new(he.x, -he.y),
            Point::new(-he.x, -he.y),
        ]
    }
}
