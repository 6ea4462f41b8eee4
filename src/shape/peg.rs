//! Static oriented boxes the ball collides with.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Cuboid;

/// A static, possibly rotated, box.
///
/// A rotation of exactly `0.0` marks the peg as axis-aligned, which lets queries
/// skip the change of reference frame. Any other value, including multiples of
/// 360 degrees, goes through the general rotated path.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Peg {
    /// The world-space center of the peg.
    pub center: Point<Real>,
    /// The half-width and half-height of the peg. Must be non-negative.
    pub half_extents: Vector<Real>,
    /// The counter-clockwise rotation of the peg around its center, in degrees.
    pub rotation_deg: Real,
}

impl Peg {
    /// Creates a new peg.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation_deg: Real) -> Self {
        Self {
            center,
            half_extents,
            rotation_deg,
        }
    }

    /// Creates a new peg with a rotation of zero.
    #[inline]
    pub fn axis_aligned(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center, half_extents, 0.0)
    }

    /// Does this peg take the axis-aligned fast path?
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation_deg == 0.0
    }

    /// The rotation angle of this peg, in radians.
    #[inline]
    pub fn rotation_rad(&self) -> Real {
        self.rotation_deg.to_radians()
    }

    /// The local-space shape of this peg.
    #[inline]
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.half_extents)
    }

    /// The isometry mapping the peg's local frame to world-space.
    #[inline]
    pub fn position(&self) -> Isometry<Real> {
        if self.is_axis_aligned() {
            Isometry::translation(self.center.x, self.center.y)
        } else {
            Isometry::new(self.center.coords, self.rotation_rad())
        }
    }
}
