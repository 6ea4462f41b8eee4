//! Rounded shapes are shapes with smoothed/rounded borders.

use crate::math::Real;
use crate::shape::Cuboid;

/// A shape with rounded borders.
///
/// The rounded shape is the Minkowski sum of `inner_shape` and a disc of radius
/// `border_radius`. Casting the center of a ball against the inner shape rounded
/// by the ball's radius is equivalent to sweeping the whole ball against the
/// inner shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundShape<S> {
    /// The shape being rounded.
    pub inner_shape: S,
    /// The radius of the rounded border.
    pub border_radius: Real,
}

/// A cuboid with rounded corners: four flat faces and four quarter-circle corners.
pub type RoundCuboid = RoundShape<Cuboid>;

impl<S> RoundShape<S> {
    /// Creates a new shape by rounding `inner_shape` with `border_radius`.
    #[inline]
    pub fn new(inner_shape: S, border_radius: Real) -> Self {
        Self {
            inner_shape,
            border_radius,
        }
    }
}
