use crate::math::Real;

/// A Ball shape.
///
/// The ball is always expressed in its own local frame, centered at the origin.
/// Its position is provided separately to every query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    ///
    /// Must be non-negative.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}
