use crate::math::{Point, Real, UnitVector};
use crate::shape::FeatureId;

/// The status of the time-of-impact computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TOIStatus {
    /// The ball reaches the shape during the step.
    Converged,
    /// The ball already touches or overlaps the shape at the time 0.
    ///
    /// The normal is then the direction along which the ball is the closest to
    /// leave the shape.
    Penetrating,
}

/// The result of a time-of-impact (TOI) computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TOI {
    /// The fraction of the step, in `[0, 1]`, elapsed when the ball touches the shape.
    pub toi: Real,
    /// The world-space position of the ball center at the time of impact.
    pub point: Point<Real>,
    /// The world-space outward normal of the shape at the time of impact.
    pub normal: UnitVector<Real>,
    /// The feature of the shape hit by the ball.
    pub feature: FeatureId,
    /// The way the time-of-impact computation terminated.
    pub status: TOIStatus,
}

impl TOI {
    /// Is this the result of a ball that started the step touching the shape?
    #[inline]
    pub fn is_penetrating(&self) -> bool {
        self.status == TOIStatus::Penetrating
    }
}
