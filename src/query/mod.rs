//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::time_of_impact_ball_peg()`] to determine when a ball undergoing a translational
//!   motion hits a static peg for the first time during a step.
//!
//! Ray-casting can be achieved by importing the [`query::RayCast`] trait. Every
//! ray-cast is solid: a ray starting inside of a shape hits it at time zero.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the
//! general queries, e.g., `ray_toi_with_ball` which intersects a ray with a circle
//! that isn't attached to any shape.
//!
//! [`query::time_of_impact_ball_peg()`]: crate::query::time_of_impact_ball_peg
//! [`query::RayCast`]: crate::query::RayCast

pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::time_of_impact::{time_of_impact_ball_peg, TOIStatus, TOI};

mod ray;
mod time_of_impact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::ray::{ray_toi_and_normal_with_ball, ray_toi_with_ball};
}
