//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_ball::{ray_toi_and_normal_with_ball, ray_toi_with_ball};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_round_cuboid;
