/*!
pegsweep2d
==========

**pegsweep2d** is a 2-dimensional continuous collision detection library
written with the rust programming language. It computes, for a ball moving
along a straight line during one simulation step, the earliest static box
("peg") it touches, together with the time of impact, the contact point and
the contact normal.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod simulation;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Isometry2, Point2, UnitVector2, Vector2};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    ///
    /// Motion components smaller than this are treated as no motion at all, and
    /// contact points may overshoot a face span by this amount.
    pub const DEFAULT_EPSILON: Real = 1.0e-6;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;
}
