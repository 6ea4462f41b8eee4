//! Shapes supported by pegsweep2d.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::feature_id::FeatureId;
pub use self::peg::Peg;
pub use self::round_shape::{RoundCuboid, RoundShape};

mod ball;
mod cuboid;
mod feature_id;
mod peg;
mod round_shape;
