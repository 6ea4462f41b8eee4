//! The collision pipeline run once per simulation step.
//!
//! The pipeline filters the pegs with a linear AABB scan (the broad phase), runs
//! the exact swept-ball test on the survivors (the narrow phase), and keeps the
//! earliest hit.

pub use self::broad_phase::collision_candidates;
pub use self::earliest_collision::{earliest_collision, PegImpact};

mod broad_phase;
mod earliest_collision;
