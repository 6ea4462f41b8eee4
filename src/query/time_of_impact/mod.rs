//! Implementation details of the time-of-impact queries.

pub use self::time_of_impact::{TOIStatus, TOI};
pub use self::time_of_impact_ball_peg::time_of_impact_ball_peg;

mod time_of_impact;
mod time_of_impact_ball_peg;
