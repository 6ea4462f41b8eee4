//! A headless peg-board simulation driving the collision pipeline.
//!
//! [`PegBoard`] lays out staggered rows of pegs over a floor slab, and
//! [`Simulation`] advances a single ball through it, bouncing it off the first
//! peg it touches at every step.

pub use self::layout::{LayoutError, PegBoard, PegBoardConfig, SCORE_BINS};
pub use self::stepper::{Simulation, SimulationConfig, SimulationError, StepEvent};

mod layout;
mod stepper;
