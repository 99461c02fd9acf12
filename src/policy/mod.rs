//! Policies for the selection and simulation phases of MCTS
//!
//! - Selection policies: how to score a node's children
//! - Simulation policies: how to play out a position to its end

pub mod selection;
pub mod simulation;

pub use selection::{SelectionPolicy, WinRatePolicy};
pub use simulation::{RandomRollout, SimulationPolicy};
